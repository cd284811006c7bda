use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Env var naming the log file path. Unset means no logging.
pub const LOG_PATH_ENV: &str = "USERDECK_LOG";

/// Suffix a base path with timestamp and pid so concurrent instances
/// never write into the same log file.
fn unique_log_path(base: &str) -> String {
    let seconds = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{base}.{seconds}.{}", std::process::id())
}

/// Set up file logging when `USERDECK_LOG` is present.
///
/// Stdout belongs to the TUI, so without the env var nothing is
/// initialized and the log macros are no-ops. `RUST_LOG` filters as
/// usual, defaulting to `info`.
pub fn init() {
    let Ok(base) = std::env::var(LOG_PATH_ENV) else {
        return;
    };

    let path = unique_log_path(&base);
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("userdeck: cannot create log file {path}: {err}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();
}
