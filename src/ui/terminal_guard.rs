use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Puts the terminal back the way we found it.
///
/// Restoration runs exactly once, from whichever fires first: the guard
/// dropping or a panic unwinding through the hook.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

fn restore_once(flag: &AtomicBool) {
    if !flag.swap(true, Ordering::SeqCst) {
        restore_terminal();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored);
    }
}

/// Enters raw mode and the alternate screen with the cursor hidden.
///
/// The returned guard undoes all of it; a panic hook covers the unwind
/// path so a crash inside the draw loop still leaves a usable shell.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let restored = Arc::new(AtomicBool::new(false));
    let hook_flag = Arc::clone(&restored);
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_once(&hook_flag);
        default_hook(info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    Ok((terminal, TerminalGuard { restored }))
}
