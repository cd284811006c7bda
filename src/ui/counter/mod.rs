mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use panel::render_counter_panel;
pub use reducer::{CounterReducer, RANDOM_INCREMENT_MAX};
pub use state::CounterState;
