use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CounterIntent {
    /// Add a fresh random step. The step is drawn inside the reducer,
    /// not carried in the intent.
    IncrementRandom,
    /// Advance to the next odd value: +1 from even, +2 from odd.
    IncrementToNextOdd,
    /// Subtract the given amount, stopping at zero.
    DecrementByInput { amount: u64 },
    Reset,
}

impl Intent for CounterIntent {}
