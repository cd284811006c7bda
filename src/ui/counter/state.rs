use crate::ui::mvi::UiState;

/// Non-negative by construction: decrements clamp at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub value: u64,
}

impl UiState for CounterState {}
