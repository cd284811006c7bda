use crate::random::RandomSource;
use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::RandomReducer;

/// Largest step `IncrementRandom` can take. Draws land in `1..=10`.
pub const RANDOM_INCREMENT_MAX: u32 = 10;

pub struct CounterReducer;

impl RandomReducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        random: &mut dyn RandomSource,
    ) -> Self::State {
        match intent {
            CounterIntent::IncrementRandom => {
                let step = u64::from(random.below(RANDOM_INCREMENT_MAX) + 1);
                CounterState {
                    value: state.value.saturating_add(step),
                }
            }
            CounterIntent::IncrementToNextOdd => {
                let step = if state.value % 2 == 0 { 1 } else { 2 };
                CounterState {
                    value: state.value.saturating_add(step),
                }
            }
            CounterIntent::DecrementByInput { amount } => CounterState {
                value: state.value.saturating_sub(amount),
            },
            CounterIntent::Reset => CounterState { value: 0 },
        }
    }
}
