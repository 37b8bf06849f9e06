use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::{parse_step, CounterState};
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => {
                let count = state.count.saturating_add(state.step);
                state.with_count(count)
            }
            CounterIntent::Decrement => {
                let count = state.count.saturating_sub(state.step);
                state.with_count(count)
            }
            CounterIntent::SetStep(text) => {
                let step = parse_step(&text);
                state.with_step_input(step.to_string())
            }
            CounterIntent::StepDigit(ch) => {
                if !ch.is_ascii_digit() {
                    return state;
                }
                let mut text = state.step_input.clone();
                text.push(ch);
                // A digit that would overflow is dropped, not coerced to 1.
                if text.parse::<i64>().is_err() {
                    return state;
                }
                state.with_step_input(text)
            }
            CounterIntent::StepBackspace => {
                let mut text = state.step_input.clone();
                text.pop();
                state.with_step_input(text)
            }
            // History is replaced, not appended to.
            CounterIntent::Reset => CounterState {
                count: 0,
                history: vec![0],
                ..state
            },
        }
    }
}
