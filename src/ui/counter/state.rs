use crate::ui::mvi::UiState;

/// Counter widget state: current value, step size and the value log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
    /// Always at least 1.
    pub step: i64,
    /// Text of the step field. May be blank or non-positive while the user
    /// edits it; `step` is always `parse_step(&step_input)`.
    pub step_input: String,
    /// Every count observed since mount or the last reset, oldest first.
    pub history: Vec<i64>,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl UiState for CounterState {}

impl CounterState {
    /// State at mount: history is seeded with the initial count.
    pub fn new(initial_count: i64, step: i64) -> Self {
        let step = step.max(1);
        Self {
            count: initial_count,
            step,
            step_input: step.to_string(),
            history: vec![initial_count],
        }
    }

    /// Moves to `count`, logging it when it differs from the current value.
    pub(super) fn with_count(mut self, count: i64) -> Self {
        if count != self.count {
            self.count = count;
            self.history.push(count);
        }
        self
    }

    /// Replaces the step field text and re-derives the step from it.
    pub(super) fn with_step_input(self, step_input: String) -> Self {
        Self {
            step: parse_step(&step_input),
            step_input,
            ..self
        }
    }
}

/// Parses user-entered step text.
///
/// Anything that is not a positive integer (blank, zero, negative, not a
/// number, out of range) falls back to 1.
pub fn parse_step(text: &str) -> i64 {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|step| *step > 0)
        .unwrap_or(1)
}
