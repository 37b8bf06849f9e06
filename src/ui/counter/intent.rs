use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    /// count += step
    Increment,
    /// count -= step
    Decrement,
    /// Replace the step with parsed text (invalid input yields 1).
    SetStep(String),
    /// Typed a character into the step field. Non-digits and digits that
    /// would overflow are ignored.
    StepDigit(char),
    /// Erased the last character of the step field.
    StepBackspace,
    /// count = 0 and history = [0].
    Reset,
}

impl Intent for CounterIntent {}
