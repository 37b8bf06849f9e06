use crate::ui::app::{App, Focus};
use crate::ui::counter::CounterIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The key changed the widget (state, focus or quit flag).
    Handled,
    /// The key means nothing to the widget.
    Ignored,
}

/// Global counter shortcuts: ArrowUp increments, ArrowDown decrements.
///
/// The intent carries no step; the reducer applies whatever step is current
/// when it runs.
pub fn shortcut_intent(key: &KeyEvent) -> Option<CounterIntent> {
    if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(CounterIntent::Increment),
        KeyCode::Down => Some(CounterIntent::Decrement),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::Ignored;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return InputAction::Handled;
    }

    if let Some(intent) = shortcut_intent(&key) {
        app.dispatch(intent);
        return InputAction::Handled;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Right => {
            app.focus_next();
            InputAction::Handled
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.focus_prev();
            InputAction::Handled
        }
        KeyCode::Enter | KeyCode::Char(' ') if app.focus() != Focus::Step => {
            app.activate_focused();
            InputAction::Handled
        }
        KeyCode::Char(ch) if app.focus() == Focus::Step && ch.is_ascii_digit() => {
            app.dispatch(CounterIntent::StepDigit(ch));
            InputAction::Handled
        }
        KeyCode::Backspace | KeyCode::Delete if app.focus() == Focus::Step => {
            app.dispatch(CounterIntent::StepBackspace);
            InputAction::Handled
        }
        _ => InputAction::Ignored,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
