/// Marker trait for actions a reducer understands: button presses, key
/// shortcuts and step-field edits.
pub trait Intent: Send + 'static {}
