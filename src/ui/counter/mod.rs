//! Counter widget state store (MVI pattern).

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{parse_step, CounterState};
