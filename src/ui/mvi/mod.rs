//! Model-View-Intent (MVI) primitives for the counter widget.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ draw()
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! Side effects (scheduling a storage write) live in `App::dispatch`, never
//! in a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
