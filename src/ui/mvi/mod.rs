//! Model-View-Intent primitives for the screen state.
//!
//! ```text
//! Key ──→ Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Reducers are the only place screen state changes.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
