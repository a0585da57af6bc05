//! Model-View-Intent primitives.
//!
//! All view-state transitions flow one way: an [`Intent`] goes through a
//! [`Reducer`], which produces the next [`UiState`] the renderer draws.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
