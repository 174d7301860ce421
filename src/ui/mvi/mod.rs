//! Model-View-Intent (MVI) primitives for the view layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything the table and modal need to render
//! - **Intent**: key presses, clicks, ticks and fetch results
//! - **Reducer**: pure transition function; side effects (fetches) are
//!   started by the app after dispatching

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
