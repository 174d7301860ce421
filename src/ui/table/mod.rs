//! Paginated catalog table.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Loading/Ready phases and the detail sub-state
//! - `intent.rs` - Navigation, activation and fetch results
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering and mouse hit-testing

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{DetailState, RequestId, TablePhase, TableState, DEFAULT_PAGE_SIZE};
pub use view::{render_table, row_at, spinner, visible_window};
