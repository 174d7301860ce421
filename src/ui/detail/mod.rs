//! Modal showing the full attributes of the selected item.

mod dialog;

pub use dialog::{capitalize, detail_lines, render_detail_modal};
