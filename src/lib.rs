//! Terminal catalog browser: a paginated table of items fetched from a
//! REST catalog API, with a detail modal for the selected item.

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod rows;
pub mod ui;
