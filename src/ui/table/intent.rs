//! Intents for the catalog table.

use crate::catalog::Detail;
use crate::rows::Row;
use crate::ui::mvi::Intent;

use super::state::RequestId;

#[derive(Debug, Clone)]
pub enum TableIntent {
    /// A list request was issued; only its result will be accepted.
    ListRequested { request: RequestId },

    /// The list request succeeded.
    ListLoaded { request: RequestId, rows: Vec<Row> },

    /// The list request failed. The table keeps loading.
    ListFailed { request: RequestId },

    /// Move the cursor by `delta` rows, crossing pages as needed.
    MoveCursor(isize),

    /// Put the cursor on an absolute row index.
    SelectRow(usize),

    NextPage,
    PrevPage,
    FirstPage,
    LastPage,

    /// A detail request for row `id` was issued. Supersedes any earlier one.
    DetailRequested { id: u64, request: RequestId },

    /// The detail request succeeded.
    DetailLoaded { request: RequestId, detail: Detail },

    /// The detail request failed.
    DetailFailed { request: RequestId },

    /// User dismissed the modal.
    CloseDetail,

    /// Spinner animation tick.
    AnimationTick,
}

impl Intent for TableIntent {}
