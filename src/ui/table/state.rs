//! State for the catalog table.

use std::fmt;
use std::ops::Range;

use crate::catalog::Detail;
use crate::rows::Row;
use crate::ui::mvi::UiState;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Generation stamp of one outstanding request.
///
/// Results are only committed when their stamp matches the request the
/// state is currently waiting on; anything else is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Table state: a fixed page size plus the current phase.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub page_size: usize,
    pub phase: TablePhase,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TablePhase {
    /// No rows yet. Stays here for good if the list request fails.
    Loading {
        /// The list request whose result will be accepted.
        request: Option<RequestId>,
        animation_tick: u8,
    },

    /// Rows are available.
    Ready {
        rows: Vec<Row>,
        /// Absolute index of the highlighted row.
        cursor: usize,
        detail: DetailState,
    },
}

/// Detail sub-state, only reachable while the table is ready.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    /// Nothing selected, or the modal was closed.
    #[default]
    Idle,

    /// Waiting for the detail of row `id`.
    Fetching {
        id: u64,
        request: RequestId,
        animation_tick: u8,
    },

    /// Modal visible with the fetched detail.
    Open(Detail),
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for TableState {}

impl TableState {
    /// A loading table. A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            phase: TablePhase::Loading {
                request: None,
                animation_tick: 0,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, TablePhase::Loading { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, TablePhase::Ready { .. })
    }

    /// The list request the table is waiting on, if any.
    pub fn pending_list_request(&self) -> Option<RequestId> {
        match self.phase {
            TablePhase::Loading { request, .. } => request,
            TablePhase::Ready { .. } => None,
        }
    }

    pub fn rows(&self) -> &[Row] {
        match &self.phase {
            TablePhase::Ready { rows, .. } => rows,
            TablePhase::Loading { .. } => &[],
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match self.phase {
            TablePhase::Ready { cursor, .. } => Some(cursor),
            TablePhase::Loading { .. } => None,
        }
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.cursor().and_then(|cursor| self.rows().get(cursor))
    }

    pub fn detail(&self) -> Option<&DetailState> {
        match &self.phase {
            TablePhase::Ready { detail, .. } => Some(detail),
            TablePhase::Loading { .. } => None,
        }
    }

    /// The detail shown in the modal. `Some` exactly when the modal is visible.
    pub fn open_detail(&self) -> Option<&Detail> {
        match self.detail() {
            Some(DetailState::Open(detail)) => Some(detail),
            _ => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.open_detail().is_some()
    }

    pub fn is_detail_loading(&self) -> bool {
        matches!(self.detail(), Some(DetailState::Fetching { .. }))
    }

    /// The id and request of the detail being fetched, if any.
    pub fn pending_detail(&self) -> Option<(u64, RequestId)> {
        match self.detail() {
            Some(DetailState::Fetching { id, request, .. }) => Some((*id, *request)),
            _ => None,
        }
    }

    pub fn animation_tick(&self) -> u8 {
        match &self.phase {
            TablePhase::Loading { animation_tick, .. } => *animation_tick,
            TablePhase::Ready {
                detail: DetailState::Fetching { animation_tick, .. },
                ..
            } => *animation_tick,
            TablePhase::Ready { .. } => 0,
        }
    }

    /// Zero-based page holding the cursor.
    pub fn page(&self) -> usize {
        self.cursor().unwrap_or(0) / self.page_size
    }

    /// Number of pages; an empty table still has one.
    pub fn page_count(&self) -> usize {
        self.rows().len().div_ceil(self.page_size).max(1)
    }

    /// Absolute row indices on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let len = self.rows().len();
        let start = (self.page() * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn page_rows(&self) -> &[Row] {
        &self.rows()[self.page_range()]
    }
}
