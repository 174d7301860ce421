use crate::catalog::{CatalogClient, CatalogError, Detail, Summary};
use crate::config::Config;
use crate::diagnostics::{DiagnosticSource, Diagnostics};
use crate::rows::map_rows;
use crate::ui::events::{AppEvent, AppEventSender};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::table::{row_at, RequestId, TableIntent, TableReducer, TableState};
use ratatui::layout::Rect;
use tokio::task::JoinSet;

/// Capacity of the in-memory diagnostics log.
const DIAGNOSTICS_CAPACITY: usize = 100;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The catalog view: table state plus the fetches that feed it.
///
/// Fetches run as tasks owned by the app. Every result is stamped with the
/// [`RequestId`] it was issued under and is dropped unless the table is
/// still waiting on that id. Dropping the app aborts whatever is in flight.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Table lifecycle state (MVI pattern).
    table: TableState,
    client: CatalogClient,
    source: String,
    events: AppEventSender,
    tasks: JoinSet<()>,
    next_request: u64,
    diagnostics: Diagnostics,
}

impl App {
    pub fn new(config: &Config, client: CatalogClient, events: AppEventSender) -> Self {
        Self {
            should_quit: false,
            size: None,
            table: TableState::new(config.view.page_size),
            client,
            source: config.catalog.base_url.clone(),
            events,
            tasks: JoinSet::new(),
            next_request: 0,
            diagnostics: Diagnostics::new(DIAGNOSTICS_CAPACITY),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Catalog base URL shown in the header.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Number of fetch tasks not yet reaped.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn dispatch_table(&mut self, intent: TableIntent) {
        dispatch_mvi!(self, table, TableReducer, intent);
    }

    /// Issue the initial list request.
    pub fn start(&mut self) {
        self.request_list();
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Mouse(mouse) => handle_mouse(self, mouse),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::Tick => self.on_tick(),
            AppEvent::ListFetched { request, result } => self.on_list_fetched(request, result),
            AppEvent::DetailFetched { request, result } => {
                self.on_detail_fetched(request, result)
            }
            AppEvent::Shutdown => self.request_quit(),
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_tick(&mut self) {
        if self.table.is_loading() || self.table.is_detail_loading() {
            self.dispatch_table(TableIntent::AnimationTick);
        }
        self.reap_tasks();
    }

    /// Area the table is drawn in, derived from the last known terminal size.
    pub fn table_area(&self) -> Option<Rect> {
        self.size
            .map(|(cols, rows)| body_rect(Rect::new(0, 0, cols, rows)))
    }

    /// Row index under a terminal cell, if a data row is drawn there.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area()?;
        row_at(&self.table, area, column, row)
    }

    /// Fetch the detail of the highlighted row.
    ///
    /// Only valid when rows are shown and the modal is closed.
    pub fn activate_selected(&mut self) {
        if self.table.is_modal_open() {
            return;
        }
        let Some(id) = self.table.selected_row().map(|row| row.id) else {
            return;
        };
        self.request_detail(id);
    }

    pub fn close_detail(&mut self) {
        self.dispatch_table(TableIntent::CloseDetail);
    }

    fn next_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    fn request_list(&mut self) {
        let request = self.next_request_id();
        self.dispatch_table(TableIntent::ListRequested { request });

        let client = self.client.clone();
        let events = self.events.clone();
        self.tasks.spawn(async move {
            let result = client.fetch_list().await;
            if events
                .send(AppEvent::ListFetched { request, result })
                .is_err()
            {
                tracing::trace!(%request, "List response dropped (receiver gone)");
            }
        });
    }

    fn request_detail(&mut self, id: u64) {
        let request = self.next_request_id();
        if let Some((previous, superseded)) = self.table.pending_detail() {
            tracing::debug!(id, previous, %superseded, "Superseding pending detail request");
        }
        self.dispatch_table(TableIntent::DetailRequested { id, request });

        let client = self.client.clone();
        let events = self.events.clone();
        self.tasks.spawn(async move {
            let result = client.fetch_detail(id).await;
            if events
                .send(AppEvent::DetailFetched { request, result })
                .is_err()
            {
                tracing::trace!(%request, "Detail response dropped (receiver gone)");
            }
        });
    }

    fn on_list_fetched(&mut self, request: RequestId, result: Result<Vec<Summary>, CatalogError>) {
        if self.table.pending_list_request() != Some(request) {
            tracing::debug!(%request, "Discarding stale list response");
            return;
        }

        match result {
            Ok(summaries) => {
                let rows = map_rows(&summaries);
                tracing::info!(count = rows.len(), "Catalog list loaded");
                self.dispatch_table(TableIntent::ListLoaded { request, rows });
            }
            Err(err) => {
                self.record_failure(DiagnosticSource::ListFetch, &err);
                self.dispatch_table(TableIntent::ListFailed { request });
            }
        }
    }

    fn on_detail_fetched(&mut self, request: RequestId, result: Result<Detail, CatalogError>) {
        if self.table.pending_detail().map(|(_, pending)| pending) != Some(request) {
            tracing::debug!(%request, "Discarding stale detail response");
            return;
        }

        match result {
            Ok(detail) => {
                tracing::info!(id = detail.id, name = %detail.name, "Item details loaded");
                self.dispatch_table(TableIntent::DetailLoaded { request, detail });
            }
            Err(err) => {
                self.record_failure(DiagnosticSource::DetailFetch, &err);
                self.dispatch_table(TableIntent::DetailFailed { request });
            }
        }
    }

    /// Errors are logged and kept in diagnostics; nothing is shown on screen.
    fn record_failure(&mut self, source: DiagnosticSource, err: &CatalogError) {
        tracing::error!(
            error_type = err.error_type(),
            url = err.url(),
            error = %err,
            "Catalog request failed"
        );
        self.diagnostics.record(source, err.to_string());
    }

    fn reap_tasks(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result {
                if err.is_panic() {
                    tracing::error!(error = %err, "Fetch task panicked");
                }
            }
        }
    }
}
