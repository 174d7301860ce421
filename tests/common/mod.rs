//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use dexview::catalog::CatalogClient;
use dexview::config::Config;
use dexview::ui::app::App;
use dexview::ui::events::AppEvent;
use dexview::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub const SCREEN_WIDTH: u16 = 80;
pub const SCREEN_HEIGHT: u16 = 24;

pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.catalog.base_url = base_url.to_string();
    config.catalog.timeout_seconds = 5;
    config
}

/// App wired to `base_url`, sized like an 80x24 terminal.
pub fn make_app(base_url: &str) -> (App, UnboundedReceiver<AppEvent>) {
    let config = config_for(base_url);
    let client = CatalogClient::new(&config.catalog).expect("client builds");
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, client, tx);
    app.on_resize(SCREEN_WIDTH, SCREEN_HEIGHT);
    (app, rx)
}

/// Wait for the next event and feed it to the app.
pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>) {
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for app event")
        .expect("event channel closed");
    app.handle_event(event);
}

pub fn press_key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl_key(ch: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

pub fn left_click(column: u16, row: u16) -> AppEvent {
    AppEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Screen line (y) of the `index`-th data row on the first page at 80x24.
///
/// Header takes 3 lines, then the table border and column header.
pub fn data_row_line(index: u16) -> u16 {
    5 + index
}

/// Render the app into an in-memory terminal and return its text.
pub fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
