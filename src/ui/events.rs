use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::catalog::{CatalogError, Detail, Summary};
use crate::ui::table::RequestId;

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// Result of a list request.
    ListFetched {
        request: RequestId,
        result: Result<Vec<Summary>, CatalogError>,
    },
    /// Result of a detail request.
    DetailFetched {
        request: RequestId,
        result: Result<Detail, CatalogError>,
    },
    /// OS signal received (SIGTERM).
    Shutdown,
}

pub type AppEventSender = UnboundedSender<AppEvent>;

/// Terminal input and ticks, delivered on one channel that fetch tasks
/// also report into.
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: AppEventSender,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let event_tx = tx.clone();
        let stop_flag = Arc::clone(&stop);

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate, stop_flag))
            .map_err(|err| tracing::error!(error = %err, "Failed to spawn input thread"))
            .ok();

        Self { rx, tx, stop }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn input_loop(tx: AppEventSender, tick_rate: Duration, stop: Arc<AtomicBool>) {
    let mut last_tick = Instant::now();
    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }

        // Short poll timeout so the stop flag is checked frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                    Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to read terminal event");
                        break;
                    }
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Failed to poll terminal events");
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}

/// Forward SIGTERM into the event loop as [`AppEvent::Shutdown`].
#[cfg(unix)]
pub fn spawn_shutdown_listener(tx: AppEventSender) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                return;
            }
        };
        if terminate.recv().await.is_some() {
            tracing::info!("SIGTERM received, shutting down");
            let _ = tx.send(AppEvent::Shutdown);
        }
    });
}

#[cfg(not(unix))]
pub fn spawn_shutdown_listener(_tx: AppEventSender) {}
