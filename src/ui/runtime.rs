use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{spawn_shutdown_listener, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Run the catalog view until the user quits or SIGTERM arrives.
///
/// Must be called from within a tokio runtime.
pub async fn run(config: &Config) -> io::Result<()> {
    let client = CatalogClient::new(&config.catalog).map_err(io::Error::other)?;
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(config.view.tick_rate());
    spawn_shutdown_listener(events.sender());

    let mut app = App::new(config, client, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();
    tracing::info!(source = app.source(), "Catalog view started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(event) => app.handle_event(event),
            None => break,
        }
    }

    // Aborts any fetch still in flight.
    drop(app);
    drop(guard);
    tracing::info!("Catalog view stopped");
    Ok(())
}
