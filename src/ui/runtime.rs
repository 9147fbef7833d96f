use crate::config::UiConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// Run the UI until the user quits or a termination signal arrives.
pub fn run(mut app: App, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    tracing::info!(rows = app.store().len(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Termination signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
