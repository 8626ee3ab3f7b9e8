use crate::catalog::CatalogSource;
use crate::config::UiConfig;
use crate::route::Route;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the UI loop on the current thread until the user quits.
///
/// Loads run on `runtime`; this thread only blocks on the event channel.
pub fn run(
    ui: &UiConfig,
    source: Arc<dyn CatalogSource>,
    initial: Route,
    runtime: &Handle,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let (loader, commands) = worker::channel();
    runtime.spawn(worker::run(source, commands, events.sender()));

    let mut app = App::new(ui);
    app.set_loader(loader);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.navigate(initial);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(event) => app.on_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("UI loop finished");
    drop(guard);
    Ok(())
}
