//! Terminal front end: one pane per carousel.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::time::Duration;

use crate::runtime::RuntimeHandle;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Draw the carousels until the user quits or shutdown is signalled.
pub async fn run(
    handle: RuntimeHandle,
    shutdown: ShutdownHandle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut snapshots = handle.subscribe();
    let mut app = App::new(snapshots.borrow_and_update().clone());
    let mut events = EventHandler::new(tick_rate, shutdown.clone());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => {
                    if let Some(command) = handle_key(&mut app, key) {
                        if !handle.send(command).await {
                            break;
                        }
                    }
                }
                Some(AppEvent::Tick) | Some(AppEvent::Resize(..)) => {}
                None => break,
            },
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                app.update_snapshot(snapshots.borrow_and_update().clone());
            }
            _ = shutdown.wait() => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
