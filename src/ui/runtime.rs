//! Terminal event loop owning the store

use std::{cell::Cell, io::Stdout, rc::Rc};

use chrono::Utc;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::state::{Action, Store};
use crate::ui::app::App;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::utils::shutdown_signal;

/// Run the UI until the user quits or a shutdown signal arrives.
///
/// Queued actions (ticks) and key presses are dispatched one at a time in the
/// order they arrive. Pending state is flushed before returning, whether the
/// loop ended normally or with an error.
pub async fn run(mut store: Store, mut actions: UnboundedReceiver<Action>) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut store, &mut actions).await;

    store.flush();
    drop(guard);
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    store: &mut Store,
    actions: &mut UnboundedReceiver<Action>,
) -> anyhow::Result<()> {
    let mut app = App::new();
    let mut events = EventStream::new();

    let dirty = Rc::new(Cell::new(true));
    let redraw = Rc::clone(&dirty);
    let _subscription = store.subscribe(move |_| redraw.set(true));

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        if dirty.replace(false) {
            app.sync_selection(store.state().tasks.len());
            terminal.draw(|frame| draw(frame, &app, store.state()))?;
        }
        if app.should_quit() {
            info!("Quit requested");
            return Ok(());
        }

        tokio::select! {
            Some(action) = actions.recv() => {
                let _ = store.dispatch(action);
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = app.handle_key(key, store.state(), Utc::now()) {
                        let _ = store.dispatch(action);
                    }
                    dirty.set(true);
                }
                Some(Ok(Event::Resize(_, _))) => dirty.set(true),
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!("Terminal event error: {}", e);
                    return Ok(());
                }
                None => return Ok(()),
            },
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                return Ok(());
            }
        }
    }
}
