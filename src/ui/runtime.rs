use crate::api::ItemSource;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::viewmodel::ItemViewModel;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Run the interactive UI until the user quits.
///
/// The view model's fetch and refresh tasks run on `runtime`; drawing and
/// input handling stay on the calling thread.
pub fn run<S: ItemSource>(
    view_model: ItemViewModel<S>,
    runtime: &Handle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(view_model.items(), view_model.status());

    spawn_change_forwarder(&view_model, runtime, events.sender());

    let (command_tx, mut command_rx) = mpsc::channel(8);
    app.attach_commands(command_tx);
    runtime.spawn(async move {
        while let Some(command) = command_rx.recv().await {
            match command {
                UiCommand::Refresh => {
                    let _ = view_model.refresh();
                }
            }
        }
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::ItemsChanged) => app.on_items_changed(),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Turn observable publishes into redraw events for the UI loop.
fn spawn_change_forwarder<S: ItemSource>(
    view_model: &ItemViewModel<S>,
    runtime: &Handle,
    events: Sender<AppEvent>,
) {
    let mut items = view_model.items();
    let mut status = view_model.status();
    runtime.spawn(async move {
        loop {
            let alive = tokio::select! {
                alive = items.changed() => alive,
                alive = status.changed() => alive,
            };
            if !alive || events.send(AppEvent::ItemsChanged).is_err() {
                break;
            }
        }
    });
}
