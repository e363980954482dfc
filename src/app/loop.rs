use crate::app::{action::Action, input::map_event_to_action, reducer, state::AppState, ui};
use crate::domain::selection::Selection;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Runs the UI until the user quits and returns the final selection.
pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
) -> Result<Selection> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<Selection> {
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                // Input reader is gone, nothing can end the session anymore
                None => break,
            },
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            tracing::trace!(?action, "dispatch");
            reducer::update(&mut app_state, action);
            if app_state.should_quit {
                break;
            }
        }
    }

    tracing::info!(selected = app_state.selection.len(), "session finished");
    Ok(app_state.selection)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
