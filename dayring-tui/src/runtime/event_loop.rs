use crate::app::App;
use crate::remote::Remote;
use crate::time_utils::local_now;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::{handle_task_overlay_key, handle_view_key};

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    remote: &mut Remote,
) -> Result<()> {
    // Background polling: reconcile against the endpoint every 60 seconds.
    let mut last_reconcile = Instant::now();
    const RECONCILE_INTERVAL: Duration = Duration::from_secs(60);

    let (action_tx, mut action_rx) = channel();

    // Populate the rings before the first draw, and pick up any focus
    // session already running on the endpoint.
    if let Err(e) = app.tick(local_now()) {
        tracing::error!("initial schedule tick failed: {e:#}");
        app.set_status(format!("Schedule error: {e}"));
    }
    if remote.is_configured() {
        app.is_loading = true;
        let _ = action_tx.send(Action::ReconcileFocus);
    }
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.task_overlay.is_some() {
                    handle_task_overlay_key(key, app, &action_tx);
                } else {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        if last_tick.elapsed() >= Duration::from_secs(1) {
            last_tick = Instant::now();
            match app.tick(local_now()) {
                Ok(cue_fired) => {
                    if cue_fired && !app.cue_muted {
                        ring_bell()?;
                    }
                }
                // A failed resolve leaves the previous frame on screen; the
                // clock keeps running.
                Err(e) => {
                    tracing::error!("schedule tick failed: {e:#}");
                    app.set_status(format!("Schedule error: {e}"));
                }
            }
        }

        if remote.is_configured() && last_reconcile.elapsed() >= RECONCILE_INTERVAL {
            let _ = action_tx.send(Action::ReconcileFocus);
            last_reconcile = Instant::now();
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, remote).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

/// The part/hour cue: the terminal bell, the one audible channel a TUI has.
fn ring_bell() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()?;
    Ok(())
}
