use crate::app::{self, App, FocusCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod clock;
mod schedule;
mod settings;
mod theme_picker;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Turn a focus-session transition into its remote notification.
fn enqueue_focus_command(action_tx: &ActionTx, command: Option<FocusCommand>) {
    match command {
        Some(FocusCommand::NotifyStart(task)) => {
            enqueue_action(action_tx, Action::NotifyStart { task });
        }
        Some(FocusCommand::NotifyStop) => {
            enqueue_action(action_tx, Action::NotifyStop);
        }
        None => {}
    }
}

/// The task prompt swallows all keys while open.
pub(super) fn handle_task_overlay_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(overlay) = &mut app.task_overlay else {
        return;
    };
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            overlay.input.insert(c);
            overlay.error = None;
        }
        KeyCode::Backspace => {
            overlay.input.backspace();
        }
        KeyCode::Left => overlay.input.move_left(),
        KeyCode::Right => overlay.input.move_right(),
        KeyCode::Home => overlay.input.home(),
        KeyCode::End => overlay.input.end(),
        KeyCode::Enter => {
            let command = app.submit_task();
            enqueue_focus_command(action_tx, command);
        }
        KeyCode::Esc => {
            app.cancel_task_overlay();
            app.set_status("Focus session cancelled".to_string());
        }
        _ => {}
    }
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match &app.current_view {
        app::View::Clock => clock::handle_clock_key(key, app, action_tx),
        app::View::Schedule => schedule::handle_schedule_key(key, app, action_tx),
        app::View::Settings => settings::handle_settings_key(key, app, action_tx),
        app::View::ThemePicker => theme_picker::handle_theme_picker_key(key, app, action_tx),
    }
}
