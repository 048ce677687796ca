use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, enqueue_focus_command};

pub(super) fn handle_clock_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        // Ctrl+C also quits
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        // Space or F toggles the focus session
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F') => {
            let command = app.toggle_focus();
            enqueue_focus_command(action_tx, command);
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.navigate_to(app::View::Schedule);
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.navigate_to(app::View::Settings);
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.navigate_to(app::View::ThemePicker);
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_mute();
        }
        // Manual re-sync with the endpoint
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::ReconcileFocus);
        }
        _ => {}
    }
}
