use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::ActionTx;
use super::enqueue_focus_command;

pub(super) fn handle_schedule_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('O') => {
            app.navigate_to(app::View::Clock);
        }
        // Focus toggle works from here too
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F') => {
            let command = app.toggle_focus();
            enqueue_focus_command(action_tx, command);
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_mute();
        }
        _ => {}
    }
}
