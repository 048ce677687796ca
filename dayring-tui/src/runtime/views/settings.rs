use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_settings_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = &mut app.settings_form {
                form.next_field();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = &mut app.settings_form {
                form.prev_field();
            }
        }
        // Ctrl+T: probe the endpoint with the persisted settings
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::TestConnection);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(form) = &mut app.settings_form {
                form.focused_input().insert(c);
                form.error = None;
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.settings_form {
                form.focused_input().backspace();
            }
        }
        KeyCode::Left => {
            if let Some(form) = &mut app.settings_form {
                form.focused_input().move_left();
            }
        }
        KeyCode::Right => {
            if let Some(form) = &mut app.settings_form {
                form.focused_input().move_right();
            }
        }
        KeyCode::Home => {
            if let Some(form) = &mut app.settings_form {
                form.focused_input().home();
            }
        }
        KeyCode::End => {
            if let Some(form) = &mut app.settings_form {
                form.focused_input().end();
            }
        }
        KeyCode::Enter => {
            if app.commit_settings().is_some() {
                enqueue_action(action_tx, Action::SaveConfig);
            }
        }
        KeyCode::Esc => {
            app.navigate_to(app::View::Clock);
            app.set_status("Settings unchanged".to_string());
        }
        _ => {}
    }
}
