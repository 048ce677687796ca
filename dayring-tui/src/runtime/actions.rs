use anyhow::Result;

use crate::app::App;
use crate::remote::Remote;
use crate::time_utils::local_now;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, remote: &mut Remote) -> Result<()> {
    match action {
        Action::NotifyStart { task } => {
            notify_start(app, remote, &task).await;
        }
        Action::NotifyStop => {
            notify_stop(app, remote).await;
        }
        Action::ReconcileFocus => {
            reconcile_focus(app, remote).await;
        }
        Action::TestConnection => {
            test_connection(app, remote).await;
        }
        Action::SaveConfig => {
            save_config(app, remote)?;
        }
    }
    Ok(())
}

/// Remote notifications are best-effort: the local session already changed
/// state and a failed call never rolls it back.
async fn notify_start(app: &mut App, remote: &Remote, task: &str) {
    if let Err(e) = remote.start(task).await {
        tracing::warn!("focus start notification failed: {e}");
        app.set_status(format!("Endpoint unreachable: {e}"));
    }
}

async fn notify_stop(app: &mut App, remote: &Remote) {
    if let Err(e) = remote.stop().await {
        tracing::warn!("focus stop notification failed: {e}");
        app.set_status(format!("Endpoint unreachable: {e}"));
    }
}

/// Pull the endpoint's view of the focus session and adopt it. The fetched
/// state wins over whatever we believed locally.
async fn reconcile_focus(app: &mut App, remote: &Remote) {
    match remote.get_state().await {
        Ok(Some(state)) => app.focus.adopt_remote(&state),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!("focus state fetch failed: {e}");
        }
    }
    app.is_loading = false;
}

async fn test_connection(app: &mut App, remote: &Remote) {
    if !remote.is_configured() {
        app.set_status("No endpoint configured".to_string());
        return;
    }
    match remote.get_state().await {
        Ok(_) => app.set_status("Endpoint reachable".to_string()),
        Err(e) => app.set_status(format!("Endpoint error: {e}")),
    }
}

fn save_config(app: &mut App, remote: &mut Remote) -> Result<()> {
    app.config.save()?;
    remote.reconfigure(&app.config);
    app.resolver
        .set_bedtime(app.config.bedtime_time(), local_now());
    app.set_status("Settings saved".to_string());
    Ok(())
}
