use focuslink::FocusState;

/// Local focus-session state machine. Transitions are pure and return the
/// remote notification to fire (if any); the runtime performs the actual
/// HTTP call best-effort.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FocusSession {
    #[default]
    Idle,
    /// Toggled on, waiting for the user to type a task description.
    AwaitingTask,
    Focusing {
        task: String,
    },
}

/// Remote side effect produced by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum FocusCommand {
    NotifyStart(String),
    NotifyStop,
}

impl FocusSession {
    /// User toggled focus on while idle. The session is not live until a
    /// task is submitted.
    pub fn request_start(&mut self) {
        if matches!(self, FocusSession::Idle) {
            *self = FocusSession::AwaitingTask;
        }
    }

    /// Submit the typed task. A blank task rejects the submission and leaves
    /// the session awaiting input; `None` means nothing was started.
    pub fn submit_task(&mut self, task: &str) -> Option<FocusCommand> {
        if !matches!(self, FocusSession::AwaitingTask) {
            return None;
        }
        let task = task.trim();
        if task.is_empty() {
            return None;
        }
        *self = FocusSession::Focusing {
            task: task.to_string(),
        };
        Some(FocusCommand::NotifyStart(task.to_string()))
    }

    /// User toggled focus off during a live session.
    pub fn stop(&mut self) -> Option<FocusCommand> {
        if matches!(self, FocusSession::Focusing { .. }) {
            *self = FocusSession::Idle;
            return Some(FocusCommand::NotifyStop);
        }
        None
    }

    /// Abandon the task prompt without starting anything.
    pub fn cancel_input(&mut self) {
        if matches!(self, FocusSession::AwaitingTask) {
            *self = FocusSession::Idle;
        }
    }

    /// Reconcile with the endpoint's authoritative state. The remote wins:
    /// a fetched state replaces whatever we believed locally, except that an
    /// open task prompt is left alone.
    pub fn adopt_remote(&mut self, remote: &FocusState) {
        if matches!(self, FocusSession::AwaitingTask) {
            return;
        }
        *self = if remote.focused {
            FocusSession::Focusing {
                task: remote.task.clone().unwrap_or_default(),
            }
        } else {
            FocusSession::Idle
        };
    }

    pub fn is_focusing(&self) -> bool {
        matches!(self, FocusSession::Focusing { .. })
    }

    pub fn task(&self) -> Option<&str> {
        match self {
            FocusSession::Focusing { task } => Some(task),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_then_stop_fires_exactly_two_notifications() {
        let mut session = FocusSession::default();
        session.request_start();
        assert_eq!(session, FocusSession::AwaitingTask);

        let start = session.submit_task("write report");
        assert_eq!(
            start,
            Some(FocusCommand::NotifyStart("write report".to_string()))
        );
        assert!(session.is_focusing());

        let stop = session.stop();
        assert_eq!(stop, Some(FocusCommand::NotifyStop));
        assert_eq!(session, FocusSession::Idle);

        // No further transitions, no further commands.
        assert_eq!(session.stop(), None);
    }

    #[test]
    fn blank_task_is_rejected() {
        let mut session = FocusSession::default();
        session.request_start();
        assert_eq!(session.submit_task(""), None);
        assert_eq!(session.submit_task("   "), None);
        assert_eq!(session, FocusSession::AwaitingTask);
    }

    #[test]
    fn task_is_trimmed_on_submit() {
        let mut session = FocusSession::default();
        session.request_start();
        let cmd = session.submit_task("  deep work  ");
        assert_eq!(cmd, Some(FocusCommand::NotifyStart("deep work".to_string())));
        assert_eq!(session.task(), Some("deep work"));
    }

    #[test]
    fn cancel_returns_to_idle_without_command() {
        let mut session = FocusSession::default();
        session.request_start();
        session.cancel_input();
        assert_eq!(session, FocusSession::Idle);
    }

    #[test]
    fn remote_state_wins_on_reconcile() {
        let mut session = FocusSession::Focusing {
            task: "local task".to_string(),
        };
        session.adopt_remote(&FocusState {
            focused: false,
            task: None,
        });
        assert_eq!(session, FocusSession::Idle);

        session.adopt_remote(&FocusState {
            focused: true,
            task: Some("remote task".to_string()),
        });
        assert_eq!(session.task(), Some("remote task"));
    }

    #[test]
    fn reconcile_leaves_open_task_prompt_alone() {
        let mut session = FocusSession::AwaitingTask;
        session.adopt_remote(&FocusState {
            focused: true,
            task: Some("remote task".to_string()),
        });
        assert_eq!(session, FocusSession::AwaitingTask);
    }
}
