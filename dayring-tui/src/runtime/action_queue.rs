use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    /// Tell the endpoint a focus session started with the given task.
    NotifyStart { task: String },
    /// Tell the endpoint the focus session ended.
    NotifyStop,
    /// Fetch the endpoint's focus state and adopt it locally.
    ReconcileFocus,
    /// Probe the configured endpoint and report the result in the status bar.
    TestConnection,
    /// Persist the current config and apply it to the running app.
    SaveConfig,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
