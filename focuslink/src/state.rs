use serde::{Deserialize, Serialize};

/// The authoritative focus state as reported by the remote endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusState {
    pub focused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_task() {
        let state: FocusState =
            serde_json::from_str(r#"{"focused":true,"task":"write report"}"#).unwrap();
        assert!(state.focused);
        assert_eq!(state.task.as_deref(), Some("write report"));
    }

    #[test]
    fn task_is_optional() {
        let state: FocusState = serde_json::from_str(r#"{"focused":false}"#).unwrap();
        assert!(!state.focused);
        assert_eq!(state.task, None);
    }
}
