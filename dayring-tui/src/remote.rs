use std::sync::{Arc, Mutex};

use focuslink::{FocusClient, FocusClientError, FocusState};

use crate::config::DayringConfig;

/// The app's single seam to the optional focus endpoint.
///
/// Three shapes: a configured endpoint (real HTTP calls), no endpoint
/// (every call is a local no-op), or dev mode, where calls mutate an
/// in-memory state instead of hitting any server.
pub struct Remote {
    client: Option<FocusClient>,
    dev_state: Option<Arc<Mutex<FocusState>>>,
}

impl Remote {
    pub fn from_config(config: &DayringConfig) -> Self {
        Self {
            client: build_client(config),
            dev_state: None,
        }
    }

    /// Dev-mode remote backed by an in-memory focus state.
    pub fn dev() -> Self {
        Self {
            client: None,
            dev_state: Some(Arc::new(Mutex::new(FocusState::default()))),
        }
    }

    /// Rebuild the client after a settings change. Dev mode stays dev mode.
    pub fn reconfigure(&mut self, config: &DayringConfig) {
        if self.dev_state.is_some() {
            return;
        }
        self.client = build_client(config);
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some() || self.dev_state.is_some()
    }

    /// Fetch the authoritative state. `Ok(None)` means no endpoint is
    /// configured and local state stands alone.
    pub async fn get_state(&self) -> Result<Option<FocusState>, FocusClientError> {
        if let Some(store) = &self.dev_state {
            return Ok(Some(store.lock().unwrap().clone()));
        }
        match &self.client {
            Some(client) => client.get_state().await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn start(&self, task: &str) -> Result<(), FocusClientError> {
        if let Some(store) = &self.dev_state {
            let mut state = store.lock().unwrap();
            state.focused = true;
            state.task = Some(task.to_string());
            return Ok(());
        }
        match &self.client {
            Some(client) => client.start(task).await,
            None => Ok(()),
        }
    }

    pub async fn stop(&self) -> Result<(), FocusClientError> {
        if let Some(store) = &self.dev_state {
            let mut state = store.lock().unwrap();
            state.focused = false;
            state.task = None;
            return Ok(());
        }
        match &self.client {
            Some(client) => client.stop().await,
            None => Ok(()),
        }
    }
}

fn build_client(config: &DayringConfig) -> Option<FocusClient> {
    let url = config.endpoint_url.trim();
    if url.is_empty() {
        return None;
    }
    let token = match config.access_token.trim() {
        "" => None,
        token => Some(token.to_string()),
    };
    Some(FocusClient::new(url, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_endpoint_builds_no_client() {
        let remote = Remote::from_config(&DayringConfig::default());
        assert!(!remote.is_configured());
    }

    #[test]
    fn dev_remote_round_trips_state() {
        let remote = Remote::dev();
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            remote.start("deep work").await.unwrap();
            let state = remote.get_state().await.unwrap().unwrap();
            assert!(state.focused);
            assert_eq!(state.task.as_deref(), Some("deep work"));

            remote.stop().await.unwrap();
            let state = remote.get_state().await.unwrap().unwrap();
            assert!(!state.focused);
            assert_eq!(state.task, None);
        });
    }
}
