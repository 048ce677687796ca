use serde::Serialize;
use thiserror::Error;

use crate::{EndpointUrl, FocusState};

/// Client for the optional remote focus endpoint.
///
/// All calls are single-shot: no retries, no timeout beyond the transport
/// default. Callers are expected to treat failures as non-fatal.
#[derive(Debug, Clone)]
pub struct FocusClient {
    client: reqwest::Client,
    url: EndpointUrl,
    token: Option<String>,
}

impl FocusClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: EndpointUrl::new(base_url),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        self.url.as_ref()
    }

    /// Add the bearer token (when configured) and the JSON content type.
    fn with_headers(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let req = req.header("Content-Type", "application/json");
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, FocusClientError> {
        let resp = self
            .with_headers(req)
            .send()
            .await
            .map_err(|e| FocusClientError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(FocusClientError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(FocusClientError::ResponseError(format!(
                "endpoint returned {}",
                resp.status()
            )));
        }

        Ok(resp)
    }

    /// GET {base}/getState — fetch the authoritative focus state.
    pub async fn get_state(&self) -> Result<FocusState, FocusClientError> {
        let url = self.url.append_path("/getState");
        tracing::debug!(url = url.as_ref(), "fetching focus state");

        let resp = self.send(self.client.get(url.as_ref())).await?;
        resp.json::<FocusState>().await.map_err(|e| {
            FocusClientError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// POST {base}/start — notify the endpoint that a focus session began.
    pub async fn start(&self, task: &str) -> Result<(), FocusClientError> {
        #[derive(Serialize)]
        struct Body<'a> {
            task: &'a str,
        }

        let url = self.url.append_path("/start");
        tracing::debug!(url = url.as_ref(), "notifying focus start");

        self.send(self.client.post(url.as_ref()).json(&Body { task }))
            .await?;
        Ok(())
    }

    /// POST {base}/stop — notify the endpoint that the focus session ended.
    pub async fn stop(&self) -> Result<(), FocusClientError> {
        let url = self.url.append_path("/stop");
        tracing::debug!(url = url.as_ref(), "notifying focus stop");

        self.send(self.client.post(url.as_ref())).await?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum FocusClientError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_treated_as_unconfigured() {
        let client = FocusClient::new("http://localhost:3000/", Some(String::new()));
        assert_eq!(client.token, None);
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn token_is_kept_when_non_empty() {
        let client = FocusClient::new("http://localhost:3000", Some("secret".to_string()));
        assert_eq!(client.token.as_deref(), Some("secret"));
    }

    #[test]
    fn requests_carry_bearer_and_json_headers() {
        let client = FocusClient::new("http://localhost:3000", Some("secret".to_string()));
        let req = client
            .with_headers(client.client.post("http://localhost:3000/start"))
            .build()
            .unwrap();
        assert_eq!(
            req.headers().get("Authorization").unwrap().to_str().unwrap(),
            "Bearer secret"
        );
        assert_eq!(
            req.headers().get("Content-Type").unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn auth_header_is_omitted_without_a_token() {
        let client = FocusClient::new("http://localhost:3000", None);
        let req = client
            .with_headers(client.client.get("http://localhost:3000/getState"))
            .build()
            .unwrap();
        assert!(req.headers().get("Authorization").is_none());
        assert_eq!(
            req.headers().get("Content-Type").unwrap().to_str().unwrap(),
            "application/json"
        );
    }
}
