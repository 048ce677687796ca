#[derive(Debug, Clone)]
pub struct EndpointUrl(String);

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl EndpointUrl {
    /// Creates a new EndpointUrl from a user-configured base URL.
    pub fn new(base: &str) -> Self {
        Self(base.trim_end_matches('/').to_string())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_joins_with_single_slash() {
        let url = EndpointUrl::new("https://example.com/focus/");
        assert_eq!(url.append_path("/getState").as_ref(), "https://example.com/focus/getState");
        assert_eq!(url.append_path("start").as_ref(), "https://example.com/focus/start");
    }

    #[test]
    fn new_strips_trailing_slash() {
        assert_eq!(EndpointUrl::new("http://localhost:3000/").as_ref(), "http://localhost:3000");
    }
}
