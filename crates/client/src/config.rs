use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

pub const DEFAULT_BASE_URL: &str = "https://api.recs.io/api/v3/";

/// Whether the remote service should process a request before answering
/// (`0`) or queue it and answer immediately (`1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AsyncMode {
    Synchronous,
    #[default]
    Asynchronous,
}

impl AsyncMode {
    pub fn flag(&self) -> u8 {
        match self {
            AsyncMode::Synchronous => 0,
            AsyncMode::Asynchronous => 1,
        }
    }
}

impl From<bool> for AsyncMode {
    fn from(asynchronous: bool) -> Self {
        if asynchronous {
            AsyncMode::Asynchronous
        } else {
            AsyncMode::Synchronous
        }
    }
}

impl Serialize for AsyncMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.flag())
    }
}

impl fmt::Display for AsyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid async flag: {0} (expected 0, 1, true or false)")]
pub struct ParseAsyncModeError(String);

impl FromStr for AsyncMode {
    type Err = ParseAsyncModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "async" => Ok(AsyncMode::Asynchronous),
            "0" | "false" | "sync" => Ok(AsyncMode::Synchronous),
            _ => Err(ParseAsyncModeError(value.to_string())),
        }
    }
}

/// Everything an [`ApiClient`](crate::ApiClient) needs to talk to the
/// recommendation service. Nothing here is read from the environment;
/// callers assemble it at their own entry point.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    username: String,
    api_key: SecretString,
    async_mode: AsyncMode,
    base_url: Url,
}

impl ClientConfig {
    /// Create a config with the given basic auth credentials, the default
    /// base URL and asynchronous processing.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: SecretString::from(api_key.into()),
            async_mode: AsyncMode::default(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }

    pub fn with_async_mode(mut self, async_mode: AsyncMode) -> Self {
        self.async_mode = async_mode;
        self
    }

    /// Point the client at another deployment of the API. The URL should
    /// include the versioned path, e.g. `https://staging.recs.io/api/v3`.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, url::ParseError> {
        let mut url = Url::parse(base_url)?;
        // endpoint paths are joined relative to the version segment
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn async_mode(&self) -> AsyncMode {
        self.async_mode
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_async_and_the_v3_base_url() {
        let config = ClientConfig::new("user", "key");
        assert_eq!(config.async_mode(), AsyncMode::Asynchronous);
        assert_eq!(config.async_mode().flag(), 1);
        assert_eq!(config.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_gets_a_trailing_slash() {
        let config = ClientConfig::new("user", "key")
            .with_base_url("http://localhost:9000/api/v3")
            .unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:9000/api/v3/");
        assert_eq!(
            config.base_url().join("users/").unwrap().as_str(),
            "http://localhost:9000/api/v3/users/"
        );
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let config = ClientConfig::new("user", "super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
        assert_eq!(config.api_key(), "super-secret");
    }

    #[test]
    fn parses_async_flags() {
        assert_eq!("0".parse::<AsyncMode>().unwrap(), AsyncMode::Synchronous);
        assert_eq!("TRUE".parse::<AsyncMode>().unwrap(), AsyncMode::Asynchronous);
        assert!("maybe".parse::<AsyncMode>().is_err());
    }
}
