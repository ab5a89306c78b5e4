use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use recs_client::config::ParseAsyncModeError;
use recs_client::{AsyncMode, ClientConfig};
use secrecy::{ExposeSecret, SecretString};

pub const USERNAME_ENV: &str = "RECS_USERNAME";
pub const API_KEY_ENV: &str = "RECS_API_KEY";
pub const ASYNC_ENV: &str = "RECS_ASYNC";
pub const BASE_URL_ENV: &str = "RECS_BASE_URL";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Values given on the command line; each one wins over its env var.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub synchronous: bool,
    pub base_url: Option<String>,
    pub debug: bool,
}

#[derive(Debug)]
pub struct Config {
    username: String,
    api_key: SecretString,
    async_mode: AsyncMode,
    base_url: Option<String>,
    debug: bool,

    // Logging Level
    log_level: tracing::Level,
    invalid_log_level: Option<String>,
    env_file_loaded: bool,
}

impl Config {
    pub fn from_env(overrides: &Overrides) -> Result<Config, ConfigError> {
        // reported once logging is up
        let env_file_loaded = dotenv().is_ok();

        let mut config = Self::from_lookup(overrides, |key| env::var(key).ok())?;
        config.env_file_loaded = env_file_loaded;
        Ok(config)
    }

    pub fn from_lookup(
        overrides: &Overrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Config, ConfigError> {
        let username = overrides
            .username
            .clone()
            .or_else(|| lookup(USERNAME_ENV))
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingCredential(USERNAME_ENV))?;

        let api_key = overrides
            .api_key
            .clone()
            .or_else(|| lookup(API_KEY_ENV))
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingCredential(API_KEY_ENV))?;

        let async_mode = if overrides.synchronous {
            AsyncMode::Synchronous
        } else {
            match lookup(ASYNC_ENV) {
                Some(flag) => AsyncMode::from_str(&flag)?,
                None => AsyncMode::default(),
            }
        };

        let base_url = overrides.base_url.clone().or_else(|| lookup(BASE_URL_ENV));

        let mut invalid_log_level = None;
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(level) => match tracing::Level::from_str(&level) {
                Ok(level) => level,
                Err(_e) => {
                    invalid_log_level = Some(level);
                    tracing::Level::WARN
                }
            },
            None => tracing::Level::WARN,
        };

        Ok(Config {
            username,
            api_key: api_key.into(),
            async_mode,
            base_url,
            debug: overrides.debug,
            log_level,
            invalid_log_level,
            env_file_loaded: false,
        })
    }

    pub fn log_level(&self) -> &tracing::Level {
        &self.log_level
    }

    /// The unparseable `LOG_LEVEL` value, if one was given
    pub fn invalid_log_level(&self) -> Option<&str> {
        self.invalid_log_level.as_deref()
    }

    pub fn env_file_loaded(&self) -> bool {
        self.env_file_loaded
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let config = ClientConfig::new(self.username.clone(), self.api_key.expose_secret())
            .with_async_mode(self.async_mode);
        match &self.base_url {
            Some(base_url) => Ok(config.with_base_url(base_url)?),
            None => Ok(config),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing credential: set {0} or pass it as a flag")]
    MissingCredential(&'static str),
    #[error("invalid RECS_ASYNC: {0}")]
    Async(#[from] ParseAsyncModeError),
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}
