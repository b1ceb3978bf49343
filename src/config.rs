use std::fmt;

use crate::{ConfigError, FetchOptions, Platform};

const API_KEY_VAR: &str = "RIOT_API_KEY";
const REGION_VAR: &str = "RANKRELAY_REGION";
const TIMEOUT_VAR: &str = "RANKRELAY_TIMEOUT_MS";
const API_BASE_VAR: &str = "RANKRELAY_API_BASE";

/// Process configuration, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Value of the `X-Riot-Token` header.
    pub api_key: String,
    /// Platform used when a command does not name one.
    pub default_region: Platform,
    pub fetch: FetchOptions,
    /// Replaces the per-region hosts; used for proxies and local mocks.
    pub api_base: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("default_region", &self.default_region)
            .field("fetch", &self.fetch)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            default_region: Platform::Na1,
            fetch: FetchOptions::default(),
            api_base: None,
        }
    }

    /// Reads configuration from the process environment.
    ///
    /// Reads:
    /// - `RIOT_API_KEY` (required)
    /// - `RANKRELAY_REGION` (optional, defaults to `na1`)
    /// - `RANKRELAY_TIMEOUT_MS` (optional, defaults to 10000)
    /// - `RANKRELAY_API_BASE` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::Empty(API_KEY_VAR));
        }

        let mut config = Self::new(api_key.trim());

        if let Some(region) = non_empty(lookup(REGION_VAR)) {
            config.default_region = region.parse().map_err(|_| ConfigError::Invalid {
                key: REGION_VAR,
                value: region.clone(),
            })?;
        }

        if let Some(timeout) = non_empty(lookup(TIMEOUT_VAR)) {
            let timeout_ms = timeout
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: TIMEOUT_VAR,
                    value: timeout.clone(),
                })?;
            config.fetch = config.fetch.with_timeout_ms(timeout_ms);
        }

        config.api_base =
            non_empty(lookup(API_BASE_VAR)).map(|base| base.trim_end_matches('/').to_owned());

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
