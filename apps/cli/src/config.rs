//! Runtime configuration read from the environment.

use std::str::FromStr;
use std::time::Duration;

use salesboard_core::errors::{Error, Result};
use salesboard_mls::{MlsClientConfig, RetryPolicy, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};

pub const DEFAULT_DB_PATH: &str = "./db/salesboard.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bearer_token: Option<String>,
    pub api_url: String,
    pub db_path: String,
    pub page_size: usize,
    pub page_delay: Duration,
    pub rate_limit_cooldown: Duration,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let log_format = match value("SALESBOARD_LOG_FORMAT").as_deref() {
            None => LogFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => {
                return Err(Error::InvalidConfigValue(format!(
                    "SALESBOARD_LOG_FORMAT must be 'text' or 'json', got '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            bearer_token: value("WFRMLS_BEARER_TOKEN"),
            api_url: value("WFRMLS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            db_path: value("SALESBOARD_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            page_size: parse_number(&value, "WFRMLS_PAGE_SIZE", DEFAULT_PAGE_SIZE, false)?,
            page_delay: Duration::from_millis(parse_number(
                &value,
                "WFRMLS_PAGE_DELAY_MS",
                1000,
                true,
            )?),
            rate_limit_cooldown: Duration::from_secs(parse_number(
                &value,
                "WFRMLS_RATE_LIMIT_COOLDOWN_SECS",
                30,
                false,
            )?),
            request_timeout: Duration::from_secs(parse_number(
                &value,
                "WFRMLS_REQUEST_TIMEOUT_SECS",
                30,
                false,
            )?),
            log_format,
        })
    }

    /// Client settings; fails when no bearer token is configured.
    pub fn mls_client_config(&self) -> Result<MlsClientConfig> {
        let token = self
            .bearer_token
            .clone()
            .ok_or_else(|| Error::MissingConfigKey("WFRMLS_BEARER_TOKEN".to_string()))?;
        Ok(MlsClientConfig {
            base_url: self.api_url.clone(),
            bearer_token: Some(token),
            page_size: self.page_size,
            timeout: self.request_timeout,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            rate_limit_cooldown: self.rate_limit_cooldown,
            page_delay: self.page_delay,
        }
    }
}

fn parse_number<T, F>(value: &F, key: &str, default: T, allow_zero: bool) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
    F: Fn(&str) -> Option<String>,
{
    match value(key) {
        None => Ok(default),
        Some(raw) => match raw.parse::<T>() {
            Ok(n) if n > T::default() || (allow_zero && n == T::default()) => Ok(n),
            _ => Err(Error::InvalidConfigValue(format!(
                "{} has an invalid value '{}'",
                key, raw
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bearer_token, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.page_delay, Duration::from_millis(1000));
        assert_eq!(config.rate_limit_cooldown, Duration::from_secs(30));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_missing_token_is_a_config_error() {
        let config = config_from(&[("WFRMLS_BEARER_TOKEN", "   ")]).unwrap();
        let err = config.mls_client_config().unwrap_err();
        assert!(matches!(err, Error::MissingConfigKey(ref k) if k == "WFRMLS_BEARER_TOKEN"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = config_from(&[("WFRMLS_PAGE_SIZE", "lots")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));

        let err = config_from(&[("WFRMLS_RATE_LIMIT_COOLDOWN_SECS", "0")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));

        // A zero page delay is allowed.
        let config = config_from(&[("WFRMLS_PAGE_DELAY_MS", "0")]).unwrap();
        assert!(config.page_delay.is_zero());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("WFRMLS_BEARER_TOKEN", "secret"),
            ("WFRMLS_PAGE_SIZE", "50"),
            ("SALESBOARD_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.log_format, LogFormat::Json);
        let client = config.mls_client_config().unwrap();
        assert_eq!(client.bearer_token.as_deref(), Some("secret"));
    }
}
