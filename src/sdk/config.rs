use crate::sdk::api::DEFAULT_API_URL;
use crate::sdk::routing::provider::ORS_BASE_URL;
use crate::sdk::routing::DEFAULT_ROUTE_TIMEOUT;
use crate::sdk::util::rate_limit::DEFAULT_DIRECTIONS_PER_MINUTE;
use std::{env, num::NonZeroU32, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrsConfig {
    Remote { api_key: String, base_url: String },
    Local { base_url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub ors: OrsConfig,
    pub directions_per_minute: NonZeroU32,
    pub route_timeout: Duration,
    pub api_base_url: String,
    pub session_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let ors = match (get("ORS_LOCAL_URL"), get("ORS_API_KEY")) {
            (Some(base_url), _) => OrsConfig::Local { base_url },
            (None, Some(api_key)) => OrsConfig::Remote {
                api_key,
                base_url: get("ORS_BASE_URL").unwrap_or_else(|| ORS_BASE_URL.to_string()),
            },
            (None, None) => return Err(ConfigError::Missing("ORS_API_KEY")),
        };

        let directions_per_minute = match get("ORS_REQUESTS_PER_MINUTE") {
            Some(raw) => raw
                .trim()
                .parse::<NonZeroU32>()
                .map_err(|_| ConfigError::Invalid {
                    key: "ORS_REQUESTS_PER_MINUTE",
                    value: raw.clone(),
                })?,
            None => DEFAULT_DIRECTIONS_PER_MINUTE,
        };

        let route_timeout = match get("ROUTE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0);
                Duration::from_secs(secs.ok_or(ConfigError::Invalid {
                    key: "ROUTE_TIMEOUT_SECS",
                    value: raw,
                })?)
            }
            None => DEFAULT_ROUTE_TIMEOUT,
        };

        Ok(Self {
            ors,
            directions_per_minute,
            route_timeout,
            api_base_url: get("SHAREBITE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            session_file: get("SHAREBITE_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("session.json")),
        })
    }
}
