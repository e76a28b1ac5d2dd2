use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use news_scraper::DEFAULT_SOURCE_URL;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// What a handler does when its operation fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the error and never answer the request.
    #[default]
    Legacy,
    /// Log the error and answer with an HTTP error status.
    Report,
}

impl FromStr for FailurePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "hang" => Ok(FailurePolicy::Legacy),
            "report" => Ok(FailurePolicy::Report),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub source_url: String,
    pub static_dir: PathBuf,
    pub failure_policy: FailurePolicy,
    pub fetch_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            database_url: "sqlite://commentonnews.db".to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            static_dir: PathBuf::from("public"),
            failure_policy: FailurePolicy::default(),
            fetch_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Self {
            bind_addr: parse_or(&lookup, "BIND_ADDR", defaults.bind_addr)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            source_url: lookup("SOURCE_URL").unwrap_or(defaults.source_url),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            failure_policy: parse_or(&lookup, "FAILURE_POLICY", defaults.failure_policy)?,
            fetch_timeout: match lookup("FETCH_TIMEOUT_SECS") {
                Some(value) => Some(Duration::from_secs(parse(&value, "FETCH_TIMEOUT_SECS")?)),
                None => None,
            },
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse<T: FromStr>(value: &str, key: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => parse(&value, key),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.failure_policy, FailurePolicy::Legacy);
    }

    #[test]
    fn values_are_read_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "0.0.0.0"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SOURCE_URL", "http://news.test/"),
            ("FAILURE_POLICY", "Report"),
            ("FETCH_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.source_url, "http://news.test/");
        assert_eq!(config.failure_policy, FailurePolicy::Report);
        assert_eq!(config.fetch_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn malformed_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn unknown_failure_policy_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("FAILURE_POLICY", "shrug")]));

        assert!(result.is_err());
    }
}
