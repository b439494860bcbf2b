//! Runtime configuration loaded from environment variables.
//!
//! Every variable is optional. Unset or unparsable values fall back to the
//! documented default with a warning; configuration never aborts startup.
//!
//! Server:
//! - `HTTP_ADDR` - HTTP listen address (default: `0.0.0.0:8080`)
//! - `GRPC_ADDR` - gRPC listen address (default: `0.0.0.0:50051`)
//! - `SPACEX_API_URL`, `NUMBERS_API_URL`, `NASA_API_URL` - upstream base URLs
//! - `NASA_API_KEY` - astronomy API key (default: `DEMO_KEY`)
//! - `UPSTREAM_TIMEOUT_SECS` - per-request upstream timeout (default: `10`)
//!
//! Client:
//! - `HTTP_SERVER_ADDR` - base URL of the HTTP surface (default: `http://$HOSTNAME:80`)
//! - `GRPC_SERVER_ADDR` - gRPC endpoint (default: `http://127.0.0.1:50051`)
//! - `POLL_INTERVAL` - delay between client cycles, e.g. `90s`, `30m`, or bare seconds (default: `30m`)

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

pub const DEFAULT_HTTP_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
pub const DEFAULT_GRPC_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 50051));
pub const DEFAULT_SPACEX_URL: &str = "https://api.spacexdata.com/v4";
pub const DEFAULT_NUMBERS_URL: &str = "http://numbersapi.com";
pub const DEFAULT_NASA_URL: &str = "https://api.nasa.gov";
pub const DEFAULT_NASA_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_GRPC_SERVER_ADDR: &str = "http://127.0.0.1:50051";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Configuration for the `serve` command.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub http_addr: SocketAddr,
    pub grpc_addr: SocketAddr,
    pub spacex_url: String,
    pub numbers_url: String,
    pub nasa_url: String,
    pub nasa_api_key: String,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    /// Load server configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load server configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let http_addr = parse_or_default(&lookup, "HTTP_ADDR", DEFAULT_HTTP_ADDR);
        let grpc_addr = parse_or_default(&lookup, "GRPC_ADDR", DEFAULT_GRPC_ADDR);

        let upstream_timeout = match non_empty(lookup("UPSTREAM_TIMEOUT_SECS")) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Invalid UPSTREAM_TIMEOUT_SECS, using default");
                    DEFAULT_UPSTREAM_TIMEOUT
                }
            },
            None => DEFAULT_UPSTREAM_TIMEOUT,
        };

        Self {
            http_addr,
            grpc_addr,
            spacex_url: string_or_default(&lookup, "SPACEX_API_URL", DEFAULT_SPACEX_URL),
            numbers_url: string_or_default(&lookup, "NUMBERS_API_URL", DEFAULT_NUMBERS_URL),
            nasa_url: string_or_default(&lookup, "NASA_API_URL", DEFAULT_NASA_URL),
            nasa_api_key: string_or_default(&lookup, "NASA_API_KEY", DEFAULT_NASA_API_KEY),
            upstream_timeout,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Configuration for the `client` command.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub http_server: String,
    pub grpc_server: String,
    pub poll_interval: Duration,
}

impl ClientConfig {
    /// Load client configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load client configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let http_server = match non_empty(lookup("HTTP_SERVER_ADDR")) {
            Some(addr) => addr,
            None => {
                let host = non_empty(lookup("HOSTNAME")).unwrap_or_else(|| "127.0.0.1".into());
                format!("http://{}:80", host)
            }
        };

        let poll_interval = match non_empty(lookup("POLL_INTERVAL")) {
            Some(raw) => parse_interval(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Invalid POLL_INTERVAL, using default");
                DEFAULT_POLL_INTERVAL
            }),
            None => DEFAULT_POLL_INTERVAL,
        };

        Self {
            http_server,
            grpc_server: string_or_default(&lookup, "GRPC_SERVER_ADDR", DEFAULT_GRPC_SERVER_ADDR),
            poll_interval,
        }
    }
}

/// Parse a polling interval.
///
/// Accepts a unit-suffixed value (`250ms`, `45s`, `30m`, `2h`) or a bare
/// integer number of seconds.
pub fn parse_interval(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let split = raw.find(|c: char| !c.is_ascii_digit())?;
    let (value, unit) = raw.split_at(split);
    let value: u64 = value.parse().ok()?;
    match unit {
        "ms" => Some(Duration::from_millis(value)),
        "s" => Some(Duration::from_secs(value)),
        "m" => Some(Duration::from_secs(value * 60)),
        "h" => Some(Duration::from_secs(value * 60 * 60)),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn string_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    non_empty(lookup(key)).unwrap_or_else(|| default.to_string())
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default = %default, "Invalid value, using default");
            default
        }),
        None => default,
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
    fn server_config_uses_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.http_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.grpc_addr, "0.0.0.0:50051".parse::<SocketAddr>().unwrap());
        assert_eq!(config.spacex_url, DEFAULT_SPACEX_URL);
        assert_eq!(config.nasa_api_key, "DEMO_KEY");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
    }

    #[test]
    fn server_config_reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HTTP_ADDR", "127.0.0.1:9000"),
            ("NASA_API_KEY", "secret"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.http_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.nasa_api_key, "secret");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
    }

    #[test]
    fn server_config_falls_back_on_garbage() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("GRPC_ADDR", "not an address"),
            ("UPSTREAM_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.grpc_addr, "0.0.0.0:50051".parse::<SocketAddr>().unwrap());
        assert_eq!(config.upstream_timeout, DEFAULT_UPSTREAM_TIMEOUT);
    }

    #[test]
    fn client_config_builds_server_from_hostname() {
        let config = ClientConfig::from_lookup(lookup_from(&[("HOSTNAME", "launchpad")]));
        assert_eq!(config.http_server, "http://launchpad:80");
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn client_config_prefers_explicit_server() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("HOSTNAME", "launchpad"),
            ("HTTP_SERVER_ADDR", "http://api.local:8080"),
            ("POLL_INTERVAL", "90"),
        ]));
        assert_eq!(config.http_server, "http://api.local:8080");
        assert_eq!(config.poll_interval, Duration::from_secs(90));
    }

    #[test]
    fn parse_interval_accepts_units_and_bare_seconds() {
        assert_eq!(parse_interval("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_interval("45s"), Some(Duration::from_secs(45)));
        assert_eq!(parse_interval("30m"), Some(Duration::from_secs(1800)));
        assert_eq!(parse_interval("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(parse_interval("15"), Some(Duration::from_secs(15)));
    }

    #[test]
    fn parse_interval_rejects_unknown_forms() {
        assert_eq!(parse_interval("soon"), None);
        assert_eq!(parse_interval("10d"), None);
        assert_eq!(parse_interval("m"), None);
    }
}
