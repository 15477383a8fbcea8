//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: public listen port (default: `3000`)
/// - `METRICS_PORT`: admin listen port for `/health` and `/metrics` (default: `9000`)
/// - `REGENERATION_INTERVAL_SECS`: seconds between snapshots (default: `60`, minimum `1`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub regeneration_interval: Duration,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            metrics_port: lookup("METRICS_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.metrics_port),
            regeneration_interval: lookup("REGENERATION_INTERVAL_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|&secs| secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.regeneration_interval),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Returns the `"host:port"` bind address of the public listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the `"host:port"` bind address of the admin listener.
    pub fn metrics_addr(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            metrics_port: 9000,
            regeneration_interval: readings::DEFAULT_INTERVAL,
            log_level: "info".to_string(),
        }
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
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.metrics_port, 9000);
        assert_eq!(config.regeneration_interval, Duration::from_secs(60));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            metrics_port: 9100,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.metrics_addr(), "127.0.0.1:9100");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "4000"),
            ("REGENERATION_INTERVAL_SECS", "5"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.addr(), "127.0.0.1:4000");
        assert_eq!(config.regeneration_interval, Duration::from_secs(5));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.metrics_port, 9000);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("METRICS_PORT", "70000"),
            ("REGENERATION_INTERVAL_SECS", "0"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.metrics_port, 9000);
        assert_eq!(config.regeneration_interval, Duration::from_secs(60));
    }
}
