use dotenv::{dotenv, from_path};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: String,
    pub database_max_connections: u32,
    pub database_busy_timeout: Duration,
    pub log_filter: String,
}

impl Config {
    /// Load configuration from a specified `.env` file path or default to the root `.env` file.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = env_path {
            from_path(path).map_err(|e| format!("Failed to load .env file from {}: {}", path, e))?;
        } else {
            // A missing `.env` is fine, the process environment still applies
            dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let database_max_connections: u32 = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "8".to_string())
            .parse()
            .map_err(|e| format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e))?;
        if database_max_connections == 0 {
            return Err("Invalid DATABASE_MAX_CONNECTIONS: must be at least 1".into());
        }

        let busy_timeout_ms: u64 = lookup("DATABASE_BUSY_TIMEOUT_MS")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .map_err(|e| format!("Invalid DATABASE_BUSY_TIMEOUT_MS: {}", e))?;

        Ok(Self {
            database_path: lookup("DATABASE_PATH").unwrap_or_else(|| "userhub.db".to_string()),
            database_max_connections,
            database_busy_timeout: Duration::from_millis(busy_timeout_ms),
            log_filter: lookup("LOG_FILTER")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_path, "userhub.db");
        assert_eq!(config.database_max_connections, 8);
        assert_eq!(config.database_busy_timeout, Duration::from_millis(5000));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_PATH", "/var/lib/userhub/users.db"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("DATABASE_BUSY_TIMEOUT_MS", "250"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, "/var/lib/userhub/users.db");
        assert_eq!(config.database_max_connections, 2);
        assert_eq!(config.database_busy_timeout, Duration::from_millis(250));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_log_filter_takes_precedence_over_rust_log() {
        let config = Config::from_lookup(lookup_from(&[
            ("LOG_FILTER", "userhub=trace"),
            ("RUST_LOG", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "userhub=trace");
    }

    #[test]
    fn test_malformed_numbers_are_errors() {
        let err = Config::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));

        assert!(Config::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DATABASE_BUSY_TIMEOUT_MS", "-1")])).is_err());
    }

    #[test]
    fn test_missing_env_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("absent.env");
        assert!(Config::from_env(Some(missing.to_str().unwrap())).is_err());

        let present = dir.path().join("present.env");
        let mut file = std::fs::File::create(&present).unwrap();
        writeln!(file, "USERHUB_CONFIG_TEST_MARKER=1").unwrap();
        assert!(Config::from_env(Some(present.to_str().unwrap())).is_ok());
    }
}
