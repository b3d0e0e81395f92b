use baseplate_core::latency::{RowDelay, DEFAULT_ROW_DELAY_MS};
use baseplate_db::DEFAULT_MAX_CONNECTIONS;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the demo locally.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://blog.db`).
    pub database_url: String,
    /// Connection pool size (default: `20`).
    pub database_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Per-row delay of the slow listing endpoint.
    pub slow_row_delay: RowDelay,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `8000`                  |
    /// | `DATABASE_URL`             | `sqlite://blog.db`      |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                    |
    /// | `CORS_ORIGINS`             | `http://localhost:5173` |
    /// | `SLOW_ROW_DELAY_MS`        | `20`                    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Panics on unparsable numbers: misconfiguration should stop the server
    /// before it binds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://blog.db".into());

        let database_max_connections: u32 = lookup("DATABASE_MAX_CONNECTIONS")
            .map(|v| {
                v.parse()
                    .expect("DATABASE_MAX_CONNECTIONS must be a valid u32")
            })
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let slow_row_delay_ms: u64 = lookup("SLOW_ROW_DELAY_MS")
            .map(|v| {
                v.parse()
                    .expect("SLOW_ROW_DELAY_MS must be a valid u64")
            })
            .unwrap_or(DEFAULT_ROW_DELAY_MS);

        Self {
            host,
            port,
            database_url,
            database_max_connections,
            cors_origins,
            slow_row_delay: RowDelay::from_millis(slow_row_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database_url, "sqlite://blog.db");
        assert_eq!(config.database_max_connections, 20);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.slow_row_delay.per_row(), Duration::from_millis(20));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("SLOW_ROW_DELAY_MS", "5"),
            ("DATABASE_MAX_CONNECTIONS", "64"),
            ("CORS_ORIGINS", "http://a.test, ,http://b.test"),
        ]);

        assert_eq!(config.port, 9000);
        assert_eq!(config.slow_row_delay.per_row(), Duration::from_millis(5));
        assert_eq!(config.database_max_connections, 64);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn invalid_port_panics() {
        config_from(&[("PORT", "not-a-port")]);
    }
}
