use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("LOADTEST_VUS must be at least 1")]
    NoVirtualUsers,
}

/// How many virtual users run, and when each one starts and stops.
///
/// Users join one by one during `ramp_up`, all run during `hold`, then leave
/// one by one during `ramp_down` (last joined leaves first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub vus: u32,
    pub ramp_up: Duration,
    pub hold: Duration,
    pub ramp_down: Duration,
}

impl Profile {
    /// Total length of the run.
    pub fn total(&self) -> Duration {
        self.ramp_up + self.hold + self.ramp_down
    }

    /// Start and stop offsets of the 0-based virtual user `vu`.
    pub fn window(&self, vu: u32) -> (Duration, Duration) {
        let start = self.ramp_up * vu / self.vus;
        let stop = self.ramp_up + self.hold + self.ramp_down * (self.vus - vu) / self.vus;
        (start, stop)
    }
}

/// Load test configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    /// Endpoint hit by every virtual user.
    pub target_url: String,
    pub profile: Profile,
    /// Pause each virtual user takes between requests.
    pub pause: Duration,
    /// The run fails when p95 latency reaches this value.
    pub p95_threshold: Duration,
}

impl LoadConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                                  |
    /// |-----------------------------|------------------------------------------|
    /// | `LOADTEST_URL`              | `http://127.0.0.1:8000/api/posts/v1/slow` |
    /// | `LOADTEST_VUS`              | `10`                                     |
    /// | `LOADTEST_RAMP_UP_SECS`     | `10`                                     |
    /// | `LOADTEST_HOLD_SECS`        | `20`                                     |
    /// | `LOADTEST_RAMP_DOWN_SECS`   | `10`                                     |
    /// | `LOADTEST_PAUSE_MS`         | `1000`                                   |
    /// | `LOADTEST_P95_THRESHOLD_MS` | `500`                                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let number = |var: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(var) {
                Some(value) => {
                    let parsed = value.trim().parse::<u64>();
                    parsed.map_err(|_| ConfigError::InvalidNumber { var, value })
                }
                None => Ok(default),
            }
        };

        let vus = u32::try_from(number("LOADTEST_VUS", 10)?).unwrap_or(u32::MAX);
        if vus == 0 {
            return Err(ConfigError::NoVirtualUsers);
        }

        let profile = Profile {
            vus,
            ramp_up: Duration::from_secs(number("LOADTEST_RAMP_UP_SECS", 10)?),
            hold: Duration::from_secs(number("LOADTEST_HOLD_SECS", 20)?),
            ramp_down: Duration::from_secs(number("LOADTEST_RAMP_DOWN_SECS", 10)?),
        };

        Ok(Self {
            target_url: lookup("LOADTEST_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000/api/posts/v1/slow".into()),
            profile,
            pause: Duration::from_millis(number("LOADTEST_PAUSE_MS", 1000)?),
            p95_threshold: Duration::from_millis(number("LOADTEST_P95_THRESHOLD_MS", 500)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<LoadConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LoadConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_target_slow_endpoint_with_ten_users() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.target_url, "http://127.0.0.1:8000/api/posts/v1/slow");
        assert_eq!(config.profile.vus, 10);
        assert_eq!(config.profile.total(), Duration::from_secs(40));
        assert_eq!(config.pause, Duration::from_secs(1));
        assert_eq!(config.p95_threshold, Duration::from_millis(500));
    }

    #[test]
    fn zero_users_is_rejected() {
        assert_eq!(
            config_from(&[("LOADTEST_VUS", "0")]).unwrap_err(),
            ConfigError::NoVirtualUsers
        );
    }

    #[test]
    fn non_numeric_value_names_the_variable() {
        let err = config_from(&[("LOADTEST_HOLD_SECS", "soon")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "LOADTEST_HOLD_SECS",
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn users_join_during_ramp_up_and_leave_in_reverse() {
        let profile = Profile {
            vus: 10,
            ramp_up: Duration::from_secs(10),
            hold: Duration::from_secs(20),
            ramp_down: Duration::from_secs(10),
        };

        assert_eq!(
            profile.window(0),
            (Duration::ZERO, Duration::from_secs(40))
        );
        assert_eq!(
            profile.window(9),
            (Duration::from_secs(9), Duration::from_secs(31))
        );
    }
}
