use baseplate_core::error::CoreError;
use baseplate_core::fixtures::FIXTURE_POST_COUNT;

/// Seed configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// SQLite database to populate (default: `sqlite://blog.db`).
    pub database_url: String,
    /// Number of fixture posts to insert into an empty store (default: `100`).
    pub post_count: usize,
}

impl SeedConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default            |
    /// |-------------------|--------------------|
    /// | `DATABASE_URL`    | `sqlite://blog.db` |
    /// | `SEED_POST_COUNT` | `100`              |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Unlike the server, a bad value is returned as an error so the binary
    /// can log it and exit with status 1.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://blog.db".into());

        let post_count = match lookup("SEED_POST_COUNT") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                CoreError::Validation(format!(
                    "SEED_POST_COUNT must be a non-negative integer, got '{raw}'"
                ))
            })?,
            None => FIXTURE_POST_COUNT,
        };

        if post_count == 0 {
            return Err(CoreError::Validation(
                "SEED_POST_COUNT must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            database_url,
            post_count,
        })
    }
}
