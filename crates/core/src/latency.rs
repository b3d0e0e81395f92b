//! Simulated per-row latency for the slow read path.

use std::time::Duration;

/// Delay applied to every row by the slow read path, standing in for an
/// external call made per post.
pub const DEFAULT_ROW_DELAY_MS: u64 = 20;

/// Per-row delay applied by the slow read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDelay(Duration);

impl RowDelay {
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub fn per_row(&self) -> Duration {
        self.0
    }

    /// Per-row delay in whole milliseconds, saturating at `u64::MAX`.
    pub fn millis(&self) -> u64 {
        elapsed_millis(self.0)
    }

    /// Total delay expected for `rows` rows.
    pub fn total_for(&self, rows: usize) -> Duration {
        self.0 * u32::try_from(rows).unwrap_or(u32::MAX)
    }
}

/// Convert a duration to whole milliseconds for logging, saturating at `u64::MAX`.
pub fn elapsed_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for RowDelay {
    fn default() -> Self {
        Self::from_millis(DEFAULT_ROW_DELAY_MS)
    }
}
