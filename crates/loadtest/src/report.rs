//! Latency samples and the pass/fail summary built from them.

use std::fmt;
use std::time::Duration;

/// One request issued by a virtual user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub elapsed: Duration,
    /// HTTP status, or `None` when the request failed before a response.
    pub status: Option<u16>,
}

impl Sample {
    pub fn is_ok(&self) -> bool {
        self.status == Some(200)
    }
}

/// Aggregated results of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub requests: usize,
    /// Requests that did not come back with 200.
    pub failed: usize,
    /// Requests at or above the latency threshold.
    pub over_threshold: usize,
    pub avg: Duration,
    pub p95: Duration,
    pub max: Duration,
    pub threshold: Duration,
}

impl Summary {
    /// Summarise `samples` against `threshold`. Returns `None` for an empty run.
    pub fn from_samples(samples: &[Sample], threshold: Duration) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut latencies: Vec<Duration> = samples.iter().map(|s| s.elapsed).collect();
        latencies.sort_unstable();

        let total: Duration = latencies.iter().sum();
        let count = u32::try_from(latencies.len()).unwrap_or(u32::MAX);

        Some(Self {
            requests: samples.len(),
            failed: samples.iter().filter(|s| !s.is_ok()).count(),
            over_threshold: latencies.iter().filter(|&&l| l >= threshold).count(),
            avg: total / count,
            p95: percentile(&latencies, 0.95),
            max: latencies[latencies.len() - 1],
            threshold,
        })
    }

    /// The run passes when p95 stays under the threshold and every request got a 200.
    pub fn passed(&self) -> bool {
        self.p95 < self.threshold && self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requests={} failed={} over_threshold={} avg={:?} p95={:?} max={:?} threshold={:?} -> {}",
            self.requests,
            self.failed,
            self.over_threshold,
            self.avg,
            self.p95,
            self.max,
            self.threshold,
            if self.passed() { "PASS" } else { "FAIL" },
        )
    }
}

/// Linearly interpolated percentile of an ascending, non-empty slice.
pub fn percentile(sorted: &[Duration], quantile: f64) -> Duration {
    let rank = quantile.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }

    let fraction = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]).mul_f64(fraction)
}
