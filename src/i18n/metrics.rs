//! Resolver metrics.
//!
//! Counts text lookups and how many of them hit a missing key, so untranslated
//! strings show up in `/metrics` as well as in the logs.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a locale catalog.
#[derive(Debug, Default)]
pub struct ResolverMetrics {
    /// Number of `resolve` calls
    lookups: AtomicUsize,

    /// Number of lookups that fell back to the key placeholder
    misses: AtomicUsize,
}

impl ResolverMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let misses = self.misses();
        let miss_rate = if lookups > 0 {
            (misses as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            misses,
            miss_rate,
        }
    }
}

/// Snapshot of resolver metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub misses: usize,
    /// Percentage of lookups that returned a placeholder (0-100)
    pub miss_rate: f64,
}

impl MetricsReport {
    /// Format the report as a human-readable string.
    pub fn format(&self) -> String {
        format!(
            "Resolver Metrics:\n  Lookups: {}\n  Missing keys: {}\n  Miss rate: {:.1}%",
            self.lookups, self.misses, self.miss_rate
        )
    }
}
