//! Translation lookup metrics.
//!
//! Counts how many audited lookups resolved to a string and how many would
//! fall back to the raw key. `translate` itself never touches these.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters for one audit run.
pub struct TranslationMetrics {
    /// Lookups that resolved to a string leaf
    resolved: AtomicUsize,

    /// Lookups that fell back to the key
    missing: AtomicUsize,
}

impl Default for TranslationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationMetrics {
    /// Create a set of counters, all zero.
    pub fn new() -> Self {
        Self {
            resolved: AtomicUsize::new(0),
            missing: AtomicUsize::new(0),
        }
    }

    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing(&self) {
        self.missing.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolved(&self) -> usize {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn missing(&self) -> usize {
        self.missing.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolved = self.resolved();
        let missing = self.missing();
        let total = resolved + missing;
        let hit_rate = if total > 0 {
            (resolved as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolved,
            missing,
            hit_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.resolved.store(0, Ordering::Relaxed);
        self.missing.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub resolved: usize,

    pub missing: usize,

    /// Resolved lookups as a percentage of all lookups (0-100)
    pub hit_rate: f64,
}
