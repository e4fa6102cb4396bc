//! Translation lookup metrics.
//!
//! Counts how lookups are resolved so content gaps (fallbacks and missing
//! keys) are visible at runtime.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Lookups for the default locale, answered with the key itself
    identity_lookups: AtomicUsize,

    /// Lookups answered from the translation table
    table_hits: AtomicUsize,

    /// Lookups where the key exists but the locale has no entry
    fallbacks: AtomicUsize,

    /// Lookups for a key absent from the table
    missing_keys: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            identity_lookups: AtomicUsize::new(0),
            table_hits: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            missing_keys: AtomicUsize::new(0),
        })
    }

    pub fn record_identity(&self) {
        self.identity_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_hit(&self) {
        self.table_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn identity_lookups(&self) -> usize {
        self.identity_lookups.load(Ordering::Relaxed)
    }

    pub fn table_hits(&self) -> usize {
        self.table_hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let identity = self.identity_lookups();
        let hits = self.table_hits();
        let fallbacks = self.fallbacks();
        let missing = self.missing_keys();

        // Identity lookups never touch the table
        let table_lookups = hits + fallbacks + missing;
        let table_hit_rate = if table_lookups > 0 {
            (hits as f64 / table_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            total_lookups: identity + table_lookups,
            identity_lookups: identity,
            table_hits: hits,
            fallbacks,
            missing_keys: missing,
            table_hit_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.identity_lookups.store(0, Ordering::Relaxed);
        self.table_hits.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.missing_keys.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub total_lookups: usize,
    pub identity_lookups: usize,
    pub table_hits: usize,
    pub fallbacks: usize,
    pub missing_keys: usize,

    /// Share of table lookups that found a translation, as a percentage (0-100)
    pub table_hit_rate: f64,
}
