//! Lookup metrics.
//!
//! Counts how often the translation tables had to fall back, so missing copy
//! shows up in `/api/metrics` and not only in the logs.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Lookups that went through the recording path
    lookups: AtomicUsize,

    /// Lookups whose key was absent from the table
    missing_keys: AtomicUsize,

    /// Lookups whose key existed but not in the requested language
    missing_translations: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(|| LookupMetrics {
            lookups: AtomicUsize::new(0),
            missing_keys: AtomicUsize::new(0),
            missing_translations: AtomicUsize::new(0),
        })
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_translation(&self) {
        self.missing_translations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    pub fn missing_translations(&self) -> usize {
        self.missing_translations.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let missing_keys = self.missing_keys();
        let missing_translations = self.missing_translations();

        let fallback_rate = if lookups > 0 {
            ((missing_keys + missing_translations) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            missing_keys,
            missing_translations,
            fallback_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.missing_keys.store(0, Ordering::Relaxed);
        self.missing_translations.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub missing_keys: usize,
    pub missing_translations: usize,

    /// Share of lookups that took any fallback, as a percentage (0-100)
    pub fallback_rate: f64,
}
