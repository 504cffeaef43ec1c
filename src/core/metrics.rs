//! Logger metrics for observability
//!
//! Counts entries that reached the sink and failures at each stage of the
//! pipeline. Failures never propagate to the caller, so these counters are
//! the programmatic way to notice them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Pipeline counters
///
/// # Example
///
/// ```
/// use rust_structured_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_sink_failure();
///
/// assert_eq!(metrics.entries_written(), 1);
/// assert_eq!(metrics.total_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries written to the sink
    entries_written: AtomicU64,

    /// Hook chains that returned an error
    hook_failures: AtomicU64,

    /// Entries the formatter rejected; these never reach the sink
    format_failures: AtomicU64,

    /// Sink writes that returned an error
    sink_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            entries_written: AtomicU64::new(0),
            hook_failures: AtomicU64::new(0),
            format_failures: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_written(&self) -> u64 {
        self.entries_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn hook_failures(&self) -> u64 {
        self.hook_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_failures(&self) -> u64 {
        self.format_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    /// Record an entry written to the sink; returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.entries_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_hook_failure(&self) -> u64 {
        self.hook_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_format_failure(&self) -> u64 {
        self.format_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Sum of all failure counters
    pub fn total_failures(&self) -> u64 {
        self.hook_failures() + self.format_failures() + self.sink_failures()
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.entries_written.store(0, Ordering::Relaxed);
        self.hook_failures.store(0, Ordering::Relaxed);
        self.format_failures.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            entries_written: AtomicU64::new(self.entries_written()),
            hook_failures: AtomicU64::new(self.hook_failures()),
            format_failures: AtomicU64::new(self.format_failures()),
            sink_failures: AtomicU64::new(self.sink_failures()),
        }
    }
}
