//! Metrics collection for gateway monitoring.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use std::fmt::Write;

/// Per-kind conversion counters and latency accumulators.
pub struct Metrics {
    success: DashMap<&'static str, AtomicU64>,
    failure: DashMap<&'static str, AtomicU64>,
    duration_micros: DashMap<&'static str, AtomicU64>,
}

impl Metrics {
    /// Create new metrics instance.
    pub fn new() -> Self {
        Self {
            success: DashMap::new(),
            failure: DashMap::new(),
            duration_micros: DashMap::new(),
        }
    }

    /// Record one completed conversion.
    pub fn track(&self, kind: &'static str, duration: Duration, success: bool) {
        let bucket = if success { &self.success } else { &self.failure };
        bucket
            .entry(kind)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);

        self.duration_micros
            .entry(kind)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Total successful conversions across all kinds.
    pub fn success_total(&self) -> u64 {
        self.success
            .iter()
            .map(|entry| entry.value().load(Ordering::Relaxed))
            .sum()
    }

    /// Total failed conversions across all kinds.
    pub fn failure_total(&self) -> u64 {
        self.failure
            .iter()
            .map(|entry| entry.value().load(Ordering::Relaxed))
            .sum()
    }

    /// Export metrics in Prometheus text exposition format.
    ///
    /// Lines are sorted by label for deterministic output.
    pub fn to_prometheus(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "# HELP unitconv_conversions_total Total conversions by kind and outcome"
        );
        let _ = writeln!(out, "# TYPE unitconv_conversions_total counter");

        let mut lines = Vec::new();
        for entry in self.success.iter() {
            lines.push((*entry.key(), "success", entry.value().load(Ordering::Relaxed)));
        }
        for entry in self.failure.iter() {
            lines.push((*entry.key(), "error", entry.value().load(Ordering::Relaxed)));
        }
        lines.sort();
        for (kind, outcome, count) in lines {
            let _ = writeln!(
                out,
                "unitconv_conversions_total{{kind=\"{kind}\",outcome=\"{outcome}\"}} {count}"
            );
        }

        let _ = writeln!(
            out,
            "# HELP unitconv_conversion_duration_micros_total Summed conversion wall time by kind"
        );
        let _ = writeln!(out, "# TYPE unitconv_conversion_duration_micros_total counter");

        let mut durations = Vec::new();
        for entry in self.duration_micros.iter() {
            durations.push((*entry.key(), entry.value().load(Ordering::Relaxed)));
        }
        durations.sort();
        for (kind, micros) in durations {
            let _ = writeln!(
                out,
                "unitconv_conversion_duration_micros_total{{kind=\"{kind}\"}} {micros}"
            );
        }

        out
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared metrics instance.
pub type SharedMetrics = Arc<Metrics>;
