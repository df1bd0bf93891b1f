//! Counters collected by each sliding window

use serde::Serialize;

/// Operation counts for one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowMetrics {
    pub pushes: u64,
    pub evictions: u64,
    /// Evictions that forced a scan of the remaining items for a new maximum
    pub max_rescans: u64,
    pub rejected: u64,
    /// Transitions from filling to full since construction or the last clear
    pub fills: u64,
}

impl WindowMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_push(&mut self) {
        self.pushes += 1;
    }

    pub fn record_eviction(&mut self, rescanned: bool) {
        self.evictions += 1;
        if rescanned {
            self.max_rescans += 1;
        }
    }

    pub fn record_fill(&mut self) {
        self.fills += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    /// Fraction of evictions that needed a rescan, 0.0 before any eviction
    pub fn rescan_ratio(&self) -> f64 {
        if self.evictions > 0 {
            self.max_rescans as f64 / self.evictions as f64
        } else {
            0.0
        }
    }
}
