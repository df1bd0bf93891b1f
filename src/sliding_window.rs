//! Bounded FIFO window with incrementally maintained count, sum and maximum
//!
//! Items enter at the back and leave from the front. The window never evicts
//! on its own: whoever drives it pushes, reads the aggregates and evicts to
//! stay within capacity. See [`SlidingWindow::slide`] for that protocol in
//! one call.

use serde::Serialize;
use std::collections::VecDeque;

use crate::error::{WindowError, WindowResult};
use crate::max_tracker::{MaxStrategy, MaxTracker};
use crate::metrics::WindowMetrics;
use crate::value::{RunningTotal, SumOf, WindowValue};

/// Fill state of a window. Once full, a window stays full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Filling,
    Full,
}

/// Average and maximum of a window at one step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowSnapshot<T> {
    pub average: f64,
    pub maximum: T,
}

/// Sliding window over numeric values
#[derive(Debug, Clone)]
pub struct SlidingWindow<T: WindowValue> {
    capacity: usize,
    items: VecDeque<T>,
    sum: T::Total,
    max: MaxTracker<T>,
    filled_once: bool,
    metrics: WindowMetrics,
}

impl<T: WindowValue> SlidingWindow<T> {
    /// Create an empty window using the rescan maximum policy.
    pub fn new(capacity: usize) -> WindowResult<Self> {
        Self::with_strategy(capacity, MaxStrategy::default())
    }

    pub fn with_strategy(capacity: usize, strategy: MaxStrategy) -> WindowResult<Self> {
        if capacity == 0 {
            return Err(WindowError::InvalidCapacity { capacity });
        }
        Ok(Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
            sum: T::Total::default(),
            max: MaxTracker::new(strategy),
            filled_once: false,
            metrics: WindowMetrics::new(),
        })
    }

    /// Insert `value` as the newest item.
    ///
    /// Fails with [`WindowError::CapacityOverflow`] if the window is already
    /// full, with [`WindowError::InvalidValue`] for NaN or infinite floats and
    /// with [`WindowError::SumOverflow`] if the running sum cannot hold the
    /// value. A failed push leaves the window unchanged.
    pub fn push(&mut self, value: T) -> WindowResult<()> {
        if !value.is_admissible() {
            self.metrics.record_rejection();
            return Err(WindowError::InvalidValue);
        }
        if self.is_full() {
            self.metrics.record_rejection();
            return Err(WindowError::CapacityOverflow {
                capacity: self.capacity,
            });
        }

        let Some(sum) = self.sum.checked_add(value) else {
            self.metrics.record_rejection();
            return Err(WindowError::SumOverflow);
        };

        self.items.push_back(value);
        self.sum = sum;
        self.max.on_push(value);
        self.metrics.record_push();

        if self.is_full() && !self.filled_once {
            self.filled_once = true;
            self.metrics.record_fill();
            log::debug!("Window of capacity {} is now full", self.capacity);
        }
        Ok(())
    }

    /// Remove and return the oldest item.
    ///
    /// Only a float window whose remaining items sum past `f64::MAX` can fail
    /// with [`WindowError::SumOverflow`]; the window is then left unchanged.
    pub fn evict_oldest(&mut self) -> WindowResult<T> {
        let &oldest = self.items.front().ok_or(WindowError::EmptyWindow)?;
        self.sum = self
            .sum
            .checked_sub(oldest)
            .ok_or(WindowError::SumOverflow)?;
        let evicted = self.items.pop_front().ok_or(WindowError::EmptyWindow)?;
        let rescanned = self.max.on_evict(evicted, self.items.iter());
        if rescanned {
            log::trace!(
                "Rescanned {} items after evicting the maximum of a window of capacity {}",
                self.items.len(),
                self.capacity
            );
        }
        self.metrics.record_eviction(rescanned);
        Ok(evicted)
    }

    /// Push `value` and, if that fills the window, capture its snapshot and
    /// evict the oldest item so the window keeps its size.
    pub fn slide(&mut self, value: T) -> WindowResult<Option<WindowSnapshot<T>>> {
        self.push(value)?;
        if !self.is_full() {
            return Ok(None);
        }
        let snapshot = self.snapshot()?;
        self.evict_oldest()?;
        Ok(Some(snapshot))
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of the held items: `i128` for integer windows, `f64` for floats.
    ///
    /// Float sums are compensated, so a large value entering and leaving does
    /// not wipe out the small values around it, but they are not exact once
    /// magnitudes span more than about 2^106.
    pub fn sum(&self) -> SumOf<T> {
        self.sum.total()
    }

    pub fn maximum(&self) -> WindowResult<T> {
        self.max.maximum().ok_or(WindowError::EmptyWindow)
    }

    /// Floating point mean of the held items.
    pub fn average(&self) -> WindowResult<f64> {
        if self.items.is_empty() {
            return Err(WindowError::EmptyWindow);
        }
        Ok(self.sum.to_f64() / self.items.len() as f64)
    }

    pub fn snapshot(&self) -> WindowResult<WindowSnapshot<T>> {
        Ok(WindowSnapshot {
            average: self.average()?,
            maximum: self.maximum()?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn state(&self) -> WindowState {
        if self.is_full() {
            WindowState::Full
        } else {
            WindowState::Filling
        }
    }

    pub fn strategy(&self) -> MaxStrategy {
        self.max.strategy()
    }

    pub fn metrics(&self) -> &WindowMetrics {
        &self.metrics
    }

    /// Held items, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Drop all items and aggregates; capacity, strategy and metrics are kept.
    pub fn clear(&mut self) {
        self.items.clear();
        self.sum = T::Total::default();
        self.max.clear();
        self.filled_once = false;
    }
}
