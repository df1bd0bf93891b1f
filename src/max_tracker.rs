//! Maximum maintenance for sliding windows
//!
//! Two policies keep `max(items)` current as items enter at the back and
//! leave at the front:
//!
//! - [`MaxStrategy::Rescan`] stores only the current maximum. Evicting a value
//!   below it is O(1); evicting the maximum itself rescans what remains, which
//!   is O(window size). Good for small windows.
//! - [`MaxStrategy::MonotonicDeque`] keeps a non-increasing deque of candidate
//!   maxima so both push and evict are O(1) amortized.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::value::WindowValue;

/// How a window keeps its maximum up to date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxStrategy {
    /// Lazy recompute by scanning the window when the maximum is evicted
    #[default]
    Rescan,
    /// Monotonic deque of candidates, O(1) amortized eviction
    MonotonicDeque,
}

#[derive(Debug, Clone)]
pub(crate) enum MaxTracker<T> {
    Rescan { current: Option<T> },
    Monotonic { candidates: VecDeque<T> },
}

impl<T: WindowValue> MaxTracker<T> {
    pub(crate) fn new(strategy: MaxStrategy) -> Self {
        match strategy {
            MaxStrategy::Rescan => MaxTracker::Rescan { current: None },
            MaxStrategy::MonotonicDeque => MaxTracker::Monotonic {
                candidates: VecDeque::new(),
            },
        }
    }

    pub(crate) fn strategy(&self) -> MaxStrategy {
        match self {
            MaxTracker::Rescan { .. } => MaxStrategy::Rescan,
            MaxTracker::Monotonic { .. } => MaxStrategy::MonotonicDeque,
        }
    }

    pub(crate) fn on_push(&mut self, value: T) {
        match self {
            MaxTracker::Rescan { current } => {
                if current.map_or(true, |max| value > max) {
                    *current = Some(value);
                }
            }
            MaxTracker::Monotonic { candidates } => {
                // Equal values stay so that evicting one copy of a tie keeps the other
                while let Some(&back) = candidates.back() {
                    if back < value {
                        candidates.pop_back();
                    } else {
                        break;
                    }
                }
                candidates.push_back(value);
            }
        }
    }

    /// Update after `evicted` left the front. `remaining` must yield the items
    /// still held. Returns true when a full rescan was needed.
    pub(crate) fn on_evict<'a, I>(&mut self, evicted: T, remaining: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        match self {
            MaxTracker::Rescan { current } => match current.as_ref().copied() {
                Some(max) if evicted < max => false,
                _ => {
                    *current = remaining.into_iter().copied().fold(None, |acc, x| match acc {
                        Some(m) if x <= m => Some(m),
                        _ => Some(x),
                    });
                    true
                }
            },
            MaxTracker::Monotonic { candidates } => {
                if candidates.front() == Some(&evicted) {
                    candidates.pop_front();
                }
                false
            }
        }
    }

    pub(crate) fn maximum(&self) -> Option<T> {
        match self {
            MaxTracker::Rescan { current } => *current,
            MaxTracker::Monotonic { candidates } => candidates.front().copied(),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            MaxTracker::Rescan { current } => *current = None,
            MaxTracker::Monotonic { candidates } => candidates.clear(),
        }
    }
}
