//! Drives several independent windows over one shared input sequence
//!
//! Each item is slid into every window in configured order. A window that has
//! just filled contributes its `(average, maximum)` snapshot for that item and
//! then evicts its oldest item, so it stays full from then on.

use serde::Serialize;
use std::iter::FusedIterator;

use crate::config::{EmitPolicy, WindowConfig};
use crate::error::WindowResult;
use crate::sliding_window::{SlidingWindow, WindowSnapshot};
use crate::value::WindowValue;

/// Combined result for one input item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowOutput<T> {
    /// Zero-based position of the input item that produced this output
    pub index: usize,
    /// One entry per configured window, `None` while that window is filling
    pub snapshots: Vec<Option<WindowSnapshot<T>>>,
}

impl<T: Copy> WindowOutput<T> {
    /// True when every window contributed a snapshot
    pub fn is_complete(&self) -> bool {
        self.snapshots.iter().all(Option::is_some)
    }

    /// `(average, maximum)` pairs in window order, or `None` if any window is
    /// still filling
    pub fn pairs(&self) -> Option<Vec<(f64, T)>> {
        self.snapshots
            .iter()
            .map(|s| s.as_ref().map(|s| (s.average, s.maximum)))
            .collect()
    }
}

/// The windows of one run together with their emit policy.
///
/// Owns no input; items are fed one at a time. [`WindowRunner`] wraps it for
/// iterator sources and the stream adapter uses it for async sources.
#[derive(Debug, Clone)]
pub struct WindowSet<T: WindowValue> {
    windows: Vec<SlidingWindow<T>>,
    emit_policy: EmitPolicy,
    consumed: usize,
}

impl<T: WindowValue> WindowSet<T> {
    pub fn from_config(config: &WindowConfig) -> WindowResult<Self> {
        config.validate()?;
        let windows = config
            .capacities
            .iter()
            .map(|&capacity| SlidingWindow::with_strategy(capacity, config.max_strategy))
            .collect::<WindowResult<Vec<_>>>()?;
        log::debug!(
            "Starting window run with capacities {:?} ({:?}, {:?})",
            config.capacities,
            config.max_strategy,
            config.emit_policy
        );
        Ok(Self {
            windows,
            emit_policy: config.emit_policy,
            consumed: 0,
        })
    }

    /// Slide `item` into every window. Returns the output for this item if
    /// the emit policy calls for one.
    pub fn feed(&mut self, item: T) -> WindowResult<Option<WindowOutput<T>>> {
        let index = self.consumed;
        self.consumed += 1;

        let snapshots = self
            .windows
            .iter_mut()
            .map(|window| window.slide(item))
            .collect::<WindowResult<Vec<_>>>()
            .map_err(|e| {
                log::warn!("Window run stopped at item {}: {}", index, e);
                e
            })?;

        let output = WindowOutput { index, snapshots };
        if self.emit_policy == EmitPolicy::EveryItem || output.is_complete() {
            Ok(Some(output))
        } else {
            Ok(None)
        }
    }

    pub fn windows(&self) -> &[SlidingWindow<T>] {
        &self.windows
    }

    pub fn items_consumed(&self) -> usize {
        self.consumed
    }
}

/// Lazy runner over an input source.
///
/// Yields `Ok(WindowOutput)` per the configured [`EmitPolicy`]. The first
/// error ends the run.
#[derive(Debug)]
pub struct WindowRunner<T: WindowValue, I> {
    source: I,
    set: WindowSet<T>,
    finished: bool,
}

impl<T, I> WindowRunner<T, I>
where
    T: WindowValue,
    I: Iterator<Item = T>,
{
    /// Runner with one window per capacity and default settings
    pub fn new<S>(source: S, capacities: &[usize]) -> WindowResult<Self>
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::from_config(source, &WindowConfig::new().capacities(capacities.iter().copied()))
    }

    /// Runner built from a validated configuration. Nothing is read from the
    /// source until the runner is polled.
    pub fn from_config<S>(source: S, config: &WindowConfig) -> WindowResult<Self>
    where
        S: IntoIterator<IntoIter = I>,
    {
        Ok(Self {
            set: WindowSet::from_config(config)?,
            source: source.into_iter(),
            finished: false,
        })
    }

    pub fn windows(&self) -> &[SlidingWindow<T>] {
        self.set.windows()
    }

    pub fn items_consumed(&self) -> usize {
        self.set.items_consumed()
    }
}

impl<T, I> Iterator for WindowRunner<T, I>
where
    T: WindowValue,
    I: Iterator<Item = T>,
{
    type Item = WindowResult<WindowOutput<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let Some(item) = self.source.next() else {
                self.finished = true;
                break;
            };
            match self.set.feed(item) {
                Ok(Some(output)) => return Some(Ok(output)),
                Ok(None) => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl<T, I> FusedIterator for WindowRunner<T, I>
where
    T: WindowValue,
    I: Iterator<Item = T>,
{
}

/// Run `items` through one window per entry of `capacities`.
///
/// Invalid capacities are rejected before any item is consumed. Outputs are
/// emitted only once all windows are full.
pub fn process_stream<T, S>(
    items: S,
    capacities: &[usize],
) -> WindowResult<WindowRunner<T, S::IntoIter>>
where
    T: WindowValue,
    S: IntoIterator<Item = T>,
{
    WindowRunner::new(items, capacities)
}

/// Like [`process_stream`] with full control over strategy and emit policy
pub fn process_stream_with<T, S>(
    items: S,
    config: &WindowConfig,
) -> WindowResult<WindowRunner<T, S::IntoIter>>
where
    T: WindowValue,
    S: IntoIterator<Item = T>,
{
    WindowRunner::from_config(items, config)
}
