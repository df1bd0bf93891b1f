//! Async stream adapter for window runs
//!
//! Lets any `futures_core::Stream` of numbers feed a [`WindowSet`], producing a
//! boxed stream of outputs. The source is polled one item at a time.

use async_stream::stream;
use futures_core::Stream;
use futures_util::pin_mut;
use futures_util::stream::{self, BoxStream, StreamExt};

use crate::config::WindowConfig;
use crate::error::WindowResult;
use crate::runner::{WindowOutput, WindowSet};
use crate::value::WindowValue;

/// A boxed, heap-allocated stream
pub type RS2Stream<O> = BoxStream<'static, O>;

/// Create a stream from an iterator
pub fn from_iter<I, O>(iter: I) -> RS2Stream<O>
where
    I: IntoIterator<Item = O> + Send + 'static,
    <I as IntoIterator>::IntoIter: Send,
    O: Send + 'static,
{
    stream::iter(iter).boxed()
}

/// Run a stream through the windows described by `config`.
///
/// An invalid configuration yields a single `Err` without polling the source.
/// Any later error is yielded once and ends the stream.
pub fn window_stats<S, T>(s: S, config: WindowConfig) -> RS2Stream<WindowResult<WindowOutput<T>>>
where
    S: Stream<Item = T> + Send + 'static,
    T: WindowValue,
{
    stream! {
        let mut set = match WindowSet::from_config(&config) {
            Ok(set) => set,
            Err(e) => {
                yield Err(e);
                return;
            }
        };
        pin_mut!(s);

        while let Some(item) = s.next().await {
            match set.feed(item) {
                Ok(Some(output)) => yield Ok(output),
                Ok(None) => {}
                Err(e) => {
                    yield Err(e);
                    return;
                }
            }
        }
    }
    .boxed()
}

/// Async counterpart of [`process_stream`](crate::process_stream)
pub fn process_stream_async<S, T>(
    s: S,
    capacities: &[usize],
) -> RS2Stream<WindowResult<WindowOutput<T>>>
where
    S: Stream<Item = T> + Send + 'static,
    T: WindowValue,
{
    window_stats(s, WindowConfig::new().capacities(capacities.iter().copied()))
}

/// Extension trait adding window statistics to any numeric stream
pub trait WindowStatsExt: Stream + Send + Sized + 'static
where
    Self::Item: WindowValue,
{
    /// Running average and maximum over the configured windows
    fn window_stats_rs2(self, config: WindowConfig) -> RS2Stream<WindowResult<WindowOutput<Self::Item>>> {
        window_stats(self, config)
    }
}

impl<S> WindowStatsExt for S
where
    S: Stream + Send + Sized + 'static,
    S::Item: WindowValue,
{
}
