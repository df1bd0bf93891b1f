//! Running average and maximum over sliding windows of numeric streams
//!
//! A [`SlidingWindow`] keeps its count, sum and maximum up to date as items
//! are pushed and evicted, so reading them is O(1). A [`WindowRunner`] slides
//! one input sequence through several windows at once; [`WindowStatsExt`]
//! does the same for async streams.
//!
//! ```
//! use rs2_window::process_stream;
//!
//! let pairs: Vec<_> = process_stream(vec![1, 2, 3, 4, 5, 6], &[3])
//!     .unwrap()
//!     .map(|output| output.unwrap().pairs().unwrap()[0])
//!     .collect();
//! assert_eq!(pairs, vec![(2.0, 3), (3.0, 4), (4.0, 5), (5.0, 6)]);
//! ```

pub mod config;
pub mod error;
pub mod max_tracker;
pub mod metrics;
pub mod runner;
pub mod sliding_window;
pub mod stream_ext;
pub mod value;

pub use config::{EmitPolicy, WindowConfig};
pub use error::{WindowError, WindowResult};
pub use max_tracker::MaxStrategy;
pub use metrics::WindowMetrics;
pub use runner::{process_stream, process_stream_with, WindowOutput, WindowRunner, WindowSet};
pub use sliding_window::{SlidingWindow, WindowSnapshot, WindowState};
pub use stream_ext::{from_iter, process_stream_async, window_stats, RS2Stream, WindowStatsExt};
pub use value::{CompensatedSum, RunningTotal, SumOf, WideSum, WindowValue};
