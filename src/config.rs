//! Configuration for window runs

use serde::{Deserialize, Serialize};

use crate::error::{WindowError, WindowResult};
use crate::max_tracker::MaxStrategy;

/// When a runner emits a combined output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitPolicy {
    /// Emit only once every window is full, then once per item
    #[default]
    WhenAllFull,
    /// Emit once per item, with `None` for windows still filling
    EveryItem,
}

/// Configuration for a multi-window run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub capacities: Vec<usize>,
    pub max_strategy: MaxStrategy,
    pub emit_policy: EmitPolicy,
}

impl WindowConfig {
    /// Create a new configuration with no windows
    pub fn new() -> Self {
        Self::default()
    }

    /// A run with one window
    pub fn single(capacity: usize) -> Self {
        Self::new().capacity(capacity)
    }

    /// A run with two windows side by side
    pub fn pair(first: usize, second: usize) -> Self {
        Self::new().capacity(first).capacity(second)
    }

    /// Replace the window capacities
    pub fn capacities<I>(mut self, capacities: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.capacities = capacities.into_iter().collect();
        self
    }

    /// Append one window capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacities.push(capacity);
        self
    }

    pub fn max_strategy(mut self, strategy: MaxStrategy) -> Self {
        self.max_strategy = strategy;
        self
    }

    pub fn emit_policy(mut self, policy: EmitPolicy) -> Self {
        self.emit_policy = policy;
        self
    }

    /// Check the configuration before any item is processed
    pub fn validate(&self) -> WindowResult<()> {
        if self.capacities.is_empty() {
            return Err(WindowError::NoCapacities);
        }
        if let Some(&capacity) = self.capacities.iter().find(|&&c| c == 0) {
            return Err(WindowError::InvalidCapacity { capacity });
        }
        Ok(())
    }

    /// Largest configured capacity; the run emits nothing under
    /// [`EmitPolicy::WhenAllFull`] until this many items have arrived.
    pub fn largest_capacity(&self) -> Option<usize> {
        self.capacities.iter().copied().max()
    }

    /// Parse a configuration from JSON, e.g.
    /// `{"capacities": [3, 20], "max_strategy": "monotonic_deque"}`.
    /// Missing fields take their defaults. The result is validated.
    pub fn from_json(json: &str) -> WindowResult<Self> {
        let config: WindowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> WindowResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
