// src/config.rs
//
// Construction-time configuration for the chain and its ticker.

/// Number of nodes in the default chain.
pub const DEFAULT_NODE_COUNT: usize = 5;

/// Default tick cadence in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: f64 = 50.0;

/// Default per-tick scale increment.
pub const DEFAULT_STEP: f64 = 0.1;

/// Longest chain a host may request.
pub const MAX_NODE_COUNT: usize = 4096;

/// Smallest step that still registers against scales near 0 and 1.
pub const MIN_STEP: f64 = 1e-6;

/// Error raised when a configuration cannot drive a chain.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The chain needs at least one node.
    EmptyChain,

    /// Chain length exceeds [`MAX_NODE_COUNT`].
    ChainTooLong { node_count: usize },

    /// Tick interval must be a finite, positive duration.
    InvalidTickInterval { interval_ms: f64 },

    /// Step must lie in [MIN_STEP, 1] so a round always ends.
    InvalidStep { step: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyChain => write!(f, "Chain must contain at least one node"),
            ConfigError::ChainTooLong { node_count } => {
                write!(
                    f,
                    "Chain of {} nodes exceeds the maximum of {}",
                    node_count, MAX_NODE_COUNT
                )
            }
            ConfigError::InvalidTickInterval { interval_ms } => {
                write!(f, "Invalid tick interval {} ms", interval_ms)
            }
            ConfigError::InvalidStep { step } => {
                write!(f, "Invalid step {} (expected {} <= step <= 1)", step, MIN_STEP)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Drawing surface dimensions.
///
/// Carried for the renderer only; the traversal engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Configuration for building a [`Controller`](crate::controller::Controller).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainConfig {
    /// Fixed chain length.
    pub node_count: usize,

    /// Ticker cadence in milliseconds.
    pub tick_interval_ms: f64,

    /// Scale distance travelled per tick.
    pub step: f64,

    pub viewport: Viewport,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            step: DEFAULT_STEP,
            viewport: Viewport::default(),
        }
    }
}

impl ChainConfig {
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Viewport { width, height };
        self
    }

    /// Check every field the engine depends on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.node_count == 0 {
            return Err(ConfigError::EmptyChain);
        }

        if self.node_count > MAX_NODE_COUNT {
            return Err(ConfigError::ChainTooLong {
                node_count: self.node_count,
            });
        }

        if !self.tick_interval_ms.is_finite() || self.tick_interval_ms <= 0.0 {
            return Err(ConfigError::InvalidTickInterval {
                interval_ms: self.tick_interval_ms,
            });
        }

        // Smaller steps vanish in f64 rounding next to 1.0 and never finish.
        if !(self.step >= MIN_STEP && self.step <= 1.0) {
            return Err(ConfigError::InvalidStep { step: self.step });
        }

        Ok(())
    }
}
