// src/lib.rs
//
// Library entry point for native (FFI) and browser (wasm) hosts.

mod chain;
mod config;
mod controller;
mod node;
mod node_state;
mod readback;
mod ticker;

#[cfg(feature = "ios")]
pub mod ffi;

#[cfg(feature = "web")]
pub mod wasm;

// Re-export key types for Rust consumers
pub use chain::{Chain, TickOutcome};
pub use config::{ChainConfig, ConfigError, ConfigResult, Viewport};
pub use controller::{Command, Controller, FrameReport};
pub use node::{Neighbor, Node, Traversal};
pub use node_state::{CHANNEL_COUNT, Direction, NodeAnimationState, StepOutcome};
pub use readback::{ChainReadback, NodeReadback};
pub use ticker::Ticker;
