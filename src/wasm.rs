//! WebAssembly bindings via wasm-bindgen for browser integration.
//!
//! This module is only compiled when the `web` feature is enabled.
//!
//! # Usage
//!
//! Build with wasm-pack:
//! ```bash
//! wasm-pack build --target web --features web
//! ```
//!
//! # JavaScript Example
//!
//! ```javascript
//! import init, { linebreaker_init, LineBreaker } from './linebreaker.js';
//!
//! await init();
//! linebreaker_init();
//!
//! const breaker = new LineBreaker();
//! canvas.onmousedown = () => breaker.trigger();
//!
//! let last = performance.now();
//! function frame(now) {
//!     if (breaker.advance(now - last)) {
//!         draw(breaker);
//!     }
//!     last = now;
//!     requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```

use wasm_bindgen::prelude::*;

use crate::config::{ChainConfig, DEFAULT_NODE_COUNT, DEFAULT_STEP, DEFAULT_TICK_INTERVAL_MS};
use crate::controller::{Command, Controller};
use crate::node::Traversal;

// ═══════════════════════════════════════════════════════════════════════════
// Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the wasm module. Call this once before using any other functions.
/// Sets up panic hooks and console logging.
#[wasm_bindgen]
pub fn linebreaker_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration for creating a line breaker.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct LineBreakerConfig {
    /// Number of nodes in the chain.
    pub node_count: u32,
    /// Tick cadence in milliseconds.
    pub tick_interval_ms: f64,
    /// Canvas width, passed through to the renderer.
    pub width: f64,
    /// Canvas height, passed through to the renderer.
    pub height: f64,
}

#[wasm_bindgen]
impl LineBreakerConfig {
    /// Create a new configuration with default values.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration sized to a canvas.
    pub fn with_viewport(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for LineBreakerConfig {
    fn default() -> Self {
        let viewport = ChainConfig::default().viewport;
        Self {
            node_count: DEFAULT_NODE_COUNT as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            width: viewport.width,
            height: viewport.height,
        }
    }
}

impl From<LineBreakerConfig> for ChainConfig {
    fn from(c: LineBreakerConfig) -> Self {
        ChainConfig {
            node_count: c.node_count as usize,
            tick_interval_ms: c.tick_interval_ms,
            step: DEFAULT_STEP,
            ..ChainConfig::default()
        }
        .with_viewport(c.width, c.height)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Line Breaker
// ═══════════════════════════════════════════════════════════════════════════

/// Browser-side handle to the chain animation.
#[wasm_bindgen]
pub struct LineBreaker {
    inner: Controller,
}

#[wasm_bindgen]
impl LineBreaker {
    /// Create a line breaker with default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<LineBreaker, JsValue> {
        Self::new_with_config(LineBreakerConfig::default())
    }

    /// Create a line breaker with custom configuration.
    pub fn new_with_config(config: LineBreakerConfig) -> Result<LineBreaker, JsValue> {
        match Controller::new(config.into()) {
            Ok(inner) => Ok(LineBreaker { inner }),
            Err(e) => {
                log::warn!("rejected configuration: {}", e);
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Control
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a round. Call from the pointer-down handler.
    pub fn trigger(&mut self) {
        self.inner.process_command(Command::Trigger);
    }

    /// Stop the ticker.
    pub fn halt(&mut self) {
        self.inner.process_command(Command::Halt);
    }

    /// Feed elapsed milliseconds. Returns true when the canvas needs a redraw.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        self.inner.advance_time(elapsed_ms).needs_redraw()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Readback
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if a round is in progress.
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    /// Index of the node the next round animates.
    pub fn active_index(&self) -> u32 {
        self.inner.chain().active_index() as u32
    }

    /// Number of nodes in the chain.
    pub fn node_count(&self) -> u32 {
        self.inner.chain().len() as u32
    }

    /// True while the chain is walked toward higher indices.
    pub fn traversal_forward(&self) -> bool {
        self.inner.traversal() == Traversal::Forward
    }

    /// Scale channels of a node. Empty if the index is out of range.
    pub fn scales(&self, index: u32) -> Vec<f64> {
        self.inner
            .node_readback(index as usize)
            .map(|node| node.scales.to_vec())
            .unwrap_or_default()
    }

    /// Whether a node is mid-round. False if the index is out of range.
    pub fn node_animating(&self, index: u32) -> bool {
        self.inner
            .node_readback(index as usize)
            .is_some_and(|node| node.animating)
    }

    pub fn viewport_width(&self) -> f64 {
        self.inner.viewport().width
    }

    pub fn viewport_height(&self) -> f64 {
        self.inner.viewport().height
    }
}
