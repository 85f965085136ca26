// C-compatible FFI bindings for native (Swift/iOS) hosts.
//
// Safety requirements:
// - All handles must be created by this module and not fabricated
// - Null handles are tolerated and yield default values
// - Caller must call linebreaker_destroy for each linebreaker_create

use crate::config::{ChainConfig, DEFAULT_NODE_COUNT, DEFAULT_STEP, DEFAULT_TICK_INTERVAL_MS};
use crate::controller::{Command, Controller};
use crate::node::Traversal;
use crate::node_state::CHANNEL_COUNT;

use log::{LevelFilter, info, warn};
use oslog::OsLogger;

// Logger subsystem identifier
const LOG_SUBSYSTEM: &str = "com.linebreaker.engine";

// ═══════════════════════════════════════════════════════════════════════════
// Logger Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the oslog logger.
///
/// Call once at application startup before using any other FFI functions.
#[unsafe(no_mangle)]
pub extern "C" fn linebreaker_init_logger() {
    OsLogger::new(LOG_SUBSYSTEM)
        .level_filter(LevelFilter::Debug)
        .init()
        .ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Opaque Handle Types
// ═══════════════════════════════════════════════════════════════════════════

/// Opaque handle to a Controller.
pub struct LineBreaker {
    inner: Controller,
}

// ═══════════════════════════════════════════════════════════════════════════
// Creation
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration for creating a line breaker.
#[repr(C)]
pub struct LineBreakerConfig {
    pub node_count: u32,
    pub tick_interval_ms: f64,
    pub width: f64,
    pub height: f64,
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

impl From<&LineBreakerConfig> for ChainConfig {
    fn from(c: &LineBreakerConfig) -> Self {
        ChainConfig {
            node_count: c.node_count as usize,
            tick_interval_ms: c.tick_interval_ms,
            step: DEFAULT_STEP,
            ..ChainConfig::default()
        }
        .with_viewport(c.width, c.height)
    }
}

/// Get the default configuration.
#[unsafe(no_mangle)]
pub extern "C" fn linebreaker_default_config() -> LineBreakerConfig {
    LineBreakerConfig::default()
}

/// Create a line breaker with default configuration.
///
/// Returns an opaque pointer that must be freed with `linebreaker_destroy`.
#[unsafe(no_mangle)]
pub extern "C" fn linebreaker_create() -> *mut LineBreaker {
    let config = LineBreakerConfig::default();
    unsafe { linebreaker_create_with_config(&config) }
}

/// Create a line breaker with custom configuration.
///
/// Returns null if the configuration is rejected.
///
/// # Safety
/// `config` must be null or point to a valid `LineBreakerConfig`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_create_with_config(
    config: *const LineBreakerConfig,
) -> *mut LineBreaker {
    if config.is_null() {
        return std::ptr::null_mut();
    }

    let config = unsafe { &*config };
    match Controller::new(config.into()) {
        Ok(inner) => {
            info!(
                "linebreaker_create: node_count={}, tick_interval_ms={}",
                config.node_count, config.tick_interval_ms
            );
            Box::into_raw(Box::new(LineBreaker { inner }))
        }
        Err(e) => {
            warn!("linebreaker_create: rejected configuration: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// Destroy a line breaker.
///
/// # Safety
/// `breaker` must be null or a pointer returned by `linebreaker_create*`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_destroy(breaker: *mut LineBreaker) {
    if !breaker.is_null() {
        unsafe { drop(Box::from_raw(breaker)) };
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Control
// ═══════════════════════════════════════════════════════════════════════════

/// Start a round on the active node.
///
/// # Safety
/// `breaker` must be null or a valid handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_trigger(breaker: *mut LineBreaker) {
    if breaker.is_null() {
        return;
    }
    unsafe { (*breaker).inner.process_command(Command::Trigger) };
}

/// Stop the ticker.
///
/// # Safety
/// `breaker` must be null or a valid handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_halt(breaker: *mut LineBreaker) {
    if breaker.is_null() {
        return;
    }
    unsafe { (*breaker).inner.process_command(Command::Halt) };
}

/// Feed elapsed milliseconds. Returns true when the host should redraw.
///
/// # Safety
/// `breaker` must be null or a valid handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_advance(breaker: *mut LineBreaker, elapsed_ms: f64) -> bool {
    if breaker.is_null() {
        return false;
    }
    unsafe { (*breaker).inner.advance_time(elapsed_ms).needs_redraw() }
}

// ═══════════════════════════════════════════════════════════════════════════
// Readback
// ═══════════════════════════════════════════════════════════════════════════

/// # Safety
/// `breaker` must be null or a valid handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_is_running(breaker: *const LineBreaker) -> bool {
    if breaker.is_null() {
        return false;
    }
    unsafe { (*breaker).inner.is_running() }
}

/// # Safety
/// `breaker` must be null or a valid handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_active_index(breaker: *const LineBreaker) -> u32 {
    if breaker.is_null() {
        return 0;
    }
    unsafe { (*breaker).inner.chain().active_index() as u32 }
}

/// # Safety
/// `breaker` must be null or a valid handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_node_count(breaker: *const LineBreaker) -> u32 {
    if breaker.is_null() {
        return 0;
    }
    unsafe { (*breaker).inner.chain().len() as u32 }
}

/// Copy a node's scale channels into `out` (length `CHANNEL_COUNT`).
///
/// Returns false for a null handle, null buffer or out-of-range index.
///
/// # Safety
/// `breaker` must be null or a valid handle; `out` must be null or point to
/// at least 3 writable `f64`s.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_node_scales(
    breaker: *const LineBreaker,
    index: u32,
    out: *mut f64,
) -> bool {
    if breaker.is_null() || out.is_null() {
        return false;
    }

    let Some(node) = (unsafe { (*breaker).inner.node_readback(index as usize) }) else {
        return false;
    };

    let out = unsafe { std::slice::from_raw_parts_mut(out, CHANNEL_COUNT) };
    out.copy_from_slice(&node.scales);
    true
}

/// Whether a node is mid-round. False for a null handle or bad index.
///
/// # Safety
/// `breaker` must be null or a valid handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_node_animating(breaker: *const LineBreaker, index: u32) -> bool {
    if breaker.is_null() {
        return false;
    }
    unsafe { (*breaker).inner.node_readback(index as usize) }.is_some_and(|node| node.animating)
}

/// True while the chain is walked toward higher indices.
///
/// # Safety
/// `breaker` must be null or a valid handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linebreaker_traversal_forward(breaker: *const LineBreaker) -> bool {
    if breaker.is_null() {
        return false;
    }
    unsafe { (*breaker).inner.traversal() == Traversal::Forward }
}
