// src/controller.rs
//
// Composition root.
//
// The controller owns the chain and the ticker and is the single driving
// loop between them. A trigger unlocks the active node and starts the
// ticker; every due tick advances the chain; a tick that finishes a node
// stops the ticker until the next trigger.

use log::{debug, trace};

use crate::chain::{Chain, TickOutcome};
use crate::config::{ChainConfig, ConfigResult, Viewport};
use crate::node::Traversal;
use crate::readback::{ChainReadback, NodeReadback};
use crate::ticker::Ticker;

/// A request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pointer-down or equivalent: start a round on the active node.
    Trigger,

    /// Stop the ticker without touching node state.
    Halt,
}

/// Summary of one [`Controller::advance_time`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Ticks actually applied to the chain.
    pub ticks: u32,

    /// Round-ending outcome, if a round finished during this frame.
    pub finished: Option<TickOutcome>,
}

impl FrameReport {
    /// Whether the renderer has anything new to draw.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.ticks > 0
    }
}

pub struct Controller {
    chain: Chain,
    ticker: Ticker,
    viewport: Viewport,
}

impl Controller {
    pub fn new(config: ChainConfig) -> ConfigResult<Self> {
        config.validate()?;

        Ok(Self {
            chain: Chain::new(config.node_count, config.step),
            ticker: Ticker::new(config.tick_interval_ms),
            viewport: config.viewport,
        })
    }

    /// Apply a host command.
    pub fn process_command(&mut self, command: Command) {
        match command {
            Command::Trigger => {
                self.trigger();
            }
            Command::Halt => {
                self.ticker.stop();
            }
        }
    }

    /// Start a round on the active node and the ticker with it.
    ///
    /// A round that is already in progress is not restarted. If it was
    /// halted, the ticker resumes it. Returns whether the ticker started.
    pub fn trigger(&mut self) -> bool {
        let began = self.chain.begin_round();
        let started = self.ticker.start();
        if !began && !started {
            trace!("trigger absorbed, round in progress");
        }
        started
    }

    /// Run one step of the active round.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.chain.on_tick();
        if outcome.ends_round() {
            self.ticker.stop();
            debug!("round finished: {:?}", outcome);
        }
        outcome
    }

    /// Feed elapsed wall time and run every tick that fell due.
    ///
    /// Stops consuming ticks as soon as the ticker stops, so no tick is
    /// applied after a round ends.
    pub fn advance_time(&mut self, elapsed_ms: f64) -> FrameReport {
        let due = self.ticker.advance(elapsed_ms);
        let mut report = FrameReport::default();

        for _ in 0..due {
            if !self.ticker.is_running() {
                break;
            }

            let outcome = self.tick();
            report.ticks += 1;
            if outcome.ends_round() {
                report.finished = Some(outcome);
            }
        }

        report
    }

    pub fn readback(&self) -> ChainReadback {
        ChainReadback::capture(&self.chain, self.ticker.is_running())
    }

    /// Snapshot of a single node, without capturing the whole chain.
    pub fn node_readback(&self, index: usize) -> Option<NodeReadback> {
        self.chain.node(index).map(NodeReadback::capture)
    }

    #[inline]
    pub fn traversal(&self) -> Traversal {
        self.chain.traversal()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    #[inline]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn tick_interval_ms(&self) -> f64 {
        self.ticker.interval_ms()
    }
}
