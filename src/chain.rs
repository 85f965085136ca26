//! Arena-backed chain of nodes with a single active cursor.
//!
//! The chain is built once with a fixed length and walked one node at a
//! time. Each completed node animation moves the cursor to its neighbor in
//! the current traversal direction; at an endpoint the direction flips and
//! the cursor stays put.

use log::{debug, trace};

use crate::node::{Neighbor, Node, Traversal};
use crate::node_state::StepOutcome;

/// What a single tick did to the chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round still in progress (or the chain is idle).
    Continue,

    /// Active node finished and the cursor moved on.
    RoundComplete { from: usize, to: usize },

    /// Active node finished at an endpoint; traversal reversed.
    BoundaryReached { at: usize, traversal: Traversal },
}

impl TickOutcome {
    /// Whether the driver should stop ticking.
    #[inline]
    pub fn ends_round(&self) -> bool {
        !matches!(self, TickOutcome::Continue)
    }
}

/// The linked chain.
pub struct Chain {
    nodes: Vec<Node>,
    active: usize,
    traversal: Traversal,
}

impl Chain {
    /// Build a simple path of `node_count` nodes.
    ///
    /// `node_count` must be non-zero; callers validate through
    /// [`ChainConfig`](crate::config::ChainConfig).
    pub fn new(node_count: usize, step: f64) -> Self {
        let last = node_count.saturating_sub(1);
        let nodes = (0..node_count)
            .map(|i| {
                let prev = i.checked_sub(1);
                let next = (i < last).then_some(i + 1);
                Node::new(i, prev, next, step)
            })
            .collect();

        Self {
            nodes,
            active: 0,
            traversal: Traversal::Forward,
        }
    }

    /// Start a round on the active node.
    ///
    /// Returns `false` when a round is already in progress.
    pub fn begin_round(&mut self) -> bool {
        let active = self.active;
        let started = self.nodes[active].activate();
        if started {
            debug!(
                "round started on node {} ({:?})",
                active,
                self.nodes[active].state().direction()
            );
        }
        started
    }

    /// Advance the active node by one step.
    pub fn on_tick(&mut self) -> TickOutcome {
        let from = self.active;

        match self.nodes[from].advance() {
            StepOutcome::Idle => TickOutcome::Continue,
            StepOutcome::Moving => {
                trace!("node {} scales {:?}", from, self.nodes[from].state().scales());
                TickOutcome::Continue
            }
            StepOutcome::Completed => match self.nodes[from].neighbor(self.traversal) {
                Neighbor::Step(to) => {
                    self.active = to;
                    debug!("node {} complete, active -> {}", from, to);
                    TickOutcome::RoundComplete { from, to }
                }
                Neighbor::Boundary => {
                    self.traversal = self.traversal.reversed();
                    debug!(
                        "node {} complete at boundary, traversal -> {:?}",
                        from, self.traversal
                    );
                    TickOutcome::BoundaryReached {
                        at: from,
                        traversal: self.traversal,
                    }
                }
            },
        }
    }

    /// True while the active node is mid-round.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.nodes[self.active].state().is_animating()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Pairs with [`len`](Self::len). Always false for a chain built from a
    /// validated config.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trigger and tick until the round ends.
    fn run_round(chain: &mut Chain) -> TickOutcome {
        assert!(chain.begin_round());
        loop {
            let outcome = chain.on_tick();
            if outcome.ends_round() {
                return outcome;
            }
        }
    }

    #[test]
    fn test_single_head_and_tail() {
        for n in 2..10 {
            let chain = Chain::new(n, 0.1);
            assert_eq!(chain.nodes().filter(|node| node.prev().is_none()).count(), 1);
            assert_eq!(chain.nodes().filter(|node| node.next().is_none()).count(), 1);
            assert!(chain.node(0).unwrap().prev().is_none());
            assert!(chain.node(n - 1).unwrap().next().is_none());
        }
    }

    #[test]
    fn test_links_are_consistent() {
        let chain = Chain::new(5, 0.1);
        for node in chain.nodes() {
            if let Some(next) = node.next() {
                assert_eq!(chain.node(next).unwrap().prev(), Some(node.index()));
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let chain = Chain::new(5, 0.1);
        assert_eq!(chain.len(), 5);
        assert!(!chain.is_empty());
        assert_eq!(chain.active_index(), 0);
        assert_eq!(chain.traversal(), Traversal::Forward);
        assert!(!chain.is_animating());
    }

    #[test]
    fn test_tick_on_idle_chain_is_noop() {
        let mut chain = Chain::new(3, 0.1);
        for _ in 0..20 {
            assert_eq!(chain.on_tick(), TickOutcome::Continue);
        }
        assert_eq!(chain.active_index(), 0);
    }

    #[test]
    fn test_round_moves_cursor_forward() {
        let mut chain = Chain::new(5, 0.1);
        assert_eq!(run_round(&mut chain), TickOutcome::RoundComplete { from: 0, to: 1 });
        assert_eq!(chain.active_index(), 1);
        assert_eq!(chain.node(0).unwrap().state().scales()[0], 1.0);
    }

    #[test]
    fn test_begin_round_twice_is_absorbed() {
        let mut chain = Chain::new(5, 0.1);
        assert!(chain.begin_round());
        chain.on_tick();
        assert!(!chain.begin_round());
        assert!(chain.is_animating());
    }

    #[test]
    fn test_boundary_flips_traversal_alternately() {
        let n = 5;
        let mut chain = Chain::new(n, 0.1);

        for i in 0..n - 1 {
            assert_eq!(
                run_round(&mut chain),
                TickOutcome::RoundComplete { from: i, to: i + 1 }
            );
            assert_eq!(chain.traversal(), Traversal::Forward);
        }

        assert_eq!(
            run_round(&mut chain),
            TickOutcome::BoundaryReached {
                at: n - 1,
                traversal: Traversal::Backward,
            }
        );
        assert_eq!(chain.active_index(), n - 1);

        // Walk back down: the tail node reverses its own scale first.
        for i in (1..n).rev() {
            assert_eq!(
                run_round(&mut chain),
                TickOutcome::RoundComplete { from: i, to: i - 1 }
            );
            assert_eq!(chain.node(i).unwrap().state().scales()[0], 0.0);
        }

        assert_eq!(
            run_round(&mut chain),
            TickOutcome::BoundaryReached {
                at: 0,
                traversal: Traversal::Forward,
            }
        );
        assert_eq!(chain.active_index(), 0);
        assert!(chain.nodes().all(|node| node.state().scales()[0] == 0.0));
    }

    #[test]
    fn test_single_node_chain_bounces_in_place() {
        let mut chain = Chain::new(1, 0.1);
        assert!(matches!(
            run_round(&mut chain),
            TickOutcome::BoundaryReached { at: 0, traversal: Traversal::Backward }
        ));
        assert!(matches!(
            run_round(&mut chain),
            TickOutcome::BoundaryReached { at: 0, traversal: Traversal::Forward }
        ));
    }
}
