// src/node.rs

use crate::node_state::{NodeAnimationState, StepOutcome};

/// Direction the chain is walked in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Toward higher indices.
    Forward,

    /// Toward lower indices.
    Backward,
}

impl Traversal {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        }
    }
}

/// Result of a neighbor lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Neighbor {
    /// Arena index of the adjacent node.
    Step(usize),

    /// This node is the chain endpoint in the requested direction.
    Boundary,
}

/// One link in the chain.
///
/// `prev`/`next` are arena indices, not owning references; the chain owns
/// every node for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Node {
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    state: NodeAnimationState,
}

impl Node {
    pub fn new(index: usize, prev: Option<usize>, next: Option<usize>, step: f64) -> Self {
        Self {
            index,
            prev,
            next,
            state: NodeAnimationState::new(step),
        }
    }

    /// Start this node's animation if it is at rest.
    #[inline]
    pub fn activate(&mut self) -> bool {
        self.state.activate()
    }

    #[inline]
    pub fn advance(&mut self) -> StepOutcome {
        self.state.advance()
    }

    /// Adjacent node in `traversal`, or `Boundary` at an endpoint.
    pub fn neighbor(&self, traversal: Traversal) -> Neighbor {
        let link = match traversal {
            Traversal::Forward => self.next,
            Traversal::Backward => self.prev,
        };

        link.map_or(Neighbor::Boundary, Neighbor::Step)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    #[inline]
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    pub fn state(&self) -> &NodeAnimationState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_lookup() {
        let node = Node::new(1, Some(0), Some(2), 0.1);
        assert_eq!(node.neighbor(Traversal::Forward), Neighbor::Step(2));
        assert_eq!(node.neighbor(Traversal::Backward), Neighbor::Step(0));
    }

    #[test]
    fn test_endpoints_report_boundary() {
        let head = Node::new(0, None, Some(1), 0.1);
        let tail = Node::new(1, Some(0), None, 0.1);

        assert_eq!(head.neighbor(Traversal::Backward), Neighbor::Boundary);
        assert_eq!(tail.neighbor(Traversal::Forward), Neighbor::Boundary);
    }

    #[test]
    fn test_traversal_reversal() {
        assert_eq!(Traversal::Forward.reversed(), Traversal::Backward);
        assert_eq!(Traversal::Backward.reversed().reversed(), Traversal::Backward);
    }

    #[test]
    fn test_node_delegates_to_state() {
        let mut node = Node::new(0, None, None, 0.1);
        assert!(node.activate());
        assert!(!node.activate());
        assert_eq!(node.advance(), StepOutcome::Moving);
        assert!(node.state().is_animating());
    }
}
