// src/readback.rs
//
// Read-only snapshots handed to the renderer after each frame.

use crate::chain::Chain;
use crate::node::{Node, Traversal};
use crate::node_state::CHANNEL_COUNT;

/// Snapshot of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeReadback {
    /// Position in the chain.
    pub index: usize,

    /// Current value of each scale channel.
    pub scales: [f64; CHANNEL_COUNT],

    /// Whether this node is mid-round.
    pub animating: bool,
}

impl NodeReadback {
    pub fn capture(node: &Node) -> Self {
        Self {
            index: node.index(),
            scales: node.state().scales(),
            animating: node.state().is_animating(),
        }
    }
}

/// Snapshot of the whole chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainReadback {
    /// Index of the node the next round will animate.
    pub active: usize,

    /// Current traversal direction.
    pub traversal: Traversal,

    /// Whether the ticker is running.
    pub running: bool,

    pub nodes: Vec<NodeReadback>,
}

impl ChainReadback {
    pub fn capture(chain: &Chain, running: bool) -> Self {
        let nodes = chain.nodes().map(NodeReadback::capture).collect();

        Self {
            active: chain.active_index(),
            traversal: chain.traversal(),
            running,
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_fresh_chain() {
        let chain = Chain::new(4, 0.1);
        let readback = ChainReadback::capture(&chain, false);

        assert_eq!(readback.active, 0);
        assert_eq!(readback.traversal, Traversal::Forward);
        assert_eq!(readback.nodes.len(), 4);
        assert!(readback.nodes.iter().all(|n| !n.animating));
        assert_eq!(readback.nodes[3].index, 3);
    }

    #[test]
    fn test_capture_reflects_animation() {
        let mut chain = Chain::new(2, 0.1);
        chain.begin_round();
        chain.on_tick();

        let readback = ChainReadback::capture(&chain, true);
        assert!(readback.running);
        assert!(readback.nodes[0].animating);
        assert!((readback.nodes[0].scales[0] - 0.1).abs() < 1e-9);
        assert_eq!(readback.nodes[1].scales, [0.0; CHANNEL_COUNT]);
    }
}
