// src/node_state.rs
//
// Per-node animation progress over three scale channels.

/// Number of scale channels tracked per node.
pub const CHANNEL_COUNT: usize = 3;

/// Distance a channel travels in one round.
const TRAVEL: f64 = 1.0;

/// Where a node's active channel is heading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// At rest; scales are stable.
    Idle,

    /// Moving toward the upper extreme.
    Forward,

    /// Moving toward the lower extreme.
    Backward,
}

impl Direction {
    /// Signed unit of travel (0, +1, -1).
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Idle => 0.0,
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    /// Direction heading away from the extreme the channel last stopped at.
    ///
    /// Evaluates `1 - 2 * prev_scale`: a channel parked at 0 moves forward,
    /// one parked at 1 moves backward.
    #[inline]
    fn toward_opposite(prev_scale: f64) -> Self {
        if 1.0 - 2.0 * prev_scale < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// Result of a single [`NodeAnimationState::advance`] step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Node was at rest; nothing changed.
    Idle,

    /// Channel moved and the round is still in progress.
    Moving,

    /// Channel overshot its travel budget, was clamped and committed.
    Completed,
}

/// Progress tracker for one node.
///
/// Exactly one channel is active at a time. Only `activate` and `advance`
/// mutate it.
#[derive(Debug, Clone)]
pub struct NodeAnimationState {
    channel: usize,
    scales: [f64; CHANNEL_COUNT],
    prev_scale: f64,
    direction: Direction,
    step: f64,
}

impl NodeAnimationState {
    pub fn new(step: f64) -> Self {
        Self {
            channel: 0,
            scales: [0.0; CHANNEL_COUNT],
            prev_scale: 0.0,
            direction: Direction::Idle,
            step,
        }
    }

    /// Begin a round toward the opposite extreme.
    ///
    /// Returns `false` (and changes nothing) if a round is already running.
    pub fn activate(&mut self) -> bool {
        if self.direction != Direction::Idle {
            return false;
        }

        self.direction = Direction::toward_opposite(self.prev_scale);
        true
    }

    /// Move the active channel by one step.
    pub fn advance(&mut self) -> StepOutcome {
        if self.direction == Direction::Idle {
            return StepOutcome::Idle;
        }

        let sign = self.direction.sign();
        let value = &mut self.scales[self.channel];
        *value += self.step * sign;

        // Distance from the start, not an exact landing, decides completion.
        if (*value - self.prev_scale).abs() > TRAVEL {
            *value = self.prev_scale + sign;
            self.direction = Direction::Idle;
            self.prev_scale = *value;
            return StepOutcome::Completed;
        }

        StepOutcome::Moving
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.direction != Direction::Idle
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn channel(&self) -> usize {
        self.channel
    }

    #[inline]
    pub fn scales(&self) -> [f64; CHANNEL_COUNT] {
        self.scales
    }

    #[inline]
    pub fn prev_scale(&self) -> f64 {
        self.prev_scale
    }
}

impl Default for NodeAnimationState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_activate_from_rest_moves_forward() {
        let mut state = NodeAnimationState::default();
        assert!(state.activate());
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn test_activate_while_animating_is_noop() {
        let mut state = NodeAnimationState::default();
        state.activate();
        state.advance();
        let scales = state.scales();

        assert!(!state.activate());
        assert_eq!(state.direction(), Direction::Forward);
        assert_eq!(state.scales(), scales);
    }

    #[test]
    fn test_full_forward_round() {
        let mut state = NodeAnimationState::default();
        state.activate();

        for _ in 0..10 {
            assert_eq!(state.advance(), StepOutcome::Moving);
        }
        assert!(approx(state.scales()[0], 1.0));
        assert!(state.is_animating());

        // 11th step overshoots and clamps
        assert_eq!(state.advance(), StepOutcome::Completed);
        assert_eq!(state.scales()[0], 1.0);
        assert_eq!(state.prev_scale(), 1.0);
        assert_eq!(state.direction(), Direction::Idle);
    }

    #[test]
    fn test_direction_alternates_across_rounds() {
        let mut state = NodeAnimationState::default();
        state.activate();
        while state.advance() != StepOutcome::Completed {}

        assert!(state.activate());
        assert_eq!(state.direction(), Direction::Backward);

        let mut ticks = 0;
        loop {
            ticks += 1;
            if state.advance() == StepOutcome::Completed {
                break;
            }
        }
        assert_eq!(ticks, 11);
        assert_eq!(state.scales()[0], 0.0);
        assert_eq!(state.prev_scale(), 0.0);

        state.activate();
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn test_advance_on_idle_node_does_nothing() {
        let mut state = NodeAnimationState::default();
        for _ in 0..50 {
            assert_eq!(state.advance(), StepOutcome::Idle);
        }
        assert_eq!(state.scales(), [0.0; CHANNEL_COUNT]);
        assert_eq!(state.prev_scale(), 0.0);
    }

    #[test]
    fn test_only_active_channel_moves() {
        let mut state = NodeAnimationState::default();
        state.activate();
        while state.advance() != StepOutcome::Completed {}

        assert_eq!(state.channel(), 0);
        assert_eq!(state.scales()[1], 0.0);
        assert_eq!(state.scales()[2], 0.0);
    }
}
