//! Per-node health state machine.
//!
//! # States
//! - Healthy: last probe succeeded
//! - Jittering: failing, but below the alert threshold within the window
//! - Unhealthy: consecutive failures reached the threshold
//!
//! # State Transitions
//! ```text
//! any → Healthy:    probe success (counter reset to 0)
//! any → Jittering:  failure with counter < threshold
//! any → Unhealthy:  failure with counter >= threshold
//! ```
//!
//! # Design Decisions
//! - The threshold absorbs isolated transient failures without alerting
//! - The window forgets failure streaks too sparse to be a real outage:
//!   a failure arriving after the window expired restarts the counter at 1
//! - Status is derived per observation, never stored independently

use std::time::{Duration, Instant};

/// Derived liveness classification for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Healthy,
    Jittering,
    Unhealthy,
}

/// Mutable failure-tracking state for one node id.
///
/// Owned exclusively by the monitor loop; created lazily on the first
/// observation for a node.
#[derive(Debug, Clone)]
pub struct NodeHealthState {
    /// Failed probes since the last success or window-expiry reset.
    pub consecutive_failures: u32,
    /// When the counter last started a fresh window.
    pub last_transition: Instant,
}

impl NodeHealthState {
    pub fn new(now: Instant) -> Self {
        Self {
            consecutive_failures: 0,
            last_transition: now,
        }
    }

    /// Fold one probe outcome into the state and classify the node.
    ///
    /// Evaluated once per poll cycle per node. `failed` is the folded
    /// outcome (soft and hard failures count alike).
    pub fn observe(
        &mut self,
        failed: bool,
        now: Instant,
        failure_threshold: u32,
        jitter_window: Duration,
    ) -> NodeStatus {
        if !failed {
            self.consecutive_failures = 0;
            self.last_transition = now;
            return NodeStatus::Healthy;
        }

        self.consecutive_failures += 1;

        if self.consecutive_failures < failure_threshold {
            if now.duration_since(self.last_transition) > jitter_window {
                // Too sparse to be the same episode: this failure starts a
                // new window.
                self.consecutive_failures = 1;
                self.last_transition = now;
            }
            NodeStatus::Jittering
        } else {
            NodeStatus::Unhealthy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: u32 = 3;
    const WINDOW: Duration = Duration::from_secs(60);

    fn at(base: Instant, secs: u64) -> Instant {
        base + Duration::from_secs(secs)
    }

    #[test]
    fn failures_below_threshold_stay_jittering() {
        let base = Instant::now();
        let mut state = NodeHealthState::new(base);

        assert_eq!(
            state.observe(true, at(base, 0), THRESHOLD, WINDOW),
            NodeStatus::Jittering
        );
        assert_eq!(
            state.observe(true, at(base, 10), THRESHOLD, WINDOW),
            NodeStatus::Jittering
        );
        assert_eq!(state.consecutive_failures, 2);
    }

    #[test]
    fn threshold_reached_becomes_unhealthy_and_persists() {
        let base = Instant::now();
        let mut state = NodeHealthState::new(base);

        assert_eq!(
            state.observe(true, at(base, 0), THRESHOLD, WINDOW),
            NodeStatus::Jittering
        );
        assert_eq!(
            state.observe(true, at(base, 10), THRESHOLD, WINDOW),
            NodeStatus::Jittering
        );
        assert_eq!(
            state.observe(true, at(base, 20), THRESHOLD, WINDOW),
            NodeStatus::Unhealthy
        );
        // Alerts are level-triggered: still unhealthy on the next cycle.
        assert_eq!(
            state.observe(true, at(base, 50), THRESHOLD, WINDOW),
            NodeStatus::Unhealthy
        );
        assert_eq!(state.consecutive_failures, 4);
    }

    #[test]
    fn success_resets_counter_regardless_of_streak() {
        let base = Instant::now();
        let mut state = NodeHealthState::new(base);

        for i in 0..5 {
            state.observe(true, at(base, i * 10), THRESHOLD, WINDOW);
        }
        assert!(state.consecutive_failures >= THRESHOLD);

        assert_eq!(
            state.observe(false, at(base, 60), THRESHOLD, WINDOW),
            NodeStatus::Healthy
        );
        assert_eq!(state.consecutive_failures, 0);
    }

    #[test]
    fn window_expiry_resets_counter_to_one() {
        let base = Instant::now();
        let mut state = NodeHealthState::new(base);

        state.observe(true, at(base, 0), THRESHOLD, WINDOW);
        assert_eq!(state.consecutive_failures, 1);

        // Second failure more than a window after the first: not the same
        // episode, counter restarts at exactly 1.
        let status = state.observe(true, at(base, 70), THRESHOLD, WINDOW);
        assert_eq!(status, NodeStatus::Jittering);
        assert_eq!(state.consecutive_failures, 1);
        assert_eq!(state.last_transition, at(base, 70));
    }

    #[test]
    fn sparse_failures_never_reach_threshold() {
        let base = Instant::now();
        let mut state = NodeHealthState::new(base);

        // One failure every 90s: each restarts the window.
        for i in 0..10 {
            let status = state.observe(true, at(base, i * 90), THRESHOLD, WINDOW);
            assert_eq!(status, NodeStatus::Jittering);
            assert_eq!(state.consecutive_failures, 1);
        }
    }

    #[test]
    fn fail_recover_fail_across_window_stays_jittering() {
        let base = Instant::now();
        let mut state = NodeHealthState::new(base);

        assert_eq!(
            state.observe(true, at(base, 0), THRESHOLD, WINDOW),
            NodeStatus::Jittering
        );
        assert_eq!(
            state.observe(false, at(base, 5), THRESHOLD, WINDOW),
            NodeStatus::Healthy
        );
        // The success reset the window, so the 70s gap from t=0 is moot.
        assert_eq!(
            state.observe(true, at(base, 70), THRESHOLD, WINDOW),
            NodeStatus::Jittering
        );
        assert_eq!(state.consecutive_failures, 1);
    }

    #[test]
    fn jittering_failure_keeps_window_anchor() {
        let base = Instant::now();
        let mut state = NodeHealthState::new(base);

        state.observe(true, at(base, 0), THRESHOLD, WINDOW);
        let anchor = state.last_transition;
        state.observe(true, at(base, 30), THRESHOLD, WINDOW);
        // An in-window failure must not move the window start.
        assert_eq!(state.last_transition, anchor);
    }
}
