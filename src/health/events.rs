//! Health events and their observers.
//!
//! # Responsibilities
//! - Describe one classified probe result per node per cycle
//! - Deliver events to an external observer (log, alerting hook)
//!
//! # Design Decisions
//! - Emission is level-triggered: healthy nodes produce an event on every
//!   successful check, and unhealthy nodes alert on every cycle while the
//!   condition persists, so an operator's view never goes silently stale
//! - The observer seam is where an edge-triggered mode would plug in

use crate::health::state::NodeStatus;
use crate::registry::Node;

/// One classified health observation for one node.
#[derive(Debug, Clone)]
pub struct HealthEvent {
    pub node: Node,
    pub status: NodeStatus,
    pub consecutive_failures: u32,
}

/// Receives every health event the monitor emits.
pub trait HealthObserver: Send + Sync {
    fn on_event(&self, event: &HealthEvent);
}

/// Default observer: structured log lines per event.
#[derive(Debug, Default)]
pub struct LogObserver;

impl HealthObserver for LogObserver {
    fn on_event(&self, event: &HealthEvent) {
        let node = &event.node;
        match event.status {
            NodeStatus::Healthy => {
                tracing::info!(
                    node_id = %node.id,
                    address = %node.address,
                    port = node.port,
                    "Node is healthy"
                );
            }
            NodeStatus::Jittering => {
                tracing::warn!(
                    node_id = %node.id,
                    address = %node.address,
                    port = node.port,
                    consecutive_failures = event.consecutive_failures,
                    "Possible network jitter: node failed health check"
                );
            }
            NodeStatus::Unhealthy => {
                tracing::error!(
                    node_id = %node.id,
                    address = %node.address,
                    port = node.port,
                    consecutive_failures = event.consecutive_failures,
                    "Node is not healthy"
                );
            }
        }
    }
}
