//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mesh_agent_node_health` (gauge): 1=healthy, 0.5=jittering, 0=unhealthy,
//!   labelled by node id
//!
//! # Design Decisions
//! - Gauge updates are cheap atomic stores, recorded once per node per cycle
//! - Exporter is optional; recording without it is a no-op

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::health::state::NodeStatus;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the latest classification for one node.
pub fn record_node_health(node_id: &str, status: NodeStatus) {
    let value = match status {
        NodeStatus::Healthy => 1.0,
        NodeStatus::Jittering => 0.5,
        NodeStatus::Unhealthy => 0.0,
    };
    metrics::gauge!("mesh_agent_node_health", "node_id" => node_id.to_string()).set(value);
}
