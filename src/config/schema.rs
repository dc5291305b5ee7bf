//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the agent.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the mesh agent.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AgentConfig {
    /// Identity of this process as a registered service.
    pub service: ServiceConfig,

    /// Registry connection settings.
    pub registry: RegistryConfig,

    /// Health monitor settings.
    pub monitor: MonitorConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Identity under which this process registers itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Unique service instance ID.
    pub id: String,

    /// Service name under which this instance is discoverable.
    pub name: String,

    /// Address advertised to the registry; the liveness endpoint binds here.
    pub bind_address: String,

    /// Port advertised to the registry; the liveness endpoint binds here.
    pub bind_port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            id: "mesh-agent-1".to_string(),
            name: "mesh-agent".to_string(),
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
        }
    }
}

/// External service registry settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL of the registry's HTTP API.
    pub address: String,

    /// Interval at which the registry's own checker probes us (e.g. "10s").
    pub register_interval: String,

    /// Timeout for the registry's own probe (e.g. "5s").
    pub register_timeout: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            address: "http://127.0.0.1:8500".to_string(),
            register_interval: "10s".to_string(),
            register_timeout: "5s".to_string(),
        }
    }
}

/// Health monitor settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Service name whose instances the monitor watches.
    pub watched_service: String,

    /// Seconds between poll cycles.
    pub poll_interval_secs: u64,

    /// Consecutive failures before a node is classified unhealthy.
    pub failure_threshold: u32,

    /// Seconds a partial failure streak survives before being forgotten.
    pub jitter_window_secs: u64,

    /// Path probed on each node for liveness.
    pub probe_path: String,

    /// Per-probe timeout in seconds.
    pub probe_timeout_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            watched_service: "my-service-name".to_string(),
            poll_interval_secs: 30,
            failure_threshold: 3,
            jitter_window_secs: 60,
            probe_path: "/health".to_string(),
            probe_timeout_secs: 5,
        }
    }
}

impl MonitorConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn jitter_window(&self) -> Duration {
        Duration::from_secs(self.jitter_window_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_knobs() {
        let config = AgentConfig::default();
        assert_eq!(config.monitor.poll_interval_secs, 30);
        assert_eq!(config.monitor.failure_threshold, 3);
        assert_eq!(config.monitor.jitter_window_secs, 60);
        assert_eq!(config.registry.register_interval, "10s");
        assert_eq!(config.registry.register_timeout, "5s");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AgentConfig = toml::from_str(
            r#"
            [monitor]
            watched_service = "payments"
            failure_threshold = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.monitor.watched_service, "payments");
        assert_eq!(config.monitor.failure_threshold, 5);
        assert_eq!(config.monitor.poll_interval_secs, 30);
        assert_eq!(config.service.bind_port, 8080);
    }
}
