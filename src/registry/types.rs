//! Registry data types and error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One network-addressable instance of a discovered service.
///
/// Immutable once discovered; each discovery response replaces the previous
/// node list wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, unique within a service.
    pub id: String,
    /// Network address (host or IP).
    pub address: String,
    /// Port the instance listens on.
    pub port: u16,
}

impl Node {
    pub fn new(id: impl Into<String>, address: impl Into<String>, port: u16) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            port,
        }
    }

    /// URL of this node's liveness endpoint for the given probe path.
    pub fn probe_url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.address, self.port, path)
    }
}

/// The current set of instances registered under one service name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceView {
    pub name: String,
    pub nodes: Vec<Node>,
}

/// What to register: identity plus the health-check spec the registry's own
/// checker will use against our liveness endpoint.
#[derive(Debug, Clone)]
pub struct RegistrationSpec {
    pub service_id: String,
    pub service_name: String,
    pub address: String,
    pub port: u16,
    pub check_path: String,
    pub check_interval: String,
    pub check_timeout: String,
}

/// Wire payload for service registration (Consul agent API shape).
#[derive(Debug, Serialize)]
pub struct RegisterPayload {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Port")]
    pub port: u16,
    #[serde(rename = "Check")]
    pub check: CheckPayload,
}

/// Wire payload for the registry-side health check spec.
#[derive(Debug, Serialize)]
pub struct CheckPayload {
    #[serde(rename = "HTTP")]
    pub http: String,
    #[serde(rename = "Interval")]
    pub interval: String,
    #[serde(rename = "Timeout")]
    pub timeout: String,
}

impl From<&RegistrationSpec> for RegisterPayload {
    fn from(spec: &RegistrationSpec) -> Self {
        Self {
            id: spec.service_id.clone(),
            name: spec.service_name.clone(),
            address: spec.address.clone(),
            port: spec.port,
            check: CheckPayload {
                http: format!(
                    "http://{}:{}{}",
                    spec.address, spec.port, spec.check_path
                ),
                interval: spec.check_interval.clone(),
                timeout: spec.check_timeout.clone(),
            },
        }
    }
}

/// One entry in a catalog query response (Consul catalog API shape).
#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    #[serde(rename = "ServiceAddress")]
    pub service_address: String,
    #[serde(rename = "ServicePort")]
    pub service_port: u16,
}

impl From<CatalogEntry> for Node {
    fn from(entry: CatalogEntry) -> Self {
        Node {
            id: entry.service_id,
            address: entry.service_address,
            port: entry.service_port,
        }
    }
}

/// Registration failed. Fatal at startup: the process cannot participate in
/// the mesh without being discoverable.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registry unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("registry rejected registration: {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Discovery failed. Recoverable: a failed poll cycle logs and retries on
/// the next tick.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The registry answered but no instances are registered under the name.
    #[error("no instances registered for service {0}")]
    NotFound(String),

    /// The registry itself could not be reached or errored. Never conflated
    /// with an empty-but-successful response.
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_payload_builds_check_url() {
        let spec = RegistrationSpec {
            service_id: "svc-1".into(),
            service_name: "svc".into(),
            address: "10.0.0.5".into(),
            port: 8080,
            check_path: "/health".into(),
            check_interval: "10s".into(),
            check_timeout: "5s".into(),
        };
        let payload = RegisterPayload::from(&spec);
        assert_eq!(payload.check.http, "http://10.0.0.5:8080/health");
        assert_eq!(payload.check.interval, "10s");
    }

    #[test]
    fn catalog_entry_deserializes_into_node() {
        let json = r#"{"ServiceID":"n1","ServiceAddress":"10.0.0.7","ServicePort":9000}"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        let node = Node::from(entry);
        assert_eq!(node, Node::new("n1", "10.0.0.7", 9000));
    }

    #[test]
    fn probe_url_formats_address_and_path() {
        let node = Node::new("n1", "10.0.0.7", 9000);
        assert_eq!(node.probe_url("/health"), "http://10.0.0.7:9000/health");
    }
}
