//! HTTP client for the external service registry.
//!
//! # Responsibilities
//! - Register this process as a discoverable service (idempotent upsert)
//! - Query the current node list for a service name
//!
//! # Design Decisions
//! - Stateless and cheap to clone; safe across concurrent callers
//! - Discovery failure is distinguished from "discovered zero instances":
//!   an empty-but-successful response is NotFound, a registry error is
//!   Unavailable

use crate::registry::types::{
    CatalogEntry, DiscoveryError, Node, RegisterPayload, RegistrationError, RegistrationSpec,
    ServiceView,
};

/// Client for a Consul-flavoured registry HTTP API.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: String,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a client for the registry at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Register a service instance. Re-registration with the same ID is an
    /// upsert on the registry side.
    pub async fn register(&self, spec: &RegistrationSpec) -> Result<(), RegistrationError> {
        let url = format!("{}/v1/agent/service/register", self.base_url);
        let payload = RegisterPayload::from(spec);

        let response = self.http.put(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistrationError::Rejected { status, body });
        }

        tracing::info!(
            service_id = %spec.service_id,
            service_name = %spec.service_name,
            address = %spec.address,
            port = spec.port,
            "Registered with service registry"
        );
        Ok(())
    }

    /// Fetch the current node list for a service name.
    pub async fn discover(&self, service_name: &str) -> Result<ServiceView, DiscoveryError> {
        let url = format!("{}/v1/catalog/service/{}", self.base_url, service_name);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DiscoveryError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::Unavailable(format!(
                "registry returned {status}"
            )));
        }

        let entries: Vec<CatalogEntry> = response
            .json()
            .await
            .map_err(|e| DiscoveryError::Unavailable(format!("bad catalog response: {e}")))?;

        if entries.is_empty() {
            return Err(DiscoveryError::NotFound(service_name.to_string()));
        }

        Ok(ServiceView {
            name: service_name.to_string(),
            nodes: entries.into_iter().map(Node::from).collect(),
        })
    }
}
