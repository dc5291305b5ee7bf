//! Liveness probing of discovered nodes.
//!
//! # Responsibilities
//! - Issue a single bounded-timeout liveness request against one node
//! - Classify the raw outcome (success / degraded response / transport error)
//!
//! # Design Decisions
//! - Never retries internally; retry policy belongs to the monitor
//! - Soft and hard failures are reported distinctly but fold into a single
//!   failure signal for the current threshold policy; a stricter policy can
//!   differentiate without touching the state machine

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::time;

use crate::registry::Node;

/// Transport-level reason a probe never produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response within the probe timeout.
    Timeout,
    /// Connection refused, reset, DNS failure, or other transport error.
    Connect,
    /// The probe request itself could not be constructed.
    InvalidRequest,
}

/// Classified result of one liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Nominal liveness signal (2xx) within the timeout.
    Success,
    /// The node answered with a recognized degraded-state status
    /// (service unavailable / internal error).
    SoftFailure(StatusCode),
    /// The node was unreachable or answered with an unrecognized status.
    HardFailure(FailureKind),
}

impl ProbeOutcome {
    /// Current policy: soft failures count the same as hard ones.
    pub fn is_failure(&self) -> bool {
        !matches!(self, ProbeOutcome::Success)
    }
}

/// Issues liveness probes against individual nodes.
///
/// Stateless and safe to share across concurrent probes.
pub struct Prober {
    client: Client<HttpConnector, Body>,
    path: String,
    timeout: Duration,
}

impl Prober {
    pub fn new(path: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client,
            path: path.into(),
            timeout,
        }
    }

    /// Probe one node's liveness endpoint and classify the outcome.
    pub async fn probe(&self, node: &Node) -> ProbeOutcome {
        let request = match Request::builder()
            .method("GET")
            .uri(node.probe_url(&self.path))
            .header("user-agent", "mesh-agent-health-check")
            .body(Body::empty())
        {
            Ok(req) => req,
            Err(e) => {
                tracing::error!(node_id = %node.id, error = %e, "Failed to build probe request");
                return ProbeOutcome::HardFailure(FailureKind::InvalidRequest);
            }
        };

        match time::timeout(self.timeout, self.client.request(request)).await {
            Ok(Ok(response)) => classify_status(response.status()),
            Ok(Err(e)) => {
                tracing::debug!(node_id = %node.id, error = %e, "Probe transport error");
                ProbeOutcome::HardFailure(FailureKind::Connect)
            }
            Err(_) => {
                tracing::debug!(node_id = %node.id, "Probe timed out");
                ProbeOutcome::HardFailure(FailureKind::Timeout)
            }
        }
    }
}

/// Map a response status onto a probe outcome.
///
/// 2xx is success; service-unavailable and internal-error are the known
/// degraded responses; anything else is treated like unreachability.
fn classify_status(status: StatusCode) -> ProbeOutcome {
    if status.is_success() {
        ProbeOutcome::Success
    } else if status == StatusCode::SERVICE_UNAVAILABLE
        || status == StatusCode::INTERNAL_SERVER_ERROR
    {
        ProbeOutcome::SoftFailure(status)
    } else {
        ProbeOutcome::HardFailure(FailureKind::Connect)
    }
}
