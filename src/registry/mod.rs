//! Service registry integration.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RegistrationSpec → client.rs (PUT upsert) → process discoverable
//!
//! Each resolve / poll cycle:
//!     service name → client.rs (catalog query) → ServiceView (fresh node list)
//! ```
//!
//! # Design Decisions
//! - The registry store itself is an external collaborator; this module
//!   only speaks its HTTP API
//! - Registration failure is fatal at startup, discovery failure is not
//! - NotFound (zero instances) and Unavailable (registry error) are
//!   distinct error cases

pub mod client;
pub mod types;

pub use client::RegistryClient;
pub use types::{
    DiscoveryError, Node, RegistrationError, RegistrationSpec, ServiceView,
};
