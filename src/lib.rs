//! Service-mesh client agent library.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                  MESH AGENT                   │
//!                 │                                               │
//!   Registry ◀────┼── registry (register self, discover others)  │
//!                 │        │                                      │
//!                 │        ▼                                      │
//!                 │   selector (pick one node, pluggable)         │
//!                 │                                               │
//!                 │   health (core): monitor loop                 │
//!                 │        discover → probe → classify → events   │
//!                 │                                               │
//!   Registry's ───┼─▶ http (local liveness endpoint)              │
//!   checker       │                                               │
//!                 │   config / lifecycle / observability          │
//!                 └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;
pub mod selector;

pub use config::AgentConfig;
pub use health::HealthMonitor;
pub use http::LivenessServer;
pub use lifecycle::Shutdown;
pub use registry::{Node, RegistryClient};
pub use selector::Selector;
