//! Health monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! Poll loop (monitor.rs):
//!     Periodic timer
//!     → Re-discover watched service
//!     → Probe each node (prober.rs)
//!     → Fold outcome into per-node state (state.rs)
//!     → Emit event per node (events.rs)
//!     → Evict state for departed nodes
//!
//! State machine (state.rs):
//!     Healthy / Jittering / Unhealthy
//!     Consecutive-failure counter + jitter-window policy
//! ```
//!
//! # Design Decisions
//! - Health state is per-node, keyed by node id, owned by the monitor loop
//! - Classification (prober.rs) is isolated from the state machine so a
//!   stricter failure policy can be substituted without touching it
//! - Event emission is level-triggered, including the steady healthy case

pub mod events;
pub mod monitor;
pub mod prober;
pub mod state;

pub use events::{HealthEvent, HealthObserver, LogObserver};
pub use monitor::HealthMonitor;
pub use prober::{ProbeOutcome, Prober};
pub use state::{NodeHealthState, NodeStatus};
