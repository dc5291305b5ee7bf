//! Node selection subsystem.
//!
//! # Data Flow
//! ```text
//! Service resolved → ServiceView (candidate nodes)
//!     → Apply selection strategy:
//!         - random.rs (uniform, independent draw per call)
//!         - round_robin.rs (rotate through nodes)
//!     → Return one Node or SelectionError
//! ```
//!
//! # Design Decisions
//! - Strategy is a trait object; callers never depend on a concrete picker
//! - No session affinity: every call is an independent decision
//! - Empty candidate list is an error, never a null node

use thiserror::Error;

use crate::registry::Node;

pub mod random;
pub mod round_robin;

pub use random::Random;
pub use round_robin::RoundRobin;

/// Selection failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no candidate nodes to select from")]
    Empty,
}

/// A replaceable "pick one node" strategy.
pub trait Selector: Send + Sync {
    fn select(&self, nodes: &[Node]) -> Result<Node, SelectionError>;
}
