//! Round-robin selection strategy.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::registry::Node;
use crate::selector::{SelectionError, Selector};

/// Round-robin selector.
/// Stores an internal counter to rotate through nodes.
#[derive(Debug, Default)]
pub struct RoundRobin {
    counter: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Selector for RoundRobin {
    fn select(&self, nodes: &[Node]) -> Result<Node, SelectionError> {
        if nodes.is_empty() {
            return Err(SelectionError::Empty);
        }
        let index = self.counter.fetch_add(1, Ordering::Relaxed) % nodes.len();
        Ok(nodes[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_through_nodes() {
        let selector = RoundRobin::new();
        let nodes = vec![
            Node::new("n1", "10.0.0.1", 8080),
            Node::new("n2", "10.0.0.2", 8080),
        ];

        assert_eq!(selector.select(&nodes).unwrap().id, "n1");
        assert_eq!(selector.select(&nodes).unwrap().id, "n2");
        assert_eq!(selector.select(&nodes).unwrap().id, "n1");
    }

    #[test]
    fn empty_input_is_an_error() {
        let selector = RoundRobin::new();
        assert_eq!(selector.select(&[]).unwrap_err(), SelectionError::Empty);
    }
}
