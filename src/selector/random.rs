//! Uniform-random selection strategy (the default).

use crate::registry::Node;
use crate::selector::{SelectionError, Selector};

/// Uniform random selector. Each call is an independent draw.
#[derive(Debug, Default)]
pub struct Random;

impl Random {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Selector for Random {
    fn select(&self, nodes: &[Node]) -> Result<Node, SelectionError> {
        if nodes.is_empty() {
            return Err(SelectionError::Empty);
        }
        let index = fastrand::usize(..nodes.len());
        Ok(nodes[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_error() {
        let selector = Random::new();
        assert_eq!(selector.select(&[]).unwrap_err(), SelectionError::Empty);
    }

    #[test]
    fn picked_node_is_a_member() {
        let selector = Random::new();
        let nodes = vec![
            Node::new("n1", "10.0.0.1", 8080),
            Node::new("n2", "10.0.0.2", 8080),
            Node::new("n3", "10.0.0.3", 8080),
        ];
        for _ in 0..50 {
            let picked = selector.select(&nodes).unwrap();
            assert!(nodes.contains(&picked));
        }
    }

    #[test]
    fn single_node_is_always_picked() {
        let selector = Random::new();
        let nodes = vec![Node::new("only", "10.0.0.1", 8080)];
        assert_eq!(selector.select(&nodes).unwrap().id, "only");
    }
}
