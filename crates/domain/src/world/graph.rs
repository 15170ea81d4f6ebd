//! World graph - the static map of location nodes.
//!
//! The graph is closed by construction: `WorldGraph::new` rejects duplicate
//! keys, exits that point at unknown locations, and an unknown start location.
//! After that it is read-only for the lifetime of the process.

use std::collections::HashMap;

use crate::entities::LocationNode;
use crate::error::DomainError;
use crate::value_objects::{Direction, LocationKey};

/// Immutable, validated map of locations
#[derive(Debug, Clone)]
pub struct WorldGraph {
    nodes: HashMap<LocationKey, LocationNode>,
    order: Vec<LocationKey>,
    start: LocationKey,
}

impl WorldGraph {
    /// Build and validate a graph.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if:
    /// - Two nodes share a key
    /// - An exit names a destination that is not a node
    /// - `start` is not a node
    pub fn new(
        nodes: impl IntoIterator<Item = LocationNode>,
        start: LocationKey,
    ) -> Result<Self, DomainError> {
        let mut by_key = HashMap::new();
        let mut order = Vec::new();

        for node in nodes {
            let key = node.key().clone();
            if by_key.contains_key(&key) {
                return Err(DomainError::configuration(format!(
                    "duplicate location key: {}",
                    key
                )));
            }
            order.push(key.clone());
            by_key.insert(key, node);
        }

        for key in &order {
            let node = &by_key[key];
            for exit in node.exits() {
                if !by_key.contains_key(&exit.destination) {
                    return Err(DomainError::configuration(format!(
                        "exit {} from {} leads to unknown location {}",
                        exit.direction, key, exit.destination
                    )));
                }
            }
        }

        if !by_key.contains_key(&start) {
            return Err(DomainError::configuration(format!(
                "start location {} is not in the world graph",
                start
            )));
        }

        Ok(Self {
            nodes: by_key,
            order,
            start,
        })
    }

    /// Look up a node by key.
    ///
    /// # Errors
    ///
    /// `DomainError::UnknownLocation` if the key is not part of the graph.
    pub fn location(&self, key: &LocationKey) -> Result<&LocationNode, DomainError> {
        self.nodes
            .get(key)
            .ok_or_else(|| DomainError::unknown_location(key.as_str()))
    }

    /// Destination of `direction` from `node`, or `None` if there is no exit.
    pub fn exit<'a>(
        &self,
        node: &'a LocationNode,
        direction: Direction,
    ) -> Option<&'a LocationKey> {
        node.exit(direction)
    }

    pub fn contains(&self, key: &LocationKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Nodes in declaration order
    pub fn locations(&self) -> impl Iterator<Item = &LocationNode> {
        self.order.iter().map(move |key| &self.nodes[key])
    }

    pub fn start(&self) -> &LocationKey {
        &self.start
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
