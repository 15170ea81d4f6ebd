//! Coordinate mapper - bijection between location keys and ledger coordinates.
//!
//! Both directions are precomputed at construction. Only a subset of the
//! graph needs to be mapped; unmapped locations are legal but cannot be the
//! destination of a ledger-confirmed move.

use std::collections::HashMap;

use crate::error::DomainError;
use crate::value_objects::{Coordinate, LocationKey};
use crate::world::WorldGraph;

/// Two-way lookup between locations and grid coordinates
#[derive(Debug, Clone)]
pub struct CoordinateMapper {
    by_key: HashMap<LocationKey, Coordinate>,
    by_coordinate: HashMap<Coordinate, LocationKey>,
}

impl CoordinateMapper {
    /// Build the mapper and its inverse, validating against `graph`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if:
    /// - Two keys share a coordinate
    /// - A key is mapped twice
    /// - A mapped key is not a location in `graph`
    pub fn new(
        entries: impl IntoIterator<Item = (LocationKey, Coordinate)>,
        graph: &WorldGraph,
    ) -> Result<Self, DomainError> {
        let mut by_key = HashMap::new();
        let mut by_coordinate: HashMap<Coordinate, LocationKey> = HashMap::new();

        for (key, coordinate) in entries {
            if !graph.contains(&key) {
                return Err(DomainError::configuration(format!(
                    "coordinate {} assigned to unknown location {}",
                    coordinate, key
                )));
            }
            if let Some(existing) = by_coordinate.get(&coordinate) {
                return Err(DomainError::configuration(format!(
                    "duplicate coordinate {} for {} and {}",
                    coordinate, existing, key
                )));
            }
            if by_key.contains_key(&key) {
                return Err(DomainError::configuration(format!(
                    "location {} mapped to more than one coordinate",
                    key
                )));
            }
            by_coordinate.insert(coordinate, key.clone());
            by_key.insert(key, coordinate);
        }

        Ok(Self {
            by_key,
            by_coordinate,
        })
    }

    pub fn to_coordinate(&self, key: &LocationKey) -> Option<Coordinate> {
        self.by_key.get(key).copied()
    }

    pub fn to_location(&self, coordinate: Coordinate) -> Option<&LocationKey> {
        self.by_coordinate.get(&coordinate)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::LocationNode;
    use crate::value_objects::Direction;

    fn key(raw: &str) -> LocationKey {
        LocationKey::new(raw).unwrap()
    }

    fn graph() -> WorldGraph {
        WorldGraph::new(
            vec![
                LocationNode::new(key("a"), "A", "Room A.").with_exit(Direction::East, key("b")),
                LocationNode::new(key("b"), "B", "Room B.").with_exit(Direction::West, key("a")),
                LocationNode::new(key("c"), "C", "Room C."),
            ],
            key("a"),
        )
        .unwrap()
    }

    #[test]
    fn lookups_work_in_both_directions() {
        let mapper = CoordinateMapper::new(
            vec![(key("a"), Coordinate::new(0, 0)), (key("b"), Coordinate::new(5, 0))],
            &graph(),
        )
        .unwrap();

        assert_eq!(mapper.to_coordinate(&key("b")), Some(Coordinate::new(5, 0)));
        assert_eq!(mapper.to_location(Coordinate::new(0, 0)), Some(&key("a")));
        assert_eq!(mapper.to_coordinate(&key("c")), None);
        assert_eq!(mapper.to_location(Coordinate::new(9, 9)), None);
    }

    #[test]
    fn duplicate_coordinate_is_rejected_at_construction() {
        let err = CoordinateMapper::new(
            vec![(key("a"), Coordinate::new(1, 1)), (key("b"), Coordinate::new(1, 1))],
            &graph(),
        )
        .unwrap_err();

        assert!(err.is_configuration());
        assert!(err.to_string().contains("duplicate coordinate (1, 1)"));
    }

    #[test]
    fn key_mapped_twice_is_rejected() {
        let err = CoordinateMapper::new(
            vec![(key("a"), Coordinate::new(1, 1)), (key("a"), Coordinate::new(2, 2))],
            &graph(),
        )
        .unwrap_err();

        assert!(err.is_configuration());
    }

    #[test]
    fn key_outside_the_graph_is_rejected() {
        let err =
            CoordinateMapper::new(vec![(key("zz"), Coordinate::new(1, 1))], &graph()).unwrap_err();
        assert!(err.is_configuration());
    }
}
