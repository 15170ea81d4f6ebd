//! The static world: location graph, ledger coordinates and seed data.

mod coordinates;
mod graph;
mod seed;

pub use coordinates::CoordinateMapper;
pub use graph::WorldGraph;
pub use seed::{
    initial_vitals, seed_coordinates, seed_locations, starting_inventory, START_LOCATION,
};

use crate::error::DomainError;
use crate::value_objects::LocationKey;

/// Validated graph plus its coordinate mapping, loaded once at startup
#[derive(Debug, Clone)]
pub struct World {
    graph: WorldGraph,
    coordinates: CoordinateMapper,
}

impl World {
    pub fn new(graph: WorldGraph, coordinates: CoordinateMapper) -> Self {
        Self { graph, coordinates }
    }

    /// Build the seeded wasteland.
    ///
    /// # Errors
    ///
    /// `DomainError::Configuration` if the seed data breaks graph closure or
    /// the coordinate bijection.
    pub fn seeded() -> Result<Self, DomainError> {
        let graph = WorldGraph::new(seed_locations()?, LocationKey::new(START_LOCATION)?)?;
        let coordinates = CoordinateMapper::new(seed_coordinates()?, &graph)?;
        Ok(Self::new(graph, coordinates))
    }

    pub fn graph(&self) -> &WorldGraph {
        &self.graph
    }

    pub fn coordinates(&self) -> &CoordinateMapper {
        &self.coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Coordinate;

    #[test]
    fn seeded_world_is_closed() {
        let world = World::seeded().unwrap();
        let graph = world.graph();

        assert_eq!(graph.len(), 13);
        for node in graph.locations() {
            for exit in node.exits() {
                assert!(
                    graph.location(&exit.destination).is_ok(),
                    "{} -> {} is dangling",
                    node.key(),
                    exit.destination
                );
            }
        }
    }

    #[test]
    fn every_seeded_location_round_trips_through_its_coordinate() {
        let world = World::seeded().unwrap();
        let mapper = world.coordinates();

        assert_eq!(mapper.len(), world.graph().len());
        for node in world.graph().locations() {
            let coordinate = mapper.to_coordinate(node.key()).unwrap();
            assert_eq!(mapper.to_location(coordinate), Some(node.key()));
        }
    }

    #[test]
    fn start_location_sits_at_origin() {
        let world = World::seeded().unwrap();
        let start = world.graph().start();

        assert_eq!(start.as_str(), START_LOCATION);
        assert_eq!(
            world.coordinates().to_coordinate(start),
            Some(Coordinate::new(0, 0))
        );
    }

    #[test]
    fn starting_kit_matches_a_fresh_survivor() {
        let items = starting_inventory();
        let names: Vec<_> = items.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec!["Tattered Map", "Stale Ration Bar", "Bottle of Dirty Water"]
        );
        assert!(items[2].category().is_spoiled());

        let vitals = initial_vitals();
        assert_eq!((vitals.health(), vitals.hunger(), vitals.thirst()), (50, 75, 60));
    }
}
