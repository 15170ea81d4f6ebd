//! Location node - a place the player can stand in.
//!
//! Nodes are defined once at startup and never mutated. Exits keep their
//! declaration order so "Obvious exits" lines stay stable across runs.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Direction, LocationKey};

/// A directional edge from one location to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub direction: Direction,
    pub destination: LocationKey,
}

/// A node of the world graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNode {
    key: LocationKey,
    name: String,
    description: String,
    landmarks: Vec<String>,
    exits: Vec<Exit>,
}

impl LocationNode {
    pub fn new(key: LocationKey, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            description: description.into(),
            landmarks: Vec::new(),
            exits: Vec::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn with_landmarks<I, S>(mut self, landmarks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.landmarks = landmarks.into_iter().map(Into::into).collect();
        self
    }

    /// Add an exit. A later exit in the same direction replaces the earlier one.
    pub fn with_exit(mut self, direction: Direction, destination: LocationKey) -> Self {
        self.exits.retain(|exit| exit.direction != direction);
        self.exits.push(Exit {
            direction,
            destination,
        });
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn key(&self) -> &LocationKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Landmarks in declaration order
    pub fn landmarks(&self) -> &[String] {
        &self.landmarks
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// Destination reached by travelling `direction`, if any
    pub fn exit(&self, direction: Direction) -> Option<&LocationKey> {
        self.exits
            .iter()
            .find(|exit| exit.direction == direction)
            .map(|exit| &exit.destination)
    }

    /// Comma separated exit tokens, e.g. `n, e, s, w`
    pub fn exit_summary(&self) -> String {
        self.exits
            .iter()
            .map(|exit| exit.direction.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
