//! Rise domain: the static wasteland and the client-side game snapshot.

pub mod entities;
pub mod error;
pub mod ids;
pub mod state;
pub mod value_objects;
pub mod world;

pub use entities::{Exit, InventoryItem, ItemCategory, LocationNode};
pub use error::DomainError;
pub use ids::{OperationId, TransactionId};
pub use state::{GameState, Severity, TranscriptLine};
pub use value_objects::{
    clamp_vital, is_low, Coordinate, Direction, LocationKey, PlayerId, PlayerName, Vitals,
    LOW_VITAL_THRESHOLD, MAX_VITAL,
};
pub use world::{CoordinateMapper, World, WorldGraph, START_LOCATION};
