//! Domain entities.

mod item;
mod location;

pub use item::{InventoryItem, ItemCategory};
pub use location::{Exit, LocationNode};
