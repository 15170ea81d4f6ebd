//! Inventory items carried by the player.

use serde::{Deserialize, Serialize};

/// Closed set of item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Ration,
    SpoiledRation,
    Tool,
    Misc,
}

impl ItemCategory {
    pub fn is_spoiled(&self) -> bool {
        matches!(self, Self::SpoiledRation)
    }
}

/// An item in the player's inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    key: String,
    name: String,
    description: String,
    category: ItemCategory,
}

impl InventoryItem {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: ItemCategory,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            category,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }
}
