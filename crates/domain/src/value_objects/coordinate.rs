//! Grid coordinate used by the remote fact store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative (x, y) position on the ledger's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
