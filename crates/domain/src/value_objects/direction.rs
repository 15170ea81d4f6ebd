//! Compass directions used by location exits.
//!
//! The alphabet is closed: `n, s, e, w, u, d`. Full words normalize to the
//! single-character token before any graph lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A direction of travel between two location nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "u")]
    Up,
    #[serde(rename = "d")]
    Down,
}

impl Direction {
    /// Every direction, in the order the help text lists them.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a token or its full-word synonym.
    ///
    /// Input is expected to be trimmed and lowercased already.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// Single-character token, as stored on exits
    pub fn token(&self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::Up => "u",
            Self::Down => "d",
        }
    }

    /// Full word used in narration ("You move north...")
    pub fn word(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
