//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that keys and names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for location keys
const MAX_KEY_LENGTH: usize = 64;

/// Maximum length for player names
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for wallet addresses
const MAX_ADDRESS_LENGTH: usize = 128;

// ============================================================================
// LocationKey
// ============================================================================

/// Stable identity of a location node (non-empty, <=64 chars, no whitespace)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationKey(String);

impl LocationKey {
    /// Create a new validated location key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The key is empty after trimming
    /// - The key exceeds 64 characters
    /// - The key contains inner whitespace
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Location key cannot be empty"));
        }
        if trimmed.len() > MAX_KEY_LENGTH {
            return Err(DomainError::validation(format!(
                "Location key cannot exceed {} characters",
                MAX_KEY_LENGTH
            )));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(format!(
                "Location key cannot contain whitespace: {:?}",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LocationKey {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LocationKey> for String {
    fn from(key: LocationKey) -> String {
        key.0
    }
}

// ============================================================================
// PlayerId
// ============================================================================

/// Wallet address identifying the player to the fact store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new validated player id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the address is empty after
    /// trimming or longer than 128 characters.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let address = address.into();
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Player address cannot be empty"));
        }
        if trimmed.len() > MAX_ADDRESS_LENGTH {
            return Err(DomainError::validation(format!(
                "Player address cannot exceed {} characters",
                MAX_ADDRESS_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> String {
        id.0
    }
}

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player display name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Player name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Player name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod location_key {
        use super::*;

        #[test]
        fn valid_key_is_trimmed() {
            let key = LocationKey::new("  old_road ").unwrap();
            assert_eq!(key.as_str(), "old_road");
            assert_eq!(key.to_string(), "old_road");
        }

        #[test]
        fn empty_key_rejected() {
            let err = LocationKey::new("").unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn inner_whitespace_rejected() {
            let err = LocationKey::new("old road").unwrap_err();
            assert!(err.to_string().contains("whitespace"));
        }

        #[test]
        fn too_long_rejected() {
            assert!(LocationKey::new("k".repeat(65)).is_err());
            assert!(LocationKey::new("k".repeat(64)).is_ok());
        }

        #[test]
        fn serde_round_trip_validates() {
            let json = serde_json::to_string(&LocationKey::new("mudflats").unwrap()).unwrap();
            assert_eq!(json, "\"mudflats\"");
            let bad: Result<LocationKey, _> = serde_json::from_str("\"   \"");
            assert!(bad.is_err());
        }
    }

    mod player_id {
        use super::*;

        #[test]
        fn valid_address() {
            let id = PlayerId::new("0xabc123").unwrap();
            assert_eq!(id.as_str(), "0xabc123");
        }

        #[test]
        fn whitespace_only_rejected() {
            assert!(matches!(
                PlayerId::new("   ").unwrap_err(),
                DomainError::Validation(_)
            ));
        }
    }

    mod player_name {
        use super::*;

        #[test]
        fn valid_name() {
            assert_eq!(PlayerName::new("Survivor").unwrap().as_str(), "Survivor");
        }

        #[test]
        fn empty_name_rejected() {
            assert!(PlayerName::new("").is_err());
        }
    }
}
