//! Fact store port: the remote ledger that owns authoritative player state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rise_domain::{Coordinate, PlayerId, PlayerName, TransactionId};

use super::error::FactStoreError;

// =============================================================================
// Ledger Types
// =============================================================================

/// Location text as recorded on the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationText {
    pub name: String,
    pub description: String,
}

/// Player stats as recorded on the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVitals {
    pub health: u32,
    pub experience: u32,
    pub level: u32,
}

/// Acknowledgement of an accepted move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReceipt {
    pub transaction_id: TransactionId,
    pub recorded_at: DateTime<Utc>,
}

// =============================================================================
// Fact Store Port
// =============================================================================

/// Asynchronous, fallible access to the ledger.
///
/// Queries read the player's current record. `submit_move` and
/// `register_player` mutate it and are not idempotent: a retried call may be
/// applied twice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactStore: Send + Sync {
    async fn query_position(&self, player: &PlayerId) -> Result<Coordinate, FactStoreError>;

    async fn query_location_text(&self, player: &PlayerId)
        -> Result<LocationText, FactStoreError>;

    async fn query_landmarks(&self, player: &PlayerId) -> Result<Vec<String>, FactStoreError>;

    async fn query_vitals(&self, player: &PlayerId) -> Result<RemoteVitals, FactStoreError>;

    /// Whether something hostile shares the player's coordinate
    async fn query_hostile_presence(&self, player: &PlayerId) -> Result<bool, FactStoreError>;

    async fn submit_move(
        &self,
        player: &PlayerId,
        coordinate: Coordinate,
    ) -> Result<MoveReceipt, FactStoreError>;

    async fn register_player(
        &self,
        player: &PlayerId,
        name: &PlayerName,
    ) -> Result<(), FactStoreError>;
}
