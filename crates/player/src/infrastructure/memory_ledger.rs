//! In-memory ledger simulation.
//!
//! Holds player records keyed by wallet address and a coordinate-indexed table
//! of location text built from the world. Every call waits for the configured
//! latency and may fail at the configured rate, which is enough to exercise
//! the client's pending-operation handling without a chain.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use rand::Rng;

use rise_domain::{Coordinate, DomainError, PlayerId, PlayerName, TransactionId, World};

use crate::infrastructure::ports::{
    ClockPort, FactStore, FactStoreError, LocationText, MoveReceipt, RemoteVitals,
};

/// Stats a freshly registered player starts with
pub const STARTING_HEALTH: u32 = 50;
pub const STARTING_LEVEL: u32 = 1;

/// Simulation knobs
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    /// Delay applied to every call in milliseconds
    pub latency_ms: u64,
    /// Probability in `[0, 1]` that a call fails
    pub failure_rate: f64,
}

/// A player's record on the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: PlayerName,
    pub position: Coordinate,
    pub health: u32,
    pub experience: u32,
    pub level: u32,
}

#[derive(Debug, Clone)]
struct LocationEntry {
    name: String,
    description: String,
    landmarks: Vec<String>,
}

pub struct InMemoryFactStore {
    players: DashMap<PlayerId, PlayerRecord>,
    locations: HashMap<Coordinate, LocationEntry>,
    hostiles: HashSet<Coordinate>,
    spawn: Coordinate,
    config: LedgerConfig,
    clock: Arc<dyn ClockPort>,
}

impl InMemoryFactStore {
    /// Build a ledger whose location table mirrors every mapped location of
    /// `world`. New players spawn at the coordinate of the world's start.
    ///
    /// # Errors
    ///
    /// `DomainError::Configuration` if the world's start location has no
    /// coordinate.
    pub fn from_world(
        world: &World,
        clock: Arc<dyn ClockPort>,
        config: LedgerConfig,
    ) -> Result<Self, DomainError> {
        let locations = world
            .graph()
            .locations()
            .filter_map(|node| {
                let coordinate = world.coordinates().to_coordinate(node.key())?;
                let entry = LocationEntry {
                    name: node.name().to_string(),
                    description: node.description().to_string(),
                    landmarks: node.landmarks().to_vec(),
                };
                Some((coordinate, entry))
            })
            .collect();

        let start = world.graph().start();
        let spawn = world.coordinates().to_coordinate(start).ok_or_else(|| {
            DomainError::configuration(format!("start location {} has no ledger coordinate", start))
        })?;

        Ok(Self {
            players: DashMap::new(),
            locations,
            hostiles: HashSet::new(),
            spawn,
            config: LedgerConfig {
                failure_rate: config.failure_rate.clamp(0.0, 1.0),
                ..config
            },
            clock,
        })
    }

    /// Mark a coordinate as occupied by something hostile
    pub fn with_hostile_at(mut self, coordinate: Coordinate) -> Self {
        self.hostiles.insert(coordinate);
        self
    }

    /// Insert or overwrite a player record directly
    pub fn seed_player(&self, player: PlayerId, record: PlayerRecord) {
        self.players.insert(player, record);
    }

    pub fn player(&self, player: &PlayerId) -> Option<PlayerRecord> {
        self.players.get(player).map(|record| record.clone())
    }

    async fn simulate(&self, operation: &'static str) -> Result<(), FactStoreError> {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }

        let roll_failed = self.config.failure_rate > 0.0
            && rand::thread_rng().gen_bool(self.config.failure_rate);
        if roll_failed {
            tracing::debug!(operation = operation, "Simulated ledger failure");
            return Err(FactStoreError::network(format!(
                "simulated ledger outage during {}",
                operation
            )));
        }
        Ok(())
    }

    fn record(&self, player: &PlayerId) -> Result<PlayerRecord, FactStoreError> {
        self.player(player).ok_or(FactStoreError::PlayerNotFound)
    }

    fn entry_at(&self, coordinate: Coordinate) -> Result<&LocationEntry, FactStoreError> {
        self.locations.get(&coordinate).ok_or_else(|| {
            FactStoreError::malformed(format!("no location recorded at {}", coordinate))
        })
    }
}

#[async_trait]
impl FactStore for InMemoryFactStore {
    async fn query_position(&self, player: &PlayerId) -> Result<Coordinate, FactStoreError> {
        self.simulate("query_position").await?;
        Ok(self.record(player)?.position)
    }

    async fn query_location_text(
        &self,
        player: &PlayerId,
    ) -> Result<LocationText, FactStoreError> {
        self.simulate("query_location_text").await?;
        let entry = self.entry_at(self.record(player)?.position)?;
        Ok(LocationText {
            name: entry.name.clone(),
            description: entry.description.clone(),
        })
    }

    async fn query_landmarks(&self, player: &PlayerId) -> Result<Vec<String>, FactStoreError> {
        self.simulate("query_landmarks").await?;
        Ok(self.entry_at(self.record(player)?.position)?.landmarks.clone())
    }

    async fn query_vitals(&self, player: &PlayerId) -> Result<RemoteVitals, FactStoreError> {
        self.simulate("query_vitals").await?;
        let record = self.record(player)?;
        Ok(RemoteVitals {
            health: record.health,
            experience: record.experience,
            level: record.level,
        })
    }

    async fn query_hostile_presence(&self, player: &PlayerId) -> Result<bool, FactStoreError> {
        self.simulate("query_hostile_presence").await?;
        Ok(self.hostiles.contains(&self.record(player)?.position))
    }

    async fn submit_move(
        &self,
        player: &PlayerId,
        coordinate: Coordinate,
    ) -> Result<MoveReceipt, FactStoreError> {
        self.simulate("submit_move").await?;

        if !self.locations.contains_key(&coordinate) {
            return Err(FactStoreError::rejected(format!(
                "no location at {}",
                coordinate
            )));
        }

        let mut record = self
            .players
            .get_mut(player)
            .ok_or(FactStoreError::PlayerNotFound)?;
        record.position = coordinate;

        let receipt = MoveReceipt {
            transaction_id: TransactionId::new(),
            recorded_at: self.clock.now(),
        };
        tracing::debug!(
            player_id = %player,
            coordinate = %coordinate,
            transaction_id = %receipt.transaction_id,
            "Ledger recorded move"
        );
        Ok(receipt)
    }

    async fn register_player(
        &self,
        player: &PlayerId,
        name: &PlayerName,
    ) -> Result<(), FactStoreError> {
        self.simulate("register_player").await?;

        if self.players.contains_key(player) {
            return Err(FactStoreError::rejected("player already registered"));
        }

        self.players.insert(
            player.clone(),
            PlayerRecord {
                name: name.clone(),
                position: self.spawn,
                health: STARTING_HEALTH,
                experience: 0,
                level: STARTING_LEVEL,
            },
        );
        tracing::info!(player_id = %player, name = %name, "Ledger registered player");
        Ok(())
    }
}
