#![allow(dead_code)]

//! Shared fixtures for integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::Notify;

use rise_domain::{Coordinate, PlayerId, PlayerName, World};
use rise_player::infrastructure::memory_ledger::{InMemoryFactStore, LedgerConfig, PlayerRecord};
use rise_player::infrastructure::ports::{
    ClockPort, FactStore, FactStoreError, LocationText, MoveReceipt, RemoteVitals,
};
use rise_player::GameSession;

pub const PLAYER: &str = "0x5eed";

pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn clock() -> Arc<dyn ClockPort> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2089, 6, 1, 9, 0, 0).single().unwrap(),
    ))
}

pub fn world() -> Arc<World> {
    Arc::new(World::seeded().unwrap())
}

pub fn player() -> PlayerId {
    PlayerId::new(PLAYER).unwrap()
}

pub fn name() -> PlayerName {
    PlayerName::new("Survivor").unwrap()
}

/// In-memory ledger with no latency and `PLAYER` already standing at `position`
pub fn ledger_with_player_at(world: &World, position: Coordinate) -> InMemoryFactStore {
    let ledger =
        InMemoryFactStore::from_world(world, clock(), LedgerConfig::default()).unwrap();
    ledger.seed_player(
        player(),
        PlayerRecord {
            name: name(),
            position,
            health: 50,
            experience: 0,
            level: 1,
        },
    );
    ledger
}

pub fn session_over(world: Arc<World>, facts: Arc<dyn FactStore>) -> GameSession {
    GameSession::new(world, facts, clock(), Some(player()), name())
}

/// Ledger whose `submit_move` and `query_location_text` block until
/// released; moves can be set to fail afterwards. Every other call goes
/// straight to the inner ledger.
pub struct GatedFactStore {
    inner: InMemoryFactStore,
    move_failure: Option<FactStoreError>,
    arrived: Notify,
    release: Notify,
}

impl GatedFactStore {
    pub fn new(inner: InMemoryFactStore) -> Self {
        Self {
            inner,
            move_failure: None,
            arrived: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn failing_moves_with(mut self, error: FactStoreError) -> Self {
        self.move_failure = Some(error);
        self
    }

    /// Resolves once a call is waiting at the gate
    pub async fn call_arrived(&self) {
        self.arrived.notified().await;
    }

    pub fn release_call(&self) {
        self.release.notify_one();
    }

    async fn gate(&self) {
        self.arrived.notify_one();
        self.release.notified().await;
    }

    pub fn ledger(&self) -> &InMemoryFactStore {
        &self.inner
    }
}

#[async_trait]
impl FactStore for GatedFactStore {
    async fn query_position(&self, player: &PlayerId) -> Result<Coordinate, FactStoreError> {
        self.inner.query_position(player).await
    }

    async fn query_location_text(&self, player: &PlayerId) -> Result<LocationText, FactStoreError> {
        self.gate().await;
        self.inner.query_location_text(player).await
    }

    async fn query_landmarks(&self, player: &PlayerId) -> Result<Vec<String>, FactStoreError> {
        self.inner.query_landmarks(player).await
    }

    async fn query_vitals(&self, player: &PlayerId) -> Result<RemoteVitals, FactStoreError> {
        self.inner.query_vitals(player).await
    }

    async fn query_hostile_presence(&self, player: &PlayerId) -> Result<bool, FactStoreError> {
        self.inner.query_hostile_presence(player).await
    }

    async fn submit_move(
        &self,
        player: &PlayerId,
        coordinate: Coordinate,
    ) -> Result<MoveReceipt, FactStoreError> {
        self.gate().await;
        match &self.move_failure {
            Some(error) => Err(error.clone()),
            None => self.inner.submit_move(player, coordinate).await,
        }
    }

    async fn register_player(
        &self,
        player: &PlayerId,
        name: &PlayerName,
    ) -> Result<(), FactStoreError> {
        self.inner.register_player(player, name).await
    }
}
