//! Application composition.

use std::sync::Arc;

use rise_domain::{DomainError, World};

use crate::infrastructure::{
    clock::SystemClock,
    memory_ledger::{InMemoryFactStore, LedgerConfig},
    ports::{ClockPort, FactStore},
    settings::Settings,
    timeout_fact_store::{TimeoutConfig, TimeoutFactStore},
};
use crate::use_cases::GameSession;

/// Main application state.
///
/// Holds the loaded world, the ledger client and the player's session.
pub struct App {
    pub world: Arc<World>,
    pub facts: Arc<dyn FactStore>,
    pub session: Arc<GameSession>,
}

impl App {
    /// Wire a session around an arbitrary ledger client. The client is
    /// wrapped in the configured per-call timeout.
    pub fn new(
        settings: &Settings,
        world: Arc<World>,
        ledger: Arc<dyn FactStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let facts: Arc<dyn FactStore> = Arc::new(TimeoutFactStore::new(
            ledger,
            TimeoutConfig {
                timeout_ms: settings.remote_timeout_ms,
            },
        ));

        let session = Arc::new(GameSession::new(
            world.clone(),
            facts.clone(),
            clock,
            settings.player_id.clone(),
            settings.player_name.clone(),
        ));

        Self {
            world,
            facts,
            session,
        }
    }

    /// Seeded world backed by the in-memory ledger simulation.
    ///
    /// # Errors
    ///
    /// `DomainError::Configuration` if the seeded world is inconsistent or its
    /// start location has no ledger coordinate.
    pub fn in_memory(settings: &Settings) -> Result<Self, DomainError> {
        let world = Arc::new(World::seeded()?);
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        let ledger = Arc::new(InMemoryFactStore::from_world(
            &world,
            clock.clone(),
            LedgerConfig {
                latency_ms: settings.ledger_latency_ms,
                failure_rate: settings.ledger_failure_rate,
            },
        )?);
        tracing::info!(
            latency_ms = settings.ledger_latency_ms,
            failure_rate = settings.ledger_failure_rate,
            timeout_ms = settings.remote_timeout_ms,
            "In-memory ledger configured"
        );

        Ok(Self::new(settings, world, ledger, clock))
    }
}
