//! Game session: the context object one player's commands run through.
//!
//! Owns the state store, the busy flag, the player identity, the interpreter
//! and the sync engine. One command runs at a time; anything submitted while a
//! command (including its ledger round trip) is in flight is rejected, not
//! queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use rise_domain::{
    Coordinate, DomainError, GameState, LocationKey, PlayerId, PlayerName, TranscriptLine, World,
};

use crate::infrastructure::ports::{ClockPort, FactStore, FactStoreError, RemoteVitals};
use crate::stores::GameStateStore;
use crate::use_cases::commands::CommandInterpreter;
use crate::use_cases::narration;
use crate::use_cases::sync::{SyncEngine, SyncError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Another command is still in flight")]
    Busy,

    /// The ledger placed the player somewhere the client has no map for
    #[error("Ledger position {0} does not match any known location")]
    UnknownPosition(Coordinate),

    #[error(transparent)]
    Remote(#[from] FactStoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of a submitted line
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Whitespace only; nothing happened
    Ignored,
    /// A command was already in flight; nothing happened
    Rejected,
    /// Answered locally
    Completed,
    /// A remote operation ran and settled
    Settled(Result<(), SyncError>),
}

/// How `start` found the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Known to the ledger; local location restored from it
    Resumed,
    /// Unknown to the ledger and registered just now
    Registered,
    /// No wallet identity configured
    Disconnected,
}

/// Clears the busy flag when dropped, on every exit path
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct GameSession {
    world: Arc<World>,
    store: Arc<GameStateStore>,
    facts: Arc<dyn FactStore>,
    interpreter: CommandInterpreter,
    sync: SyncEngine,
    player: Option<PlayerId>,
    player_name: PlayerName,
    busy: AtomicBool,
}

impl GameSession {
    pub fn new(
        world: Arc<World>,
        facts: Arc<dyn FactStore>,
        clock: Arc<dyn ClockPort>,
        player: Option<PlayerId>,
        player_name: PlayerName,
    ) -> Self {
        let store = Arc::new(GameStateStore::new(GameState::new_game(world.graph())));
        let interpreter = CommandInterpreter::new(world.clone());
        let sync = SyncEngine::new(world.clone(), facts.clone(), clock, store.clone());

        Self {
            world,
            store,
            facts,
            interpreter,
            sync,
            player,
            player_name,
            busy: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> Arc<GameState> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<GameState>> {
        self.store.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn player(&self) -> Option<&PlayerId> {
        self.player.as_ref()
    }

    /// Load the player from the ledger, registering them if the ledger has
    /// never seen them.
    ///
    /// # Errors
    ///
    /// - `SessionError::Busy` if a command is in flight
    /// - `SessionError::UnknownPosition` if the ledger position maps to no
    ///   known location (the local location is left alone)
    /// - `SessionError::Remote` if loading or registration fails
    ///
    /// Every failure except `Busy` is also written to the transcript.
    pub async fn start(&self) -> Result<StartOutcome, SessionError> {
        let _busy = BusyGuard::acquire(&self.busy).ok_or(SessionError::Busy)?;

        self.store.update(|state| state.with_lines(narration::banner()));

        let Some(player) = &self.player else {
            tracing::info!("No wallet configured, running disconnected");
            self.store
                .update(|state| state.with_line(TranscriptLine::error(narration::CONNECT_WALLET)));
            return Ok(StartOutcome::Disconnected);
        };

        match self.load_player(player).await {
            Ok((location, vitals)) => {
                self.resume(location, vitals)?;
                tracing::info!(player_id = %player, "Player resumed from ledger");
                Ok(StartOutcome::Resumed)
            }
            Err(SessionError::Remote(FactStoreError::PlayerNotFound)) => {
                self.register(player).await
            }
            Err(err) => {
                tracing::warn!(player_id = %player, error = %err, "Failed to load player");
                self.store.update(|state| {
                    state.with_line(TranscriptLine::error(format!(
                        "Failed to load player from the ledger: {}",
                        err
                    )))
                });
                Err(err)
            }
        }
    }

    async fn load_player(
        &self,
        player: &PlayerId,
    ) -> Result<(LocationKey, RemoteVitals), SessionError> {
        let coordinate = self.facts.query_position(player).await?;
        let location = self
            .world
            .coordinates()
            .to_location(coordinate)
            .cloned()
            .ok_or(SessionError::UnknownPosition(coordinate))?;
        let vitals = self.facts.query_vitals(player).await?;
        Ok((location, vitals))
    }

    fn resume(&self, location: LocationKey, vitals: RemoteVitals) -> Result<(), SessionError> {
        let node = self.world.graph().location(&location)?;
        let lines = vec![
            TranscriptLine::success(format!(
                "Welcome back, {}! Loading your journey from the ledger...",
                self.player_name
            )),
            TranscriptLine::normal(format!("Location: {}", node.name())),
            TranscriptLine::normal(format!(
                "Health: {} | Level: {} | XP: {}",
                vitals.health, vitals.level, vitals.experience
            )),
            TranscriptLine::blank(),
            TranscriptLine::normal(narration::HELP_HINT),
        ];

        self.store
            .update(|state| state.with_lines(lines).with_location(location.clone()));
        Ok(())
    }

    async fn register(&self, player: &PlayerId) -> Result<StartOutcome, SessionError> {
        let placeholder_index = self.store.snapshot().next_index();
        self.store
            .update(|state| state.with_line(TranscriptLine::warning(narration::REGISTER_PENDING)));

        tracing::info!(player_id = %player, name = %self.player_name, "Registering new player");
        match self.facts.register_player(player, &self.player_name).await {
            Ok(()) => {
                let start = self.world.graph().start().clone();
                let lines = narration::new_player_story(self.world.graph().location(&start)?);
                self.store.try_update(|state| {
                    Ok::<_, DomainError>(
                        state
                            .resolve_placeholder(placeholder_index, lines)?
                            .with_location(start.clone()),
                    )
                })?;
                Ok(StartOutcome::Registered)
            }
            Err(err) => {
                tracing::warn!(player_id = %player, error = %err, "Player registration failed");
                let line =
                    TranscriptLine::error(format!("Failed to initialize player: {}", err));
                self.store
                    .try_update(|state| state.resolve_placeholder(placeholder_index, [line]))?;
                Err(err.into())
            }
        }
    }

    /// Run one line of player input to completion.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        if input.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!(input = input, "Command rejected while busy");
            return SubmitOutcome::Rejected;
        };

        let Some(player) = &self.player else {
            self.store.update(|state| {
                state.with_lines([
                    TranscriptLine::echo(input),
                    TranscriptLine::error(narration::CONNECT_WALLET),
                ])
            });
            return SubmitOutcome::Completed;
        };

        let interpretation = match self.interpreter.interpret(&self.store.snapshot(), input) {
            Ok(interpretation) => interpretation,
            Err(err) => {
                tracing::error!(error = %err, "Snapshot refers to a location outside the world");
                self.store.update(|state| {
                    state.with_lines([
                        TranscriptLine::echo(input),
                        TranscriptLine::error(format!("Internal error: {}", err)),
                    ])
                });
                return SubmitOutcome::Settled(Err(err.into()));
            }
        };

        self.store.replace(interpretation.state);

        match interpretation.dispatch {
            None => SubmitOutcome::Completed,
            Some(dispatch) => {
                let pending = self.sync.begin(dispatch);
                SubmitOutcome::Settled(self.sync.execute(player, pending).await)
            }
        }
    }
}
