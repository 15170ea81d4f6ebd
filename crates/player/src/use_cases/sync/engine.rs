//! Sync engine: reconciles the local snapshot with the ledger.
//!
//! Remote-confirmed moves are applied only after the ledger accepts them.
//! Read-through queries replace their placeholder with whatever the ledger
//! reports and never touch any local field but the transcript. Every settle
//! replaces exactly the placeholder at the tail of the transcript.

use std::sync::Arc;

use rise_domain::{
    clamp_vital, is_low, Coordinate, Direction, DomainError, GameState, LocationKey, OperationId,
    PlayerId, Severity, TranscriptLine, World,
};

use super::pending::PendingOperation;
use crate::infrastructure::ports::{
    ClockPort, FactStore, FactStoreError, LocationText, MoveReceipt, RemoteVitals,
};
use crate::stores::GameStateStore;
use crate::use_cases::commands::{Dispatch, RemoteAction};
use crate::use_cases::narration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncError {
    /// The destination has no ledger coordinate, so it cannot be confirmed
    #[error("no ledger coordinate for {0}")]
    UnmappedDestination(LocationKey),

    #[error(transparent)]
    Remote(#[from] FactStoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// What the ledger answered for a pending operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    Moved {
        direction: Direction,
        destination: LocationKey,
        coordinate: Coordinate,
        receipt: MoveReceipt,
    },
    Looked {
        text: LocationText,
        landmarks: Vec<String>,
        hostile: bool,
    },
    Scored(RemoteVitals),
}

pub struct SyncEngine {
    world: Arc<World>,
    facts: Arc<dyn FactStore>,
    clock: Arc<dyn ClockPort>,
    store: Arc<GameStateStore>,
}

impl SyncEngine {
    pub fn new(
        world: Arc<World>,
        facts: Arc<dyn FactStore>,
        clock: Arc<dyn ClockPort>,
        store: Arc<GameStateStore>,
    ) -> Self {
        Self {
            world,
            facts,
            clock,
            store,
        }
    }

    /// Stamp a dispatch as an in-flight operation.
    pub fn begin(&self, dispatch: Dispatch) -> PendingOperation {
        let pending = PendingOperation {
            id: OperationId::new(),
            action: dispatch.action,
            placeholder_index: dispatch.placeholder_index,
            started_at: self.clock.now(),
        };
        tracing::info!(
            operation_id = %pending.id,
            action = pending.action.name(),
            placeholder_index = pending.placeholder_index,
            "Remote operation started"
        );
        pending
    }

    /// Run the remote call for `pending` and settle it.
    ///
    /// The placeholder stays the last transcript line for the whole call.
    /// Returns the remote failure, if any, after it has been written to the
    /// transcript.
    pub async fn execute(
        &self,
        player: &PlayerId,
        pending: PendingOperation,
    ) -> Result<(), SyncError> {
        match self.call_remote(player, &pending).await {
            Ok(outcome) => self.settle_success(&pending, outcome),
            Err(error) => {
                self.settle_failure(&pending, &error)?;
                Err(error)
            }
        }
    }

    async fn call_remote(
        &self,
        player: &PlayerId,
        pending: &PendingOperation,
    ) -> Result<RemoteOutcome, SyncError> {
        match &pending.action {
            RemoteAction::Move {
                direction,
                destination,
            } => {
                let coordinate = self
                    .world
                    .coordinates()
                    .to_coordinate(destination)
                    .ok_or_else(|| SyncError::UnmappedDestination(destination.clone()))?;

                tracing::debug!(
                    operation_id = %pending.id,
                    player_id = %player,
                    coordinate = %coordinate,
                    "Submitting move to ledger"
                );
                let receipt = self.facts.submit_move(player, coordinate).await?;

                Ok(RemoteOutcome::Moved {
                    direction: *direction,
                    destination: destination.clone(),
                    coordinate,
                    receipt,
                })
            }
            RemoteAction::Look => {
                let text = self.facts.query_location_text(player).await?;
                let landmarks = self.facts.query_landmarks(player).await?;
                let hostile = self.facts.query_hostile_presence(player).await?;
                Ok(RemoteOutcome::Looked {
                    text,
                    landmarks,
                    hostile,
                })
            }
            RemoteAction::Score => Ok(RemoteOutcome::Scored(
                self.facts.query_vitals(player).await?,
            )),
        }
    }

    /// Replace the placeholder with the ledger's answer.
    ///
    /// A confirmed move also sets the current location; nothing else local
    /// changes.
    pub fn settle_success(
        &self,
        pending: &PendingOperation,
        outcome: RemoteOutcome,
    ) -> Result<(), SyncError> {
        let elapsed_ms = self.elapsed_ms(pending);

        match outcome {
            RemoteOutcome::Moved {
                direction,
                destination,
                coordinate,
                receipt,
            } => {
                let node = self.world.graph().location(&destination)?;
                let mut lines = vec![
                    TranscriptLine::success("Movement recorded on the ledger"),
                    TranscriptLine::blank(),
                    TranscriptLine::normal(format!("You move {}...", direction.word())),
                    TranscriptLine::blank(),
                    TranscriptLine::highlight(node.name()),
                    TranscriptLine::normal(node.description()),
                    TranscriptLine::normal(format!("Position: {}", coordinate)),
                ];
                lines.push(narration::exits_line(node));

                self.resolve(pending, |state| {
                    Ok(state
                        .resolve_placeholder(pending.placeholder_index, lines)?
                        .with_location(destination.clone()))
                })?;

                tracing::info!(
                    operation_id = %pending.id,
                    transaction_id = %receipt.transaction_id,
                    destination = %destination,
                    elapsed_ms = elapsed_ms,
                    "Move confirmed by ledger"
                );
            }
            RemoteOutcome::Looked {
                text,
                landmarks,
                hostile,
            } => {
                let mut lines = vec![
                    TranscriptLine::success("Location data from the ledger:"),
                    TranscriptLine::blank(),
                    TranscriptLine::highlight(text.name),
                    TranscriptLine::normal(text.description),
                ];
                if !landmarks.is_empty() {
                    lines.push(TranscriptLine::blank());
                    lines.push(TranscriptLine::normal("Nearby landmarks:"));
                    lines.extend(
                        landmarks
                            .iter()
                            .map(|landmark| TranscriptLine::normal(format!("  • {}", landmark))),
                    );
                }
                if hostile {
                    lines.push(TranscriptLine::warning(narration::HOSTILE_NEARBY));
                }

                self.resolve(pending, |state| {
                    state.resolve_placeholder(pending.placeholder_index, lines)
                })?;

                tracing::debug!(
                    operation_id = %pending.id,
                    landmarks = landmarks.len(),
                    hostile = hostile,
                    elapsed_ms = elapsed_ms,
                    "Look answered by ledger"
                );
            }
            RemoteOutcome::Scored(vitals) => {
                self.resolve(pending, |state| {
                    let lines = status_lines(state, vitals);
                    state.resolve_placeholder(pending.placeholder_index, lines)
                })?;

                tracing::debug!(
                    operation_id = %pending.id,
                    health = vitals.health,
                    level = vitals.level,
                    elapsed_ms = elapsed_ms,
                    "Stats answered by ledger"
                );
            }
        }

        Ok(())
    }

    /// Replace the placeholder with a single error line. Location is unchanged.
    pub fn settle_failure(
        &self,
        pending: &PendingOperation,
        error: &SyncError,
    ) -> Result<(), SyncError> {
        let line = match pending.action {
            RemoteAction::Move { .. } => {
                TranscriptLine::error(format!("Ledger transaction failed: {}", error))
            }
            RemoteAction::Look | RemoteAction::Score => {
                TranscriptLine::error(format!("Ledger query failed: {}", error))
            }
        };

        self.resolve(pending, |state| {
            state.resolve_placeholder(pending.placeholder_index, [line])
        })?;

        tracing::warn!(
            operation_id = %pending.id,
            action = pending.action.name(),
            error = %error,
            elapsed_ms = self.elapsed_ms(pending),
            "Remote operation failed"
        );
        Ok(())
    }

    /// Apply a placeholder-resolving transition. If the placeholder is no
    /// longer the tail, the snapshot is kept and the mismatch is appended as
    /// an error instead.
    fn resolve<F>(&self, pending: &PendingOperation, transition: F) -> Result<(), SyncError>
    where
        F: FnOnce(&GameState) -> Result<GameState, DomainError>,
    {
        if let Err(err) = self.store.try_update(transition) {
            tracing::error!(
                operation_id = %pending.id,
                error = %err,
                "Pending operation could not settle"
            );
            let line = TranscriptLine::error(format!("Internal error: {}", err));
            self.store.update(|state| state.with_line(line));
            return Err(err.into());
        }
        Ok(())
    }

    fn elapsed_ms(&self, pending: &PendingOperation) -> i64 {
        (self.clock.now() - pending.started_at).num_milliseconds()
    }
}

/// Status block: health, level and experience from the ledger; hunger and
/// thirst from the local snapshot.
fn status_lines(state: &GameState, remote: RemoteVitals) -> Vec<TranscriptLine> {
    let health = clamp_vital(i64::from(remote.health));
    let local = state.vitals();
    let tagged = |value: u8, otherwise: Severity| {
        if is_low(value) {
            Severity::Warning
        } else {
            otherwise
        }
    };

    vec![
        TranscriptLine::blank(),
        TranscriptLine::highlight("Your Status:"),
        TranscriptLine::new(
            format!("  Health: {}/100", health),
            tagged(health, Severity::Success),
        ),
        TranscriptLine::new(
            format!("  Hunger: {}/100", local.hunger()),
            tagged(local.hunger(), Severity::Normal),
        ),
        TranscriptLine::new(
            format!("  Thirst: {}/100", local.thirst()),
            tagged(local.thirst(), Severity::Normal),
        ),
        TranscriptLine::normal(format!("  Level: {}", remote.level)),
        TranscriptLine::normal(format!("  Experience: {}", remote.experience)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockClockPort, MockFactStore};
    use chrono::{TimeZone, Utc};
    use rise_domain::{CoordinateMapper, LocationNode, TransactionId, WorldGraph};

    fn key(raw: &str) -> LocationKey {
        LocationKey::new(raw).unwrap()
    }

    fn player() -> PlayerId {
        PlayerId::new("0xabc").unwrap()
    }

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2089, 3, 1, 12, 0, 0).unwrap()))
    }

    fn receipt() -> MoveReceipt {
        MoveReceipt {
            transaction_id: TransactionId::new(),
            recorded_at: Utc.with_ymd_and_hms(2089, 3, 1, 12, 0, 1).unwrap(),
        }
    }

    /// Engine whose transcript ends with `placeholder` at index 1
    fn setup_with(
        world: World,
        facts: MockFactStore,
        placeholder: &str,
    ) -> (SyncEngine, Arc<GameStateStore>) {
        let world = Arc::new(world);
        let state = GameState::new_game(world.graph())
            .with_lines([TranscriptLine::echo("cmd"), TranscriptLine::warning(placeholder)]);
        let store = Arc::new(GameStateStore::new(state));
        let engine = SyncEngine::new(world, Arc::new(facts), clock(), store.clone());
        (engine, store)
    }

    fn setup(facts: MockFactStore, placeholder: &str) -> (SyncEngine, Arc<GameStateStore>) {
        setup_with(World::seeded().unwrap(), facts, placeholder)
    }

    fn move_north(engine: &SyncEngine) -> PendingOperation {
        engine.begin(Dispatch {
            action: RemoteAction::Move {
                direction: Direction::North,
                destination: key("old_road"),
            },
            placeholder_index: 1,
        })
    }

    #[test]
    fn when_operation_begins_then_it_is_stamped_by_the_clock() {
        let now = Utc.with_ymd_and_hms(2089, 3, 1, 8, 30, 0).unwrap();
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(move || now);

        let world = Arc::new(World::seeded().unwrap());
        let store = Arc::new(GameStateStore::new(GameState::new_game(world.graph())));
        let engine = SyncEngine::new(world, Arc::new(MockFactStore::new()), Arc::new(clock), store);

        let pending = engine.begin(Dispatch {
            action: RemoteAction::Look,
            placeholder_index: 0,
        });

        assert_eq!(pending.started_at, now);
        assert_eq!(pending.placeholder_index, 0);
    }

    #[tokio::test]
    async fn when_move_is_confirmed_then_location_changes_and_placeholder_is_replaced() {
        let mut facts = MockFactStore::new();
        facts
            .expect_submit_move()
            .withf(|p, c| p.as_str() == "0xabc" && *c == Coordinate::new(0, 5))
            .times(1)
            .returning(|_, _| Ok(receipt()));
        let (engine, store) = setup(facts, narration::MOVE_PENDING);

        let pending = move_north(&engine);
        engine.execute(&player(), pending).await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.location().as_str(), "old_road");
        let texts: Vec<_> = state.transcript().iter().map(|l| l.text.as_str()).collect();
        assert!(!texts.contains(&narration::MOVE_PENDING));
        assert_eq!(texts[1], "Movement recorded on the ledger");
        assert_eq!(texts[3], "You move north...");
        assert_eq!(texts[5], "The Old Road");
        assert_eq!(texts[7], "Position: (0, 5)");
        assert_eq!(texts[8], "Obvious exits: s, e, w");
        assert_eq!(texts.len(), 9);
    }

    #[tokio::test]
    async fn when_move_is_rejected_then_one_error_line_replaces_placeholder() {
        let mut facts = MockFactStore::new();
        facts
            .expect_submit_move()
            .times(1)
            .returning(|_, _| Err(FactStoreError::rejected("out of gas")));
        let (engine, store) = setup(facts, narration::MOVE_PENDING);

        let pending = move_north(&engine);
        let err = engine.execute(&player(), pending).await.unwrap_err();

        assert_eq!(err, SyncError::Remote(FactStoreError::rejected("out of gas")));
        let state = store.snapshot();
        assert_eq!(state.location().as_str(), "wasteland_start");
        assert_eq!(
            state.transcript(),
            &[
                TranscriptLine::echo("cmd"),
                TranscriptLine::error(
                    "Ledger transaction failed: Transaction rejected: out of gas",
                ),
            ]
        );
    }

    #[tokio::test]
    async fn when_destination_is_unmapped_then_no_remote_call_is_made() {
        let graph = WorldGraph::new(
            vec![
                LocationNode::new(key("camp"), "Camp", "A fire pit.")
                    .with_exit(Direction::East, key("ridge")),
                LocationNode::new(key("ridge"), "Ridge", "Wind and rock.")
                    .with_exit(Direction::West, key("camp")),
            ],
            key("camp"),
        )
        .unwrap();
        let mapper =
            CoordinateMapper::new(vec![(key("camp"), Coordinate::new(0, 0))], &graph).unwrap();
        // No expectations: any ledger call fails the test
        let (engine, store) = setup_with(
            World::new(graph, mapper),
            MockFactStore::new(),
            narration::MOVE_PENDING,
        );

        let pending = engine.begin(Dispatch {
            action: RemoteAction::Move {
                direction: Direction::East,
                destination: key("ridge"),
            },
            placeholder_index: 1,
        });
        let err = engine.execute(&player(), pending).await.unwrap_err();

        assert_eq!(err, SyncError::UnmappedDestination(key("ridge")));
        let state = store.snapshot();
        assert_eq!(state.location().as_str(), "camp");
        assert_eq!(
            state.last_line(),
            Some(&TranscriptLine::error(
                "Ledger transaction failed: no ledger coordinate for ridge"
            ))
        );
    }

    #[tokio::test]
    async fn when_look_succeeds_then_ledger_text_and_landmarks_are_rendered() {
        let mut facts = MockFactStore::new();
        facts.expect_query_location_text().times(1).returning(|_| {
            Ok(LocationText {
                name: "Cave Entrance".to_string(),
                description: "A dark cave.".to_string(),
            })
        });
        facts
            .expect_query_landmarks()
            .times(1)
            .returning(|_| Ok(vec!["dark cave mouth".to_string(), "shelter".to_string()]));
        facts
            .expect_query_hostile_presence()
            .times(1)
            .returning(|_| Ok(true));
        let (engine, store) = setup(facts, narration::LOOK_PENDING);

        let pending = engine.begin(Dispatch {
            action: RemoteAction::Look,
            placeholder_index: 1,
        });
        engine.execute(&player(), pending).await.unwrap();

        let state = store.snapshot();
        assert_eq!(
            &state.transcript()[1..],
            &[
                TranscriptLine::success("Location data from the ledger:"),
                TranscriptLine::blank(),
                TranscriptLine::highlight("Cave Entrance"),
                TranscriptLine::normal("A dark cave."),
                TranscriptLine::blank(),
                TranscriptLine::normal("Nearby landmarks:"),
                TranscriptLine::normal("  • dark cave mouth"),
                TranscriptLine::normal("  • shelter"),
                TranscriptLine::warning(narration::HOSTILE_NEARBY),
            ]
        );
        // Read-through never moves the player
        assert_eq!(state.location().as_str(), "wasteland_start");
    }

    #[tokio::test]
    async fn when_look_fails_then_placeholder_becomes_query_error() {
        let mut facts = MockFactStore::new();
        facts
            .expect_query_location_text()
            .times(1)
            .returning(|_| Err(FactStoreError::network("connection reset")));
        let (engine, store) = setup(facts, narration::LOOK_PENDING);

        let pending = engine.begin(Dispatch {
            action: RemoteAction::Look,
            placeholder_index: 1,
        });
        assert!(engine.execute(&player(), pending).await.is_err());

        let state = store.snapshot();
        assert_eq!(state.transcript().len(), 2);
        assert_eq!(
            state.last_line(),
            Some(&TranscriptLine::error(
                "Ledger query failed: Network error: connection reset"
            ))
        );
    }

    #[tokio::test]
    async fn when_score_is_answered_then_remote_health_and_local_needs_are_shown() {
        let mut facts = MockFactStore::new();
        facts.expect_query_vitals().times(1).returning(|_| {
            Ok(RemoteVitals {
                health: 12,
                experience: 40,
                level: 2,
            })
        });
        let (engine, store) = setup(facts, narration::SCORE_PENDING);
        let vitals_before = store.snapshot().vitals();

        let pending = engine.begin(Dispatch {
            action: RemoteAction::Score,
            placeholder_index: 1,
        });
        engine.execute(&player(), pending).await.unwrap();

        let state = store.snapshot();
        let tail = &state.transcript()[1..];
        assert_eq!(tail[1], TranscriptLine::highlight("Your Status:"));
        assert_eq!(tail[2], TranscriptLine::warning("  Health: 12/100"));
        assert_eq!(tail[3], TranscriptLine::normal("  Hunger: 75/100"));
        assert_eq!(tail[4], TranscriptLine::normal("  Thirst: 60/100"));
        assert_eq!(tail[5], TranscriptLine::normal("  Level: 2"));
        assert_eq!(tail[6], TranscriptLine::normal("  Experience: 40"));
        assert_eq!(state.vitals(), vitals_before);
    }

    #[tokio::test]
    async fn when_placeholder_is_not_the_tail_then_settle_reports_a_mismatch() {
        let mut facts = MockFactStore::new();
        facts
            .expect_submit_move()
            .times(1)
            .returning(|_, _| Ok(receipt()));
        let (engine, store) = setup(facts, narration::MOVE_PENDING);
        let pending = move_north(&engine);
        store.update(|state| state.with_line(TranscriptLine::normal("stray line")));

        let err = engine.execute(&player(), pending).await.unwrap_err();

        assert_eq!(
            err,
            SyncError::Domain(DomainError::PlaceholderMismatch {
                expected: 1,
                len: 3
            })
        );
        let state = store.snapshot();
        assert_eq!(state.location().as_str(), "wasteland_start");
        assert_eq!(state.transcript()[1].text, narration::MOVE_PENDING);
        assert_eq!(state.last_line().unwrap().severity, Severity::Error);
    }
}
