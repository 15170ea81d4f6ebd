//! Command interpreter: raw text to the next snapshot plus an optional
//! remote action.
//!
//! Pure with respect to its inputs. Local commands are fully answered here;
//! remote-confirmed and read-through commands leave a placeholder as the last
//! transcript line and hand a `Dispatch` to the sync engine. The interpreter
//! never changes the current location.

use std::sync::Arc;

use rise_domain::{
    Direction, DomainError, GameState, LocationKey, Severity, TranscriptLine, World,
};

use super::command::Command;
use crate::use_cases::narration;

/// Work the ledger has to do before a command is finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAction {
    Move {
        direction: Direction,
        destination: LocationKey,
    },
    Look,
    Score,
}

impl RemoteAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Look => "look",
            Self::Score => "score",
        }
    }
}

/// A remote action and the transcript index of its placeholder line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub action: RemoteAction,
    pub placeholder_index: usize,
}

#[derive(Debug, Clone)]
pub struct Interpretation {
    pub state: GameState,
    pub dispatch: Option<Dispatch>,
}

impl Interpretation {
    fn local(state: GameState) -> Self {
        Self {
            state,
            dispatch: None,
        }
    }

    fn remote(state: GameState, action: RemoteAction, placeholder: TranscriptLine) -> Self {
        let placeholder_index = state.next_index();
        Self {
            state: state.with_line(placeholder),
            dispatch: Some(Dispatch {
                action,
                placeholder_index,
            }),
        }
    }
}

pub struct CommandInterpreter {
    world: Arc<World>,
}

impl CommandInterpreter {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    /// Interpret `raw` against `state`.
    ///
    /// # Errors
    ///
    /// `DomainError::UnknownLocation` if the snapshot's location is not in
    /// the world graph, which means the snapshot was built wrongly.
    pub fn interpret(&self, state: &GameState, raw: &str) -> Result<Interpretation, DomainError> {
        let Some(command) = Command::parse(raw) else {
            return Ok(Interpretation::local(state.clone()));
        };

        let echoed = state.with_line(TranscriptLine::echo(raw));

        let interpretation = match command {
            Command::Move(direction) => {
                let here = self.world.graph().location(state.location())?;
                match self.world.graph().exit(here, direction) {
                    Some(destination) => Interpretation::remote(
                        echoed,
                        RemoteAction::Move {
                            direction,
                            destination: destination.clone(),
                        },
                        TranscriptLine::warning(narration::MOVE_PENDING),
                    ),
                    None => Interpretation::local(
                        echoed.with_line(TranscriptLine::warning(narration::NO_EXIT)),
                    ),
                }
            }
            Command::Look => Interpretation::remote(
                echoed,
                RemoteAction::Look,
                TranscriptLine::normal(narration::LOOK_PENDING),
            ),
            Command::Score => Interpretation::remote(
                echoed,
                RemoteAction::Score,
                TranscriptLine::normal(narration::SCORE_PENDING),
            ),
            Command::Inventory => Interpretation::local(echoed.with_lines(inventory_lines(state))),
            Command::Map => {
                let here = self.world.graph().location(state.location())?;
                let mut lines = vec![
                    TranscriptLine::blank(),
                    TranscriptLine::normal("You consult your tattered map..."),
                    TranscriptLine::blank(),
                    TranscriptLine::highlight("Landmarks visible from here:"),
                ];
                lines.extend(
                    here.landmarks()
                        .iter()
                        .map(|landmark| TranscriptLine::normal(format!("  • {}", landmark))),
                );
                Interpretation::local(echoed.with_lines(lines))
            }
            Command::Help => Interpretation::local(echoed.with_lines(narration::help_lines())),
            Command::Unknown => Interpretation::local(
                echoed.with_line(TranscriptLine::error(narration::UNKNOWN_COMMAND)),
            ),
        };

        Ok(interpretation)
    }
}

fn inventory_lines(state: &GameState) -> Vec<TranscriptLine> {
    let mut lines = vec![
        TranscriptLine::blank(),
        TranscriptLine::highlight("You are carrying:"),
    ];

    if state.inventory().is_empty() {
        lines.push(TranscriptLine::warning(narration::EMPTY_POCKETS));
        return lines;
    }

    lines.extend(state.inventory().iter().map(|item| {
        if item.category().is_spoiled() {
            TranscriptLine::new(format!("  - {} (spoiled)", item.name()), Severity::Warning)
        } else {
            TranscriptLine::normal(format!("  - {}", item.name()))
        }
    }));
    lines
}
