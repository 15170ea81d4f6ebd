//! GameState - the immutable snapshot the client renders.
//!
//! Every transition consumes a reference and returns a new value; holders swap
//! the whole snapshot rather than mutating fields in place. The transcript is
//! append-only except for its last line, which a settling remote operation may
//! replace.

use serde::{Deserialize, Serialize};

use crate::entities::InventoryItem;
use crate::error::DomainError;
use crate::state::TranscriptLine;
use crate::value_objects::{LocationKey, Vitals};
use crate::world::{initial_vitals, starting_inventory, WorldGraph};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    location: LocationKey,
    inventory: Vec<InventoryItem>,
    vitals: Vitals,
    transcript: Vec<TranscriptLine>,
}

impl GameState {
    pub fn new(
        location: LocationKey,
        inventory: Vec<InventoryItem>,
        vitals: Vitals,
        transcript: Vec<TranscriptLine>,
    ) -> Self {
        Self {
            location,
            inventory,
            vitals,
            transcript,
        }
    }

    /// Fresh survivor at the graph's start location with the starting kit
    /// and an empty transcript.
    pub fn new_game(graph: &WorldGraph) -> Self {
        Self::new(
            graph.start().clone(),
            starting_inventory(),
            initial_vitals(),
            Vec::new(),
        )
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Append lines to the transcript
    pub fn with_lines(&self, lines: impl IntoIterator<Item = TranscriptLine>) -> Self {
        let mut next = self.clone();
        next.transcript.extend(lines);
        next
    }

    pub fn with_line(&self, line: TranscriptLine) -> Self {
        self.with_lines(std::iter::once(line))
    }

    pub fn with_location(&self, location: LocationKey) -> Self {
        let mut next = self.clone();
        next.location = location;
        next
    }

    pub fn with_inventory(&self, inventory: Vec<InventoryItem>) -> Self {
        let mut next = self.clone();
        next.inventory = inventory;
        next
    }

    /// Replace the placeholder at `index` with `lines`.
    ///
    /// Only the tail may be replaced: the placeholder must be the last line.
    ///
    /// # Errors
    ///
    /// `DomainError::PlaceholderMismatch` if `index` is not the last index of
    /// the transcript. The snapshot is left as it was.
    pub fn resolve_placeholder(
        &self,
        index: usize,
        lines: impl IntoIterator<Item = TranscriptLine>,
    ) -> Result<Self, DomainError> {
        let len = self.transcript.len();
        if len == 0 || index != len - 1 {
            return Err(DomainError::PlaceholderMismatch {
                expected: index,
                len,
            });
        }

        let mut next = self.clone();
        next.transcript.truncate(index);
        next.transcript.extend(lines);
        Ok(next)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn location(&self) -> &LocationKey {
        &self.location
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn last_line(&self) -> Option<&TranscriptLine> {
        self.transcript.last()
    }

    /// Index the next appended line will occupy
    pub fn next_index(&self) -> usize {
        self.transcript.len()
    }
}
