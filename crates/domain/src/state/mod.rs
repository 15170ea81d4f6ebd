//! Client-side game state.

mod game_state;
mod transcript;

pub use game_state::GameState;
pub use transcript::{Severity, TranscriptLine};
