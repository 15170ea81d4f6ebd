//! Use cases: interpreting commands and reconciling them with the ledger.

pub mod commands;
pub mod narration;
pub mod session;
pub mod sync;

pub use session::{GameSession, SessionError, StartOutcome, SubmitOutcome};
