//! Rise player client.
//!
//! A text-adventure client whose state is reconciled with a remote ledger:
//! commands run against a local snapshot, moves take effect only once the
//! ledger accepts them, and look/stats are read live.

pub mod app;
pub mod console;
pub mod infrastructure;
pub mod stores;
pub mod terminal;
pub mod use_cases;

pub use app::App;
pub use use_cases::{GameSession, SessionError, StartOutcome, SubmitOutcome};
