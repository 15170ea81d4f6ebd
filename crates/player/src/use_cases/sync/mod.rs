//! Optimistic-apply and read-through reconciliation with the ledger.

mod engine;
mod pending;

pub use engine::{RemoteOutcome, SyncEngine, SyncError};
pub use pending::PendingOperation;
