//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - The ledger (in-memory simulation today, a chain client later)
//! - Clock (for testing)

mod error;
mod fact_store;
mod testing;

pub use error::FactStoreError;
pub use fact_store::{FactStore, LocationText, MoveReceipt, RemoteVitals};
pub use testing::ClockPort;

#[cfg(test)]
pub use fact_store::MockFactStore;
#[cfg(test)]
pub use testing::MockClockPort;
