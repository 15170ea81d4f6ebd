//! Infrastructure layer: ports and the adapters that implement them.

pub mod clock;
pub mod memory_ledger;
pub mod ports;
pub mod settings;
pub mod timeout_fact_store;
