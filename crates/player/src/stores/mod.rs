//! In-process stores.

mod game_state_store;

pub use game_state_store::GameStateStore;
