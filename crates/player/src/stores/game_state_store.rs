//! Local state store: holds the current `GameState` snapshot.
//!
//! Snapshots are immutable and swapped wholesale through a watch channel, so
//! observers always see a complete state and never a half-applied transition.

use std::sync::Arc;

use tokio::sync::watch;

use rise_domain::GameState;

pub struct GameStateStore {
    tx: watch::Sender<Arc<GameState>>,
}

impl GameStateStore {
    pub fn new(initial: GameState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<GameState> {
        self.tx.borrow().clone()
    }

    /// Replace the snapshot and notify observers
    pub fn replace(&self, next: GameState) {
        self.tx.send_replace(Arc::new(next));
    }

    /// Derive the next snapshot from the current one
    pub fn update<F>(&self, transition: F)
    where
        F: FnOnce(&GameState) -> GameState,
    {
        self.tx.send_modify(|current| {
            *current = Arc::new(transition(current));
        });
    }

    /// Derive the next snapshot, keeping the current one if `transition` fails
    pub fn try_update<F, E>(&self, transition: F) -> Result<(), E>
    where
        F: FnOnce(&GameState) -> Result<GameState, E>,
    {
        let next = transition(&self.snapshot())?;
        self.replace(next);
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<GameState>> {
        self.tx.subscribe()
    }
}
