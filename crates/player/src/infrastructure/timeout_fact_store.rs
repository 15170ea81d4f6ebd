//! Timeout wrapper for fact store calls
//!
//! Wraps any FactStore implementation and bounds every call by a fixed
//! budget. An elapsed budget surfaces as `FactStoreError::Timeout`; the
//! inner call is dropped, so a mutation may still land on the ledger.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use rise_domain::{Coordinate, PlayerId, PlayerName};

use crate::infrastructure::ports::{
    FactStore, FactStoreError, LocationText, MoveReceipt, RemoteVitals,
};

/// Configuration for call timeouts
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Budget for each individual call in milliseconds
    pub timeout_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            timeout_ms: crate::infrastructure::settings::DEFAULT_REMOTE_TIMEOUT_MS,
        }
    }
}

/// Wrapper that adds a per-call timeout to any fact store
pub struct TimeoutFactStore {
    inner: Arc<dyn FactStore>,
    config: TimeoutConfig,
}

impl TimeoutFactStore {
    pub fn new(inner: Arc<dyn FactStore>, config: TimeoutConfig) -> Self {
        Self { inner, config }
    }

    async fn bounded<T, Fut>(&self, operation: &'static str, call: Fut) -> Result<T, FactStoreError>
    where
        Fut: Future<Output = Result<T, FactStoreError>> + Send,
    {
        let budget = Duration::from_millis(self.config.timeout_ms);
        match tokio::time::timeout(budget, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    operation = operation,
                    timeout_ms = self.config.timeout_ms,
                    "Ledger call timed out"
                );
                Err(FactStoreError::Timeout(self.config.timeout_ms))
            }
        }
    }
}

#[async_trait]
impl FactStore for TimeoutFactStore {
    async fn query_position(&self, player: &PlayerId) -> Result<Coordinate, FactStoreError> {
        self.bounded("query_position", self.inner.query_position(player))
            .await
    }

    async fn query_location_text(
        &self,
        player: &PlayerId,
    ) -> Result<LocationText, FactStoreError> {
        self.bounded("query_location_text", self.inner.query_location_text(player))
            .await
    }

    async fn query_landmarks(&self, player: &PlayerId) -> Result<Vec<String>, FactStoreError> {
        self.bounded("query_landmarks", self.inner.query_landmarks(player))
            .await
    }

    async fn query_vitals(&self, player: &PlayerId) -> Result<RemoteVitals, FactStoreError> {
        self.bounded("query_vitals", self.inner.query_vitals(player))
            .await
    }

    async fn query_hostile_presence(&self, player: &PlayerId) -> Result<bool, FactStoreError> {
        self.bounded(
            "query_hostile_presence",
            self.inner.query_hostile_presence(player),
        )
        .await
    }

    async fn submit_move(
        &self,
        player: &PlayerId,
        coordinate: Coordinate,
    ) -> Result<MoveReceipt, FactStoreError> {
        self.bounded("submit_move", self.inner.submit_move(player, coordinate))
            .await
    }

    async fn register_player(
        &self,
        player: &PlayerId,
        name: &PlayerName,
    ) -> Result<(), FactStoreError> {
        self.bounded("register_player", self.inner.register_player(player, name))
            .await
    }
}
