//! Error types for port operations.

/// Fact store (ledger) operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactStoreError {
    /// The ledger has no record of the player.
    #[error("Player not found on the ledger")]
    PlayerNotFound,

    /// The ledger refused a transaction.
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    /// Transport failure between client and ledger.
    #[error("Network error: {0}")]
    Network(String),

    /// The call did not complete within the configured budget.
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// The ledger answered with data the client cannot interpret.
    #[error("Malformed ledger response: {0}")]
    Malformed(String),
}

impl FactStoreError {
    pub fn rejected(reason: impl ToString) -> Self {
        Self::Rejected(reason.to_string())
    }

    pub fn network(reason: impl ToString) -> Self {
        Self::Network(reason.to_string())
    }

    pub fn malformed(reason: impl ToString) -> Self {
        Self::Malformed(reason.to_string())
    }

    /// Check if this is a PlayerNotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlayerNotFound)
    }
}
