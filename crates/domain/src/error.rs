//! Unified error types for the domain layer
//!
//! Provides a common error type for graph loading, coordinate mapping and
//! snapshot transitions, so adapters never have to fall back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Location key is not part of the world graph.
    ///
    /// The graph is closed and validated at load, so this signals a programming
    /// error rather than bad player input.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// Static world data is inconsistent; the client must refuse to start.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A pending placeholder was not the tail of the transcript when it settled
    #[error("Placeholder mismatch: expected line {expected} at the tail of a {len}-line transcript")]
    PlaceholderMismatch { expected: usize, len: usize },
}

impl DomainError {
    /// Creates a validation error for malformed values.
    ///
    /// # Example
    /// ```ignore
    /// if key.is_empty() {
    ///     return Err(DomainError::validation("Location key cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unknown location error
    pub fn unknown_location(key: impl Into<String>) -> Self {
        Self::UnknownLocation(key.into())
    }

    /// Creates a configuration error for inconsistent static data:
    /// - Exits pointing at locations that do not exist
    /// - Two locations sharing a key or a coordinate
    /// - Coordinates configured for keys absent from the graph
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this error must abort startup.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
