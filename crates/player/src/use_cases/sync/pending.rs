//! Pending remote operations.

use chrono::{DateTime, Utc};

use rise_domain::OperationId;

use crate::use_cases::commands::RemoteAction;

/// A remote action in flight. Lives only for the duration of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    pub id: OperationId,
    pub action: RemoteAction,
    /// Transcript index of the placeholder line; must still be the tail when
    /// the operation settles
    pub placeholder_index: usize,
    pub started_at: DateTime<Utc>,
}
