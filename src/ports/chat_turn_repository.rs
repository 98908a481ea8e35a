//! Persistence port for chat turns.

use async_trait::async_trait;

use crate::domain::chat::ChatTurn;
use crate::domain::foundation::{DomainError, UserId};

/// Stores and retrieves per-user chat history.
#[async_trait]
pub trait ChatTurnRepository: Send + Sync {
    /// Appends one completed turn to the history.
    async fn record(&self, turn: &ChatTurn) -> Result<(), DomainError>;

    /// Returns a user's turns, newest first.
    async fn history_for_user(&self, user_id: &UserId) -> Result<Vec<ChatTurn>, DomainError>;
}
