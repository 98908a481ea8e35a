//! GetChatHistory query handler.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::chat::ChatTurn;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ChatTurnRepository, ProfileReader};

/// Query for a caller's chat history.
#[derive(Debug, Clone)]
pub struct GetChatHistoryQuery {
    pub user_id: UserId,
}

impl GetChatHistoryQuery {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Errors that can occur while fetching history.
#[derive(Debug, Clone, Error)]
pub enum GetChatHistoryError {
    /// No profile exists for the caller.
    #[error("Caller not found: {0}")]
    CallerNotFound(UserId),

    /// Persistence failure while reading turns.
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<DomainError> for GetChatHistoryError {
    fn from(err: DomainError) -> Self {
        GetChatHistoryError::StorageError(err.to_string())
    }
}

/// Handler for GetChatHistory queries.
pub struct GetChatHistoryHandler<P, R>
where
    P: ProfileReader + ?Sized,
    R: ChatTurnRepository + ?Sized,
{
    profiles: Arc<P>,
    turns: Arc<R>,
}

impl<P, R> GetChatHistoryHandler<P, R>
where
    P: ProfileReader + ?Sized + 'static,
    R: ChatTurnRepository + ?Sized + 'static,
{
    /// Creates a new handler with the given dependencies.
    pub fn new(profiles: Arc<P>, turns: Arc<R>) -> Self {
        Self { profiles, turns }
    }

    /// Returns the caller's turns, newest first.
    pub async fn handle(
        &self,
        query: GetChatHistoryQuery,
    ) -> Result<Vec<ChatTurn>, GetChatHistoryError> {
        self.profiles
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| GetChatHistoryError::CallerNotFound(query.user_id.clone()))?;

        let turns = self.turns.history_for_user(&query.user_id).await?;
        tracing::debug!(user_id = %query.user_id, turns = turns.len(), "history fetched");
        Ok(turns)
    }
}
