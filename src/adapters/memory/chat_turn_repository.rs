//! In-memory ChatTurnRepository for tests and local development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::chat::ChatTurn;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ChatTurnRepository;

/// Vec-backed turn store; history is returned newest first.
#[derive(Default)]
pub struct InMemoryChatTurnRepository {
    turns: RwLock<Vec<ChatTurn>>,
}

impl InMemoryChatTurnRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of turns recorded so far, across all users.
    pub fn len(&self) -> usize {
        self.turns.read().expect("turn lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ChatTurnRepository for InMemoryChatTurnRepository {
    async fn record(&self, turn: &ChatTurn) -> Result<(), DomainError> {
        self.turns
            .write()
            .expect("turn lock poisoned")
            .push(turn.clone());
        Ok(())
    }

    async fn history_for_user(&self, user_id: &UserId) -> Result<Vec<ChatTurn>, DomainError> {
        let mut history: Vec<_> = self
            .turns
            .read()
            .expect("turn lock poisoned")
            .iter()
            .filter(|t| t.user_id == *user_id)
            .cloned()
            .collect();
        history.reverse();
        Ok(history)
    }
}
