//! ChatTurn record persisted for every processed message.

use crate::domain::foundation::{ChatTurnId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Keyword field sentinel recorded for greeting turns.
pub const GREETING_SENTINEL: &str = "GREETING";

/// One request/response exchange, immutable after creation.
///
/// Created by the orchestrator after the reply is composed and appended to
/// the conversation store before the reply is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Unique id for this turn.
    pub id: ChatTurnId,
    /// The caller this turn belongs to.
    pub user_id: UserId,
    /// Raw input text as the caller sent it.
    pub message: String,
    /// Composed advisory reply.
    pub response: String,
    /// Matched trigger phrases joined with ", ", or [`GREETING_SENTINEL`].
    pub detected_keywords: String,
    /// When the turn was created.
    pub created_at: Timestamp,
}

impl ChatTurn {
    /// Creates a new turn with a fresh id and the current timestamp.
    pub fn new(
        user_id: UserId,
        message: impl Into<String>,
        response: impl Into<String>,
        detected_keywords: impl Into<String>,
    ) -> Self {
        Self {
            id: ChatTurnId::new(),
            user_id,
            message: message.into(),
            response: response.into(),
            detected_keywords: detected_keywords.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Creates a turn for a greeting exchange (keywords = sentinel).
    pub fn greeting(user_id: UserId, message: impl Into<String>, response: impl Into<String>) -> Self {
        Self::new(user_id, message, response, GREETING_SENTINEL)
    }

    /// Returns true if this turn recorded a greeting exchange.
    pub fn is_greeting(&self) -> bool {
        self.detected_keywords == GREETING_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("asha@example.com").unwrap()
    }

    #[test]
    fn greeting_turn_uses_sentinel() {
        let turn = ChatTurn::greeting(user(), "hello", "Good morning, Asha!");
        assert_eq!(turn.detected_keywords, "GREETING");
        assert!(turn.is_greeting());
    }

    #[test]
    fn keyword_turn_is_not_greeting() {
        let turn = ChatTurn::new(user(), "fir question", "...", "fir, theft");
        assert!(!turn.is_greeting());
    }

    #[test]
    fn turns_get_unique_ids() {
        let a = ChatTurn::greeting(user(), "hi", "reply");
        let b = ChatTurn::greeting(user(), "hi", "reply");
        assert_ne!(a.id, b.id);
    }
}
