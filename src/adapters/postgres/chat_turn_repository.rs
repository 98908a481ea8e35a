//! PostgreSQL adapter for ChatTurnRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chat::ChatTurn;
use crate::domain::foundation::{ChatTurnId, DomainError, Timestamp, UserId};
use crate::ports::ChatTurnRepository;

/// PostgreSQL implementation of ChatTurnRepository.
///
/// Table: `chat_turns(id uuid pk, user_id text, message text,
/// response text, detected_keywords text, created_at timestamptz)`.
pub struct PgChatTurnRepository {
    pool: PgPool,
}

impl PgChatTurnRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatTurnRepository for PgChatTurnRepository {
    async fn record(&self, turn: &ChatTurn) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chat_turns (id, user_id, message, response, detected_keywords, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(turn.id.as_uuid())
        .bind(turn.user_id.as_str())
        .bind(&turn.message)
        .bind(&turn.response)
        .bind(&turn.detected_keywords)
        .bind(turn.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Database error: {}", e)))?;

        Ok(())
    }

    async fn history_for_user(&self, user_id: &UserId) -> Result<Vec<ChatTurn>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, message, response, detected_keywords, created_at
            FROM chat_turns
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Database error: {}", e)))?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in rows {
            let id: uuid::Uuid = row.get("id");
            let user_id: String = row.get("user_id");
            let message: String = row.get("message");
            let response: String = row.get("response");
            let detected_keywords: String = row.get("detected_keywords");
            let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

            let user_id = UserId::new(user_id)
                .map_err(|e| DomainError::database(format!("Corrupt user_id column: {}", e)))?;
            turns.push(ChatTurn {
                id: ChatTurnId::from_uuid(id),
                user_id,
                message,
                response,
                detected_keywords,
                created_at: Timestamp::from_datetime(created_at),
            });
        }

        Ok(turns)
    }
}
