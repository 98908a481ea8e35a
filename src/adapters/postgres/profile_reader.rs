//! PostgreSQL adapter for ProfileReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chat::CallerProfile;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ProfileReader;

/// PostgreSQL implementation of ProfileReader.
pub struct PgProfileReader {
    pool: PgPool,
}

impl PgProfileReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileReader for PgProfileReader {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CallerProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, display_name, email
            FROM caller_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Database error: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user_id: String = row.get("user_id");
        let display_name: String = row.get("display_name");
        let email: String = row.get("email");

        let user_id = UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("Corrupt user_id column: {}", e)))?;
        let profile = CallerProfile::new(user_id, display_name, email)
            .map_err(|e| DomainError::database(format!("Corrupt profile row: {}", e)))?;
        Ok(Some(profile))
    }
}
