//! Read port for caller profiles.

use async_trait::async_trait;

use crate::domain::chat::CallerProfile;
use crate::domain::foundation::{DomainError, UserId};

/// Looks up the profile of the authenticated caller.
///
/// Implementations must be thread-safe as they are shared across request
/// handlers.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Finds a profile by user id, `Ok(None)` when absent.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CallerProfile>, DomainError>;
}
