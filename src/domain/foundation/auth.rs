//! Authenticated caller identity produced by token validation.

use super::UserId;
use thiserror::Error;

/// A caller whose bearer token has been validated.
///
/// Carried through request extensions by the auth middleware; the chat
/// handlers use it to address the conversation store and identity lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedCaller {
    /// Identity reference (email in the current deployment).
    pub user_id: UserId,
    /// Email address from the token subject claim.
    pub email: String,
}

impl AuthenticatedCaller {
    /// Creates a new authenticated caller.
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}

/// Errors raised while validating an authentication token.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Token subject is missing or empty")]
    MissingSubject,
}
