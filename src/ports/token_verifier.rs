//! Token verification port.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedCaller};

/// Verifies bearer tokens and resolves the authenticated caller.
///
/// Keeps the HTTP middleware provider-agnostic; production uses signed
/// JWTs, tests use a mock.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies a token, returning the caller it identifies.
    async fn verify(&self, token: &str) -> Result<AuthenticatedCaller, AuthError>;
}
