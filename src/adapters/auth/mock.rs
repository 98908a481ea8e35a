//! Mock TokenVerifier for tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedCaller};
use crate::ports::TokenVerifier;

/// Accepts only preconfigured token strings.
#[derive(Default)]
pub struct MockTokenVerifier {
    callers: HashMap<String, AuthenticatedCaller>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token as valid for the given caller.
    pub fn with_caller(mut self, token: impl Into<String>, caller: AuthenticatedCaller) -> Self {
        self.callers.insert(token.into(), caller);
        self
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedCaller, AuthError> {
        self.callers
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[tokio::test]
    async fn known_token_resolves_caller() {
        let caller =
            AuthenticatedCaller::new(UserId::new("u-1").unwrap(), "asha@example.com");
        let verifier = MockTokenVerifier::new().with_caller("good-token", caller);

        let resolved = verifier.verify("good-token").await.unwrap();
        assert_eq!(resolved.email, "asha@example.com");
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let verifier = MockTokenVerifier::new();
        assert!(matches!(
            verifier.verify("nope").await,
            Err(AuthError::InvalidToken)
        ));
    }
}
