//! Caller profile resolved by the identity service.

use crate::domain::foundation::{UserId, ValidationError};
use serde::{Deserialize, Serialize};

/// Profile of a registered caller, read-only to the core.
///
/// The triage engine only needs the display name for greeting replies;
/// everything else about the account lives behind the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerProfile {
    /// Identity reference used by the conversation store.
    pub user_id: UserId,
    /// Name used to personalize greeting replies.
    pub display_name: String,
    /// Contact email for the account.
    pub email: String,
}

impl CallerProfile {
    /// Creates a new profile, validating the display name.
    pub fn new(
        user_id: UserId,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(ValidationError::empty_field("display_name"));
        }
        Ok(Self {
            user_id,
            display_name,
            email: email.into(),
        })
    }
}
