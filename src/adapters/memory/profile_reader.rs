//! In-memory ProfileReader for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::chat::CallerProfile;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ProfileReader;

/// Map-backed profile store.
#[derive(Default)]
pub struct InMemoryProfileReader {
    profiles: RwLock<HashMap<UserId, CallerProfile>>,
}

impl InMemoryProfileReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a profile, replacing any existing one for the same user.
    pub fn insert(&self, profile: CallerProfile) {
        self.profiles
            .write()
            .expect("profile lock poisoned")
            .insert(profile.user_id.clone(), profile);
    }

    /// Builder-style seeding for test setup.
    pub fn with_profile(self, profile: CallerProfile) -> Self {
        self.insert(profile);
        self
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileReader {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CallerProfile>, DomainError> {
        Ok(self
            .profiles
            .read()
            .expect("profile lock poisoned")
            .get(user_id)
            .cloned())
    }
}
