//! ProcessMessage command handler.
//!
//! Orchestrates one chat turn: resolve the caller, short-circuit greetings,
//! run keyword triage, compose the advisory reply, and persist the turn.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::chat::ChatTurn;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::triage::{
    self, CaseSuggestion, KeywordMatcher, LegalDomain, Taxonomy, TimeOfDay,
};
use crate::ports::{ChatTurnRepository, ProfileReader};

/// Command to process one user chat message.
#[derive(Debug, Clone)]
pub struct ProcessMessageCommand {
    /// The caller whose message is being processed.
    pub user_id: UserId,
    /// Raw message text as submitted.
    pub message: String,
}

impl ProcessMessageCommand {
    /// Creates a new process message command.
    pub fn new(user_id: UserId, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: message.into(),
        }
    }
}

/// Errors that can occur while processing a message.
///
/// Unclassifiable input is not an error: it yields the help reply.
#[derive(Debug, Clone, Error)]
pub enum ProcessMessageError {
    /// No profile exists for the caller.
    #[error("Caller not found: {0}")]
    CallerNotFound(UserId),

    /// Persistence failure while recording the turn.
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<DomainError> for ProcessMessageError {
    fn from(err: DomainError) -> Self {
        ProcessMessageError::StorageError(err.to_string())
    }
}

/// Result of processing a message.
#[derive(Debug, Clone)]
pub struct ProcessMessageResult {
    /// Rendered reply text (greeting, advisory, or help).
    pub response: String,
    /// Matched domains in canonical order; empty for greeting and help.
    pub detected_domains: Vec<LegalDomain>,
    /// One case suggestion per matched domain.
    pub suggested_cases: Vec<CaseSuggestion>,
}

/// Handler for ProcessMessage commands.
pub struct ProcessMessageHandler<P, R>
where
    P: ProfileReader + ?Sized,
    R: ChatTurnRepository + ?Sized,
{
    profiles: Arc<P>,
    turns: Arc<R>,
}

impl<P, R> ProcessMessageHandler<P, R>
where
    P: ProfileReader + ?Sized + 'static,
    R: ChatTurnRepository + ?Sized + 'static,
{
    /// Creates a new handler with the given dependencies.
    pub fn new(profiles: Arc<P>, turns: Arc<R>) -> Self {
        Self { profiles, turns }
    }

    /// Handles a process message command.
    pub async fn handle(
        &self,
        cmd: ProcessMessageCommand,
    ) -> Result<ProcessMessageResult, ProcessMessageError> {
        let time_of_day = TimeOfDay::from_time(chrono::Local::now().time());
        self.handle_at(cmd, time_of_day).await
    }

    /// Same as [`handle`](Self::handle) with an explicit time of day, so the
    /// greeting salutation stays deterministic under test.
    pub async fn handle_at(
        &self,
        cmd: ProcessMessageCommand,
        time_of_day: TimeOfDay,
    ) -> Result<ProcessMessageResult, ProcessMessageError> {
        let profile = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| ProcessMessageError::CallerNotFound(cmd.user_id.clone()))?;

        let taxonomy = Taxonomy::shared();
        let normalized = triage::normalize_message(&cmd.message);

        // Greetings short-circuit domain detection entirely.
        if triage::is_greeting(taxonomy, &normalized) {
            let response = triage::greeting_reply(&profile.display_name, time_of_day);
            let turn = ChatTurn::greeting(cmd.user_id.clone(), &cmd.message, &response);
            self.turns.record(&turn).await?;
            tracing::debug!(user_id = %cmd.user_id, "greeting reply sent");
            return Ok(ProcessMessageResult {
                response,
                detected_domains: Vec::new(),
                suggested_cases: Vec::new(),
            });
        }

        let detection = KeywordMatcher::new(taxonomy).detect(&normalized);

        let (response, detected_domains, suggested_cases) = if detection.is_empty() {
            (triage::help_text().to_string(), Vec::new(), Vec::new())
        } else {
            let composed = triage::compose(&detection);
            (
                composed.text,
                detection.domains().to_vec(),
                composed.suggestions,
            )
        };

        let turn = ChatTurn::new(
            cmd.user_id.clone(),
            &cmd.message,
            &response,
            detection.joined_phrases(),
        );
        self.turns.record(&turn).await?;

        tracing::debug!(
            user_id = %cmd.user_id,
            domains = detected_domains.len(),
            "advisory reply sent"
        );
        Ok(ProcessMessageResult {
            response,
            detected_domains,
            suggested_cases,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::{CallerProfile, GREETING_SENTINEL};
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockProfileReader {
        profile: Option<CallerProfile>,
    }

    impl MockProfileReader {
        fn with_profile(profile: CallerProfile) -> Self {
            Self {
                profile: Some(profile),
            }
        }

        fn empty() -> Self {
            Self { profile: None }
        }
    }

    #[async_trait]
    impl ProfileReader for MockProfileReader {
        async fn find_by_user(
            &self,
            user_id: &UserId,
        ) -> Result<Option<CallerProfile>, DomainError> {
            Ok(self
                .profile
                .clone()
                .filter(|p| p.user_id == *user_id))
        }
    }

    struct MockTurnRepo {
        turns: Mutex<Vec<ChatTurn>>,
        fail: bool,
    }

    impl MockTurnRepo {
        fn new() -> Self {
            Self {
                turns: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                turns: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn recorded(&self) -> Vec<ChatTurn> {
            self.turns.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatTurnRepository for MockTurnRepo {
        async fn record(&self, turn: &ChatTurn) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "connection refused",
                ));
            }
            self.turns.lock().unwrap().push(turn.clone());
            Ok(())
        }

        async fn history_for_user(
            &self,
            user_id: &UserId,
        ) -> Result<Vec<ChatTurn>, DomainError> {
            Ok(self
                .turns
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.user_id == *user_id)
                .cloned()
                .collect())
        }
    }

    fn asha() -> CallerProfile {
        CallerProfile::new(
            UserId::new("asha-1").unwrap(),
            "Asha",
            "asha@example.com",
        )
        .unwrap()
    }

    fn handler_with(
        profiles: MockProfileReader,
        turns: Arc<MockTurnRepo>,
    ) -> ProcessMessageHandler<MockProfileReader, MockTurnRepo> {
        ProcessMessageHandler::new(Arc::new(profiles), turns)
    }

    #[tokio::test]
    async fn rejects_unknown_caller() {
        let handler = handler_with(MockProfileReader::empty(), Arc::new(MockTurnRepo::new()));
        let cmd = ProcessMessageCommand::new(UserId::new("ghost").unwrap(), "hello");

        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(ProcessMessageError::CallerNotFound(_))
        ));
    }

    #[tokio::test]
    async fn greeting_takes_precedence_over_domain_keywords() {
        // Given: a message carrying both a greeting and a Criminal keyword
        let turns = Arc::new(MockTurnRepo::new());
        let handler = handler_with(MockProfileReader::with_profile(asha()), Arc::clone(&turns));
        let cmd = ProcessMessageCommand::new(
            UserId::new("asha-1").unwrap(),
            "Hello, I want to ask about an FIR",
        );

        // When
        let result = handler.handle_at(cmd, TimeOfDay::Morning).await.unwrap();

        // Then: greeting reply, no detection output
        assert!(result.response.starts_with("Good morning, Asha!"));
        assert!(result.detected_domains.is_empty());
        assert!(result.suggested_cases.is_empty());

        let recorded = turns.recorded();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].is_greeting());
        assert_eq!(recorded[0].detected_keywords, GREETING_SENTINEL);
    }

    #[tokio::test]
    async fn unmatched_message_gets_help_reply() {
        let turns = Arc::new(MockTurnRepo::new());
        let handler = handler_with(MockProfileReader::with_profile(asha()), Arc::clone(&turns));
        let cmd = ProcessMessageCommand::new(
            UserId::new("asha-1").unwrap(),
            "qwerty asdfgh zxcvbn",
        );

        let result = handler.handle(cmd).await.unwrap();

        assert!(result.response.starts_with("I'm not sure I understand"));
        assert!(result.detected_domains.is_empty());
        assert!(result.suggested_cases.is_empty());
        assert_eq!(turns.recorded()[0].detected_keywords, "");
    }

    #[tokio::test]
    async fn empty_message_gets_help_reply_not_error() {
        let handler = handler_with(
            MockProfileReader::with_profile(asha()),
            Arc::new(MockTurnRepo::new()),
        );
        let cmd = ProcessMessageCommand::new(UserId::new("asha-1").unwrap(), "   ");

        let result = handler.handle(cmd).await.unwrap();

        assert!(result.response.starts_with("I'm not sure I understand"));
    }

    #[tokio::test]
    async fn single_domain_message_gets_advisory_reply() {
        let turns = Arc::new(MockTurnRepo::new());
        let handler = handler_with(MockProfileReader::with_profile(asha()), Arc::clone(&turns));
        let cmd = ProcessMessageCommand::new(
            UserId::new("asha-1").unwrap(),
            "Police refused to register my FIR",
        );

        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(result.detected_domains, vec![LegalDomain::Criminal]);
        assert_eq!(result.suggested_cases.len(), 1);
        assert_eq!(
            result.suggested_cases[0].case_name,
            "Lalita Kumari v. Govt. of U.P. (2013)"
        );
        assert!(result.response.contains("**CRIMINAL LAW**"));
        assert!(result.response.contains("**Important Disclaimer**"));
        assert_eq!(turns.recorded()[0].detected_keywords, "fir, police");
    }

    #[tokio::test]
    async fn multi_domain_message_keeps_canonical_order() {
        let handler = handler_with(
            MockProfileReader::with_profile(asha()),
            Arc::new(MockTurnRepo::new()),
        );
        // Tax keyword comes first in the text, Property second
        let cmd = ProcessMessageCommand::new(
            UserId::new("asha-1").unwrap(),
            "got a gst demand about my eviction case",
        );

        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(
            result.detected_domains,
            vec![LegalDomain::Property, LegalDomain::Tax]
        );
        assert_eq!(result.suggested_cases.len(), 2);
        let property = result.response.find("**PROPERTY LAW**").unwrap();
        let tax = result.response.find("**TAX LAW**").unwrap();
        assert!(property < tax);
    }

    #[tokio::test]
    async fn persisted_turn_keeps_original_message_text() {
        let turns = Arc::new(MockTurnRepo::new());
        let handler = handler_with(MockProfileReader::with_profile(asha()), Arc::clone(&turns));
        let cmd = ProcessMessageCommand::new(
            UserId::new("asha-1").unwrap(),
            "  My TENANT stopped paying  ",
        );

        handler.handle(cmd).await.unwrap();

        let recorded = turns.recorded();
        assert_eq!(recorded[0].message, "  My TENANT stopped paying  ");
    }

    #[tokio::test]
    async fn storage_failure_is_propagated() {
        let handler = handler_with(
            MockProfileReader::with_profile(asha()),
            Arc::new(MockTurnRepo::failing()),
        );
        let cmd = ProcessMessageCommand::new(UserId::new("asha-1").unwrap(), "fir for theft");

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(ProcessMessageError::StorageError(_))));
    }
}
