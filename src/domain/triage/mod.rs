//! Keyword-based legal query triage.
//!
//! The pipeline is: normalize the message, short-circuit on greetings,
//! match trigger phrases against the taxonomy, then compose the advisory
//! reply from the per-domain playbooks. Everything here is pure and
//! synchronous; orchestration and persistence live in the application
//! layer.

pub mod composer;
pub mod greeting;
pub mod guidance;
mod legal_domain;
mod matcher;
mod taxonomy;

pub use composer::{compose, help_text, ComposedResponse};
pub use greeting::{greeting_reply, is_greeting, TimeOfDay};
pub use guidance::{playbook_for, CaseSuggestion, GuidanceBranch, Playbook};
pub use legal_domain::LegalDomain;
pub use matcher::{DetectionResult, KeywordMatcher};
pub use taxonomy::Taxonomy;

/// Normalizes raw user input for matching: trim, then lowercase.
///
/// Matching always runs over the normalized form; the original text is
/// what gets persisted.
pub fn normalize_message(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_message("  My LANDLORD  "), "my landlord");
    }

    #[test]
    fn normalization_of_empty_input_is_empty() {
        assert_eq!(normalize_message("   "), "");
    }

    #[test]
    fn matching_is_case_insensitive_via_normalization() {
        let matcher = KeywordMatcher::new(Taxonomy::shared());
        let upper = matcher.detect(&normalize_message("FILE AN FIR"));
        let lower = matcher.detect(&normalize_message("file an fir"));
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }
}
