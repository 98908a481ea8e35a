//! Keyword matcher scanning normalized input against the taxonomy.

use std::collections::BTreeSet;

use super::{LegalDomain, Taxonomy};

/// Matched domains and trigger phrases for one input message.
///
/// Domains are kept in canonical taxonomy order so multi-domain responses
/// compose deterministically; phrases are kept sorted for stable joining
/// and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetectionResult {
    domains: Vec<LegalDomain>,
    phrases: BTreeSet<String>,
}

impl DetectionResult {
    /// Returns an empty result (the Help response path).
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if no domain matched.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Matched domains in canonical order, without duplicates.
    pub fn domains(&self) -> &[LegalDomain] {
        &self.domains
    }

    /// Matched trigger phrases in sorted order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// True if the given trigger phrase was matched.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    /// Matched phrases joined with ", " for display and persistence.
    pub fn joined_phrases(&self) -> String {
        self.phrases
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn record(&mut self, domain: LegalDomain, phrase: &str) {
        if !self.domains.contains(&domain) {
            self.domains.push(domain);
        }
        self.phrases.insert(phrase.to_string());
    }
}

/// Scans normalized messages for taxonomy trigger phrases.
#[derive(Debug, Clone, Copy)]
pub struct KeywordMatcher<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> KeywordMatcher<'a> {
    /// Creates a matcher over the given taxonomy.
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Detects domains and phrases in an already-normalized message.
    ///
    /// Matching is substring containment, not word-boundary: a phrase
    /// embedded inside a longer word still counts. Never fails; unmatched
    /// text simply contributes nothing.
    pub fn detect(&self, message: &str) -> DetectionResult {
        let mut result = DetectionResult::empty();
        for domain in self.taxonomy.domains() {
            for phrase in self.taxonomy.phrases_for(domain) {
                if message.contains(phrase) {
                    result.record(domain, phrase);
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(message: &str) -> DetectionResult {
        KeywordMatcher::new(Taxonomy::shared()).detect(message)
    }

    #[test]
    fn unmatched_message_yields_empty_result() {
        let result = detect("what is the weather today");
        assert!(result.is_empty());
        assert_eq!(result.joined_phrases(), "");
    }

    #[test]
    fn single_domain_match_records_domain_and_phrases() {
        let result = detect("i need to file an fir for theft");
        assert_eq!(result.domains(), &[LegalDomain::Criminal]);
        assert!(result.contains_phrase("fir"));
        assert!(result.contains_phrase("theft"));
    }

    #[test]
    fn multi_domain_match_keeps_canonical_order() {
        // Family phrases appear first in the text, but Criminal comes first
        // in the canonical domain order.
        let result = detect("my husband wants a divorce and the police filed a false fir");
        assert_eq!(
            result.domains(),
            &[LegalDomain::Criminal, LegalDomain::Family]
        );
    }

    #[test]
    fn phrase_listed_under_two_domains_matches_both() {
        // "defamation" sits in both the Criminal and the Tort tables.
        let result = detect("a rival spread defamation about me");
        assert!(result.domains().contains(&LegalDomain::Criminal));
        assert!(result.domains().contains(&LegalDomain::Tort));
        assert_eq!(result.phrases().count(), 1);
    }

    #[test]
    fn matching_is_substring_not_word_boundary() {
        // "rent" is embedded in "parent"; substring matching still fires.
        let result = detect("as a parent i am worried");
        assert!(result.domains().contains(&LegalDomain::Property));
        assert!(result.contains_phrase("rent"));
    }

    #[test]
    fn duplicate_hits_do_not_duplicate_domains() {
        let result = detect("tenant landlord rent eviction");
        let property_count = result
            .domains()
            .iter()
            .filter(|d| **d == LegalDomain::Property)
            .count();
        assert_eq!(property_count, 1);
    }

    #[test]
    fn joined_phrases_are_sorted_and_comma_separated() {
        let result = detect("theft and assault near my house");
        assert_eq!(result.joined_phrases(), "assault, house, theft");
    }
}
