//! Advisory response composition.
//!
//! Takes a detection result and renders the full advisory reply: analysis
//! intro, one guidance block per matched domain in canonical order, and the
//! contact/disclaimer footer. No detected domain yields the help text
//! instead. Composition is pure; all content comes from the playbooks.

use super::guidance::{playbook_for, CaseSuggestion};
use super::DetectionResult;

const ANALYSIS_INTRO: &str = "\u{1F3DB}\u{FE0F} **Legal Analysis**\n\n\
    Based on your query, I've identified the following legal areas:\n";

const FOOTER: &str = "\n---\n\n\
    \u{1F4DE} **Quick Contact References**:\n\
    \u{2022} Legal Aid Services: Dial 15100 (Pan-India)\n\
    \u{2022} National Consumer Helpline: 1800-11-4000\n\
    \u{2022} Cyber Crime Helpline: 1930\n\
    \u{2022} Women Helpline: 181\n\n\
    \u{26A0}\u{FE0F} **Important Disclaimer**: This guidance is based on keyword analysis \
    and general legal principles under Indian law. For your specific situation, please \
    consult a qualified advocate registered with the Bar Council of India.";

const HELP_TEXT: &str = "I'm not sure I understand \u{1F914}\n\n\
    To help you better, try describing your issue using keywords related to:\n\n\
    \u{1F4DC} **Property Law**: property dispute, eviction, lease, boundary, encroachment\n\
    \u{2696}\u{FE0F} **Criminal Law**: FIR, theft, assault, bail, complaint, fraud\n\
    \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} **Family Law**: divorce, custody, alimony, domestic violence, maintenance\n\
    \u{1F5FD} **Constitutional Law**: fundamental rights, discrimination, privacy, writ petition\n\
    \u{1F6D2} **Consumer Law**: defective product, refund, consumer forum, warranty\n\
    \u{1F4BC} **Labor Law**: wrongful termination, salary, PF, workplace harassment\n\
    \u{1FA79} **Tort/Accident Law**: accident, negligence, compensation, injury\n\
    \u{1F4A1} **Intellectual Property**: copyright, trademark, patent, infringement\n\
    \u{1F30D} **Environmental Law**: pollution, NGT, waste, forest rights\n\
    \u{1F4BB} **Cyber Law**: hacking, online fraud, cyber crime, data breach\n\
    \u{1F4B0} **Tax Law**: GST, income tax, tax notice, refund, ITR\n\n\
    **Example**: \"My landlord is not returning my security deposit\" or \
    \"I received a GST notice for my business\"";

/// A fully rendered advisory reply and its case suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedResponse {
    pub text: String,
    pub suggestions: Vec<CaseSuggestion>,
}

/// Composes the advisory reply for a non-empty detection result.
///
/// Domain blocks appear in canonical domain order regardless of where the
/// trigger phrases sat in the message, and each matched domain contributes
/// exactly one case suggestion.
pub fn compose(detection: &DetectionResult) -> ComposedResponse {
    let mut text = String::from(ANALYSIS_INTRO);
    text.push_str(&format!(
        "**Detected Keywords**: {}\n\n",
        detection.joined_phrases()
    ));

    let mut suggestions = Vec::with_capacity(detection.domains().len());
    for domain in detection.domains() {
        let playbook = playbook_for(*domain);
        let branch = playbook.resolve(detection);
        text.push_str(&playbook.render_block(branch));
        suggestions.push(branch.suggestion);
    }

    text.push_str(FOOTER);
    ComposedResponse { text, suggestions }
}

/// Returns the help reply used when no domain matched.
pub fn help_text() -> &'static str {
    HELP_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::triage::{KeywordMatcher, LegalDomain, Taxonomy};

    fn detect(message: &str) -> DetectionResult {
        KeywordMatcher::new(Taxonomy::shared()).detect(message)
    }

    #[test]
    fn single_domain_response_has_intro_block_and_footer() {
        let response = compose(&detect("police refused to register my fir"));
        assert!(response.text.starts_with("\u{1F3DB}\u{FE0F} **Legal Analysis**"));
        assert!(response.text.contains("**Detected Keywords**: fir, police"));
        assert!(response.text.contains("**CRIMINAL LAW**"));
        assert!(response.text.contains("**Important Disclaimer**"));
        assert_eq!(response.suggestions.len(), 1);
        assert_eq!(
            response.suggestions[0].case_name,
            "Lalita Kumari v. Govt. of U.P. (2013)"
        );
    }

    #[test]
    fn domain_blocks_follow_canonical_order() {
        let response = compose(&detect("gst notice after my divorce"));
        let family = response.text.find("**FAMILY LAW**").unwrap();
        let tax = response.text.find("**TAX LAW**").unwrap();
        assert!(family < tax);
    }

    #[test]
    fn one_suggestion_per_matched_domain() {
        let detection = detect("eviction over rent and an fir for theft");
        assert_eq!(
            detection.domains(),
            &[LegalDomain::Property, LegalDomain::Criminal]
        );
        let response = compose(&detection);
        assert_eq!(response.suggestions.len(), 2);
        assert_eq!(response.suggestions[0].domain, "Property Law");
        assert_eq!(response.suggestions[1].domain, "Criminal Law");
    }

    #[test]
    fn composition_is_deterministic() {
        let detection = detect("divorce and custody of my son");
        assert_eq!(compose(&detection), compose(&detection));
    }

    #[test]
    fn help_text_lists_all_domains() {
        let help = help_text();
        for domain in LegalDomain::all() {
            assert!(
                help.contains(domain.display_name()),
                "help text misses {}",
                domain
            );
        }
    }
}
