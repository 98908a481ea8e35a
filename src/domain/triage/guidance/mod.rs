//! Per-domain guidance playbooks.
//!
//! Each domain carries an ordered list of condition rules (keyed on matched
//! trigger phrases) plus one domain-general fallback branch. Rules are
//! evaluated top to bottom and the first satisfied rule wins, so every
//! matched domain resolves to exactly one branch and one case suggestion.
//! The branch content is data, not control flow, to keep every branch
//! individually auditable and testable.

mod constitutional;
mod consumer;
mod criminal;
mod cyber;
mod environmental;
mod family;
mod intellectual_property;
mod labor;
mod property;
mod tax;
mod tort;

use serde::Serialize;

use super::{DetectionResult, LegalDomain};

/// Static reference to an illustrative legal precedent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSuggestion {
    pub case_name: &'static str,
    pub case_url: &'static str,
    pub key_takeaway: &'static str,
    pub domain: &'static str,
    pub practical_advice: &'static str,
}

/// One canned advisory block plus its case suggestion.
///
/// `issue` is `None` for the domain-general fallback, which renders under
/// the playbook's general label instead of an issue/statute heading.
#[derive(Debug, Clone, Copy)]
pub struct GuidanceBranch {
    pub issue: Option<&'static str>,
    pub statute: Option<&'static str>,
    /// Extra labeled lines between the statute and the action steps.
    pub notes: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub suggestion: CaseSuggestion,
}

impl GuidanceBranch {
    /// Renders this branch as a markdown block (without the domain header).
    pub fn render(&self, general_label: &str) -> String {
        let mut block = String::new();
        match (self.issue, self.statute) {
            (Some(issue), Some(statute)) => {
                block.push_str(&format!("**Your Issue**: {}\n", issue));
                block.push_str(&format!("**Relevant Law**: {}\n", statute));
                for note in self.notes {
                    block.push_str(note);
                    block.push('\n');
                }
                block.push_str("**Action Steps**:\n");
            }
            _ => {
                block.push_str(&format!("**{}**:\n", general_label));
            }
        }
        for (index, step) in self.steps.iter().enumerate() {
            block.push_str(&format!("{}. {}\n", index + 1, step));
        }
        block.push('\n');
        block
    }
}

/// A rule fires when any of its trigger phrases was matched.
#[derive(Debug, Clone, Copy)]
pub struct GuidanceRule {
    pub any_of: &'static [&'static str],
    pub branch: GuidanceBranch,
}

/// Ordered condition table for one domain.
#[derive(Debug, Clone, Copy)]
pub struct Playbook {
    pub domain: LegalDomain,
    /// Domain header line, e.g. `"\u{1F4DC} **PROPERTY LAW**"`.
    pub header: &'static str,
    /// Label for the fallback block, e.g. `"General Property Law Guidance"`.
    pub general_label: &'static str,
    pub rules: &'static [GuidanceRule],
    pub fallback: GuidanceBranch,
}

impl Playbook {
    /// Resolves the single guidance branch for this domain.
    ///
    /// First rule whose phrase set intersects the matched phrases wins;
    /// the fallback guarantees a branch even when no rule fires.
    pub fn resolve(&self, detection: &DetectionResult) -> &GuidanceBranch {
        self.rules
            .iter()
            .find(|rule| rule.any_of.iter().any(|p| detection.contains_phrase(p)))
            .map(|rule| &rule.branch)
            .unwrap_or(&self.fallback)
    }

    /// Renders the header plus a resolved branch.
    pub fn render_block(&self, branch: &GuidanceBranch) -> String {
        format!("{}\n{}", self.header, branch.render(self.general_label))
    }
}

/// Returns the playbook for a domain.
pub fn playbook_for(domain: LegalDomain) -> &'static Playbook {
    match domain {
        LegalDomain::Property => &property::PLAYBOOK,
        LegalDomain::Criminal => &criminal::PLAYBOOK,
        LegalDomain::Family => &family::PLAYBOOK,
        LegalDomain::Constitutional => &constitutional::PLAYBOOK,
        LegalDomain::Consumer => &consumer::PLAYBOOK,
        LegalDomain::Labor => &labor::PLAYBOOK,
        LegalDomain::Tort => &tort::PLAYBOOK,
        LegalDomain::IntellectualProperty => &intellectual_property::PLAYBOOK,
        LegalDomain::Environmental => &environmental::PLAYBOOK,
        LegalDomain::Cyber => &cyber::PLAYBOOK,
        LegalDomain::Tax => &tax::PLAYBOOK,
    }
}
