//! Criminal law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Criminal,
    header: "⚖️ **CRIMINAL LAW**",
    general_label: "General Criminal Law Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["fir", "complaint"],
            branch: GuidanceBranch {
                issue: Some("Filing FIR/Criminal Complaint"),
                statute: Some("Code of Criminal Procedure, 1973 (Section 154)"),
                notes: &[],
                steps: &[
                    "Visit nearest police station with jurisdiction over the crime location",
                    "Provide written complaint; police must register FIR for cognizable offenses",
                    "If police refuse, approach: Judicial Magistrate under Section 156(3) CrPC",
                    "Obtain FIR copy (free of cost)",
                    "Alternative: File private complaint under Section 200 CrPC before Magistrate",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Lalita Kumari v. Govt. of U.P. (2013)",
                    case_url: "https://indiankanoon.org/doc/141483636/",
                    key_takeaway: "Registration of FIR is mandatory for cognizable offenses; no preliminary inquiry needed",
                    domain: "Criminal Law",
                    practical_advice: "Insist on FIR registration; if denied, file application under Section 156(3) in Magistrate Court",
                },
            },
        },
        GuidanceRule {
            any_of: &["bail", "anticipatory bail"],
            branch: GuidanceBranch {
                issue: Some("Bail application"),
                statute: Some("CrPC Sections 437 (regular bail), 438 (anticipatory bail)"),
                notes: &[],
                steps: &[
                    "Regular Bail: Apply in Sessions Court if offense punishable > 3 years",
                    "Anticipatory Bail: Apply in Sessions/High Court before arrest",
                    "Bail conditions: surrender passport, surety bond, regular appearance",
                    "Contact: Criminal lawyer specialized in bail matters",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Sanjay Chandra v. CBI (2011)",
                    case_url: "https://indiankanoon.org/doc/1712542/",
                    key_takeaway: "Bail is the rule, jail is exception; unless offense involves economic offenses or terrorism",
                    domain: "Criminal Law",
                    practical_advice: "File bail application with supporting affidavits showing no flight risk",
                },
            },
        },
        GuidanceRule {
            any_of: &["harassment", "defamation"],
            branch: GuidanceBranch {
                issue: Some("Harassment/Defamation"),
                statute: Some("IPC Section 354 (harassment), Section 499-500 (defamation)"),
                notes: &[],
                steps: &[
                    "Document evidence: emails, messages, recordings (admissible under Evidence Act)",
                    "File FIR for criminal harassment",
                    "For defamation: Send legal notice, then file private complaint",
                    "Approach: Metropolitan Magistrate Court",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Subramanian Swamy v. Union of India (2016)",
                    case_url: "https://indiankanoon.org/doc/145998716/",
                    key_takeaway: "Criminal defamation upheld as constitutional; truth is a defense",
                    domain: "Criminal Law",
                    practical_advice: "Collect defamatory material as evidence; file complaint within limitation period",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Right to legal aid if unable to afford lawyer (Article 39A)",
            "Right to know grounds of arrest (Article 22)",
            "Approach: Nearest police station or Magistrate Court",
            "Emergency: Dial 100 (police) or 112 (emergency)",
        ],
        suggestion: CaseSuggestion {
            case_name: "D.K. Basu v. State of West Bengal (1997)",
            case_url: "https://indiankanoon.org/doc/1531672/",
            key_takeaway: "Guidelines for arrest and detention to prevent custodial violence",
            domain: "Criminal Law",
            practical_advice: "Ensure compliance with arrest procedures; demand medical examination if detained",
        },
    },
};
