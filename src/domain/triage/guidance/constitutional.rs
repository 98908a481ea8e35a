//! Constitutional law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Constitutional,
    header: "🗽 **CONSTITUTIONAL LAW**",
    general_label: "General Constitutional Rights Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["fundamental rights", "article 21"],
            branch: GuidanceBranch {
                issue: Some("Fundamental rights violation"),
                statute: Some("Constitution of India - Part III (Articles 14-32)"),
                notes: &[],
                steps: &[
                    "File Writ Petition under Article 226 (High Court) or Article 32 (Supreme Court)",
                    "Types of writs: Habeas Corpus, Mandamus, Prohibition, Certiorari, Quo Warranto",
                    "Locus standi: Any person can file PIL for public interest",
                    "Approach: Constitutional lawyer or Human Rights Commission",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Maneka Gandhi v. Union of India (1978)",
                    case_url: "https://indiankanoon.org/doc/1766147/",
                    key_takeaway: "Article 21 includes right to live with dignity; procedure must be fair, just and reasonable",
                    domain: "Constitutional Law",
                    practical_advice: "Draft writ petition clearly stating fundamental right violated; file in appropriate HC/SC",
                },
            },
        },
        GuidanceRule {
            any_of: &["privacy"],
            branch: GuidanceBranch {
                issue: Some("Right to privacy"),
                statute: Some("Article 21 (Right to Life includes Privacy)"),
                notes: &[],
                steps: &[
                    "Privacy is fundamental right (K.S. Puttaswamy judgment)",
                    "File complaint with Data Protection Authority (once operational)",
                    "For government surveillance: File writ petition challenging legality",
                    "For private violations: File criminal/civil complaint",
                ],
                suggestion: CaseSuggestion {
                    case_name: "K.S. Puttaswamy v. Union of India (2017)",
                    case_url: "https://indiankanoon.org/doc/91938676/",
                    key_takeaway: "Privacy is intrinsic to Article 21; 9-judge bench declared privacy as fundamental right",
                    domain: "Constitutional Law",
                    practical_advice: "Document privacy breach; file writ if state action involved; civil suit for private parties",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Fundamental Rights enforceable against State action (not private parties)",
            "Approach: National/State Human Rights Commission",
            "Free legal aid available through NALSA",
            "Contact: Constitutional lawyer or legal aid clinic",
        ],
        suggestion: CaseSuggestion {
            case_name: "Vishaka v. State of Rajasthan (1997)",
            case_url: "https://indiankanoon.org/doc/1031794/",
            key_takeaway: "Courts can fill legislative vacuum; guidelines enforceable till law enacted",
            domain: "Constitutional Law",
            practical_advice: "File writ petition for judicial review; cite relevant fundamental right articles",
        },
    },
};
