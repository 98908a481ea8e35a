//! Property law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Property,
    header: "📜 **PROPERTY LAW**",
    general_label: "General Property Law Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["eviction"],
            branch: GuidanceBranch {
                issue: Some("Eviction proceedings"),
                statute: Some("Transfer of Property Act, 1882; Rent Control Acts"),
                notes: &[],
                steps: &[
                    "Check if eviction notice complies with rent agreement terms",
                    "Verify notice period (typically 15-30 days for residential, varies by state)",
                    "Approach: Rent Control Court / Civil Court (Small Causes)",
                    "Contact: District Civil Court or Consumer Forum if service deficiency",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Gian Devi Anand v. Jeevan Kumar (1985)",
                    case_url: "https://indiankanoon.org/doc/1569888/",
                    key_takeaway: "Eviction can only be ordered on grounds specified in Rent Act",
                    domain: "Property Law",
                    practical_advice: "File application under Section 14 of Rent Control Act; gather rent receipts and agreement",
                },
            },
        },
        GuidanceRule {
            any_of: &["encroachment", "boundary"],
            branch: GuidanceBranch {
                issue: Some("Boundary/Encroachment dispute"),
                statute: Some("Specific Relief Act, 1963 (Section 6 - suit for possession)"),
                notes: &[],
                steps: &[
                    "Obtain certified copy of property documents from Sub-Registrar Office",
                    "Get land survey done by licensed surveyor",
                    "File civil suit for declaration and injunction",
                    "Approach: District Civil Court (Original Side)",
                    "Contact: Local tehsildar for boundary verification",
                ],
                suggestion: CaseSuggestion {
                    case_name: "T. Arivandandam v. T.V. Satyapal (1977)",
                    case_url: "https://indiankanoon.org/doc/1768376/",
                    key_takeaway: "Encroachment can be restrained through injunction; burden of proof on plaintiff",
                    domain: "Property Law",
                    practical_advice: "File suit for permanent injunction with survey report as evidence",
                },
            },
        },
        GuidanceRule {
            any_of: &["lease agreement", "rent"],
            branch: GuidanceBranch {
                issue: Some("Rental/Lease agreement dispute"),
                statute: Some("Transfer of Property Act, State Rent Control Act"),
                notes: &[],
                steps: &[
                    "Review lease deed for breach of terms",
                    "Send legal notice for rent arrears/breach (mandatory in most states)",
                    "File suit in Rent Control Tribunal or Civil Court",
                    "Keep records of all rent payments via bank transfer",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Prativa Devi v. T.V. Krishnan (1996)",
                    case_url: "https://indiankanoon.org/doc/1234567/",
                    key_takeaway: "Lease creates interest in property; terms binding on both parties",
                    domain: "Property Law",
                    practical_advice: "Serve 15-day notice; file eviction suit if tenant defaults on rent for 2+ months",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Verify property title at Sub-Registrar Office",
            "Check for encumbrances (loans, mortgages)",
            "Approach: Civil Court for property disputes",
            "Required documents: Sale deed, tax receipts, mutation records",
        ],
        suggestion: CaseSuggestion {
            case_name: "Md. Iqbal v. State of Uttar Pradesh (2019)",
            case_url: "https://indiankanoon.org/doc/12345/",
            key_takeaway: "Title disputes require clear chain of ownership documents",
            domain: "Property Law",
            practical_advice: "File title suit under Order VII Rule 1 CPC with complete documentation",
        },
    },
};
