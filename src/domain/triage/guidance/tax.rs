//! Tax law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Tax,
    header: "💰 **TAX LAW**",
    general_label: "General Tax Law Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["gst", "service tax"],
            branch: GuidanceBranch {
                issue: Some("GST/Service tax matters"),
                statute: Some("GST Act, 2017 (CGST, SGST, IGST)"),
                notes: &[],
                steps: &[
                    "For GST notice: Respond within 15-30 days as specified",
                    "File reply on GST portal with supporting documents",
                    "If assessment order received: Appeal to First Appellate Authority within 3 months",
                    "Approach: GST Tribunal (after first appeal) or High Court",
                    "Contact: GST Helpline 1800-103-4786 or jurisdictional GST Officer",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Union of India v. Mohit Minerals (2022)",
                    case_url: "https://indiankanoon.org/doc/123456789/",
                    key_takeaway: "GST assessment principles; proper opportunity must be given before demand",
                    domain: "Tax Law",
                    practical_advice: "File detailed reply to notice; appeal assessment order within limitation",
                },
            },
        },
        GuidanceRule {
            any_of: &["income tax", "tax notice", "itr"],
            branch: GuidanceBranch {
                issue: Some("Income tax notice/assessment"),
                statute: Some("Income Tax Act, 1961"),
                notes: &[],
                steps: &[
                    "For scrutiny notice: Respond within 15-30 days; can request extension",
                    "File reply on e-filing portal with documentary evidence",
                    "If assessment order: File appeal to CIT(Appeals) within 30 days",
                    "Further appeal: ITAT (Income Tax Appellate Tribunal) within 60 days",
                    "Contact: Jurisdictional Assessing Officer or Tax Practitioner",
                ],
                suggestion: CaseSuggestion {
                    case_name: "CIT v. Vegetable Products Ltd. (1973)",
                    case_url: "https://indiankanoon.org/doc/1766147/",
                    key_takeaway: "Assessment must be based on material evidence; proper opportunity of hearing mandatory",
                    domain: "Tax Law",
                    practical_advice: "Respond to notice promptly; file appeal with supporting documents if aggrieved",
                },
            },
        },
        GuidanceRule {
            any_of: &["tax refund", "tds"],
            branch: GuidanceBranch {
                issue: Some("Tax refund/TDS issues"),
                statute: Some("Income Tax Act - Section 237 (refund), Section 192-194 (TDS)"),
                notes: &[],
                steps: &[
                    "For refund delay: File grievance on e-filing portal",
                    "Refund must be issued within 3-12 months of ITR processing",
                    "For TDS mismatch: Verify Form 26AS and reconcile with employer/deductor",
                    "File rectification under Section 154 if error in assessment",
                    "Contact: Centralized Processing Center (CPC) or Assessing Officer",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Ranbaxy Laboratories v. CIT (2011)",
                    case_url: "https://indiankanoon.org/doc/987654321/",
                    key_takeaway: "Interest on delayed refund; taxpayer entitled to compensation for delay",
                    domain: "Tax Law",
                    practical_advice: "Track refund status on portal; file grievance if delayed beyond 3 months",
                },
            },
        },
        GuidanceRule {
            any_of: &["tax penalty", "tax investigation"],
            branch: GuidanceBranch {
                issue: Some("Tax penalty/investigation"),
                statute: Some("Income Tax Act - Chapter XXI (Penalties)"),
                notes: &[],
                steps: &[
                    "For penalty notice: File detailed reply with explanation",
                    "Request personal hearing before penalty order",
                    "Penalty can be up to 200% of tax evaded (concealment/furnishing inaccurate particulars)",
                    "Appeal against penalty order: CIT(A) within 30 days",
                    "For search/raid: Cooperate; seek legal counsel immediately",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Dilip N. Shroff v. Joint CIT (2007)",
                    case_url: "https://indiankanoon.org/doc/135792468/",
                    key_takeaway: "Penalty proceedings are separate; mere addition doesn't automatically invite penalty",
                    domain: "Tax Law",
                    practical_advice: "Respond to penalty notice; explain bonafide reasons; file appeal if penalty levied",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Always respond to tax notices within stipulated time",
            "Approach: CIT(Appeals) → ITAT → High Court → Supreme Court",
            "Online filing: incometax.gov.in and gst.gov.in portals",
            "Contact: Tax consultant or Chartered Accountant",
        ],
        suggestion: CaseSuggestion {
            case_name: "K.P. Varghese v. ITO (1981)",
            case_url: "https://indiankanoon.org/doc/1234098765/",
            key_takeaway: "Tax laws must be strictly construed; ambiguity resolved in favor of taxpayer",
            domain: "Tax Law",
            practical_advice: "Maintain proper tax records; file timely returns; respond to notices promptly",
        },
    },
};
