//! Family law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Family,
    header: "👨‍👩‍👧 **FAMILY LAW**",
    general_label: "General Family Law Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["divorce"],
            branch: GuidanceBranch {
                issue: Some("Divorce proceedings"),
                statute: Some("Hindu Marriage Act, 1955 / Special Marriage Act, 1954"),
                notes: &["**Divorce Grounds**: Adultery, cruelty, desertion, conversion, mental disorder"],
                steps: &[
                    "Mutual Consent Divorce: File joint petition under Section 13B (HMA)",
                    "Contested Divorce: File petition under Section 13 with grounds",
                    "Approach: Family Court (if available) or District Court",
                    "Waiting period: 6 months for mutual consent divorce",
                    "Contact: Family court mediation center for settlement",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Naveen Kohli v. Neelu Kohli (2006)",
                    case_url: "https://indiankanoon.org/doc/1799542/",
                    key_takeaway: "Irretrievable breakdown of marriage is a valid ground for divorce",
                    domain: "Family Law",
                    practical_advice: "Consult family lawyer; gather evidence of cruelty/desertion; attempt mediation first",
                },
            },
        },
        GuidanceRule {
            any_of: &["custody", "child"],
            branch: GuidanceBranch {
                issue: Some("Child custody"),
                statute: Some("Guardians and Wards Act, 1890; Hindu Minority & Guardianship Act"),
                notes: &["**Custody Principles**: Best interest of child; preference to mother for children <5 years"],
                steps: &[
                    "File custody petition in Family Court",
                    "Court considers: child's age, wishes (if mature), parent's conduct",
                    "Options: Sole custody, joint custody, visitation rights",
                    "Approach: District/Family Court where child resides",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Rosy Jacob v. Jacob A. Chakramakkal (1973)",
                    case_url: "https://indiankanoon.org/doc/1743148/",
                    key_takeaway: "Welfare of child is paramount; tender years doctrine for young children",
                    domain: "Family Law",
                    practical_advice: "File habeas corpus if child wrongfully retained; provide evidence of fitness as parent",
                },
            },
        },
        GuidanceRule {
            any_of: &["domestic violence", "section 498a"],
            branch: GuidanceBranch {
                issue: Some("Domestic violence"),
                statute: Some("Protection of Women from Domestic Violence Act, 2005; IPC Section 498A"),
                notes: &[],
                steps: &[
                    "File complaint at police station (FIR under Section 498A IPC)",
                    "Approach: Protection Officer or Magistrate for protection order",
                    "Reliefs available: Protection order, residence order, maintenance, custody",
                    "Emergency shelter: Contact women's helpline 181 or local NGO",
                    "Medical evidence: Get treated at government hospital (MLC report)",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Smt. Sarita v. Smt. Umrao (2008)",
                    case_url: "https://indiankanoon.org/doc/1799438/",
                    key_takeaway: "Domestic violence includes physical, emotional, economic abuse; shared household rights",
                    domain: "Family Law",
                    practical_advice: "File application under DV Act for immediate protection; gather medical and witness evidence",
                },
            },
        },
        GuidanceRule {
            any_of: &["alimony", "maintenance"],
            branch: GuidanceBranch {
                issue: Some("Alimony/Maintenance"),
                statute: Some("CrPC Section 125; Hindu Marriage Act Section 24-25"),
                notes: &[],
                steps: &[
                    "File maintenance petition in Family Court or Magistrate Court",
                    "Interim maintenance: During pendency of divorce (Section 24 HMA)",
                    "Permanent alimony: After divorce decree (Section 25 HMA)",
                    "Amount depends on: Husband's income, wife's income/needs, standard of living",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Rajnesh v. Neha (2020)",
                    case_url: "https://indiankanoon.org/doc/149683920/",
                    key_takeaway: "Maintenance should be 25% of husband's net salary as general guideline",
                    domain: "Family Law",
                    practical_advice: "Submit income affidavits; provide evidence of expenses and lifestyle",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Approach: Family Court (Jurisdiction: matrimonial and custody matters)",
            "Mediation is mandatory before trial in most family courts",
            "Free legal aid available for women earning < ₹1 lakh/year",
            "Contact: Family court counselor or District Legal Services Authority",
        ],
        suggestion: CaseSuggestion {
            case_name: "Shayara Bano v. Union of India (2017)",
            case_url: "https://indiankanoon.org/doc/115701246/",
            key_takeaway: "Triple Talaq declared unconstitutional; Muslim women have equal rights",
            domain: "Family Law",
            practical_advice: "Consult family law advocate; explore mediation for amicable settlement",
        },
    },
};
