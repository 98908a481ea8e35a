//! Labor law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Labor,
    header: "💼 **LABOR LAW**",
    general_label: "General Labor Law Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["termination", "wrongful dismissal"],
            branch: GuidanceBranch {
                issue: Some("Wrongful termination/dismissal"),
                statute: Some("Industrial Disputes Act, 1947; Standing Orders Act"),
                notes: &[],
                steps: &[
                    "Check termination notice period as per appointment letter/standing orders",
                    "Verify if domestic enquiry was conducted (mandatory for misconduct termination)",
                    "File complaint with Labour Commissioner within 45 days",
                    "Approach: Labour Court or Industrial Tribunal",
                    "Reliefs: Reinstatement with back wages or compensation",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Workmen of Meenakshi Mills v. Meenakshi Mills Ltd. (1992)",
                    case_url: "https://indiankanoon.org/doc/1567353/",
                    key_takeaway: "Principles of natural justice must be followed in termination; domestic enquiry mandatory",
                    domain: "Labor Law",
                    practical_advice: "Serve reply notice within stipulated time; file claim for unfair dismissal with evidence",
                },
            },
        },
        GuidanceRule {
            any_of: &["salary", "wages", "bonus"],
            branch: GuidanceBranch {
                issue: Some("Salary/Wages/Bonus non-payment"),
                statute: Some("Payment of Wages Act, 1936; Payment of Bonus Act, 1965"),
                notes: &[],
                steps: &[
                    "Salary must be paid by 7th of following month (monthly) or 7th day (weekly)",
                    "Send legal notice to employer demanding payment with interest",
                    "File complaint with Assistant Labour Commissioner",
                    "Minimum wage: Check state-specific rates (₹15,000-20,000/month approx.)",
                    "Bonus: Mandatory if salary < ₹21,000/month and company has 20+ employees",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Bharatiya Mazdoor Sangh v. State of Maharashtra (2013)",
                    case_url: "https://indiankanoon.org/doc/1568745/",
                    key_takeaway: "Timely payment of wages is statutory right; delay attracts penalty on employer",
                    domain: "Labor Law",
                    practical_advice: "Maintain salary slips; file complaint under Payment of Wages Act for recovery",
                },
            },
        },
        GuidanceRule {
            any_of: &["pf", "epf", "gratuity"],
            branch: GuidanceBranch {
                issue: Some("PF/Gratuity claim"),
                statute: Some("Employees' Provident Fund Act, 1952; Payment of Gratuity Act, 1972"),
                notes: &[],
                steps: &[
                    "PF withdrawal: Apply online on EPFO portal (epfindia.gov.in)",
                    "Gratuity: Payable after 5 years continuous service (formula: 15 days wage × years)",
                    "Gratuity claim must be filed within 30 days of termination/resignation",
                    "If employer doesn't pay: File complaint with Controlling Authority",
                    "Contact: Regional PF Commissioner or Labour Office",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Pratibha Khanna v. State Bank of India (2011)",
                    case_url: "https://indiankanoon.org/doc/1569234/",
                    key_takeaway: "Gratuity is statutory right; cannot be forfeited except for misconduct",
                    domain: "Labor Law",
                    practical_advice: "File PF Form 19/10C online; for gratuity file Form I within prescribed time",
                },
            },
        },
        GuidanceRule {
            any_of: &["sexual harassment", "posh act"],
            branch: GuidanceBranch {
                issue: Some("Workplace sexual harassment"),
                statute: Some("Sexual Harassment of Women at Workplace Act, 2013 (POSH Act)"),
                notes: &[],
                steps: &[
                    "File written complaint with Internal Complaints Committee (ICC) within 3 months",
                    "ICC mandatory for organizations with 10+ employees",
                    "If no ICC: Approach Local Complaints Committee (District Officer)",
                    "Interim relief: Transfer of complainant/respondent during enquiry",
                    "Parallel remedy: File FIR for criminal charges (IPC 354A, 509)",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Vishaka v. State of Rajasthan (1997)",
                    case_url: "https://indiankanoon.org/doc/1031794/",
                    key_takeaway: "Workplace sexual harassment violates fundamental rights; employer liable for safe environment",
                    domain: "Labor Law",
                    practical_advice: "Document incidents with dates; file complaint with ICC; preserve evidence",
                },
            },
        },
        GuidanceRule {
            any_of: &["workplace", "harassment at work"],
            branch: GuidanceBranch {
                issue: Some("Workplace harassment (general)"),
                statute: Some("Industrial Employment (Standing Orders) Act; IPC provisions"),
                notes: &[],
                steps: &[
                    "Document harassment instances: emails, messages, witness statements",
                    "Report to HR/Management in writing",
                    "File complaint with Labour Commissioner if no action taken",
                    "For criminal harassment: File FIR under IPC Section 294, 509",
                    "Approach: Labour Court or Civil Court for damages",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Apparel Export Promotion Council v. A.K. Chopra (1999)",
                    case_url: "https://indiankanoon.org/doc/1563234/",
                    key_takeaway: "Hostile work environment is misconduct; employer must take action against harasser",
                    domain: "Labor Law",
                    practical_advice: "File internal complaint first; escalate to statutory authorities if unresolved",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Working hours: 8 hours/day, 48 hours/week (Factories Act)",
            "Leave: 12 days earned leave per year (Shops & Establishments Act)",
            "Approach: State Labour Commissioner or Labour Court",
            "Contact: Labour Helpline 1800-111-555 or State Labour Department",
        ],
        suggestion: CaseSuggestion {
            case_name: "Excel Wear v. Union of India (1978)",
            case_url: "https://indiankanoon.org/doc/1564567/",
            key_takeaway: "Labor laws protect workers' rights; remedies available for violations",
            domain: "Labor Law",
            practical_advice: "Maintain employment records; seek legal aid for labor disputes",
        },
    },
};
