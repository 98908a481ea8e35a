//! Cyber law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Cyber,
    header: "💻 **CYBER LAW**",
    general_label: "General Cyber Law Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["hacking", "data breach"],
            branch: GuidanceBranch {
                issue: Some("Hacking/Data breach"),
                statute: Some("IT Act, 2000 - Section 43 (civil), Section 66 (criminal)"),
                notes: &[],
                steps: &[
                    "File FIR at Cyber Crime Police Station or local police station",
                    "Preserve evidence: screenshots, logs, IP addresses, emails",
                    "Report to CERT-In (Indian Computer Emergency Response Team)",
                    "For data breach: Notify affected users and Data Protection Authority",
                    "Contact: National Cyber Crime Helpline 1930 or cybercrime.gov.in",
                ],
                suggestion: CaseSuggestion {
                    case_name: "State of Tamil Nadu v. Suhas Katti (2004)",
                    case_url: "https://indiankanoon.org/doc/1965138/",
                    key_takeaway: "First cyber crime conviction in India; hacking and identity theft punishable",
                    domain: "Cyber Law",
                    practical_advice: "File FIR with evidence; approach Cyber Cell for technical investigation",
                },
            },
        },
        GuidanceRule {
            any_of: &["online fraud", "phishing", "upi fraud"],
            branch: GuidanceBranch {
                issue: Some("Online fraud/Phishing/UPI fraud"),
                statute: Some("IT Act Section 66C, 66D; IPC Section 420 (cheating)"),
                notes: &[],
                steps: &[
                    "Immediately report to bank/payment gateway to freeze transaction",
                    "File complaint on National Cybercrime Reporting Portal (cybercrime.gov.in)",
                    "File FIR at Cyber Crime Police Station within 24 hours",
                    "Call 1930 (Cyber Crime Helpline) for immediate assistance",
                    "Preserve: Transaction details, screenshots, phone numbers, URLs",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Avnish Bajaj v. State (2005)",
                    case_url: "https://indiankanoon.org/doc/1297890/",
                    key_takeaway: "Intermediary liability for online frauds; platforms must take down illegal content",
                    domain: "Cyber Law",
                    practical_advice: "Report within 24 hours; file complaint with transaction proof and communication evidence",
                },
            },
        },
        GuidanceRule {
            any_of: &["cyberbullying", "morphing", "revenge porn"],
            branch: GuidanceBranch {
                issue: Some("Cyberbullying/Morphing/Revenge porn"),
                statute: Some("IT Act Section 67 (obscene content), 67A (sexually explicit); IPC 354C, 509"),
                notes: &[],
                steps: &[
                    "Do NOT delete evidence; take screenshots with timestamps",
                    "File FIR at Women Cyber Crime Cell or local police",
                    "Request immediate takedown from social media platforms",
                    "For minors: Contact National Commission for Protection of Child Rights",
                    "Women Helpline: 181 or Cyber Crime Helpline: 1930",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Shreya Singhal v. Union of India (2015)",
                    case_url: "https://indiankanoon.org/doc/110813550/",
                    key_takeaway: "Section 66A struck down; online harassment punishable under other IT Act provisions",
                    domain: "Cyber Law",
                    practical_advice: "File FIR immediately; preserve all evidence; request platform to remove content",
                },
            },
        },
        GuidanceRule {
            any_of: &["social media crime", "whatsapp fraud"],
            branch: GuidanceBranch {
                issue: Some("Social media crime/WhatsApp fraud"),
                statute: Some("IT Act Section 66D (impersonation); IPC Section 419, 420"),
                notes: &[],
                steps: &[
                    "Report fake profile/account to platform (Facebook, WhatsApp, Instagram)",
                    "File complaint on cybercrime.gov.in portal",
                    "File FIR with Cyber Cell with screenshots and chat history",
                    "For financial fraud: Also report to bank and RBI Banking Ombudsman",
                    "Contact: 1930 for cyber fraud; 155260 for banking fraud",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Facebook India v. Union of India (2019)",
                    case_url: "https://indiankanoon.org/doc/123987456/",
                    key_takeaway: "Social media platforms liable for user-generated illegal content if not removed promptly",
                    domain: "Cyber Law",
                    practical_advice: "Report to platform first; file FIR if no action; preserve complete evidence",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Cyber crimes covered under IT Act, 2000 and IPC",
            "Report online: cybercrime.gov.in (24/7 portal)",
            "Approach: Cyber Crime Police Station or local police",
            "Contact: National Cyber Crime Helpline 1930",
        ],
        suggestion: CaseSuggestion {
            case_name: "Kamlesh Vaswani v. Union of India (2013)",
            case_url: "https://indiankanoon.org/doc/98765432/",
            key_takeaway: "Directions to block child pornography and obscene content on internet",
            domain: "Cyber Law",
            practical_advice: "File complaint with evidence; approach Cyber Cell for technical investigation",
        },
    },
};
