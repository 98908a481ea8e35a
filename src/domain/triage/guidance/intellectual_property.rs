//! Intellectual property law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::IntellectualProperty,
    header: "💡 **INTELLECTUAL PROPERTY LAW**",
    general_label: "General Intellectual Property Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["copyright", "plagiarism"],
            branch: GuidanceBranch {
                issue: Some("Copyright infringement/Plagiarism"),
                statute: Some("Copyright Act, 1957"),
                notes: &[],
                steps: &[
                    "Copyright is automatic; registration not mandatory but advisable",
                    "Send cease and desist notice to infringer with proof of original work",
                    "File suit for injunction and damages in District Court",
                    "For online infringement: DMCA takedown notice to platform",
                    "Criminal remedy: File complaint under Section 63 Copyright Act",
                ],
                suggestion: CaseSuggestion {
                    case_name: "R.G. Anand v. M/s Delux Films (1978)",
                    case_url: "https://indiankanoon.org/doc/1094438/",
                    key_takeaway: "Copyright protects expression, not ideas; substantial similarity test for infringement",
                    domain: "Intellectual Property",
                    practical_advice: "Preserve evidence of original creation and infringement; file suit for injunction",
                },
            },
        },
        GuidanceRule {
            any_of: &["trademark", "brand", "logo"],
            branch: GuidanceBranch {
                issue: Some("Trademark infringement"),
                statute: Some("Trade Marks Act, 1999"),
                notes: &[],
                steps: &[
                    "Register trademark with Trademark Registry (takes 12-18 months)",
                    "Unregistered marks have limited protection under common law",
                    "Send cease and desist notice for unauthorized use",
                    "File suit for passing off or trademark infringement",
                    "Approach: Commercial Division of High Court or District Court",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Laxmikant V. Patel v. Chetanbhat Shah (2002)",
                    case_url: "https://indiankanoon.org/doc/1501433/",
                    key_takeaway: "Prior use and reputation establish rights even without registration",
                    domain: "Intellectual Property",
                    practical_advice: "File trademark application; for infringement file suit with evidence of prior use",
                },
            },
        },
        GuidanceRule {
            any_of: &["patent"],
            branch: GuidanceBranch {
                issue: Some("Patent rights/infringement"),
                statute: Some("Patents Act, 1970"),
                notes: &[],
                steps: &[
                    "File patent application with Controller of Patents (Indian Patent Office)",
                    "Patent examination takes 3-5 years; provisional protection available",
                    "For infringement: Send legal notice to infringer",
                    "File suit in Commercial Court or High Court",
                    "Patent protection: 20 years from filing date",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Bishwanath Prasad v. Hindustan Metal Industries (1979)",
                    case_url: "https://indiankanoon.org/doc/1218511/",
                    key_takeaway: "Invention must be novel, non-obvious, and capable of industrial application",
                    domain: "Intellectual Property",
                    practical_advice: "File patent application with complete specification; maintain secrecy before filing",
                },
            },
        },
        GuidanceRule {
            any_of: &["piracy", "counterfeit"],
            branch: GuidanceBranch {
                issue: Some("Piracy/Counterfeiting"),
                statute: Some("Copyright Act, Trade Marks Act; IPC Section 420"),
                notes: &[],
                steps: &[
                    "Document counterfeit products with photos and purchase evidence",
                    "File complaint with local police and Economic Offences Wing",
                    "File civil suit for damages and criminal complaint",
                    "Contact: IP Cell of State Police or Anti-Piracy Unit",
                    "For online piracy: File complaint with Cyber Crime Cell",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Microsoft Corporation v. Yogesh Popat (2005)",
                    case_url: "https://indiankanoon.org/doc/1569087/",
                    key_takeaway: "Software piracy is both civil and criminal offense; damages awarded",
                    domain: "Intellectual Property",
                    practical_advice: "Raid and seizure possible; file FIR with evidence of original ownership",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "IP rights: Copyright (automatic), Trademark (registration advised), Patent (must register)",
            "Approach: IP Appellate Board (IPAB) or Commercial Courts",
            "Online filing available on IP India portal",
            "Contact: IP lawyer or Patent/Trademark Agent",
        ],
        suggestion: CaseSuggestion {
            case_name: "Novartis AG v. Union of India (2013)",
            case_url: "https://indiankanoon.org/doc/165876436/",
            key_takeaway: "Patent standards in India require genuine innovation; evergreening not allowed",
            domain: "Intellectual Property",
            practical_advice: "Register IP rights early; maintain documentation of creation/use",
        },
    },
};
