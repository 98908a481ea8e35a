//! Environmental law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Environmental,
    header: "🌍 **ENVIRONMENTAL LAW**",
    general_label: "General Environmental Law Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["pollution", "air pollution", "water pollution"],
            branch: GuidanceBranch {
                issue: Some("Pollution (Air/Water/Noise)"),
                statute: Some("Air Act 1981, Water Act 1974, Environment Protection Act 1986"),
                notes: &[],
                steps: &[
                    "File complaint with State Pollution Control Board (SPCB)",
                    "For immediate action: Approach District Magistrate or Sub-Divisional Magistrate",
                    "File PIL in High Court or approach National Green Tribunal (NGT)",
                    "Document pollution: photos, videos, air/water quality reports",
                    "Contact: Central Pollution Control Board helpline or NGT",
                ],
                suggestion: CaseSuggestion {
                    case_name: "M.C. Mehta v. Union of India (1986) - Oleum Gas Leak",
                    case_url: "https://indiankanoon.org/doc/1486949/",
                    key_takeaway: "Absolute liability for polluting industries; precautionary principle and polluter pays principle",
                    domain: "Environmental Law",
                    practical_advice: "File complaint with SPCB; file NGT application for compensation and closure orders",
                },
            },
        },
        GuidanceRule {
            any_of: &["ngt", "green tribunal"],
            branch: GuidanceBranch {
                issue: Some("National Green Tribunal matters"),
                statute: Some("National Green Tribunal Act, 2010"),
                notes: &[],
                steps: &[
                    "NGT has jurisdiction over environmental matters under 7 Acts",
                    "File application in NGT (Original Application or Appeal)",
                    "No court fee required; can be filed by any person",
                    "NGT benches: Delhi (Principal), Bhopal, Pune, Kolkata, Chennai",
                    "Fast-track disposal: Cases decided within 6 months",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Vellore Citizens Welfare Forum v. Union of India (1996)",
                    case_url: "https://indiankanoon.org/doc/1934103/",
                    key_takeaway: "Precautionary principle and polluter pays principle are part of environmental law",
                    domain: "Environmental Law",
                    practical_advice: "File detailed application in appropriate NGT bench with environmental impact evidence",
                },
            },
        },
        GuidanceRule {
            any_of: &["deforestation", "forest rights"],
            branch: GuidanceBranch {
                issue: Some("Forest rights/Deforestation"),
                statute: Some("Forest Conservation Act, 1980; Scheduled Tribes (Forest Rights) Act, 2006"),
                notes: &[],
                steps: &[
                    "For illegal deforestation: File complaint with Forest Department",
                    "For forest rights: Apply to Sub-Divisional Level Committee (SDLC)",
                    "File PIL in High Court or NGT for forest violations",
                    "Forest clearance mandatory for diversion of forest land",
                    "Contact: District Forest Officer or State Forest Department",
                ],
                suggestion: CaseSuggestion {
                    case_name: "T.N. Godavarman v. Union of India (1997)",
                    case_url: "https://indiankanoon.org/doc/1913966/",
                    key_takeaway: "Supreme Court's continuing mandamus on forest conservation; strict guidelines",
                    domain: "Environmental Law",
                    practical_advice: "File complaint with forest authorities; approach NGT for violations",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Right to clean environment is part of Article 21 (Right to Life)",
            "Approach: NGT (environmental disputes) or High Court (PIL)",
            "Public participation allowed in environmental decision-making",
            "Contact: NGT helpline or Ministry of Environment",
        ],
        suggestion: CaseSuggestion {
            case_name: "Indian Council for Enviro-Legal Action v. Union of India (1996)",
            case_url: "https://indiankanoon.org/doc/1486949/",
            key_takeaway: "Polluter pays principle; industries must compensate for environmental damage",
            domain: "Environmental Law",
            practical_advice: "File application in NGT; gather scientific evidence of environmental harm",
        },
    },
};
