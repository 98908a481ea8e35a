//! Tort and accident law playbook.

use super::{CaseSuggestion, GuidanceBranch, GuidanceRule, Playbook};
use crate::domain::triage::LegalDomain;

pub(super) static PLAYBOOK: Playbook = Playbook {
    domain: LegalDomain::Tort,
    header: "🩹 **TORT/ACCIDENT LAW**",
    general_label: "General Tort Law Guidance",
    rules: &[
        GuidanceRule {
            any_of: &["accident", "motor accident"],
            branch: GuidanceBranch {
                issue: Some("Motor vehicle accident"),
                statute: Some("Motor Vehicles Act, 1988 - Chapter XII (Claims Tribunal)"),
                notes: &[],
                steps: &[
                    "File FIR immediately at nearest police station",
                    "Get medical treatment and preserve MLC (Medico-Legal Case) report",
                    "File claim petition in Motor Accident Claims Tribunal (MACT) within 6 months",
                    "Documents needed: FIR copy, driving license, RC book, medical bills",
                    "Compensation: Based on income, age, injury severity (Section 166)",
                ],
                suggestion: CaseSuggestion {
                    case_name: "National Insurance Co. v. Pranay Sethi (2017)",
                    case_url: "https://indiankanoon.org/doc/165876902/",
                    key_takeaway: "Structured formula for accident compensation; future prospects considered",
                    domain: "Tort Law",
                    practical_advice: "File MACT claim with income proof and medical evidence; claim insurance from vehicle owner",
                },
            },
        },
        GuidanceRule {
            any_of: &["negligence", "medical negligence"],
            branch: GuidanceBranch {
                issue: Some("Negligence/Medical negligence"),
                statute: Some("Law of Torts; Consumer Protection Act, 2019"),
                notes: &[],
                steps: &[
                    "Obtain complete medical records and expert opinion on negligence",
                    "File complaint in Consumer Forum (medical service is 'service')",
                    "Alternative: File civil suit for damages in District Court",
                    "Burden of proof: Plaintiff must prove breach of duty and causation",
                    "Contact: State Medical Council for professional misconduct proceedings",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Jacob Mathew v. State of Punjab (2005)",
                    case_url: "https://indiankanoon.org/doc/1724546/",
                    key_takeaway: "Medical negligence defined as gross negligence; doctors not liable for error of judgment",
                    domain: "Tort Law",
                    practical_advice: "Get independent medical expert opinion; file complaint with detailed medical evidence",
                },
            },
        },
        GuidanceRule {
            any_of: &["defamation"],
            branch: GuidanceBranch {
                issue: Some("Defamation (Civil)"),
                statute: Some("Law of Torts; IPC Section 499-500 (Criminal Defamation)"),
                notes: &[],
                steps: &[
                    "For civil defamation: File suit for damages in Civil Court",
                    "For criminal defamation: File private complaint before Magistrate",
                    "Preserve defamatory material: screenshots, publications, recordings",
                    "Send legal notice before filing suit (mandatory)",
                    "Defenses available to defendant: Truth, fair comment, privilege",
                ],
                suggestion: CaseSuggestion {
                    case_name: "R. Rajagopal v. State of Tamil Nadu (1994)",
                    case_url: "https://indiankanoon.org/doc/501107/",
                    key_takeaway: "Right to privacy vs freedom of speech; defamation must balance both rights",
                    domain: "Tort Law",
                    practical_advice: "Document defamatory statements; file civil suit for damages or criminal complaint",
                },
            },
        },
        GuidanceRule {
            any_of: &["nuisance", "trespass"],
            branch: GuidanceBranch {
                issue: Some("Nuisance/Trespass"),
                statute: Some("Law of Torts - Private/Public Nuisance; Trespass to Land"),
                notes: &[],
                steps: &[
                    "Document nuisance: noise levels, photos, witness statements",
                    "Send cease and desist notice to offending party",
                    "File civil suit for injunction and damages",
                    "For noise pollution: Complaint to Pollution Control Board",
                    "Approach: Civil Court or Magistrate Court",
                ],
                suggestion: CaseSuggestion {
                    case_name: "Municipal Corporation of Delhi v. Subhagwanti (1966)",
                    case_url: "https://indiankanoon.org/doc/1236039/",
                    key_takeaway: "Public authority liable for nuisance; compensation for damages caused",
                    domain: "Tort Law",
                    practical_advice: "File suit for permanent injunction; gather evidence of interference with enjoyment",
                },
            },
        },
    ],
    fallback: GuidanceBranch {
        issue: None,
        statute: None,
        notes: &[],
        steps: &[
            "Tort: Civil wrong causing injury/loss to another person",
            "Remedies: Damages (compensation), injunction, specific restitution",
            "Approach: Civil Court for tort claims",
            "Contact: Civil litigation lawyer for tort suits",
        ],
        suggestion: CaseSuggestion {
            case_name: "M.C. Mehta v. Union of India (1987)",
            case_url: "https://indiankanoon.org/doc/1486949/",
            key_takeaway: "Absolute liability for hazardous activities; no defense available for enterprise liability",
            domain: "Tort Law",
            practical_advice: "File civil suit with evidence of injury and causation; claim compensation",
        },
    },
};
