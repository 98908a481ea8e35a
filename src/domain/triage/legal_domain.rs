//! LegalDomain enum representing the 11 supported legal areas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of legal domains the triage engine classifies into.
///
/// The variant order is the canonical order: taxonomy scans, multi-domain
/// response composition, and API output all iterate domains in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalDomain {
    #[serde(rename = "PROPERTY_LAW")]
    Property,
    #[serde(rename = "CRIMINAL_LAW")]
    Criminal,
    #[serde(rename = "FAMILY_LAW")]
    Family,
    #[serde(rename = "CONSTITUTIONAL_LAW")]
    Constitutional,
    #[serde(rename = "CONSUMER_LAW")]
    Consumer,
    #[serde(rename = "LABOR_LAW")]
    Labor,
    #[serde(rename = "TORT_LAW")]
    Tort,
    #[serde(rename = "INTELLECTUAL_PROPERTY")]
    IntellectualProperty,
    #[serde(rename = "ENVIRONMENTAL_LAW")]
    Environmental,
    #[serde(rename = "CYBER_LAW")]
    Cyber,
    #[serde(rename = "TAX_LAW")]
    Tax,
}

impl LegalDomain {
    /// Returns all domains in canonical order.
    pub fn all() -> &'static [LegalDomain] {
        &[
            LegalDomain::Property,
            LegalDomain::Criminal,
            LegalDomain::Family,
            LegalDomain::Constitutional,
            LegalDomain::Consumer,
            LegalDomain::Labor,
            LegalDomain::Tort,
            LegalDomain::IntellectualProperty,
            LegalDomain::Environmental,
            LegalDomain::Cyber,
            LegalDomain::Tax,
        ]
    }

    /// Returns the 0-based index of this domain in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|d| d == self)
            .expect("LegalDomain must be in all() array")
    }

    /// Returns the stable wire tag for this domain.
    pub fn tag(&self) -> &'static str {
        match self {
            LegalDomain::Property => "PROPERTY_LAW",
            LegalDomain::Criminal => "CRIMINAL_LAW",
            LegalDomain::Family => "FAMILY_LAW",
            LegalDomain::Constitutional => "CONSTITUTIONAL_LAW",
            LegalDomain::Consumer => "CONSUMER_LAW",
            LegalDomain::Labor => "LABOR_LAW",
            LegalDomain::Tort => "TORT_LAW",
            LegalDomain::IntellectualProperty => "INTELLECTUAL_PROPERTY",
            LegalDomain::Environmental => "ENVIRONMENTAL_LAW",
            LegalDomain::Cyber => "CYBER_LAW",
            LegalDomain::Tax => "TAX_LAW",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LegalDomain::Property => "Property Law",
            LegalDomain::Criminal => "Criminal Law",
            LegalDomain::Family => "Family Law",
            LegalDomain::Constitutional => "Constitutional Law",
            LegalDomain::Consumer => "Consumer Law",
            LegalDomain::Labor => "Labor Law",
            LegalDomain::Tort => "Tort Law",
            LegalDomain::IntellectualProperty => "Intellectual Property",
            LegalDomain::Environmental => "Environmental Law",
            LegalDomain::Cyber => "Cyber Law",
            LegalDomain::Tax => "Tax Law",
        }
    }
}

impl fmt::Display for LegalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
