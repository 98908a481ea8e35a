//! Curated keyword taxonomy mapping trigger phrases to legal domains.
//!
//! Built once at process start and shared read-only; the matcher and the
//! per-domain playbooks are both driven by these tables. Phrases are stored
//! lowercase because matching runs over the normalized (lowercased) message.

use once_cell::sync::Lazy;

use super::LegalDomain;

const PROPERTY_PHRASES: &[&str] = &[
    "property", "land", "house", "boundary", "fence", "encroachment",
    "neighbour", "neighbor", "deed", "title", "possession", "eviction",
    "lease agreement", "rent", "tenant", "landlord", "property dispute",
    "mutation", "registry", "stamp duty", "khata", "sale deed",
];

const CRIMINAL_PHRASES: &[&str] = &[
    "theft", "assault", "murder", "crime", "police", "arrest", "fir",
    "bail", "accused", "victim", "complaint", "harassment", "robbery",
    "kidnapping", "rape", "molestation", "cyber crime", "fraud",
    "cheating", "defamation", "ipc", "chargesheet", "anticipatory bail",
];

const FAMILY_PHRASES: &[&str] = &[
    "divorce", "marriage", "custody", "child", "alimony", "dowry",
    "adoption", "maintenance", "husband", "wife", "domestic violence",
    "section 498a", "cruelty", "restitution", "conjugal rights",
    "guardianship", "visitation rights", "child support", "mutual consent",
    "hindu marriage act", "special marriage act",
];

const CONSTITUTIONAL_PHRASES: &[&str] = &[
    "fundamental rights", "freedom", "speech", "discrimination",
    "equality", "right to life", "privacy", "search", "warrant",
    "civil rights", "article 21", "article 19", "article 14",
    "writ petition", "habeas corpus", "mandamus", "pil",
    "public interest litigation", "supreme court", "high court",
];

const CONSUMER_PHRASES: &[&str] = &[
    "defective product", "refund", "warranty", "consumer forum",
    "complaint", "service", "deficiency", "compensation", "seller",
    "buyer", "consumer court", "replacement", "faulty goods",
    "misleading advertisement", "unfair trade", "e-commerce dispute",
    "online shopping", "national consumer helpline", "consumer protection act",
];

const LABOR_PHRASES: &[&str] = &[
    "employment", "termination", "salary", "wages", "wrongful dismissal",
    "workplace", "harassment at work", "epf", "pf", "gratuity", "bonus",
    "retrenchment", "industrial dispute", "labour court", "provident fund",
    "esi", "maternity leave", "notice period", "resignation",
    "sexual harassment", "posh act", "minimum wages",
];

const TORT_PHRASES: &[&str] = &[
    "injury", "accident", "negligence", "compensation", "medical negligence",
    "slip", "fall", "damage", "liability", "personal injury",
    "motor accident", "hit and run", "insurance claim", "mact",
    "hospital negligence", "defamation", "nuisance", "trespass",
    "strict liability", "vicarious liability",
];

const INTELLECTUAL_PROPERTY_PHRASES: &[&str] = &[
    "copyright", "trademark", "patent", "logo", "design", "plagiarism",
    "infringement", "brand", "piracy", "counterfeit", "intellectual property",
    "ip rights", "registration", "licensing", "royalty", "trade secret",
    "patent office", "copyright act", "trademark registry", "gi tag",
];

const ENVIRONMENTAL_PHRASES: &[&str] = &[
    "pollution", "environment", "noise pollution", "air pollution",
    "water pollution", "industrial waste", "ngt", "green tribunal",
    "environmental clearance", "forest rights", "wildlife protection",
    "illegal mining", "deforestation", "hazardous waste", "emission",
    "environmental impact", "pollution control board", "eco-sensitive zone",
    "water act", "air act",
];

const CYBER_PHRASES: &[&str] = &[
    "hacking", "cyber crime", "phishing", "identity theft", "online fraud",
    "data breach", "cyberbullying", "it act", "section 66a", "section 67",
    "morphing", "revenge porn", "email hacking", "social media crime",
    "whatsapp fraud", "upi fraud", "banking fraud", "cyber cell",
    "digital signature", "electronic evidence", "cyber security",
];

const TAX_PHRASES: &[&str] = &[
    "gst", "income tax", "tax evasion", "tax notice", "tax refund",
    "assessment", "tds", "tax appeal", "tax tribunal", "itr",
    "income tax return", "tax penalty", "customs duty", "excise",
    "service tax", "tax audit", "tax investigation", "tax demand",
    "advance tax", "capital gains", "taxation",
];

const GREETING_PHRASES: &[&str] = &[
    "hi", "hello", "hey", "namaste", "good morning", "good afternoon",
    "good evening", "greetings", "hola", "sup", "yo", "howdy",
];

static TAXONOMY: Lazy<Taxonomy> = Lazy::new(Taxonomy::curated);

/// Immutable mapping from legal domain to its trigger phrases.
#[derive(Debug)]
pub struct Taxonomy {
    entries: Vec<(LegalDomain, &'static [&'static str])>,
    greetings: &'static [&'static str],
}

impl Taxonomy {
    /// Builds the hand-curated taxonomy.
    ///
    /// Entry order follows [`LegalDomain::all`], which defines the canonical
    /// iteration order for matching and response composition.
    pub fn curated() -> Self {
        let entries = vec![
            (LegalDomain::Property, PROPERTY_PHRASES),
            (LegalDomain::Criminal, CRIMINAL_PHRASES),
            (LegalDomain::Family, FAMILY_PHRASES),
            (LegalDomain::Constitutional, CONSTITUTIONAL_PHRASES),
            (LegalDomain::Consumer, CONSUMER_PHRASES),
            (LegalDomain::Labor, LABOR_PHRASES),
            (LegalDomain::Tort, TORT_PHRASES),
            (LegalDomain::IntellectualProperty, INTELLECTUAL_PROPERTY_PHRASES),
            (LegalDomain::Environmental, ENVIRONMENTAL_PHRASES),
            (LegalDomain::Cyber, CYBER_PHRASES),
            (LegalDomain::Tax, TAX_PHRASES),
        ];
        Self {
            entries,
            greetings: GREETING_PHRASES,
        }
    }

    /// Returns the process-wide shared taxonomy.
    pub fn shared() -> &'static Taxonomy {
        &TAXONOMY
    }

    /// Iterates domains in canonical order.
    pub fn domains(&self) -> impl Iterator<Item = LegalDomain> + '_ {
        self.entries.iter().map(|(domain, _)| *domain)
    }

    /// Returns the ordered trigger phrases for a domain.
    pub fn phrases_for(&self, domain: LegalDomain) -> &[&'static str] {
        self.entries
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, phrases)| *phrases)
            .unwrap_or(&[])
    }

    /// Returns the greeting phrase set.
    pub fn greeting_phrases(&self) -> &[&'static str] {
        self.greetings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_has_phrases() {
        let taxonomy = Taxonomy::shared();
        for domain in LegalDomain::all() {
            assert!(
                !taxonomy.phrases_for(*domain).is_empty(),
                "domain {} has no trigger phrases",
                domain
            );
        }
    }

    #[test]
    fn entries_follow_canonical_domain_order() {
        let taxonomy = Taxonomy::shared();
        let domains: Vec<_> = taxonomy.domains().collect();
        assert_eq!(domains.as_slice(), LegalDomain::all());
    }

    #[test]
    fn all_phrases_are_lowercase_and_non_empty() {
        let taxonomy = Taxonomy::shared();
        for domain in taxonomy.domains() {
            for phrase in taxonomy.phrases_for(domain) {
                assert!(!phrase.is_empty());
                assert_eq!(*phrase, phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn greeting_phrases_are_present() {
        let greetings = Taxonomy::shared().greeting_phrases();
        assert!(greetings.contains(&"namaste"));
        assert!(greetings.contains(&"good morning"));
    }

    #[test]
    fn unknown_phrases_are_not_listed() {
        assert!(!Taxonomy::shared()
            .phrases_for(LegalDomain::Tax)
            .contains(&"weather"));
    }
}
