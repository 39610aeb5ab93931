#![forbid(unsafe_code)]

use silentspeak_contracts::risk::{RiskLevel, RiskTermLists};

pub const DEFAULT_HIGH_RISK_TERMS: [&str; 9] = [
    "suicide",
    "kill myself",
    "end it",
    "die",
    "overdose",
    "self-harm",
    "cutting",
    "not safe",
    "hurt myself",
];

pub const DEFAULT_MEDIUM_RISK_TERMS: [&str; 9] = [
    "panic",
    "anxious",
    "scared",
    "depressed",
    "can't cope",
    "hate myself",
    "worthless",
    "crying",
    "alone",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// The configured term that decided the level, if any.
    pub matched_term: Option<String>,
}

/// Plain substring containment over lowercased text. No stemming and no
/// word boundaries: "scared" matches inside "scaredy-cat".
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    high_risk_terms: Vec<String>,
    medium_risk_terms: Vec<String>,
}

impl RiskClassifier {
    pub fn new(terms: &RiskTermLists) -> Self {
        Self {
            high_risk_terms: lowercase_all(&terms.high_risk_terms),
            medium_risk_terms: lowercase_all(&terms.medium_risk_terms),
        }
    }

    pub fn mvp_v1() -> Self {
        Self {
            high_risk_terms: DEFAULT_HIGH_RISK_TERMS.iter().map(|t| t.to_string()).collect(),
            medium_risk_terms: DEFAULT_MEDIUM_RISK_TERMS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }

    /// Empty text is `Low`.
    pub fn classify(&self, text: &str) -> RiskLevel {
        self.assess(text).level
    }

    /// Absent text is `Low`, as is empty text.
    pub fn classify_optional(&self, text: Option<&str>) -> RiskLevel {
        text.map_or(RiskLevel::Low, |t| self.classify(t))
    }

    pub fn matched_term(&self, text: &str) -> Option<String> {
        self.assess(text).matched_term
    }

    pub fn assess(&self, text: &str) -> RiskAssessment {
        if text.is_empty() {
            return low();
        }

        let lowered = text.to_lowercase();
        if let Some(term) = first_match(&lowered, &self.high_risk_terms) {
            tracing::warn!(term = %term, "high-risk term matched");
            return RiskAssessment {
                level: RiskLevel::High,
                matched_term: Some(term.to_string()),
            };
        }
        if let Some(term) = first_match(&lowered, &self.medium_risk_terms) {
            tracing::debug!(term = %term, "medium-risk term matched");
            return RiskAssessment {
                level: RiskLevel::Medium,
                matched_term: Some(term.to_string()),
            };
        }
        low()
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::mvp_v1()
    }
}

fn low() -> RiskAssessment {
    RiskAssessment {
        level: RiskLevel::Low,
        matched_term: None,
    }
}

fn first_match<'t>(lowered: &str, terms: &'t [String]) -> Option<&'t str> {
    terms
        .iter()
        .find(|term| lowered.contains(term.as_str()))
        .map(String::as_str)
}

fn lowercase_all(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}
