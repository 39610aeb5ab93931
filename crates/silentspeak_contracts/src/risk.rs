#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::{ContractViolation, SchemaVersion, Validate};

pub const RISK_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

/// The two term lists the risk classifier scans for. Order is preserved
/// so the first matching term can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskTermLists {
    pub high_risk_terms: Vec<String>,
    pub medium_risk_terms: Vec<String>,
}

impl RiskTermLists {
    pub fn v1(
        high_risk_terms: Vec<String>,
        medium_risk_terms: Vec<String>,
    ) -> Result<Self, ContractViolation> {
        let lists = Self {
            high_risk_terms,
            medium_risk_terms,
        };
        lists.validate()?;
        Ok(lists)
    }
}

impl Validate for RiskTermLists {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_term_list("risk_term_lists.high_risk_terms", &self.high_risk_terms)?;
        validate_term_list("risk_term_lists.medium_risk_terms", &self.medium_risk_terms)?;
        Ok(())
    }
}

fn validate_term_list(field: &'static str, terms: &[String]) -> Result<(), ContractViolation> {
    if terms.is_empty() {
        return Err(ContractViolation::InvalidValue {
            field,
            reason: "must contain at least one term",
        });
    }
    if terms.len() > 256 {
        return Err(ContractViolation::InvalidValue {
            field,
            reason: "must contain <= 256 terms",
        });
    }
    // An empty term would be a substring of every message.
    if terms.iter().any(|t| t.is_empty()) {
        return Err(ContractViolation::InvalidValue {
            field,
            reason: "terms must not be empty",
        });
    }
    Ok(())
}
