#![forbid(unsafe_code)]

//! Static platform configuration schema. Parsed once at startup and never
//! reloaded.

use serde::{Deserialize, Serialize};

use crate::common::{validate_body_text, validate_text};
use crate::message::{MAX_AUTHOR_CHARS, MAX_MESSAGE_TEXT_CHARS, MAX_TOPIC_CHARS};
use crate::risk::RiskTermLists;
use crate::rooms::RoomGroup;
use crate::{ContractViolation, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    pub risk_assessment: RiskTermLists,
    #[serde(default)]
    pub demo_messages: Vec<DemoMessageSeed>,
    #[serde(default)]
    pub room_schedule: Vec<RoomGroup>,
    pub anonymous_names: AnonymousNames,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub strings: DisplayStrings,
}

impl Validate for PlatformConfig {
    fn validate(&self) -> Result<(), ContractViolation> {
        self.risk_assessment.validate()?;
        for seed in &self.demo_messages {
            seed.validate()?;
        }
        for group in &self.room_schedule {
            group.validate()?;
        }
        self.anonymous_names.validate()?;
        self.ui.validate()?;
        self.strings.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoMessageSeed {
    pub text: String,
    pub author: String,
    pub minutes_ago: u64,
    pub topic: String,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub queued: bool,
    #[serde(default)]
    pub reviewed: bool,
    #[serde(default)]
    pub approved: bool,
}

impl Validate for DemoMessageSeed {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_body_text("demo_message.text", &self.text, MAX_MESSAGE_TEXT_CHARS)?;
        validate_text("demo_message.author", &self.author, MAX_AUTHOR_CHARS)?;
        validate_text("demo_message.topic", &self.topic, MAX_TOPIC_CHARS)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymousNames {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
}

impl Validate for AnonymousNames {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.adjectives.is_empty() || self.adjectives.iter().any(|a| a.trim().is_empty()) {
            return Err(ContractViolation::InvalidValue {
                field: "anonymous_names.adjectives",
                reason: "must be a non-empty list of non-blank words",
            });
        }
        if self.nouns.is_empty() || self.nouns.iter().any(|n| n.trim().is_empty()) {
            return Err(ContractViolation::InvalidValue {
                field: "anonymous_names.nouns",
                reason: "must be a non-empty list of non-blank words",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    pub max_message_length: usize,
    pub toast_duration_ms: u64,
    pub queued_toast_duration_ms: u64,
    pub user_count_drift_interval_secs: u64,
    pub initial_user_count_min: u32,
    pub initial_user_count_max: u32,
    pub facilitator_count: u32,
    pub avg_response_minutes_per_item: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_message_length: 500,
            toast_duration_ms: 3200,
            queued_toast_duration_ms: 4000,
            user_count_drift_interval_secs: 30,
            initial_user_count_min: 5,
            initial_user_count_max: 14,
            facilitator_count: 3,
            avg_response_minutes_per_item: 2.3,
        }
    }
}

impl Validate for UiConfig {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.max_message_length == 0 || self.max_message_length > MAX_MESSAGE_TEXT_CHARS {
            return Err(ContractViolation::InvalidValue {
                field: "ui.max_message_length",
                reason: "must be within 1..=4096",
            });
        }
        if self.toast_duration_ms == 0 || self.queued_toast_duration_ms == 0 {
            return Err(ContractViolation::InvalidValue {
                field: "ui.toast_duration_ms",
                reason: "toast durations must be > 0",
            });
        }
        if self.user_count_drift_interval_secs == 0 {
            return Err(ContractViolation::InvalidValue {
                field: "ui.user_count_drift_interval_secs",
                reason: "must be > 0",
            });
        }
        if self.initial_user_count_min == 0
            || self.initial_user_count_min > self.initial_user_count_max
        {
            return Err(ContractViolation::InvalidValue {
                field: "ui.initial_user_count_min",
                reason: "must be >= 1 and <= initial_user_count_max",
            });
        }
        if !self.avg_response_minutes_per_item.is_finite() {
            return Err(ContractViolation::NotFinite {
                field: "ui.avg_response_minutes_per_item",
            });
        }
        if !(0.0..=60.0).contains(&self.avg_response_minutes_per_item) {
            return Err(ContractViolation::InvalidRange {
                field: "ui.avg_response_minutes_per_item",
                min: 0.0,
                max: 60.0,
                got: self.avg_response_minutes_per_item,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayStrings {
    pub message_sent: String,
    pub facilitator_notified: String,
    pub message_approved: String,
    pub message_reviewed: String,
    pub message_removed: String,
    pub credentials_missing: String,
    pub terms_accepted: String,
    pub terms_rejected: String,
    pub profile_missing: String,
    pub custom_profile_author: String,
    pub anonymous_profile_label: String,
}

impl Default for DisplayStrings {
    fn default() -> Self {
        Self {
            message_sent: "Your message has been sent anonymously".to_string(),
            facilitator_notified: "A facilitator has been notified and will respond soon"
                .to_string(),
            message_approved: "Message approved for the participant feed".to_string(),
            message_reviewed: "Message marked as reviewed".to_string(),
            message_removed: "Message removed from queue".to_string(),
            credentials_missing: "Enter both a username and password to continue".to_string(),
            terms_accepted: "Thanks for accepting our community guidelines".to_string(),
            terms_rejected: "You can return when you are ready to agree to the guidelines."
                .to_string(),
            profile_missing: "Select a profile option to continue".to_string(),
            custom_profile_author: "Guided Support Coach".to_string(),
            anonymous_profile_label: "Anonymous Ally".to_string(),
        }
    }
}

impl Validate for DisplayStrings {
    /// Profile names follow the message author rules.
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text(
            "strings.custom_profile_author",
            &self.custom_profile_author,
            MAX_AUTHOR_CHARS,
        )?;
        validate_text(
            "strings.anonymous_profile_label",
            &self.anonymous_profile_label,
            MAX_AUTHOR_CHARS,
        )?;
        Ok(())
    }
}
