#![forbid(unsafe_code)]

use crate::common::{validate_body_text, validate_text};
use crate::risk::RiskLevel;
use crate::{ContractViolation, MonotonicTimeNs, SchemaVersion, Validate};

pub const MESSAGE_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

pub const MAX_AUTHOR_CHARS: usize = 64;
pub const MAX_TOPIC_CHARS: usize = 64;
/// Hard ceiling; the configured participant limit is usually lower.
pub const MAX_MESSAGE_TEXT_CHARS: usize = 4096;

pub const DEFAULT_TOPIC: &str = "general";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl Validate for MessageId {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.0 == 0 {
            return Err(ContractViolation::InvalidValue {
                field: "message_id",
                reason: "must be > 0",
            });
        }
        Ok(())
    }
}

/// Moderation flags a facilitator can change. Everything else on a
/// message is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModerationFlags {
    pub urgent: bool,
    pub queued: bool,
    pub reviewed: bool,
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub schema_version: SchemaVersion,
    pub id: MessageId,
    pub text: String,
    pub author: String,
    pub timestamp: MonotonicTimeNs,
    pub topic: String,
    risk: RiskLevel,
    pub flags: ModerationFlags,
}

impl Message {
    pub fn v1(
        id: MessageId,
        text: String,
        author: String,
        timestamp: MonotonicTimeNs,
        topic: String,
        risk: RiskLevel,
        flags: ModerationFlags,
    ) -> Result<Self, ContractViolation> {
        let message = Self {
            schema_version: MESSAGE_CONTRACT_VERSION,
            id,
            text,
            author,
            timestamp,
            topic,
            risk,
            flags,
        };
        message.validate()?;
        Ok(message)
    }

    /// Assigned once at creation; there is no setter.
    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    pub fn with_flags(&self, flags: ModerationFlags) -> Self {
        Self {
            flags,
            ..self.clone()
        }
    }
}

impl Validate for Message {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.schema_version != MESSAGE_CONTRACT_VERSION {
            return Err(ContractViolation::InvalidValue {
                field: "message.schema_version",
                reason: "must match MESSAGE_CONTRACT_VERSION",
            });
        }
        self.id.validate()?;
        validate_body_text("message.text", &self.text, MAX_MESSAGE_TEXT_CHARS)?;
        validate_text("message.author", &self.author, MAX_AUTHOR_CHARS)?;
        validate_text("message.topic", &self.topic, MAX_TOPIC_CHARS)?;
        Ok(())
    }
}
