#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// Adlerian life tasks plus the catch-all bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeTask {
    Work,
    Friendship,
    Love,
    #[serde(rename = "self")]
    SelfTask,
    Spirituality,
    General,
}

impl LifeTask {
    pub fn as_str(self) -> &'static str {
        match self {
            LifeTask::Work => "work",
            LifeTask::Friendship => "friendship",
            LifeTask::Love => "love",
            LifeTask::SelfTask => "self",
            LifeTask::Spirituality => "spirituality",
            LifeTask::General => "general",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptCategory {
    Exploration,
    Encouragement,
    Reframing,
    SocialInterest,
    GoalSetting,
    Safety,
}

impl PromptCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptCategory::Exploration => "exploration",
            PromptCategory::Encouragement => "encouragement",
            PromptCategory::Reframing => "reframing",
            PromptCategory::SocialInterest => "social-interest",
            PromptCategory::GoalSetting => "goal-setting",
            PromptCategory::Safety => "safety",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "exploration" => Some(PromptCategory::Exploration),
            "encouragement" => Some(PromptCategory::Encouragement),
            "reframing" => Some(PromptCategory::Reframing),
            "social-interest" => Some(PromptCategory::SocialInterest),
            "goal-setting" => Some(PromptCategory::GoalSetting),
            "safety" => Some(PromptCategory::Safety),
            _ => None,
        }
    }
}

/// One reflective question from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptEntry {
    pub id: &'static str,
    pub life_task: LifeTask,
    pub category: PromptCategory,
    pub question: &'static str,
    pub description: Option<&'static str>,
    /// Entries without a tag are eligible for every risk level.
    pub risk_level: Option<RiskLevel>,
}
