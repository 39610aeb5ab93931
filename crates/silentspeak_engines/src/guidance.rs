#![forbid(unsafe_code)]

use silentspeak_contracts::guidance::{GuidanceRecord, GuidanceThemeId};
use silentspeak_contracts::risk::RiskLevel;

pub const WORK_SCHOOL_TOPIC: &str = "work-school";
pub const RELATIONSHIPS_TOPIC: &str = "relationships";

const SELF_DOUBT_KEYWORDS: [&str; 3] = ["fail", "inadequate", "not good enough"];
const ISOLATION_KEYWORDS: [&str; 3] = ["alone", "lonely", "isolated"];
const MEANING_KEYWORDS: [&str; 3] = ["meaning", "purpose", "why"];
const RELATIONSHIP_KEYWORDS: [&str; 2] = ["relationship", "partner"];

static INFERIORITY_WORK: GuidanceRecord = GuidanceRecord {
    theme_id: GuidanceThemeId::InferiorityWork,
    theme: "Feelings of inadequacy in work/achievement domain",
    focus: "Normalize inferiority feelings, identify strengths, reframe challenge as growth opportunity",
    suggested_approach: &[
        "Acknowledge feelings without judgment",
        "Many people feel overwhelmed when facing challenges at work",
        "What skills have helped you navigate difficulties before?",
        "What small step could help you feel more capable?",
    ],
    encouragement_template: "It sounds like you're feeling [emotion] about [situation]. Many people experience this when [context]. What strengths have helped you cope so far?",
};

static ISOLATION_FRIENDSHIP: GuidanceRecord = GuidanceRecord {
    theme_id: GuidanceThemeId::IsolationFriendship,
    theme: "Social disconnection and loneliness",
    focus: "Build social interest, normalize isolation feelings, identify small connection opportunities",
    suggested_approach: &[
        "Feeling disconnected is difficult and very common",
        "Connection often starts with small, brave steps",
        "What qualities do you bring to friendships?",
        "Who might benefit from hearing from you?",
    ],
    encouragement_template: "Feeling alone can be really hard. Many people struggle with connection, especially during [context]. What small gesture could you make toward someone this week?",
};

static SELF_CRITICISM: GuidanceRecord = GuidanceRecord {
    theme_id: GuidanceThemeId::SelfCriticism,
    theme: "Harsh self-judgment and low self-worth",
    focus: "Challenge basic mistakes, build self-compassion, reframe through friend perspective",
    suggested_approach: &[
        "Notice how hard you're being on yourself",
        "What would you tell a friend who felt this way?",
        "Your worth isn't determined by [achievement/approval/etc.]",
        "What's one way you can treat yourself with kindness today?",
    ],
    encouragement_template: "I hear you being very hard on yourself. If a friend spoke to themselves this way, what would you tell them?",
};

static MEANING_CRISIS: GuidanceRecord = GuidanceRecord {
    theme_id: GuidanceThemeId::MeaningCrisis,
    theme: "Loss of purpose or existential distress",
    focus: "Explore spirituality life task, identify values, connect to larger meaning",
    suggested_approach: &[
        "Questions about meaning are important and deeply human",
        "What has given you a sense of purpose in the past?",
        "What values feel most important to you?",
        "How might you take one small action aligned with those values?",
    ],
    encouragement_template: "Grappling with purpose and meaning takes courage. What matters most to you, even in small moments?",
};

static RELATIONSHIP_STRAIN: GuidanceRecord = GuidanceRecord {
    theme_id: GuidanceThemeId::RelationshipStrain,
    theme: "Conflict or difficulty in intimate relationships",
    focus: "Explore love life task, identify patterns, balance needs with connection",
    suggested_approach: &[
        "Relationships can be challenging and rewarding",
        "What patterns do you notice in your relationships?",
        "How might past experiences be influencing the present?",
        "What do you need to feel both safe and connected?",
    ],
    encouragement_template: "Navigating relationships takes self-awareness and courage. What do you hope for in this relationship?",
};

static OVERWHELM_GENERAL: GuidanceRecord = GuidanceRecord {
    theme_id: GuidanceThemeId::OverwhelmGeneral,
    theme: "General stress and feeling overwhelmed",
    focus: "Break down into manageable steps, identify coping strengths, focus on agency",
    suggested_approach: &[
        "Feeling overwhelmed is a sign you're carrying a lot right now",
        "What has helped you cope during stressful times before?",
        "What's one small thing within your control?",
        "How can you be gentle with yourself today?",
    ],
    encouragement_template: "It makes sense that you're feeling overwhelmed. What's one tiny step that feels possible right now?",
};

static HIGH_RISK: GuidanceRecord = GuidanceRecord {
    theme_id: GuidanceThemeId::HighRisk,
    theme: "High-risk content indicating potential crisis",
    focus: "Immediate safety, social support assessment, connection to resources",
    suggested_approach: &[
        "Thank you for sharing something so difficult",
        "You don't have to go through this alone",
        "Who can you reach out to for support right now?",
        "Crisis resources: 988 Suicide & Crisis Lifeline (US)",
    ],
    encouragement_template: "I'm concerned about your safety. Please reach out to 988 or your local crisis line. You deserve support right now.",
};

pub fn guidance_record(theme: GuidanceThemeId) -> &'static GuidanceRecord {
    match theme {
        GuidanceThemeId::InferiorityWork => &INFERIORITY_WORK,
        GuidanceThemeId::IsolationFriendship => &ISOLATION_FRIENDSHIP,
        GuidanceThemeId::SelfCriticism => &SELF_CRITICISM,
        GuidanceThemeId::MeaningCrisis => &MEANING_CRISIS,
        GuidanceThemeId::RelationshipStrain => &RELATIONSHIP_STRAIN,
        GuidanceThemeId::OverwhelmGeneral => &OVERWHELM_GENERAL,
        GuidanceThemeId::HighRisk => &HIGH_RISK,
    }
}

/// Keyword rules checked in fixed priority order; the first hit wins.
/// High risk overrides every rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidanceResolver;

impl GuidanceResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, text: &str, topic: &str, risk: RiskLevel) -> &'static GuidanceRecord {
        guidance_record(self.resolve_theme(text, topic, risk))
    }

    pub fn resolve_theme(&self, text: &str, topic: &str, risk: RiskLevel) -> GuidanceThemeId {
        if risk == RiskLevel::High {
            return GuidanceThemeId::HighRisk;
        }

        let lowered = text.to_lowercase();
        let theme = if contains_any(&lowered, &SELF_DOUBT_KEYWORDS) {
            if topic == WORK_SCHOOL_TOPIC {
                GuidanceThemeId::InferiorityWork
            } else {
                GuidanceThemeId::SelfCriticism
            }
        } else if contains_any(&lowered, &ISOLATION_KEYWORDS) {
            GuidanceThemeId::IsolationFriendship
        } else if contains_any(&lowered, &MEANING_KEYWORDS) {
            GuidanceThemeId::MeaningCrisis
        } else if topic == RELATIONSHIPS_TOPIC || contains_any(&lowered, &RELATIONSHIP_KEYWORDS) {
            GuidanceThemeId::RelationshipStrain
        } else {
            GuidanceThemeId::OverwhelmGeneral
        };
        tracing::debug!(theme = theme.as_str(), topic, "guidance theme resolved");
        theme
    }
}

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}
