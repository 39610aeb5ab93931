#![forbid(unsafe_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuidanceThemeId {
    InferiorityWork,
    IsolationFriendship,
    SelfCriticism,
    MeaningCrisis,
    RelationshipStrain,
    OverwhelmGeneral,
    HighRisk,
}

impl GuidanceThemeId {
    pub const ALL: [GuidanceThemeId; 7] = [
        GuidanceThemeId::InferiorityWork,
        GuidanceThemeId::IsolationFriendship,
        GuidanceThemeId::SelfCriticism,
        GuidanceThemeId::MeaningCrisis,
        GuidanceThemeId::RelationshipStrain,
        GuidanceThemeId::OverwhelmGeneral,
        GuidanceThemeId::HighRisk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GuidanceThemeId::InferiorityWork => "inferiority-work",
            GuidanceThemeId::IsolationFriendship => "isolation-friendship",
            GuidanceThemeId::SelfCriticism => "self-criticism",
            GuidanceThemeId::MeaningCrisis => "meaning-crisis",
            GuidanceThemeId::RelationshipStrain => "relationship-strain",
            GuidanceThemeId::OverwhelmGeneral => "overwhelm-general",
            GuidanceThemeId::HighRisk => "high-risk",
        }
    }
}

/// Facilitator-facing advisory content. Records are static and shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidanceRecord {
    pub theme_id: GuidanceThemeId,
    pub theme: &'static str,
    pub focus: &'static str,
    pub suggested_approach: &'static [&'static str],
    pub encouragement_template: &'static str,
}
