#![forbid(unsafe_code)]

//! Reflective prompts grouped by Adlerian life task and therapeutic
//! category. Safety prompts carry a risk tag; everything else is eligible
//! at any risk level.

use silentspeak_contracts::prompts::{LifeTask, PromptCategory, PromptEntry};
use silentspeak_contracts::risk::RiskLevel;

pub static PROMPT_CATALOG: &[PromptEntry] = &[
    PromptEntry {
        id: "work-exploration-1",
        life_task: LifeTask::Work,
        category: PromptCategory::Exploration,
        question: "How satisfied are you with your current work or sense of purpose?",
        description: Some("Explores fulfillment in work/occupation life task"),
        risk_level: None,
    },
    PromptEntry {
        id: "work-exploration-2",
        life_task: LifeTask::Work,
        category: PromptCategory::Exploration,
        question: "What would make your work feel more meaningful?",
        description: Some("Investigates alignment between work and values"),
        risk_level: None,
    },
    PromptEntry {
        id: "work-encouragement-1",
        life_task: LifeTask::Work,
        category: PromptCategory::Encouragement,
        question: "What skills and qualities do you bring to your work?",
        description: Some("Identifies existing strengths in work domain"),
        risk_level: None,
    },
    PromptEntry {
        id: "work-encouragement-2",
        life_task: LifeTask::Work,
        category: PromptCategory::Encouragement,
        question: "When have you successfully navigated work challenges before?",
        description: Some("Recalls past resilience and coping"),
        risk_level: None,
    },
    PromptEntry {
        id: "work-reframing-1",
        life_task: LifeTask::Work,
        category: PromptCategory::Reframing,
        question: "How might this challenge help you grow professionally?",
        description: Some("Reframes difficulty as opportunity"),
        risk_level: None,
    },
    PromptEntry {
        id: "work-reframing-2",
        life_task: LifeTask::Work,
        category: PromptCategory::Reframing,
        question: "What would you tell a colleague facing this situation?",
        description: Some("Encourages self-compassion through perspective-taking"),
        risk_level: None,
    },
    PromptEntry {
        id: "friendship-exploration-1",
        life_task: LifeTask::Friendship,
        category: PromptCategory::Exploration,
        question: "How would you describe the quality of your friendships?",
        description: Some("Assesses satisfaction with social connections"),
        risk_level: None,
    },
    PromptEntry {
        id: "friendship-exploration-2",
        life_task: LifeTask::Friendship,
        category: PromptCategory::Exploration,
        question: "What prevents you from deepening your social connections?",
        description: Some("Identifies barriers to social interest development"),
        risk_level: None,
    },
    PromptEntry {
        id: "friendship-encouragement-1",
        life_task: LifeTask::Friendship,
        category: PromptCategory::Encouragement,
        question: "What qualities make you a good friend?",
        description: Some("Recognizes relational strengths"),
        risk_level: None,
    },
    PromptEntry {
        id: "friendship-encouragement-2",
        life_task: LifeTask::Friendship,
        category: PromptCategory::Encouragement,
        question: "Who in your life values your presence?",
        description: Some("Acknowledges existing connections and belonging"),
        risk_level: None,
    },
    PromptEntry {
        id: "friendship-reframing-1",
        life_task: LifeTask::Friendship,
        category: PromptCategory::Reframing,
        question: "What small gesture could strengthen a relationship this week?",
        description: Some("Focuses on achievable action"),
        risk_level: None,
    },
    PromptEntry {
        id: "friendship-social-interest-1",
        life_task: LifeTask::Friendship,
        category: PromptCategory::SocialInterest,
        question: "How might reaching out benefit both you and someone else?",
        description: Some("Develops mutual benefit perspective"),
        risk_level: None,
    },
    PromptEntry {
        id: "love-exploration-1",
        life_task: LifeTask::Love,
        category: PromptCategory::Exploration,
        question: "Are you open to giving and receiving love?",
        description: Some("Explores intimacy readiness"),
        risk_level: None,
    },
    PromptEntry {
        id: "love-exploration-2",
        life_task: LifeTask::Love,
        category: PromptCategory::Exploration,
        question: "What patterns do you notice in your intimate relationships?",
        description: Some("Identifies relationship lifestyle patterns"),
        risk_level: None,
    },
    PromptEntry {
        id: "love-encouragement-1",
        life_task: LifeTask::Love,
        category: PromptCategory::Encouragement,
        question: "What do you value most in intimate relationships?",
        description: Some("Clarifies personal values"),
        risk_level: None,
    },
    PromptEntry {
        id: "love-reframing-1",
        life_task: LifeTask::Love,
        category: PromptCategory::Reframing,
        question: "How might past experiences be influencing your current relationships?",
        description: Some("Connects early experiences to present patterns"),
        risk_level: None,
    },
    PromptEntry {
        id: "love-reframing-2",
        life_task: LifeTask::Love,
        category: PromptCategory::Reframing,
        question: "What's one way you can honor your needs while staying open to connection?",
        description: Some("Balances self-care with relational openness"),
        risk_level: None,
    },
    PromptEntry {
        id: "self-exploration-1",
        life_task: LifeTask::SelfTask,
        category: PromptCategory::Exploration,
        question: "How do you speak to yourself when you make a mistake?",
        description: Some("Assesses self-talk patterns"),
        risk_level: None,
    },
    PromptEntry {
        id: "self-exploration-2",
        life_task: LifeTask::SelfTask,
        category: PromptCategory::Exploration,
        question: "What does self-care look like for you?",
        description: Some("Explores self-relationship and needs"),
        risk_level: None,
    },
    PromptEntry {
        id: "self-encouragement-1",
        life_task: LifeTask::SelfTask,
        category: PromptCategory::Encouragement,
        question: "What are three things you appreciate about yourself?",
        description: Some("Builds self-acceptance"),
        risk_level: None,
    },
    PromptEntry {
        id: "self-encouragement-2",
        life_task: LifeTask::SelfTask,
        category: PromptCategory::Encouragement,
        question: "What strengths have gotten you through difficult times?",
        description: Some("Identifies resilience resources"),
        risk_level: None,
    },
    PromptEntry {
        id: "self-reframing-1",
        life_task: LifeTask::SelfTask,
        category: PromptCategory::Reframing,
        question: "What would you tell a friend who spoke to themselves the way you do?",
        description: Some("Classic Adlerian self-compassion reframe"),
        risk_level: None,
    },
    PromptEntry {
        id: "self-reframing-2",
        life_task: LifeTask::SelfTask,
        category: PromptCategory::Reframing,
        question: "What's one way you can practice self-compassion today?",
        description: Some("Actionable self-care step"),
        risk_level: None,
    },
    PromptEntry {
        id: "spirituality-exploration-1",
        life_task: LifeTask::Spirituality,
        category: PromptCategory::Exploration,
        question: "What gives your life meaning and purpose?",
        description: Some("Explores existential life task"),
        risk_level: None,
    },
    PromptEntry {
        id: "spirituality-exploration-2",
        life_task: LifeTask::Spirituality,
        category: PromptCategory::Exploration,
        question: "How do you find peace or connection to something larger than yourself?",
        description: Some("Investigates sources of meaning"),
        risk_level: None,
    },
    PromptEntry {
        id: "spirituality-encouragement-1",
        life_task: LifeTask::Spirituality,
        category: PromptCategory::Encouragement,
        question: "What moments make you feel most alive?",
        description: Some("Identifies meaning-rich experiences"),
        risk_level: None,
    },
    PromptEntry {
        id: "spirituality-reframing-1",
        life_task: LifeTask::Spirituality,
        category: PromptCategory::Reframing,
        question: "How might this challenge be an opportunity for growth?",
        description: Some("Reframes suffering as potential catalyst"),
        risk_level: None,
    },
    PromptEntry {
        id: "spirituality-reframing-2",
        life_task: LifeTask::Spirituality,
        category: PromptCategory::Reframing,
        question: "How can you align your daily actions with your deepest values?",
        description: Some("Connects values to behavior"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-encouragement-1",
        life_task: LifeTask::General,
        category: PromptCategory::Encouragement,
        question: "What strengths have helped you cope so far?",
        description: Some("Universal strengths-based prompt"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-encouragement-2",
        life_task: LifeTask::General,
        category: PromptCategory::Encouragement,
        question: "What resources do you already have that you might be overlooking?",
        description: Some("Identifies overlooked assets"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-encouragement-3",
        life_task: LifeTask::General,
        category: PromptCategory::Encouragement,
        question: "When have you successfully overcome difficulty before?",
        description: Some("Recalls past mastery experiences"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-goal-1",
        life_task: LifeTask::General,
        category: PromptCategory::GoalSetting,
        question: "How would you like things to be different in 6 months?",
        description: Some("Classic Adlerian goal-setting question"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-goal-2",
        life_task: LifeTask::General,
        category: PromptCategory::GoalSetting,
        question: "What's one small step you could take today?",
        description: Some("Focuses on achievable action"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-goal-3",
        life_task: LifeTask::General,
        category: PromptCategory::GoalSetting,
        question: "What needs to happen for you to feel you're moving forward?",
        description: Some("Clarifies progress indicators"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-social-interest-1",
        life_task: LifeTask::General,
        category: PromptCategory::SocialInterest,
        question: "How might sharing your experience help others?",
        description: Some("Develops social interest through contribution"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-social-interest-2",
        life_task: LifeTask::General,
        category: PromptCategory::SocialInterest,
        question: "Who in your life could benefit from your support?",
        description: Some("Shifts from recipient to contributor mindset"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-reframing-1",
        life_task: LifeTask::General,
        category: PromptCategory::Reframing,
        question: "What would you tell a friend in this situation?",
        description: Some("Universal self-compassion reframe"),
        risk_level: None,
    },
    PromptEntry {
        id: "general-reframing-2",
        life_task: LifeTask::General,
        category: PromptCategory::Reframing,
        question: "How might you treat yourself with more kindness?",
        description: Some("Invites self-compassion"),
        risk_level: None,
    },
    PromptEntry {
        id: "safety-1",
        life_task: LifeTask::General,
        category: PromptCategory::Safety,
        question: "What keeps you going during the most difficult moments?",
        description: Some("Identifies protective factors"),
        risk_level: Some(RiskLevel::High),
    },
    PromptEntry {
        id: "safety-2",
        life_task: LifeTask::General,
        category: PromptCategory::Safety,
        question: "Who can you reach out to when you're struggling?",
        description: Some("Assesses social support"),
        risk_level: Some(RiskLevel::High),
    },
    PromptEntry {
        id: "safety-3",
        life_task: LifeTask::General,
        category: PromptCategory::Safety,
        question: "What's one small thing that might help you feel safer right now?",
        description: Some("Focuses on immediate coping"),
        risk_level: Some(RiskLevel::High),
    },
    PromptEntry {
        id: "safety-4",
        life_task: LifeTask::General,
        category: PromptCategory::Safety,
        question: "What has helped you get through hard times before, even briefly?",
        description: Some("Recalls coping strategies"),
        risk_level: Some(RiskLevel::Medium),
    },
    PromptEntry {
        id: "safety-5",
        life_task: LifeTask::General,
        category: PromptCategory::Safety,
        question: "What part of this situation is within your control?",
        description: Some("Focuses on agency"),
        risk_level: Some(RiskLevel::Medium),
    },];

/// Topic ids the participant view knows a life task for. Every other topic
/// lands in `General`.
pub const TOPIC_LIFE_TASKS: [(&str, LifeTask); 6] = [
    ("relationships", LifeTask::Friendship),
    ("work-school", LifeTask::Work),
    ("self-care", LifeTask::SelfTask),
    ("loss-grief", LifeTask::Spirituality),
    ("anxiety-stress", LifeTask::General),
    ("general", LifeTask::General),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn at_catalog_01_ids_are_unique() {
        let ids: BTreeSet<&str> = PROMPT_CATALOG.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROMPT_CATALOG.len());
        assert_eq!(PROMPT_CATALOG.len(), 43);
    }

    #[test]
    fn at_catalog_02_only_general_safety_prompts_carry_risk_tags() {
        for p in PROMPT_CATALOG.iter().filter(|p| p.risk_level.is_some()) {
            assert_eq!(p.category, PromptCategory::Safety);
            assert_eq!(p.life_task, LifeTask::General);
        }
        let tagged_high = PROMPT_CATALOG
            .iter()
            .filter(|p| p.risk_level == Some(RiskLevel::High))
            .count();
        assert_eq!(tagged_high, 3);
    }
}
