#![forbid(unsafe_code)]

use rand::seq::SliceRandom;
use rand::Rng;
use silentspeak_contracts::prompts::{LifeTask, PromptCategory, PromptEntry};
use silentspeak_contracts::risk::RiskLevel;

use crate::prompt_catalog::{PROMPT_CATALOG, TOPIC_LIFE_TASKS};

pub const URGENT_REFLECTION_TOPIC: &str = "general";
pub const URGENT_REFLECTION_COUNT: usize = 2;

pub fn identify_life_task(topic: &str) -> LifeTask {
    TOPIC_LIFE_TASKS
        .iter()
        .find(|(t, _)| *t == topic)
        .map_or(LifeTask::General, |(_, task)| *task)
}

/// Samples reflective prompts for a topic. The randomness source is
/// always passed in, so a seeded generator pins the order.
#[derive(Debug, Clone, Copy)]
pub struct PromptSelector {
    catalog: &'static [PromptEntry],
}

impl PromptSelector {
    pub fn mvp_v1() -> Self {
        Self::with_catalog(PROMPT_CATALOG)
    }

    pub fn with_catalog(catalog: &'static [PromptEntry]) -> Self {
        Self { catalog }
    }

    /// Entries for the topic's life task plus all `General` entries,
    /// narrowed to `category` when given. Catalog order is kept.
    pub fn eligible(
        &self,
        topic: &str,
        category: Option<PromptCategory>,
    ) -> Vec<&'static PromptEntry> {
        let life_task = identify_life_task(topic);
        self.catalog
            .iter()
            .filter(|p| p.life_task == life_task || p.life_task == LifeTask::General)
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    pub fn select_prompts<R>(
        &self,
        topic: &str,
        count: usize,
        category: Option<PromptCategory>,
        rng: &mut R,
    ) -> Vec<&'static PromptEntry>
    where
        R: Rng + ?Sized,
    {
        let mut candidates = self.eligible(topic, category);
        candidates.shuffle(rng);
        candidates.truncate(count);
        tracing::debug!(topic, count = candidates.len(), "prompts selected");
        candidates
    }

    /// Untagged entries pass any `risk` filter; tagged entries must match it.
    pub fn select_single_prompt<R>(
        &self,
        topic: &str,
        category: Option<PromptCategory>,
        risk: Option<RiskLevel>,
        rng: &mut R,
    ) -> Option<&'static PromptEntry>
    where
        R: Rng + ?Sized,
    {
        let candidates: Vec<&'static PromptEntry> = self
            .eligible(topic, category)
            .into_iter()
            .filter(|p| match (risk, p.risk_level) {
                (Some(wanted), Some(tagged)) => wanted == tagged,
                _ => true,
            })
            .collect();
        candidates.choose(rng).copied()
    }

    /// Prompts shown to a participant right after posting. Urgent posts get
    /// safety prompts; others get one encouragement and one goal-setting
    /// prompt, skipping whichever the topic has none of.
    pub fn reflection_prompts_for_message<R>(
        &self,
        topic: &str,
        urgent: bool,
        rng: &mut R,
    ) -> Vec<&'static PromptEntry>
    where
        R: Rng + ?Sized,
    {
        if urgent {
            return self.select_prompts(
                URGENT_REFLECTION_TOPIC,
                URGENT_REFLECTION_COUNT,
                Some(PromptCategory::Safety),
                rng,
            );
        }

        [PromptCategory::Encouragement, PromptCategory::GoalSetting]
            .into_iter()
            .filter_map(|c| self.select_single_prompt(topic, Some(c), None, &mut *rng))
            .collect()
    }
}

impl Default for PromptSelector {
    fn default() -> Self {
        Self::mvp_v1()
    }
}
