#![forbid(unsafe_code)]

use rand::RngCore;
use silentspeak_contracts::message::Message;
use silentspeak_contracts::prompts::PromptEntry;
use silentspeak_contracts::risk::RiskLevel;
use silentspeak_engines::encouragement::encouragement;
use silentspeak_engines::prompts::PromptSelector;

pub trait ReflectionEngine {
    fn reflection_prompts(
        &self,
        topic: &str,
        urgent: bool,
        rng: &mut dyn RngCore,
    ) -> Vec<&'static PromptEntry>;

    fn encouragement_line(&self, risk: RiskLevel, rng: &mut dyn RngCore) -> &'static str;
}

impl ReflectionEngine for PromptSelector {
    fn reflection_prompts(
        &self,
        topic: &str,
        urgent: bool,
        rng: &mut dyn RngCore,
    ) -> Vec<&'static PromptEntry> {
        self.reflection_prompts_for_message(topic, urgent, rng)
    }

    fn encouragement_line(&self, risk: RiskLevel, rng: &mut dyn RngCore) -> &'static str {
        encouragement(risk, rng)
    }
}

/// What a participant sees right after posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantReflection {
    pub encouragement: &'static str,
    pub prompts: Vec<&'static PromptEntry>,
}

pub fn reflect_on<E>(engine: &E, message: &Message, rng: &mut dyn RngCore) -> ParticipantReflection
where
    E: ReflectionEngine + ?Sized,
{
    let encouragement = engine.encouragement_line(message.risk(), rng);
    let prompts = engine.reflection_prompts(&message.topic, message.flags.urgent, rng);
    ParticipantReflection {
        encouragement,
        prompts,
    }
}
