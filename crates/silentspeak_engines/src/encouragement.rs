#![forbid(unsafe_code)]

use rand::seq::SliceRandom;
use rand::Rng;
use silentspeak_contracts::risk::RiskLevel;

const LOW_RISK_PHRASES: [&str; 3] = [
    "Thank you for sharing your thoughts with the community.",
    "Your willingness to reflect shows strength.",
    "We appreciate your contribution to this space.",
];

const MEDIUM_RISK_PHRASES: [&str; 3] = [
    "It takes courage to share what you're going through.",
    "You're not alone in experiencing these feelings.",
    "Thank you for trusting this community with your experience.",
];

const HIGH_RISK_PHRASES: [&str; 3] = [
    "Thank you for reaching out. Your safety and well-being matter.",
    "You're showing courage by sharing something difficult.",
    "Please know that support is available, and you don't have to face this alone.",
];

pub fn encouragement_phrases(risk: RiskLevel) -> &'static [&'static str] {
    match risk {
        RiskLevel::Low => &LOW_RISK_PHRASES,
        RiskLevel::Medium => &MEDIUM_RISK_PHRASES,
        RiskLevel::High => &HIGH_RISK_PHRASES,
    }
}

pub fn encouragement<R>(risk: RiskLevel, rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    let phrases = encouragement_phrases(risk);
    phrases.choose(rng).copied().unwrap_or(phrases[0])
}
