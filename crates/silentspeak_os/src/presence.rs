#![forbid(unsafe_code)]

use rand::{Rng, RngCore};
use silentspeak_contracts::config::UiConfig;
use silentspeak_contracts::MonotonicTimeNs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceConfig {
    pub drift_interval_secs: u64,
    pub initial_min: u32,
    pub initial_max: u32,
    pub facilitator_count: u32,
}

impl PresenceConfig {
    pub fn mvp_v1() -> Self {
        Self::from_ui(&UiConfig::default())
    }

    pub fn from_ui(ui: &UiConfig) -> Self {
        Self {
            drift_interval_secs: ui.user_count_drift_interval_secs.max(1),
            initial_min: ui.initial_user_count_min.max(1),
            initial_max: ui.initial_user_count_max.max(ui.initial_user_count_min.max(1)),
            facilitator_count: ui.facilitator_count,
        }
    }
}

/// Simulated "people online" counter. Drift is driven by the caller's
/// clock; one step per whole interval elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    config: PresenceConfig,
    user_count: u32,
    last_drift: MonotonicTimeNs,
}

impl Presence {
    pub fn new(config: PresenceConfig, rng: &mut dyn RngCore, now: MonotonicTimeNs) -> Self {
        Self {
            user_count: rng.gen_range(config.initial_min..=config.initial_max),
            config,
            last_drift: now,
        }
    }

    pub fn user_count(&self) -> u32 {
        self.user_count
    }

    pub fn facilitator_count(&self) -> u32 {
        self.config.facilitator_count
    }

    pub fn tick(&self, now: MonotonicTimeNs, rng: &mut dyn RngCore) -> Self {
        let steps = now.secs_since(self.last_drift) / self.config.drift_interval_secs;
        if steps == 0 {
            return *self;
        }
        let mut count = self.user_count;
        for _ in 0..steps {
            let delta: i32 = rng.gen_range(-1..=1);
            count = count.saturating_add_signed(delta).max(1);
        }
        let advanced_secs = steps * self.config.drift_interval_secs;
        Self {
            config: self.config,
            user_count: count,
            last_drift: self.last_drift.plus_ms(advanced_secs * 1000),
        }
    }
}
