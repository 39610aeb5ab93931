#![forbid(unsafe_code)]

use silentspeak_contracts::guidance::GuidanceRecord;
use silentspeak_contracts::message::Message;
use silentspeak_contracts::risk::RiskLevel;
use silentspeak_contracts::MonotonicTimeNs;
use silentspeak_engines::guidance::GuidanceResolver;
use silentspeak_engines::relative_time::format_relative_time;

use crate::board::{BoardSnapshot, BoardStats, RiskFilter};

pub trait GuidanceEngine {
    fn guidance_for(&self, text: &str, topic: &str, risk: RiskLevel) -> &'static GuidanceRecord;
}

impl GuidanceEngine for GuidanceResolver {
    fn guidance_for(&self, text: &str, topic: &str, risk: RiskLevel) -> &'static GuidanceRecord {
        self.resolve(text, topic, risk)
    }
}

/// A queued message paired with the advice a facilitator sees beside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageItem {
    pub message: Message,
    pub guidance: &'static GuidanceRecord,
    pub posted: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub message: Message,
    pub posted: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilitatorDashboard {
    pub stats: BoardStats,
    pub queue: Vec<TriageItem>,
    pub filter: RiskFilter,
    pub filtered: Vec<FeedEntry>,
}

impl FacilitatorDashboard {
    pub fn is_queue_clear(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Guidance is always resolved from the risk stored on the message.
pub fn build_dashboard<G>(
    guidance: &G,
    snapshot: &BoardSnapshot,
    stats: BoardStats,
    filter: RiskFilter,
    now: MonotonicTimeNs,
) -> FacilitatorDashboard
where
    G: GuidanceEngine + ?Sized,
{
    let queue = snapshot
        .queue()
        .into_iter()
        .map(|m| TriageItem {
            guidance: guidance.guidance_for(&m.text, &m.topic, m.risk()),
            posted: format_relative_time(m.timestamp, now),
            message: m.clone(),
        })
        .collect();
    let filtered = snapshot
        .filter_by_risk(filter)
        .into_iter()
        .map(|m| feed_entry(m, now))
        .collect();
    FacilitatorDashboard {
        stats,
        queue,
        filter,
        filtered,
    }
}

pub fn feed_entry(message: &Message, now: MonotonicTimeNs) -> FeedEntry {
    FeedEntry {
        posted: format_relative_time(message.timestamp, now),
        message: message.clone(),
    }
}
