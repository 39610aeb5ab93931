#![forbid(unsafe_code)]

use silentspeak_contracts::guidance::GuidanceThemeId;
use silentspeak_contracts::message::MessageId;
use silentspeak_contracts::risk::RiskLevel;
use silentspeak_contracts::MonotonicTimeNs;
use silentspeak_engines::config::default_config;
use silentspeak_engines::guidance::GuidanceResolver;
use silentspeak_engines::risk::RiskClassifier;
use silentspeak_os::board::{
    BoardAction, BoardConfig, BoardError, BoardSnapshot, MessageBoardWiring, NewMessage,
    RiskFilter,
};
use silentspeak_os::triage::build_dashboard;

fn now() -> MonotonicTimeNs {
    MonotonicTimeNs::from_unix_secs(1_700_000_000)
}

fn seeded() -> (MessageBoardWiring<RiskClassifier>, BoardSnapshot) {
    let config = default_config().unwrap();
    let wiring = MessageBoardWiring::new(
        BoardConfig::from_ui(&config.ui),
        RiskClassifier::new(&config.risk_assessment),
    )
    .unwrap();
    let snapshot = wiring.seed(&config.demo_messages, now()).unwrap();
    (wiring, snapshot)
}

fn submission(text: &str, urgent: bool) -> NewMessage {
    NewMessage {
        text: text.to_string(),
        author: "Brave Harbor #61".to_string(),
        topic: Some("relationships".to_string()),
        urgent,
        request_facilitator: false,
        now: now(),
    }
}

#[test]
fn at_board_db_01_demo_seed_keeps_order_ids_and_flags() {
    let (_, snap) = seeded();
    let ids: Vec<u64> = snap.messages().iter().map(|m| m.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(snap.next_id(), MessageId(6));

    let first = snap.get(MessageId(1)).unwrap();
    assert_eq!(first.risk(), RiskLevel::Medium);
    assert_eq!(first.timestamp, now().minus_minutes(32));
    assert!(first.flags.approved && first.flags.reviewed);

    let queued: Vec<u64> = snap.queue().iter().map(|m| m.id.0).collect();
    assert_eq!(queued, vec![3, 5]);
}

#[test]
fn at_board_db_02_feed_is_approved_only_newest_first() {
    let (wiring, snap) = seeded();
    let feed_ids: Vec<u64> = snap.participant_feed().iter().map(|m| m.id.0).collect();
    assert_eq!(feed_ids, vec![1, 2, 4]);

    let posted = wiring
        .apply(&snap, BoardAction::Submit(submission("We talked it through tonight", false)))
        .unwrap()
        .snapshot;
    assert_eq!(posted.participant_feed()[0].id, MessageId(6));
}

#[test]
fn at_board_db_03_high_risk_submission_reaches_queue_with_guidance() {
    let (wiring, snap) = seeded();
    let next = wiring
        .apply(&snap, BoardAction::Submit(submission("I don't feel safe, I want to end it", false)))
        .unwrap()
        .snapshot;
    let message = &next.messages()[0];
    assert_eq!(message.risk(), RiskLevel::High);
    assert!(message.flags.queued && !message.flags.approved);
    assert!(!next.participant_feed().iter().any(|m| m.id == message.id));

    let dashboard = build_dashboard(
        &GuidanceResolver::new(),
        &next,
        wiring.stats(&next),
        RiskFilter::Only(RiskLevel::High),
        now(),
    );
    assert_eq!(dashboard.stats.total, 6);
    assert_eq!(dashboard.stats.queued, 3);
    assert_eq!(dashboard.stats.high_risk, 1);
    // round(3 * 2.3) = 7
    assert_eq!(dashboard.stats.avg_response, "7m");
    assert_eq!(
        dashboard.queue[0].guidance.theme_id,
        GuidanceThemeId::HighRisk
    );
    assert_eq!(dashboard.filtered.len(), 1);
}

#[test]
fn at_board_db_04_moderation_clears_queue_and_preserves_risk() {
    let (wiring, snap) = seeded();
    let approved = wiring
        .apply(&snap, BoardAction::Approve(MessageId(3)))
        .unwrap()
        .snapshot;
    let reviewed = wiring
        .apply(&approved, BoardAction::MarkReviewed(MessageId(5)))
        .unwrap()
        .snapshot;

    assert!(reviewed.queue().is_empty());
    assert_eq!(wiring.stats(&reviewed).avg_response, "2m");
    assert_eq!(wiring.stats(&reviewed).reviewed, 5);
    for seeded_message in snap.messages() {
        assert_eq!(reviewed.get(seeded_message.id).unwrap().risk(), seeded_message.risk());
    }
    let feed_ids: Vec<u64> = reviewed.participant_feed().iter().map(|m| m.id.0).collect();
    assert_eq!(feed_ids, vec![1, 2, 3, 4]);
}

#[test]
fn at_board_db_05_refusals_do_not_mutate() {
    let (wiring, snap) = seeded();
    let before = snap.clone();

    let missing = wiring.apply(&snap, BoardAction::RemoveFromQueue(MessageId(42)));
    assert_eq!(missing.unwrap_err(), BoardError::MessageNotFound(MessageId(42)));

    let too_long = "a".repeat(501);
    let refused = wiring.apply(&snap, BoardAction::Submit(submission(&too_long, false)));
    assert_eq!(
        refused.unwrap_err(),
        BoardError::TextTooLong {
            max_chars: 500,
            got: 501
        }
    );
    assert_eq!(snap, before);
}

#[test]
fn at_board_db_06_tabbed_and_crlf_text_is_posted_and_classified() {
    let (wiring, snap) = seeded();
    let text = "Step 1:\tbreathe slowly\r\nI still feel anxious";
    let next = wiring
        .apply(&snap, BoardAction::Submit(submission(text, false)))
        .unwrap()
        .snapshot;
    let message = &next.messages()[0];
    assert_eq!(message.id, MessageId(6));
    assert_eq!(message.text, text);
    assert_eq!(message.risk(), RiskLevel::Medium);
}
