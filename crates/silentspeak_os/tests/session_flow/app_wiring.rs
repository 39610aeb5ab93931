#![forbid(unsafe_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use silentspeak_contracts::onboarding::{CredentialAction, OnboardingStep, ProfileSelection};
use silentspeak_contracts::prompts::PromptCategory;
use silentspeak_contracts::risk::RiskLevel;
use silentspeak_contracts::toast::ToastKind;
use silentspeak_contracts::MonotonicTimeNs;
use silentspeak_engines::config::default_config;
use silentspeak_os::app::{AppAction, AppOutcome, SupportApp, Tab};
use silentspeak_os::board::RiskFilter;
use silentspeak_os::onboarding::OnboardingAction;

fn t(secs: u64) -> MonotonicTimeNs {
    MonotonicTimeNs::from_unix_secs(1_700_000_000 + secs)
}

fn app(seed: u64) -> (SupportApp, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let app = SupportApp::new(&default_config().unwrap(), t(0), &mut rng).unwrap();
    (app, rng)
}

fn onboard(app: &mut SupportApp, rng: &mut StdRng, profile: ProfileSelection) {
    let room = app.find_room("today-grounding").unwrap();
    for action in [
        OnboardingAction::SetUsername("river".to_string()),
        OnboardingAction::SetPassword("correct horse".to_string()),
        OnboardingAction::SubmitCredentials(CredentialAction::Login),
        OnboardingAction::AcceptTerms,
        OnboardingAction::SelectProfile(profile),
        OnboardingAction::ContinueProfile,
        OnboardingAction::SelectRoom(room),
    ] {
        app.dispatch(AppAction::Onboarding(action), t(1), rng);
    }
}

#[test]
fn at_session_01_onboarding_joins_room_and_toasts() {
    let (mut app, mut rng) = app(1);
    assert_eq!(app.state().onboarding.step, OnboardingStep::SignIn);
    assert_eq!(app.room_groups().len(), 3);
    onboard(&mut app, &mut rng, ProfileSelection::Anonymous);

    let state = app.state();
    assert!(state.onboarding.is_complete());
    assert_eq!(
        state.onboarding.current_room.as_ref().map(|r| r.date_label.as_str()),
        Some("Today")
    );
    let last = state.toasts.active().last().unwrap();
    assert_eq!(last.message, "You joined Grounding Circle");
    assert_eq!(last.kind, ToastKind::Success);
    assert!(state
        .toasts
        .active()
        .iter()
        .any(|toast| toast.message == "Logged in as river"));
}

#[test]
fn at_session_02_urgent_post_returns_safety_reflection_and_reaches_dashboard() {
    let (mut app, mut rng) = app(2);
    onboard(&mut app, &mut rng, ProfileSelection::Anonymous);
    app.dispatch(AppAction::SelectTopic(Some("self-care".to_string())), t(2), &mut rng);

    let outcome = app.dispatch(
        AppAction::SendMessage {
            text: "I'm scared and crying a lot tonight".to_string(),
            urgent: true,
            request_facilitator: false,
        },
        t(3),
        &mut rng,
    );
    let AppOutcome::MessagePosted {
        id,
        queued,
        reflection,
    } = outcome
    else {
        panic!("message was not posted");
    };
    assert!(queued);
    assert!(reflection
        .prompts
        .iter()
        .all(|p| p.category == PromptCategory::Safety));

    app.dispatch(AppAction::SwitchTab(Tab::Facilitator), t(4), &mut rng);
    app.dispatch(
        AppAction::SetRiskFilter(RiskFilter::Only(RiskLevel::Medium)),
        t(4),
        &mut rng,
    );
    let dashboard = app.facilitator_dashboard(t(4));
    assert_eq!(dashboard.stats.total, 6);
    assert!(dashboard.queue.iter().any(|item| item.message.id == id));
    assert!(dashboard
        .filtered
        .iter()
        .all(|entry| entry.message.risk() == RiskLevel::Medium));

    // medium risk stays out of the feed until approved
    assert!(!app.participant_feed(t(5)).iter().any(|e| e.message.id == id));
    app.dispatch(AppAction::Approve(id), t(5), &mut rng);
    let feed = app.participant_feed(t(5));
    assert_eq!(feed[0].message.id, id);
    assert_eq!(feed[0].posted, "just now");
}

#[test]
fn at_session_03_blank_message_is_refused_with_error_toast() {
    let (mut app, mut rng) = app(3);
    let outcome = app.dispatch(
        AppAction::SendMessage {
            text: "   ".to_string(),
            urgent: false,
            request_facilitator: false,
        },
        t(1),
        &mut rng,
    );
    assert!(matches!(outcome, AppOutcome::Refused(_)));
    assert_eq!(app.state().board.messages().len(), 5);
    assert_eq!(app.state().toasts.active()[0].kind, ToastKind::Error);
}

#[test]
fn at_session_04_presence_drifts_on_tick_and_toasts_expire() {
    let (mut app, mut rng) = app(4);
    onboard(&mut app, &mut rng, ProfileSelection::Custom);
    assert!(!app.state().toasts.active().is_empty());

    let start = app.state().presence.user_count();
    app.tick(t(31), &mut rng);
    let after = app.state().presence.user_count();
    assert!(after >= 1 && after.abs_diff(start) <= 1);
    assert!(app.state().toasts.active().is_empty());
    assert_eq!(app.state().presence.facilitator_count(), 3);
}
