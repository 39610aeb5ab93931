#![forbid(unsafe_code)]

//! Top-level session state. Every dispatch replaces the affected snapshot
//! wholesale and queues whatever toasts the step produced.

use rand::RngCore;
use silentspeak_contracts::config::{DisplayStrings, PlatformConfig, UiConfig};
use silentspeak_contracts::message::MessageId;
use silentspeak_contracts::rooms::{Room, RoomGroup};
use silentspeak_contracts::toast::{Notice, ToastId, ToastKind};
use silentspeak_contracts::{ContractViolation, MonotonicTimeNs, Validate};
use silentspeak_engines::guidance::GuidanceResolver;
use silentspeak_engines::names::AnonymousNameGenerator;
use silentspeak_engines::prompts::PromptSelector;
use silentspeak_engines::risk::RiskClassifier;

use crate::board::{
    BoardAction, BoardConfig, BoardError, BoardEvent, BoardSnapshot, MessageBoardWiring,
    NewMessage, RiskFilter,
};
use crate::onboarding::{OnboardingAction, OnboardingState, OnboardingWiring};
use crate::presence::{Presence, PresenceConfig};
use crate::reflection::{reflect_on, ParticipantReflection};
use crate::toasts::ToastTray;
use crate::triage::{build_dashboard, feed_entry, FacilitatorDashboard, FeedEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Participant,
    Facilitator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    SelectTopic(Option<String>),
    SwitchTab(Tab),
    SetRiskFilter(RiskFilter),
    SendMessage {
        text: String,
        urgent: bool,
        request_facilitator: bool,
    },
    Approve(MessageId),
    MarkReviewed(MessageId),
    RemoveFromQueue(MessageId),
    Onboarding(OnboardingAction),
    DismissToast(ToastId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppOutcome {
    Updated,
    MessagePosted {
        id: MessageId,
        queued: bool,
        reflection: ParticipantReflection,
    },
    Refused(BoardError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub board: BoardSnapshot,
    pub toasts: ToastTray,
    pub onboarding: OnboardingState,
    pub presence: Presence,
    pub selected_topic: Option<String>,
    pub tab: Tab,
    pub risk_filter: RiskFilter,
}

/// Engines built once from the loaded configuration.
#[derive(Debug, Clone)]
pub struct SupportEngines {
    pub classifier: RiskClassifier,
    pub guidance: GuidanceResolver,
    pub prompts: PromptSelector,
    pub names: AnonymousNameGenerator,
}

impl SupportEngines {
    pub fn from_config(config: &PlatformConfig) -> Result<Self, ContractViolation> {
        config.risk_assessment.validate()?;
        Ok(Self {
            classifier: RiskClassifier::new(&config.risk_assessment),
            guidance: GuidanceResolver::new(),
            prompts: PromptSelector::mvp_v1(),
            names: AnonymousNameGenerator::new(config.anonymous_names.clone())?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SupportApp {
    board: MessageBoardWiring<RiskClassifier>,
    guidance: GuidanceResolver,
    prompts: PromptSelector,
    onboarding: OnboardingWiring,
    ui: UiConfig,
    strings: DisplayStrings,
    rooms: Vec<RoomGroup>,
    state: AppState,
}

impl SupportApp {
    pub fn new(
        config: &PlatformConfig,
        now: MonotonicTimeNs,
        rng: &mut dyn RngCore,
    ) -> Result<Self, ContractViolation> {
        config.validate()?;
        let engines = SupportEngines::from_config(config)?;
        let board = MessageBoardWiring::new(BoardConfig::from_ui(&config.ui), engines.classifier)?;
        let onboarding =
            OnboardingWiring::new(config.strings.clone(), engines.names, &config.ui);

        let state = AppState {
            board: board.seed(&config.demo_messages, now)?,
            toasts: ToastTray::new(),
            onboarding: onboarding.initial_state(rng),
            presence: Presence::new(PresenceConfig::from_ui(&config.ui), rng, now),
            selected_topic: None,
            tab: Tab::Participant,
            risk_filter: RiskFilter::All,
        };
        tracing::debug!(
            seeded = state.board.messages().len(),
            room_groups = config.room_schedule.len(),
            "support app initialised"
        );

        Ok(Self {
            board,
            guidance: engines.guidance,
            prompts: engines.prompts,
            onboarding,
            ui: config.ui.clone(),
            strings: config.strings.clone(),
            rooms: config.room_schedule.clone(),
            state,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn room_groups(&self) -> &[RoomGroup] {
        &self.rooms
    }

    pub fn find_room(&self, room_id: &str) -> Option<Room> {
        self.rooms
            .iter()
            .flat_map(RoomGroup::labelled_rooms)
            .find(|room| room.slot.id == room_id)
    }

    pub fn dispatch(
        &mut self,
        action: AppAction,
        now: MonotonicTimeNs,
        rng: &mut dyn RngCore,
    ) -> AppOutcome {
        self.state.toasts = self.state.toasts.expire(now);

        match action {
            AppAction::SelectTopic(topic) => {
                self.state.selected_topic = topic.filter(|t| !t.trim().is_empty());
                AppOutcome::Updated
            }
            AppAction::SwitchTab(tab) => {
                self.state.tab = tab;
                AppOutcome::Updated
            }
            AppAction::SetRiskFilter(filter) => {
                self.state.risk_filter = filter;
                AppOutcome::Updated
            }
            AppAction::SendMessage {
                text,
                urgent,
                request_facilitator,
            } => {
                let new = NewMessage {
                    text,
                    author: self.onboarding.author_for(&self.state.onboarding, rng),
                    topic: self.state.selected_topic.clone(),
                    urgent,
                    request_facilitator,
                    now,
                };
                self.apply_board(BoardAction::Submit(new), now, rng)
            }
            AppAction::Approve(id) => self.apply_board(BoardAction::Approve(id), now, rng),
            AppAction::MarkReviewed(id) => {
                self.apply_board(BoardAction::MarkReviewed(id), now, rng)
            }
            AppAction::RemoveFromQueue(id) => {
                self.apply_board(BoardAction::RemoveFromQueue(id), now, rng)
            }
            AppAction::Onboarding(step) => {
                let t = self.onboarding.apply(&self.state.onboarding, step, rng);
                self.state.onboarding = t.state;
                self.state.toasts = self.state.toasts.push_all(t.notices, now);
                AppOutcome::Updated
            }
            AppAction::DismissToast(id) => {
                self.state.toasts = self.state.toasts.dismiss(id);
                AppOutcome::Updated
            }
        }
    }

    /// Advances caller-clocked timers: presence drift and toast expiry.
    pub fn tick(&mut self, now: MonotonicTimeNs, rng: &mut dyn RngCore) {
        self.state.presence = self.state.presence.tick(now, rng);
        self.state.toasts = self.state.toasts.expire(now);
    }

    pub fn facilitator_dashboard(&self, now: MonotonicTimeNs) -> FacilitatorDashboard {
        build_dashboard(
            &self.guidance,
            &self.state.board,
            self.board.stats(&self.state.board),
            self.state.risk_filter,
            now,
        )
    }

    pub fn participant_feed(&self, now: MonotonicTimeNs) -> Vec<FeedEntry> {
        self.state
            .board
            .participant_feed()
            .into_iter()
            .map(|m| feed_entry(m, now))
            .collect()
    }

    fn apply_board(
        &mut self,
        action: BoardAction,
        now: MonotonicTimeNs,
        rng: &mut dyn RngCore,
    ) -> AppOutcome {
        let transition = match self.board.apply(&self.state.board, action) {
            Ok(t) => t,
            Err(err) => {
                tracing::warn!(reason_code = err.reason_code().0, "board action refused");
                let notice = Notice::new(err.to_string(), ToastKind::Error, self.ui.toast_duration_ms);
                self.state.toasts = self.state.toasts.push(notice, now).0;
                return AppOutcome::Refused(err);
            }
        };
        self.state.board = transition.snapshot;

        let mut notices = Vec::new();
        let outcome = match transition.event {
            BoardEvent::Submitted { id, queued, .. } => {
                notices.push(self.notice(&self.strings.message_sent, ToastKind::Success));
                if queued {
                    notices.push(Notice::new(
                        self.strings.facilitator_notified.as_str(),
                        ToastKind::Info,
                        self.ui.queued_toast_duration_ms,
                    ));
                }
                match self.state.board.get(id) {
                    Some(message) => AppOutcome::MessagePosted {
                        id,
                        queued,
                        reflection: reflect_on(&self.prompts, message, rng),
                    },
                    None => AppOutcome::Updated,
                }
            }
            BoardEvent::Approved(_) => {
                notices.push(self.notice(&self.strings.message_approved, ToastKind::Success));
                AppOutcome::Updated
            }
            BoardEvent::Reviewed(_) => {
                notices.push(self.notice(&self.strings.message_reviewed, ToastKind::Info));
                AppOutcome::Updated
            }
            BoardEvent::RemovedFromQueue(_) => {
                notices.push(self.notice(&self.strings.message_removed, ToastKind::Info));
                AppOutcome::Updated
            }
        };
        self.state.toasts = self.state.toasts.push_all(notices, now);
        outcome
    }

    fn notice(&self, message: &str, kind: ToastKind) -> Notice {
        Notice::new(message, kind, self.ui.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use silentspeak_contracts::config::AnonymousNames;
    use silentspeak_contracts::risk::{RiskLevel, RiskTermLists};

    fn small_config() -> PlatformConfig {
        PlatformConfig {
            risk_assessment: RiskTermLists {
                high_risk_terms: vec!["end it".to_string()],
                medium_risk_terms: vec!["anxious".to_string()],
            },
            demo_messages: vec![],
            room_schedule: vec![],
            anonymous_names: AnonymousNames {
                adjectives: vec!["Soft".to_string()],
                nouns: vec!["Lantern".to_string()],
            },
            ui: UiConfig::default(),
            strings: DisplayStrings::default(),
        }
    }

    fn t(secs: u64) -> MonotonicTimeNs {
        MonotonicTimeNs::from_unix_secs(secs)
    }

    #[test]
    fn at_app_01_send_message_posts_and_toasts() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut app = SupportApp::new(&small_config(), t(100), &mut rng).unwrap();
        app.dispatch(AppAction::SelectTopic(Some("work-school".to_string())), t(100), &mut rng);
        let outcome = app.dispatch(
            AppAction::SendMessage {
                text: "I want to end it".to_string(),
                urgent: false,
                request_facilitator: false,
            },
            t(101),
            &mut rng,
        );
        match outcome {
            AppOutcome::MessagePosted { id, queued, .. } => {
                assert_eq!(id, MessageId(1));
                assert!(queued);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        let message = &app.state().board.messages()[0];
        assert_eq!(message.topic, "work-school");
        assert_eq!(message.risk(), RiskLevel::High);
        assert!(message.author.starts_with("Soft Lantern #"));
        let toasts = app.state().toasts.active();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].expires_at, t(101).plus_ms(4000));
    }

    #[test]
    fn at_app_02_refused_actions_leave_board_untouched() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut app = SupportApp::new(&small_config(), t(0), &mut rng).unwrap();
        let before = app.state().board.clone();
        let outcome = app.dispatch(AppAction::Approve(MessageId(5)), t(1), &mut rng);
        assert_eq!(
            outcome,
            AppOutcome::Refused(BoardError::MessageNotFound(MessageId(5)))
        );
        assert_eq!(app.state().board, before);
        assert_eq!(app.state().toasts.active()[0].kind, ToastKind::Error);
    }

    #[test]
    fn at_app_03_tick_expires_toasts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut app = SupportApp::new(&small_config(), t(0), &mut rng).unwrap();
        app.dispatch(
            AppAction::SendMessage {
                text: "quiet afternoon".to_string(),
                urgent: false,
                request_facilitator: false,
            },
            t(0),
            &mut rng,
        );
        assert_eq!(app.state().toasts.active().len(), 1);
        app.tick(t(4), &mut rng);
        assert!(app.state().toasts.active().is_empty());
        assert!(app.state().presence.user_count() >= 1);
    }

    #[test]
    fn at_app_04_custom_profile_authors_as_coach() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut app = SupportApp::new(&small_config(), t(0), &mut rng).unwrap();
        app.dispatch(
            AppAction::Onboarding(OnboardingAction::SelectProfile(
                silentspeak_contracts::onboarding::ProfileSelection::Custom,
            )),
            t(0),
            &mut rng,
        );
        app.dispatch(
            AppAction::SendMessage {
                text: "checking in".to_string(),
                urgent: false,
                request_facilitator: false,
            },
            t(1),
            &mut rng,
        );
        assert_eq!(app.state().board.messages()[0].author, "Guided Support Coach");
    }

    #[test]
    fn at_app_05_blank_coach_name_is_refused_at_startup() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut config = small_config();
        config.strings.custom_profile_author = String::new();
        let refused = SupportApp::new(&config, t(0), &mut rng).err();
        assert_eq!(
            refused,
            Some(ContractViolation::InvalidValue {
                field: "strings.custom_profile_author",
                reason: "must not be empty",
            })
        );
    }
}
