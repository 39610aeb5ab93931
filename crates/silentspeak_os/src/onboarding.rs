#![forbid(unsafe_code)]

use std::fmt;

use rand::RngCore;
use silentspeak_contracts::config::{DisplayStrings, UiConfig};
use silentspeak_contracts::onboarding::{CredentialAction, OnboardingStep, ProfileSelection};
use silentspeak_contracts::rooms::Room;
use silentspeak_contracts::toast::{Notice, ToastKind};
use silentspeak_engines::names::AnonymousNameGenerator;

#[derive(Clone, PartialEq, Eq)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    pub username: String,
    pub password: String,
    pub profile: Option<ProfileSelection>,
    pub anonymous_preview: String,
    pub current_room: Option<Room>,
}

impl OnboardingState {
    pub fn new(anonymous_preview: String) -> Self {
        Self {
            step: OnboardingStep::SignIn,
            username: String::new(),
            password: String::new(),
            profile: None,
            anonymous_preview,
            current_room: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }
}

// Keeps the password out of logs and panic output.
impl fmt::Debug for OnboardingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingState")
            .field("step", &self.step)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("profile", &self.profile)
            .field("anonymous_preview", &self.anonymous_preview)
            .field("current_room", &self.current_room)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    SetUsername(String),
    SetPassword(String),
    SubmitCredentials(CredentialAction),
    AcceptTerms,
    RejectTerms,
    SelectProfile(ProfileSelection),
    ContinueProfile,
    BackTo(OnboardingStep),
    SelectRoom(Room),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingTransition {
    pub state: OnboardingState,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone)]
pub struct OnboardingWiring {
    strings: DisplayStrings,
    names: AnonymousNameGenerator,
    toast_duration_ms: u64,
}

impl OnboardingWiring {
    pub fn new(strings: DisplayStrings, names: AnonymousNameGenerator, ui: &UiConfig) -> Self {
        Self {
            strings,
            names,
            toast_duration_ms: ui.toast_duration_ms,
        }
    }

    pub fn initial_state(&self, rng: &mut dyn RngCore) -> OnboardingState {
        OnboardingState::new(self.names.generate(rng))
    }

    /// Display name for a new board message under the chosen profile.
    pub fn author_for(&self, state: &OnboardingState, rng: &mut dyn RngCore) -> String {
        match state.profile {
            Some(ProfileSelection::Custom) => self.strings.custom_profile_author.clone(),
            _ => self.names.generate(rng),
        }
    }

    pub fn profile_label(&self, profile: ProfileSelection) -> &str {
        match profile {
            ProfileSelection::Custom => &self.strings.custom_profile_author,
            ProfileSelection::Anonymous => &self.strings.anonymous_profile_label,
        }
    }

    pub fn apply(
        &self,
        state: &OnboardingState,
        action: OnboardingAction,
        rng: &mut dyn RngCore,
    ) -> OnboardingTransition {
        let mut next = state.clone();
        let mut notices = Vec::new();

        match action {
            OnboardingAction::SetUsername(username) => next.username = username,
            OnboardingAction::SetPassword(password) => next.password = password,
            OnboardingAction::SubmitCredentials(action) => {
                if next.username.trim().is_empty() || next.password.trim().is_empty() {
                    notices.push(self.notice(&self.strings.credentials_missing, ToastKind::Error));
                } else {
                    let verb = match action {
                        CredentialAction::Login => "Logged in",
                        CredentialAction::Signup => "Signed up",
                    };
                    notices.push(self.notice(
                        &format!("{verb} as {}", next.username),
                        ToastKind::Success,
                    ));
                    next.step = OnboardingStep::Terms;
                }
            }
            OnboardingAction::AcceptTerms => {
                next.step = OnboardingStep::Profile;
                notices.push(self.notice(&self.strings.terms_accepted, ToastKind::Success));
            }
            OnboardingAction::RejectTerms => {
                next.step = OnboardingStep::SignIn;
                notices.push(self.notice(&self.strings.terms_rejected, ToastKind::Info));
            }
            OnboardingAction::SelectProfile(profile) => {
                next.profile = Some(profile);
                notices.push(self.notice(
                    &format!("{} profile selected", self.profile_label(profile)),
                    ToastKind::Info,
                ));
            }
            OnboardingAction::ContinueProfile => {
                if next.profile.is_some() {
                    next.step = OnboardingStep::Rooms;
                } else {
                    notices.push(self.notice(&self.strings.profile_missing, ToastKind::Error));
                }
            }
            OnboardingAction::BackTo(step) => {
                if step != OnboardingStep::Complete {
                    next.step = step;
                }
            }
            OnboardingAction::SelectRoom(room) => {
                notices.push(self.notice(&format!("You joined {}", room.name()), ToastKind::Success));
                next.current_room = Some(room);
                next.step = OnboardingStep::Complete;
            }
        }

        if next.step == OnboardingStep::Profile && state.step != OnboardingStep::Profile {
            next.anonymous_preview = self.names.generate(rng);
        }
        if next.step != state.step {
            tracing::debug!(
                from = state.step.as_str(),
                to = next.step.as_str(),
                "onboarding step changed"
            );
        }

        OnboardingTransition {
            state: next,
            notices,
        }
    }

    fn notice(&self, message: &str, kind: ToastKind) -> Notice {
        Notice::new(message, kind, self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use silentspeak_contracts::config::AnonymousNames;
    use silentspeak_contracts::rooms::RoomSlot;

    fn wiring() -> OnboardingWiring {
        let names = AnonymousNameGenerator::new(AnonymousNames {
            adjectives: vec!["Calm".to_string()],
            nouns: vec!["Harbor".to_string()],
        })
        .unwrap();
        OnboardingWiring::new(DisplayStrings::default(), names, &UiConfig::default())
    }

    fn run(
        w: &OnboardingWiring,
        state: OnboardingState,
        actions: Vec<OnboardingAction>,
        rng: &mut StdRng,
    ) -> (OnboardingState, Vec<Notice>) {
        let mut notices = Vec::new();
        let mut state = state;
        for action in actions {
            let t = w.apply(&state, action, rng);
            state = t.state;
            notices.extend(t.notices);
        }
        (state, notices)
    }

    fn room() -> Room {
        Room {
            slot: RoomSlot {
                id: "today-grounding".to_string(),
                name: "Grounding Circle".to_string(),
                time: "2:00 PM".to_string(),
                focus: "Breathing".to_string(),
                availability: "3 spots left".to_string(),
            },
            date_label: "Today".to_string(),
        }
    }

    #[test]
    fn at_onboarding_01_blank_credentials_stay_on_sign_in() {
        let w = wiring();
        let mut rng = StdRng::seed_from_u64(1);
        let start = w.initial_state(&mut rng);
        let (state, notices) = run(
            &w,
            start,
            vec![
                OnboardingAction::SetUsername("sam".to_string()),
                OnboardingAction::SetPassword("   ".to_string()),
                OnboardingAction::SubmitCredentials(CredentialAction::Login),
            ],
            &mut rng,
        );
        assert_eq!(state.step, OnboardingStep::SignIn);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, ToastKind::Error);
        assert_eq!(
            notices[0].message,
            "Enter both a username and password to continue"
        );
    }

    #[test]
    fn at_onboarding_02_full_walkthrough_reaches_complete() {
        let w = wiring();
        let mut rng = StdRng::seed_from_u64(2);
        let start = w.initial_state(&mut rng);
        let (state, notices) = run(
            &w,
            start,
            vec![
                OnboardingAction::SetUsername("sam".to_string()),
                OnboardingAction::SetPassword("pw".to_string()),
                OnboardingAction::SubmitCredentials(CredentialAction::Signup),
                OnboardingAction::AcceptTerms,
                OnboardingAction::SelectProfile(ProfileSelection::Custom),
                OnboardingAction::ContinueProfile,
                OnboardingAction::SelectRoom(room()),
            ],
            &mut rng,
        );
        assert!(state.is_complete());
        assert_eq!(state.current_room.as_ref().map(Room::name), Some("Grounding Circle"));
        let messages: Vec<&str> = notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages[0], "Signed up as sam");
        assert_eq!(messages[2], "Guided Support Coach profile selected");
        assert_eq!(messages.last(), Some(&"You joined Grounding Circle"));
    }

    #[test]
    fn at_onboarding_03_continue_without_profile_is_refused() {
        let w = wiring();
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = w.initial_state(&mut rng);
        state.step = OnboardingStep::Profile;
        let t = w.apply(&state, OnboardingAction::ContinueProfile, &mut rng);
        assert_eq!(t.state.step, OnboardingStep::Profile);
        assert_eq!(t.notices[0].message, "Select a profile option to continue");
    }

    #[test]
    fn at_onboarding_04_reject_terms_and_back_navigation() {
        let w = wiring();
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = w.initial_state(&mut rng);
        state.step = OnboardingStep::Terms;
        let t = w.apply(&state, OnboardingAction::RejectTerms, &mut rng);
        assert_eq!(t.state.step, OnboardingStep::SignIn);
        assert_eq!(t.notices[0].kind, ToastKind::Info);

        let back = w.apply(&state, OnboardingAction::BackTo(OnboardingStep::SignIn), &mut rng);
        assert_eq!(back.state.step, OnboardingStep::SignIn);
        let ignored = w.apply(&state, OnboardingAction::BackTo(OnboardingStep::Complete), &mut rng);
        assert_eq!(ignored.state.step, OnboardingStep::Terms);
    }

    #[test]
    fn at_onboarding_05_author_follows_profile() {
        let w = wiring();
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = w.initial_state(&mut rng);
        assert!(w.author_for(&state, &mut rng).starts_with("Calm Harbor #"));
        state.profile = Some(ProfileSelection::Custom);
        assert_eq!(w.author_for(&state, &mut rng), "Guided Support Coach");
    }

    #[test]
    fn at_onboarding_06_debug_output_redacts_password() {
        let mut state = OnboardingState::new("Calm Harbor #1".to_string());
        state.password = "hunter2".to_string();
        let rendered = format!("{state:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
