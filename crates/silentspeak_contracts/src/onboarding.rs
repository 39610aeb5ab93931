#![forbid(unsafe_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    SignIn,
    Terms,
    Profile,
    Rooms,
    Complete,
}

impl OnboardingStep {
    pub fn as_str(self) -> &'static str {
        match self {
            OnboardingStep::SignIn => "signIn",
            OnboardingStep::Terms => "terms",
            OnboardingStep::Profile => "profile",
            OnboardingStep::Rooms => "rooms",
            OnboardingStep::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileSelection {
    Anonymous,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialAction {
    Login,
    Signup,
}
