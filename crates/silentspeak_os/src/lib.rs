#![forbid(unsafe_code)]

pub mod app;
pub mod board;
pub mod onboarding;
pub mod presence;
pub mod reflection;
pub mod toasts;
pub mod triage;
