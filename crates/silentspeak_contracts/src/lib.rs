#![forbid(unsafe_code)]

pub mod common;
pub mod config;
pub mod guidance;
pub mod message;
pub mod onboarding;
pub mod prompts;
pub mod risk;
pub mod rooms;
pub mod toast;

pub use common::{ContractViolation, MonotonicTimeNs, ReasonCodeId, SchemaVersion, Validate};
