#![forbid(unsafe_code)]

pub mod config;
pub mod encouragement;
pub mod guidance;
pub mod names;
pub mod prompt_catalog;
pub mod prompts;
pub mod relative_time;
pub mod risk;
