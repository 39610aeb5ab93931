#![forbid(unsafe_code)]

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use silentspeak_contracts::config::PlatformConfig;
use silentspeak_contracts::onboarding::CredentialAction;
use silentspeak_contracts::prompts::{PromptCategory, PromptEntry};
use silentspeak_contracts::risk::RiskLevel;
use silentspeak_contracts::MonotonicTimeNs;
use silentspeak_engines::guidance::GuidanceResolver;
use silentspeak_engines::prompts::PromptSelector;
use silentspeak_engines::risk::RiskClassifier;
use silentspeak_os::app::{SupportApp, SupportEngines};
use silentspeak_os::onboarding::{OnboardingAction, OnboardingWiring};
use silentspeak_os::reflection::ReflectionEngine;

/// Anonymous peer-support toolkit: risk triage, facilitator guidance and
/// reflection prompts.
#[derive(Parser, Debug)]
#[command(name = "silentspeak")]
pub struct Cli {
    /// Platform config file (JSON). Defaults to $SILENTSPEAK_CONFIG, then
    /// the built-in config.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the risk tier of a message
    Classify { text: String },
    /// Show the facilitator guidance record for a message
    Guidance {
        text: String,
        #[arg(long, default_value = "general")]
        topic: String,
        /// Override the classified risk (low, medium, high)
        #[arg(long)]
        risk: Option<String>,
    },
    /// Sample reflection prompts for a topic
    Prompts {
        #[arg(long, default_value = "general")]
        topic: String,
        #[arg(long, default_value_t = 3)]
        count: usize,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Prompts and encouragement shown after posting
    Reflect {
        #[arg(long, default_value = "general")]
        topic: String,
        #[arg(long)]
        urgent: bool,
        #[arg(long)]
        risk: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List scheduled support rooms
    Rooms,
    /// Seed the demo board and print the dashboard and feed
    Demo {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the credentials step of onboarding
    Signin {
        username: String,
        #[arg(long)]
        signup: bool,
    },
}

pub fn execute_command(
    config: &PlatformConfig,
    command: &Command,
    now: MonotonicTimeNs,
    password: Option<&str>,
) -> Result<String, String> {
    match command {
        Command::Classify { text } => {
            let assessment = RiskClassifier::new(&config.risk_assessment).assess(text);
            Ok(match assessment.matched_term {
                Some(term) => format!("{} (matched \"{term}\")", assessment.level.as_str()),
                None => assessment.level.as_str().to_string(),
            })
        }
        Command::Guidance { text, topic, risk } => {
            let risk = match risk {
                Some(raw) => parse_risk(raw)?,
                None => RiskClassifier::new(&config.risk_assessment).classify(text),
            };
            let record = GuidanceResolver::new().resolve(text, topic, risk);
            let mut out = String::new();
            let _ = writeln!(out, "theme: {} ({})", record.theme, record.theme_id.as_str());
            let _ = writeln!(out, "risk: {}", risk.as_str());
            let _ = writeln!(out, "focus: {}", record.focus);
            let _ = writeln!(out, "approach:");
            for step in record.suggested_approach {
                let _ = writeln!(out, "  - {step}");
            }
            let _ = write!(out, "template: {}", record.encouragement_template);
            Ok(out)
        }
        Command::Prompts {
            topic,
            count,
            category,
            seed,
        } => {
            let category = category.as_deref().map(parse_category).transpose()?;
            let mut rng = rng_for(*seed);
            let prompts = PromptSelector::mvp_v1().select_prompts(topic, *count, category, &mut rng);
            if prompts.is_empty() {
                return Ok("no prompts match".to_string());
            }
            Ok(render_prompts(&prompts))
        }
        Command::Reflect {
            topic,
            urgent,
            risk,
            seed,
        } => {
            let risk = match risk {
                Some(raw) => parse_risk(raw)?,
                None if *urgent => RiskLevel::High,
                None => RiskLevel::Low,
            };
            let mut rng = rng_for(*seed);
            let selector = PromptSelector::mvp_v1();
            let line = selector.encouragement_line(risk, &mut rng);
            let prompts = selector.reflection_prompts(topic, *urgent, &mut rng);
            Ok(format!("{line}\n{}", render_prompts(&prompts)))
        }
        Command::Rooms => {
            let mut out = String::new();
            for group in &config.room_schedule {
                let _ = writeln!(out, "{}", group.label);
                for room in &group.rooms {
                    let _ = writeln!(
                        out,
                        "  {}  {}  {}  {} ({})",
                        room.id, room.name, room.time, room.focus, room.availability
                    );
                }
            }
            Ok(out.trim_end().to_string())
        }
        Command::Demo { seed } => {
            let mut rng = rng_for(*seed);
            let app = SupportApp::new(config, now, &mut rng)
                .map_err(|e| format!("failed to start demo: {e}"))?;
            Ok(render_demo(&app, now))
        }
        Command::Signin { username, signup } => {
            let password = password.ok_or_else(|| "missing password input".to_string())?;
            let engines = SupportEngines::from_config(config)
                .map_err(|e| format!("invalid config: {e}"))?;
            let wiring = OnboardingWiring::new(config.strings.clone(), engines.names, &config.ui);
            let action = if *signup {
                CredentialAction::Signup
            } else {
                CredentialAction::Login
            };
            let mut rng = rng_for(None);
            let mut state = wiring.initial_state(&mut rng);
            let mut notices = Vec::new();
            for step in [
                OnboardingAction::SetUsername(username.clone()),
                OnboardingAction::SetPassword(password.to_string()),
                OnboardingAction::SubmitCredentials(action),
            ] {
                let t = wiring.apply(&state, step, &mut rng);
                state = t.state;
                notices.extend(t.notices);
            }
            let mut out = String::new();
            for notice in &notices {
                let _ = writeln!(out, "[{}] {}", notice.kind.as_str(), notice.message);
            }
            let _ = write!(out, "next step: {}", state.step.as_str());
            Ok(out)
        }
    }
}

pub fn parse_risk(raw: &str) -> Result<RiskLevel, String> {
    RiskLevel::parse(raw)
        .ok_or_else(|| format!("unknown risk level '{raw}'. expected one of: low, medium, high"))
}

pub fn parse_category(raw: &str) -> Result<PromptCategory, String> {
    PromptCategory::parse(raw).ok_or_else(|| {
        format!(
            "unknown category '{raw}'. expected one of: exploration, encouragement, reframing, social-interest, goal-setting, safety"
        )
    })
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn render_prompts(prompts: &[&PromptEntry]) -> String {
    prompts
        .iter()
        .map(|p| format!("{} [{}] {}", p.id, p.category.as_str(), p.question))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_demo(app: &SupportApp, now: MonotonicTimeNs) -> String {
    let state = app.state();
    let dashboard = app.facilitator_dashboard(now);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "online: {} participants, {} facilitators",
        state.presence.user_count(),
        state.presence.facilitator_count()
    );
    let stats = &dashboard.stats;
    let _ = writeln!(
        out,
        "stats: total={} queued={} high_risk={} reviewed={} avg_response={}",
        stats.total, stats.queued, stats.high_risk, stats.reviewed, stats.avg_response
    );
    let _ = writeln!(out, "queue:");
    if dashboard.is_queue_clear() {
        let _ = writeln!(out, "  (clear)");
    }
    for item in &dashboard.queue {
        let m = &item.message;
        let _ = writeln!(
            out,
            "  #{} [{}] {} {} {}: {}",
            m.id.0,
            m.risk().as_str(),
            m.topic,
            item.posted,
            m.author,
            m.text
        );
        let _ = writeln!(out, "     guidance: {}", item.guidance.theme);
    }
    let _ = writeln!(out, "feed:");
    for entry in app.participant_feed(now) {
        let m = &entry.message;
        let _ = writeln!(
            out,
            "  #{} [{}] {} {}: {}",
            m.id.0,
            m.risk().as_str(),
            entry.posted,
            m.author,
            m.text
        );
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use silentspeak_engines::config::default_config;

    fn now() -> MonotonicTimeNs {
        MonotonicTimeNs::from_unix_secs(1_700_000_000)
    }

    fn run(command: Command) -> Result<String, String> {
        execute_command(&default_config().unwrap(), &command, now(), None)
    }

    #[test]
    fn at_cli_01_classify_reports_tier_and_term() {
        let out = run(Command::Classify {
            text: "I feel so alone".to_string(),
        })
        .unwrap();
        assert_eq!(out, "medium (matched \"alone\")");
        let low = run(Command::Classify {
            text: String::new(),
        })
        .unwrap();
        assert_eq!(low, "low");
    }

    #[test]
    fn at_cli_02_guidance_rejects_unknown_risk() {
        let err = run(Command::Guidance {
            text: "hello".to_string(),
            topic: "general".to_string(),
            risk: Some("severe".to_string()),
        })
        .unwrap_err();
        assert!(err.contains("unknown risk level"));

        let out = run(Command::Guidance {
            text: "I keep failing at work".to_string(),
            topic: "work-school".to_string(),
            risk: None,
        })
        .unwrap();
        assert!(out.contains("(inferiority-work)"));
    }

    #[test]
    fn at_cli_03_seeded_prompts_are_reproducible() {
        let command = Command::Prompts {
            topic: "relationships".to_string(),
            count: 2,
            category: Some("encouragement".to_string()),
            seed: Some(5),
        };
        let first = run(command.clone()).unwrap();
        assert_eq!(first, run(command).unwrap());
        assert_eq!(first.lines().count(), 2);
        assert!(first.lines().all(|l| l.contains("[encouragement]")));
    }

    #[test]
    fn at_cli_04_demo_and_rooms_render() {
        let demo = run(Command::Demo { seed: Some(1) }).unwrap();
        assert!(demo.contains("stats: total=5 queued=2 high_risk=0 reviewed=3 avg_response=5m"));
        assert!(demo.contains("#3 [low] lonely"));

        let rooms = run(Command::Rooms).unwrap();
        assert!(rooms.starts_with("Today"));
        assert!(rooms.contains("Sunday Reset"));
    }

    #[test]
    fn at_cli_05_signin_never_echoes_password() {
        let sentinel = "DO_NOT_LEAK_SENTINEL";
        let out = execute_command(
            &default_config().unwrap(),
            &Command::Signin {
                username: "river".to_string(),
                signup: true,
            },
            now(),
            Some(sentinel),
        )
        .unwrap();
        assert!(!out.contains(sentinel));
        assert!(out.contains("Signed up as river"));
        assert!(out.ends_with("next step: terms"));

        let missing = run(Command::Signin {
            username: "river".to_string(),
            signup: false,
        });
        assert!(missing.is_err());
    }

    #[test]
    fn at_cli_06_global_config_flag_parses() {
        let cli = Cli::try_parse_from([
            "silentspeak",
            "classify",
            "hello",
            "--config",
            "/tmp/platform.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/platform.json")));
        assert_eq!(
            cli.command,
            Command::Classify {
                text: "hello".to_string()
            }
        );
    }
}
