#![forbid(unsafe_code)]

use std::io::{self, IsTerminal, Read};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use silentspeak_contracts::MonotonicTimeNs;
use silentspeak_engines::config::resolve_config;
use silentspeak_tools::cli::{execute_command, Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref()).map_err(|e| e.to_string())?;

    let password = match &cli.command {
        Command::Signin { username, .. } => Some(read_password(username)?),
        _ => None,
    };

    let output = execute_command(&config, &cli.command, wall_clock_now(), password.as_deref())?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn wall_clock_now() -> MonotonicTimeNs {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    MonotonicTimeNs(u64::try_from(nanos).unwrap_or(u64::MAX))
}

fn read_password(username: &str) -> Result<String, String> {
    if io::stdin().is_terminal() {
        let prompt = format!("Password for {username}:");
        return rpassword::prompt_password(prompt).map_err(|e| e.to_string());
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| e.to_string())?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
