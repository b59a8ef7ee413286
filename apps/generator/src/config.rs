use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
/// Aborts at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub num_programmers: u32,
    pub num_projects: u32,
    pub num_rfps: u32,
    /// Fraction of projects that receive any assignments at all.
    /// Values below 1.0 deliberately leave bench capacity.
    pub assignment_probability: f64,
    pub programmers_dir: PathBuf,
    pub projects_dir: PathBuf,
    pub rfps_dir: PathBuf,
    /// Pause after each LLM call, to stay under the provider rate limit.
    pub pacing: Duration,
    /// Longer pause after a failed item before moving on to the next one.
    pub error_pacing: Duration,
    /// Persist accumulated profiles every N items during append runs.
    pub checkpoint_every: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let assignment_probability: f64 = parse_env("ASSIGNMENT_PROBABILITY", 0.7)?;
        if !(0.0..=1.0).contains(&assignment_probability) {
            return Err(AppError::InvalidArgument(format!(
                "ASSIGNMENT_PROBABILITY must be within [0, 1], got {assignment_probability}"
            )));
        }

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            num_programmers: parse_env("NUM_PROGRAMMERS", 10)?,
            num_projects: parse_env("NUM_PROJECTS", 20)?,
            num_rfps: parse_env("NUM_RFPS", 3)?,
            assignment_probability,
            programmers_dir: env_or("PROGRAMMERS_DIR", "data/programmers").into(),
            projects_dir: env_or("PROJECTS_DIR", "data/projects").into(),
            rfps_dir: env_or("RFPS_DIR", "data/rfps").into(),
            pacing: Duration::from_secs(parse_env("PACING_SECONDS", 3)?),
            error_pacing: Duration::from_secs(parse_env("ERROR_PACING_SECONDS", 5)?),
            checkpoint_every: parse_env("CHECKPOINT_EVERY", 10)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String, AppError> {
    std::env::var(key).map_err(|_| {
        AppError::MissingConfiguration(format!("environment variable '{key}' is not set"))
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().map_err(|e| {
            AppError::InvalidArgument(format!("environment variable '{key}': {e}"))
        }),
        Err(_) => Ok(default),
    }
}
