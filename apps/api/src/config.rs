use anyhow::{bail, Context, Result};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_SCHEDULER_INTERVAL_SECS: u64 = 86_400;
/// One year.
const MAX_SCHEDULER_INTERVAL_SECS: u64 = 365 * 86_400;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub port: u16,
    pub rust_log: String,
    pub posts_dir: String,
    pub html_dir: String,
    pub scheduler: SchedulerConfig,
}

/// Settings for the periodic generation job.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub enabled: bool,
    pub keyword: String,
    pub interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let interval_secs =
            parse_interval_secs(std::env::var("SCHEDULER_INTERVAL_SECS").ok().as_deref())?;

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            posts_dir: std::env::var("POSTS_DIR").unwrap_or_else(|_| "posts".to_string()),
            html_dir: std::env::var("HTML_DIR").unwrap_or_else(|_| "html".to_string()),
            scheduler: SchedulerConfig {
                enabled: parse_flag(std::env::var("SCHEDULER_ENABLED").ok().as_deref())
                    .context("SCHEDULER_ENABLED must be true or false")?,
                keyword: std::env::var("SCHEDULER_KEYWORD")
                    .unwrap_or_else(|_| "wireless earbuds".to_string()),
                interval_secs,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses the scheduler period. Unset means one day.
fn parse_interval_secs(value: Option<&str>) -> Result<u64> {
    let Some(raw) = value else {
        return Ok(DEFAULT_SCHEDULER_INTERVAL_SECS);
    };
    let secs = raw
        .trim()
        .parse::<u64>()
        .context("SCHEDULER_INTERVAL_SECS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("SCHEDULER_INTERVAL_SECS must be greater than zero");
    }
    if secs > MAX_SCHEDULER_INTERVAL_SECS {
        bail!("SCHEDULER_INTERVAL_SECS must be at most {MAX_SCHEDULER_INTERVAL_SECS}");
    }
    Ok(secs)
}

/// Parses a boolean env flag. Unset means enabled.
fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(true),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => bail!("unrecognised flag value '{other}'"),
        },
    }
}
