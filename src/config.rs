use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub llm_timeout_secs: u64,
    pub static_dir: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            gemini_api_key: get_env_non_empty("GEMINI_API_KEY")?,
            gemini_model: get_env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: get_env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            llm_timeout_secs: parse_timeout(env::var("LLM_TIMEOUT_SECS").ok().as_deref())?,
            static_dir: get_env_or("STATIC_DIR", DEFAULT_STATIC_DIR),
        })
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

/// A key that is set but blank is as unusable as a missing one.
fn get_env_non_empty(name: &str) -> Result<String> {
    let value = get_env(name)?;
    if value.trim().is_empty() {
        return Err(Error::Config(format!("Environment variable {} is empty", name)));
    }
    Ok(value.trim().to_string())
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// `LLM_TIMEOUT_SECS`: unset or blank means the default; zero would make
/// every generation time out, so it is rejected like any other bad value.
fn parse_timeout(raw: Option<&str>) -> Result<u64> {
    let secs = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for LLM_TIMEOUT_SECS: {}", e)))?,
        _ => DEFAULT_LLM_TIMEOUT_SECS,
    };
    if secs == 0 {
        return Err(Error::Config("LLM_TIMEOUT_SECS must be greater than zero".to_string()));
    }
    Ok(secs)
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
