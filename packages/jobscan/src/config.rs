use anyhow::{bail, Result};
use dotenvy::dotenv;
use job_extraction::SecretString;
use std::env;

/// CLI configuration loaded from environment variables.
///
/// Both keys are optional at load time; commands that talk to the
/// corresponding service require them.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub openrouter_api_key: Option<SecretString>,
    pub firecrawl_api_key: Option<SecretString>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            openrouter_api_key: non_empty_var("OPENROUTER_API_KEY"),
            firecrawl_api_key: non_empty_var("FIRECRAWL_API_KEY"),
        })
    }

    /// OpenRouter key, preferring a flag value over the environment.
    pub fn openrouter_key(&self, flag: Option<&str>) -> Result<SecretString> {
        pick_key(flag, self.openrouter_api_key.as_ref(), "OPENROUTER_API_KEY")
    }

    /// Firecrawl key, preferring a flag value over the environment.
    pub fn firecrawl_key(&self, flag: Option<&str>) -> Result<SecretString> {
        pick_key(flag, self.firecrawl_api_key.as_ref(), "FIRECRAWL_API_KEY")
    }
}

fn non_empty_var(name: &str) -> Option<SecretString> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

fn pick_key(
    flag: Option<&str>,
    env_value: Option<&SecretString>,
    name: &str,
) -> Result<SecretString> {
    if let Some(key) = flag.filter(|k| !k.trim().is_empty()) {
        return Ok(SecretString::from(key));
    }
    match env_value {
        Some(key) => Ok(key.clone()),
        None => bail!("{} must be set (or pass --api-key)", name),
    }
}
