use std::env;

use crate::error::ConfigError;
use crate::hackernews::{API_VERSION, BASE_URL, MAX_AMOUNT, MIN_AMOUNT};

/// Immutable run configuration: how many posts to fetch, the request
/// timeout, and which API base to talk to. Validated once, at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub posts: usize,
    pub timeout_secs: u64,
    pub api_base: String,
}

impl Config {
    pub fn new(posts: usize, timeout_secs: u64) -> Result<Self, ConfigError> {
        Self::try_load_dotenv();

        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&posts) {
            return Err(ConfigError::PostsOutOfRange {
                min: MIN_AMOUNT,
                max: MAX_AMOUNT,
                actual: posts,
            });
        }

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        // HN_API_BASE overrides the live API, mainly for mirrors and tests
        let api_base =
            env::var("HN_API_BASE").unwrap_or_else(|_| format!("{BASE_URL}/{API_VERSION}"));

        Ok(Self {
            posts,
            timeout_secs,
            api_base,
        })
    }

    fn try_load_dotenv() {
        // current directory first, then the standard config locations
        if dotenvy::dotenv().is_ok() {
            return;
        }

        let candidates = [
            dirs::config_dir().map(|d| d.join("fetch-stories").join(".env")),
            dirs::home_dir().map(|d| d.join(".env")),
        ];

        for path in candidates.into_iter().flatten() {
            if path.exists() && dotenvy::from_path(&path).is_ok() {
                return;
            }
        }

        // no .env anywhere is fine; the environment may be set system-wide
    }
}
