use std::str::FromStr;

use leptos::*;
use log::LevelFilter;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 3000;
/// Where donors with no listings are sent to create one.
pub const DONATE_PATH: &str = "/dashboard/donate";
/// Local storage key holding the session token.
pub const TOKEN_KEY: &str = "foodshare_token";

/// Application configuration, fixed at build time.
///
/// `FOODSHARE_API_BASE` and `FOODSHARE_LOG_LEVEL` are read from the build
/// environment; anything missing or unparseable falls back to the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: LevelFilter,
    pub toast_duration_ms: u32,
    pub donate_path: &'static str,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FOODSHARE_API_BASE"),
            option_env!("FOODSHARE_LOG_LEVEL"),
        )
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();

        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base,
            log_level,
            toast_duration_ms: TOAST_DURATION_MS,
            donate_path: DONATE_PATH,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
