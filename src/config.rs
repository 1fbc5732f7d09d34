use std::path::PathBuf;

pub const TOKEN_VAR: &str = "GOALSERVE_TOKEN";
pub const BASE_URL_VAR: &str = "GOALSERVE_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://www.goalserve.com";
pub const DEFAULT_OUTPUT_PATH: &str = "squads/ipl_squad.json";

const FEED_PATH: &str = "cricketfixtures/india/ipl_squads?json=1";

/// Settings for a single collection run.
///
/// The token comes from the environment. The base URL can be redirected
/// with `GOALSERVE_BASE_URL`; the output path is fixed in the binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub base_url: String,
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Reads the token from `GOALSERVE_TOKEN`, falling back to an empty string.
    pub fn from_env() -> Self {
        let token = std::env::var(TOKEN_VAR).unwrap_or_default();
        if token.is_empty() {
            log::warn!("{} is not set, requesting with an empty token", TOKEN_VAR);
        }

        let config = Self::new(token);
        match std::env::var(BASE_URL_VAR) {
            Ok(base_url) if !base_url.is_empty() => {
                log::info!("Using feed host override {}", base_url);
                config.with_base_url(base_url)
            }
            _ => config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn feed_url(&self) -> String {
        format!(
            "{}/getfeed/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.token,
            FEED_PATH
        )
    }
}
