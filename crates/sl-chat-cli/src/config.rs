//! Terminal front end configuration, loadable from TOML.

use serde::Deserialize;
use sl_chatbox::ChatConfig;

/// Top-level configuration for `spareline-chat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCliConfig {
    /// Pretend a user is signed in (unlocks the dashboard).
    #[serde(default)]
    pub signed_in: bool,
    /// Language code selected at startup. None asks the user to choose.
    #[serde(default)]
    pub default_language: Option<String>,
    /// Assistant settings.
    #[serde(default)]
    pub chat: ChatConfig,
}

impl ChatCliConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
