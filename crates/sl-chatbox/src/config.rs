//! Chat session configuration.

use std::time::Duration;

use serde::Deserialize;

/// Per-session assistant settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Pause before the bot answers, in milliseconds. Zero answers immediately.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
}

fn default_response_delay_ms() -> u64 {
    800
}

impl ChatConfig {
    /// Config with no artificial delay (tests, scripted sessions).
    pub fn immediate() -> Self {
        Self {
            response_delay_ms: 0,
        }
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
        }
    }
}
