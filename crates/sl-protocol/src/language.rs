use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the assistant can reply in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Pidgin,
    Igbo,
    Yoruba,
    Hausa,
}

/// Rejected language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// All languages in the order the picker shows them.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Pidgin,
        Language::Igbo,
        Language::Yoruba,
        Language::Hausa,
    ];

    /// Language every template must exist in.
    pub const FALLBACK: Language = Language::English;

    /// Stable code used by the language picker (`english`, `pidgin`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Pidgin => "pidgin",
            Language::Igbo => "igbo",
            Language::Yoruba => "yoruba",
            Language::Hausa => "hausa",
        }
    }

    /// Human-readable name shown in the "language selected" confirmation.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Pidgin => "Pidgin",
            Language::Igbo => "Igbo",
            Language::Yoruba => "Yorùbá",
            Language::Hausa => "Hausa",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts the picker code or the short tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "pidgin" | "pcm" => Ok(Language::Pidgin),
            "igbo" | "ig" => Ok(Language::Igbo),
            "yoruba" | "yorùbá" | "yo" => Ok(Language::Yoruba),
            "hausa" | "ha" => Ok(Language::Hausa),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
