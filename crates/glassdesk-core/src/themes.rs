use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Background themes offered by the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Aurora,
    Midnight,
    Sunset,
    Ocean,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Aurora, Theme::Midnight, Theme::Sunset, Theme::Ocean];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Aurora => "aurora",
            Theme::Midnight => "midnight",
            Theme::Sunset => "sunset",
            Theme::Ocean => "ocean",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Aurora => "Aurora",
            Theme::Midnight => "Midnight",
            Theme::Sunset => "Sunset",
            Theme::Ocean => "Ocean",
        }
    }

    /// Start and end colors of the background gradient, as hex strings.
    pub fn gradient(self) -> (&'static str, &'static str) {
        match self {
            Theme::Aurora => ("#9333ea", "#2563eb"),
            Theme::Midnight => ("#0f172a", "#000000"),
            Theme::Sunset => ("#f97316", "#dc2626"),
            Theme::Ocean => ("#06b6d4", "#1d4ed8"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}'. Available themes: aurora, midnight, sunset, ocean")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}
