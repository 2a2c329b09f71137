//! Target platforms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Social platform a post is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Platform {
    Instagram,
    /// Twitter, also accepted as `x`.
    Twitter,
    Linkedin,
    Tiktok,
    Facebook,
    Youtube,
    Pinterest,
}

/// Returned when a platform id is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct PlatformParseError(pub String);

impl Platform {
    /// Every supported platform.
    pub const ALL: [Self; 7] = [
        Self::Instagram,
        Self::Twitter,
        Self::Linkedin,
        Self::Tiktok,
        Self::Facebook,
        Self::Youtube,
        Self::Pinterest,
    ];

    /// Canonical lowercase id.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
            Self::Pinterest => "pinterest",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" => Ok(Self::Instagram),
            // X is the current name of the same network
            "twitter" | "x" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "tiktok" => Ok(Self::Tiktok),
            "facebook" => Ok(Self::Facebook),
            "youtube" => Ok(Self::Youtube),
            "pinterest" => Ok(Self::Pinterest),
            _ => Err(PlatformParseError(s.to_string())),
        }
    }
}
