//! Social Platforms
//!
//! The closed set of platforms the consuming UI knows how to render.
//! Each platform maps to an icon identifier for display.

use serde::{Deserialize, Serialize};

/// A recognized social platform.
///
/// The set is closed: the consuming UI maps each platform to an icon and
/// styling, so free-form titles are not allowed. Unknown names are rejected
/// at the JSON interop boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Bluesky,
    GitHub,
    LinkedIn,
}

impl SocialPlatform {
    /// Get all recognized platforms
    pub fn all() -> &'static [SocialPlatform] {
        &[
            SocialPlatform::Bluesky,
            SocialPlatform::GitHub,
            SocialPlatform::LinkedIn,
        ]
    }

    /// Get the display name for this platform
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialPlatform::Bluesky => "Bluesky",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::LinkedIn => "LinkedIn",
        }
    }

    /// Get the icon identifier for UI rendering
    pub fn icon(&self) -> &'static str {
        match self {
            SocialPlatform::Bluesky => "bluesky",
            SocialPlatform::GitHub => "github",
            SocialPlatform::LinkedIn => "linkedin",
        }
    }

    /// Parse a platform from its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bluesky" => Some(SocialPlatform::Bluesky),
            "github" => Some(SocialPlatform::GitHub),
            "linkedin" => Some(SocialPlatform::LinkedIn),
            _ => None,
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
