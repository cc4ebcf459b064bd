// SPDX-FileCopyrightText: 2026 Linkfolio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Link Records
//!
//! A social link pairs a platform with a destination URL and an optional
//! navigation hint for the consuming UI.

use super::platform::SocialPlatform;
use super::validation::{validate_url, LinkError};
use serde::{Deserialize, Serialize};

/// Link-opening behavior for the consuming UI.
///
/// Carried as `Option<LinkTarget>` on a link; absent means default
/// same-context navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Open in a new browsing context.
    #[serde(rename = "_blank")]
    Blank,
}

/// A social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Platform this link points to.
    title: SocialPlatform,
    /// Absolute destination URL.
    url: String,
    /// Optional link-opening hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<LinkTarget>,
}

impl SocialLink {
    /// Creates a new social link after checking URL shape.
    pub fn new(title: SocialPlatform, url: &str) -> Result<Self, LinkError> {
        validate_url(url)?;

        Ok(SocialLink {
            title,
            url: url.to_string(),
            target: None,
        })
    }

    /// Sets the link-opening hint.
    pub fn with_target(mut self, target: LinkTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Returns the platform this link points to.
    pub fn title(&self) -> SocialPlatform {
        self.title
    }

    /// Returns the destination URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the link-opening hint if set.
    pub fn target(&self) -> Option<LinkTarget> {
        self.target
    }
}
