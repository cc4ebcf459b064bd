//! Social Link Registry
//!
//! Provides the ordered list of profile links shown on the site.
//! Links are bundled at compile time and the registry is read-only at
//! runtime: authored order is display order.

use super::link::{LinkTarget, SocialLink};
use super::platform::SocialPlatform;
use super::validation::LinkError;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

/// Embedded link data (loaded at compile time).
const LINKS_JSON: &str = include_str!("links.json");

/// Compact format for loading links from JSON.
#[derive(Deserialize)]
struct LinkRecord {
    title: String,
    url: String,
    #[serde(default)]
    target: Option<LinkTarget>,
}

/// Registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid link: {0}")]
    Shape(#[from] LinkError),
}

/// Ordered registry of social profile links.
///
/// The registry has no mutation surface: once constructed it only hands
/// out read access, so it can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct SocialLinkRegistry {
    links: Vec<SocialLink>,
}

impl Default for SocialLinkRegistry {
    fn default() -> Self {
        Self::bundled()
    }
}

impl SocialLinkRegistry {
    /// Creates a registry from the bundled link data.
    pub fn bundled() -> Self {
        Self::from_json(LINKS_JSON).expect("Invalid embedded links.json")
    }

    /// Parses a registry from a JSON record list.
    ///
    /// Every record is shape-checked: the title must name a recognized
    /// platform and the URL must be a well-formed absolute http(s) URL.
    /// Record order is preserved.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let records: Vec<LinkRecord> = serde_json::from_str(json)?;

        let mut links = Vec::with_capacity(records.len());
        for record in records {
            let title = SocialPlatform::from_name(&record.title).ok_or_else(|| {
                LinkError::UnknownPlatform {
                    name: record.title.clone(),
                }
            })?;

            let mut link = SocialLink::new(title, &record.url)?;
            if let Some(target) = record.target {
                link = link.with_target(target);
            }
            links.push(link);
        }

        Ok(SocialLinkRegistry { links })
    }

    /// Serializes the registry to the external record-list shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.links)
    }

    /// Returns all links in authored order.
    pub fn all(&self) -> &[SocialLink] {
        &self.links
    }

    /// Returns the first link for the given platform.
    pub fn get(&self, platform: SocialPlatform) -> Option<&SocialLink> {
        self.links.iter().find(|link| link.title() == platform)
    }

    /// Returns an iterator over the links in authored order.
    pub fn iter(&self) -> std::slice::Iter<'_, SocialLink> {
        self.links.iter()
    }

    /// Returns the number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Process-wide registry instance, constructed on first use.
static SOCIAL_LINKS: Lazy<SocialLinkRegistry> = Lazy::new(SocialLinkRegistry::bundled);

/// Returns the process-wide registry of bundled social links.
///
/// The registry is never written after construction, so this can be
/// called from any number of threads without synchronization.
pub fn social_links() -> &'static SocialLinkRegistry {
    &SOCIAL_LINKS
}
