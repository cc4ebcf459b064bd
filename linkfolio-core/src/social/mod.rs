// SPDX-FileCopyrightText: 2026 Linkfolio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Profile Links
//!
//! This module provides:
//! - A closed set of recognized social platforms
//! - Shape-checked profile link records
//! - An ordered, immutable registry of links bundled at compile time

mod link;
mod platform;
mod registry;
mod validation;

pub use link::{LinkTarget, SocialLink};
pub use platform::SocialPlatform;
pub use registry::{social_links, RegistryError, SocialLinkRegistry};
pub use validation::{is_allowed_scheme, LinkError};
