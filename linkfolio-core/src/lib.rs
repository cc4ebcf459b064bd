// SPDX-FileCopyrightText: 2026 Linkfolio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Linkfolio Core Library
//!
//! Social profile link data for a personal site or profile page.
//! Links are bundled at compile time and read-only at runtime.

pub mod social;

pub use social::{
    is_allowed_scheme, social_links, LinkError, LinkTarget, RegistryError, SocialLink,
    SocialLinkRegistry, SocialPlatform,
};
