// SPDX-FileCopyrightText: 2026 Linkfolio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link Shape Validation
//!
//! Checks that authored URLs are well-formed absolute http(s) URLs.
//! Shape only: nothing here touches the network, and reachability of a
//! profile URL is out of scope.

use thiserror::Error;
use url::Url;

/// Schemes a profile link may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Link shape error types.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Unknown platform: {name}")]
    UnknownPlatform { name: String },
    #[error("URL cannot be empty")]
    EmptyUrl,
    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme { scheme: String },
}

/// Returns true if the scheme is allowed for profile links.
pub fn is_allowed_scheme(scheme: &str) -> bool {
    ALLOWED_SCHEMES.contains(&scheme.to_lowercase().as_str())
}

/// Validates that a URL is a well-formed absolute http(s) URL.
///
/// The parser guarantees a host for http(s) URLs, so no separate host
/// check is needed.
pub fn validate_url(url: &str) -> Result<(), LinkError> {
    if url.is_empty() {
        return Err(LinkError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|e| LinkError::InvalidUrl {
        reason: e.to_string(),
    })?;

    if !is_allowed_scheme(parsed.scheme()) {
        return Err(LinkError::UnsupportedScheme {
            scheme: parsed.scheme().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        assert!(validate_url("https://github.com/lukehagar").is_ok());
    }

    #[test]
    fn test_accepts_http_url() {
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate_url(""), Err(LinkError::EmptyUrl)));
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            validate_url("/profile/lukehagar"),
            Err(LinkError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_bare_hostname() {
        assert!(matches!(
            validate_url("github.com/lukehagar"),
            Err(LinkError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(matches!(
            validate_url("javascript:alert(1)"),
            Err(LinkError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            validate_url("ftp://example.com/file"),
            Err(LinkError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        assert!(is_allowed_scheme("HTTPS"));
        assert!(!is_allowed_scheme("mailto"));
    }
}
