//! Site naming rules and the persisted site record.
//!
//! [`SiteName`] is the only way a name enters the system: construction
//! normalizes and validates, so every other layer can assume a well-formed,
//! lower-cased identifier. The namespace-existence check is *not* part of
//! this type; it is advisory and lives with the reservation workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Names that can never be claimed, regardless of availability.
pub const RESERVED_NAMES: &[&str] = &["www", "mail", "ftp", "admin", "api"];

/// Maximum length of a site name (DNS label limit).
pub const MAX_NAME_LEN: usize = 63;

/// Rejection reasons for a candidate site name.
///
/// These are user errors: they are reported verbatim to the caller and are
/// never treated as server faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SiteNameError {
    #[error(
        "site name must be 1-63 characters, letters, digits, or hyphens; cannot start or end with hyphen"
    )]
    InvalidSyntax,

    #[error("site name is reserved or forbidden")]
    Reserved,
}

/// A validated, normalized (lower-cased) site name.
///
/// Immutable once constructed; always matches
/// `^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$` and is never a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SiteName(String);

impl SiteName {
    /// Normalizes and validates a raw candidate name.
    ///
    /// Checks run in order and short-circuit: syntax first, then the
    /// reserved-word set. Both checks operate on the lower-cased form, so
    /// `"API"` is rejected as reserved, not merely unusual.
    ///
    /// # Errors
    /// Returns [`SiteNameError::InvalidSyntax`] or [`SiteNameError::Reserved`].
    pub fn parse(raw: &str) -> Result<Self, SiteNameError> {
        let name = raw.to_lowercase();

        if !is_valid_syntax(&name) {
            return Err(SiteNameError::InvalidSyntax);
        }

        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(SiteNameError::Reserved);
        }

        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SiteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for SiteName {
    type Error = SiteNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

// Records are only ever written by this system, but revalidate on the way
// back in so a hand-edited file cannot smuggle an invalid name into memory.
impl<'de> Deserialize<'de> for SiteName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// 1–63 chars, `[a-z0-9-]`, no leading or trailing hyphen.
fn is_valid_syntax(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    if !name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return false;
    }
    !name.starts_with('-') && !name.ends_with('-')
}

/// The persisted configuration record of a claimed site.
///
/// Created once at claim time and never mutated or deleted. `style` and
/// `initial_content` are caller-chosen identifiers; the provisioning core
/// stores them without enforcing membership in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub site_name: SiteName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_content: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl SiteRecord {
    /// Builds a record for a freshly claimed name, stamped with the current
    /// UTC time.
    #[must_use]
    pub fn new(
        site_name: SiteName,
        description: Option<String>,
        style: Option<String>,
        initial_content: Option<Vec<String>>,
    ) -> Self {
        Self { site_name, description, style, initial_content, created_at: Utc::now() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_lowercase() {
        let name = SiteName::parse("My-Site").unwrap();
        assert_eq!(name.as_str(), "my-site");
    }

    #[test]
    fn reserved_check_runs_on_normalized_form() {
        assert_eq!(SiteName::parse("API"), Err(SiteNameError::Reserved));
        assert_eq!(SiteName::parse("www"), Err(SiteNameError::Reserved));
    }

    #[test]
    fn hyphen_placement() {
        assert_eq!(SiteName::parse("-bad-"), Err(SiteNameError::InvalidSyntax));
        assert_eq!(SiteName::parse("-bad"), Err(SiteNameError::InvalidSyntax));
        assert_eq!(SiteName::parse("bad-"), Err(SiteNameError::InvalidSyntax));
        assert!(SiteName::parse("a-b").is_ok());
    }

    #[test]
    fn length_bounds() {
        assert_eq!(SiteName::parse(""), Err(SiteNameError::InvalidSyntax));
        assert!(SiteName::parse("a").is_ok());
        assert!(SiteName::parse(&"a".repeat(63)).is_ok());
        assert_eq!(SiteName::parse(&"a".repeat(64)), Err(SiteNameError::InvalidSyntax));
    }

    #[test]
    fn rejects_disallowed_characters() {
        for raw in ["my_site", "my site", "my.site", "sïte", "site!"] {
            assert_eq!(SiteName::parse(raw), Err(SiteNameError::InvalidSyntax), "{raw}");
        }
    }
}
