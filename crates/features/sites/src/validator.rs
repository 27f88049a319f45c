//! Feature-level name validation: domain rules plus the advisory
//! namespace-existence check.

use crate::error::SiteError;
use smint_domain::site::SiteName;
use smint_storage::SiteStore;

/// Validates a candidate name against syntax, the reserved set, and the
/// current namespace.
///
/// The existence check is advisory: it reflects the namespace at the time of
/// the call and guarantees nothing about a later claim. Exclusivity is
/// enforced solely by [`SiteStore::claim`]; this function exists so callers
/// get a friendly `AlreadyExists` answer without consuming the name.
///
/// # Errors
/// - [`SiteError::Name`] for syntax or reserved-word rejections.
/// - [`SiteError::AlreadyExists`] when the name is taken right now.
/// - [`SiteError::Storage`] when the namespace cannot be inspected.
pub fn validate(store: &SiteStore, raw: &str) -> Result<SiteName, SiteError> {
    let name = SiteName::parse(raw)?;

    if store.exists(name.as_str())? {
        return Err(SiteError::AlreadyExists);
    }

    Ok(name)
}
