use crate::error::StoreError;
use std::path::{Path, PathBuf};

/// Maximum entry name length accepted by the store (DNS label limit; also
/// keeps paths short on every filesystem we care about).
const MAX_ENTRY_LEN: usize = 63;

/// Validates an entry name as a single flat path segment and joins it onto
/// the canonical root.
///
/// The charset is deliberately narrower than "anything without a slash":
/// lowercase alphanumerics and interior hyphens only. That rules out `.`,
/// `..`, separators, drive prefixes, and hidden-file prefixes in one check,
/// so the resulting path can never escape the root.
pub(crate) fn entry_path(root: &Path, name: &str) -> Result<PathBuf, StoreError> {
    if !is_safe_segment(name) {
        return Err(StoreError::InvalidEntryName { name: name.to_owned() });
    }
    Ok(root.join(name))
}

fn is_safe_segment(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_ENTRY_LEN {
        return false;
    }
    if name.starts_with('-') || name.ends_with('-') {
        return false;
    }
    name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_segments_rejected() {
        let root = Path::new("/data/sites");
        for name in ["..", ".", "a/b", "../etc", "a\\b", "", ".hidden", "-x", "x-", "UPPER"] {
            assert!(entry_path(root, name).is_err(), "{name:?}");
        }
    }

    #[test]
    fn safe_names_stay_under_root() {
        let root = Path::new("/data/sites");
        let path = entry_path(root, "my-site").unwrap();
        assert_eq!(path, root.join("my-site"));
    }
}
