use smint_domain::site::SiteNameError;
use smint_dns::DnsError;
use smint_storage::StoreError;

/// Error taxonomy of the provisioning slice.
///
/// User errors ([`SiteError::Name`], [`SiteError::AlreadyExists`]) carry the
/// exact message shown to the caller and are reported in a normal response
/// body; everything else is a server fault.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Name(#[from] SiteNameError),

    #[error("site name already exists")]
    AlreadyExists,

    #[error("storage failure")]
    Storage(#[source] StoreError),

    #[error("record serialization failed")]
    Record(#[from] serde_json::Error),

    #[error("DNS client initialization failed")]
    Dns(#[from] DnsError),

    #[error("site configuration error: {message}")]
    Config { message: String },
}

impl SiteError {
    /// Whether the error is the caller's fault and safe to echo verbatim.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Name(_) | Self::AlreadyExists)
    }
}

// A lost claim race surfaces to the caller exactly like the advisory
// existence check; every other store failure is internal.
impl From<StoreError> for SiteError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyClaimed { .. } => Self::AlreadyExists,
            other => Self::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_echo_the_exact_message() {
        assert_eq!(SiteError::AlreadyExists.to_string(), "site name already exists");
        assert_eq!(
            SiteError::from(SiteNameError::Reserved).to_string(),
            "site name is reserved or forbidden"
        );
    }

    #[test]
    fn claim_race_is_a_user_error() {
        let err = SiteError::from(StoreError::AlreadyClaimed { name: "my-site".into() });
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "site name already exists");
    }

    #[test]
    fn io_failures_are_internal() {
        let err = SiteError::from(StoreError::Io {
            path: "/tmp/sites/my-site".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(!err.is_user_error());
    }
}
