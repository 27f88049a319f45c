/// Errors from the DNS RRset client.
///
/// All of these are internal failures from the caller's perspective: the
/// orchestrating workflow decides whether they are fatal (they are not, for
/// best-effort provisioning).
#[derive(Debug, thiserror::Error)]
pub enum DnsError {
    /// Endpoint or bearer credential absent from configuration.
    #[error("DNS API configuration missing (endpoint or token unset)")]
    ConfigMissing,

    /// Transport-level failure: connection, TLS, or timeout.
    #[error("DNS request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with something other than `201 Created`.
    #[error("unexpected DNS API status code: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}
