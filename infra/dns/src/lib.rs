//! Client for the external authoritative DNS service.
//!
//! The provisioner performs exactly one operation: creating a forward A
//! record for a claimed subdomain. It is synchronous from the caller's point
//! of view, makes a single attempt, and never retries or compensates;
//! retry policy belongs to whoever orchestrates it. The external service is
//! the single source of truth for the record's existence; this crate does
//! not read it back.
//!
//! Only an HTTP `201 Created` counts as success; every other status is
//! reported as [`DnsError::UnexpectedStatus`].
//!
//! # Example
//!
//! ```rust,no_run
//! use smint_dns::DnsProvisioner;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), smint_dns::DnsError> {
//! let dns = DnsProvisioner::builder()
//!     .endpoint("https://desec.example/api/v1/domains/example.com/rrsets/")
//!     .token("secret")
//!     .ttl(3600)
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! dns.create_address_record("my-site", "203.0.113.7".parse().unwrap()).await?;
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::DnsError;

use serde::Serialize;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TTL: u32 = 3600;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Wire shape of an RRset creation request.
#[derive(Debug, Serialize)]
struct RecordSetRequest<'a> {
    subname: &'a str,
    #[serde(rename = "type")]
    record_type: &'static str,
    ttl: u32,
    records: [String; 1],
}

#[derive(Debug)]
struct Target {
    endpoint: String,
    token: String,
}

#[derive(Debug)]
struct DnsProvisionerInner {
    client: reqwest::Client,
    /// `None` when endpoint or token were not configured; calls then fail
    /// with [`DnsError::ConfigMissing`] instead of preventing startup.
    target: Option<Target>,
    ttl: u32,
}

/// A handle to the DNS RRset API. Cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct DnsProvisioner {
    inner: Arc<DnsProvisionerInner>,
}

impl DnsProvisioner {
    #[must_use = "The provisioner is not usable until you call .build()"]
    pub fn builder() -> DnsProvisionerBuilder {
        DnsProvisionerBuilder::default()
    }

    /// Whether both endpoint and credential are configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.inner.target.is_some()
    }

    /// Creates one A record mapping `<subdomain>` to `ip`.
    ///
    /// Single attempt, fixed TTL, bearer-authenticated POST. The side
    /// effect is external and cannot be undone by this crate; no
    /// compensating action is taken on failure.
    ///
    /// # Errors
    /// - [`DnsError::ConfigMissing`] when endpoint or token are unset.
    /// - [`DnsError::Network`] on transport failure or timeout.
    /// - [`DnsError::UnexpectedStatus`] for any response other than 201.
    pub async fn create_address_record(
        &self,
        subdomain: &str,
        ip: IpAddr,
    ) -> Result<(), DnsError> {
        let Some(target) = &self.inner.target else {
            return Err(DnsError::ConfigMissing);
        };

        let payload = RecordSetRequest {
            subname: subdomain,
            record_type: "A",
            ttl: self.inner.ttl,
            records: [ip.to_string()],
        };

        let response = self
            .inner
            .client
            .post(&target.endpoint)
            .header(reqwest::header::AUTHORIZATION, &target.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            return Err(DnsError::UnexpectedStatus(status));
        }

        debug!(subdomain, %ip, "A record created");
        Ok(())
    }
}

/// Fluent builder for [`DnsProvisioner`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct DnsProvisionerBuilder {
    endpoint: Option<String>,
    token: Option<String>,
    ttl: Option<u32>,
    timeout: Option<Duration>,
}

impl DnsProvisionerBuilder {
    /// Full URL of the RRset creation endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Optional endpoint, for passing configuration through verbatim.
    pub fn maybe_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Bearer credential for the `Authorization` header.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Optional credential, for passing configuration through verbatim.
    pub fn maybe_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// TTL stamped on every created record (default 3600).
    pub const fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Outbound request timeout (default 10s).
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the underlying HTTP client.
    ///
    /// Missing endpoint/token do not fail the build; they surface as
    /// [`DnsError::ConfigMissing`] on the first call, so a server without
    /// DNS configuration can still boot and serve everything else.
    ///
    /// # Errors
    /// Returns [`DnsError::Network`] if the TLS backend cannot initialize.
    pub fn build(self) -> Result<DnsProvisioner, DnsError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        let target = match (self.endpoint, self.token) {
            (Some(endpoint), Some(token)) => Some(Target { endpoint, token }),
            _ => None,
        };

        Ok(DnsProvisioner {
            inner: Arc::new(DnsProvisionerInner {
                client,
                target,
                ttl: self.ttl.unwrap_or(DEFAULT_TTL),
            }),
        })
    }
}
