//! Site provisioning feature slice.
//!
//! Owns the full lifecycle of a provisioning request: name validation,
//! the namespace claim, the persisted site record, the best-effort DNS
//! record, and the section/theme catalog the frontend builds from.
//!
//! The slice holds the pieces that are configured once at startup (the DNS
//! client and the public addressing of new sites); the reservation store is
//! shared platform state and reaches handlers through [`ApiState`].
//!
//! [`ApiState`]: smint_kernel::server::ApiState

pub mod api;
pub mod catalog;
mod error;
pub mod validator;
pub mod workflow;

pub use crate::error::SiteError;

use smint_dns::DnsProvisioner;
use smint_domain::config::ApiConfig;
use smint_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::net::IpAddr;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub struct SitesInner {
    /// DNS client; may be built unconfigured, in which case record creation
    /// fails with a config error that the workflow treats as best-effort.
    pub dns: DnsProvisioner,
    /// Parent domain every provisioned site becomes a subdomain of.
    pub parent_domain: String,
    /// Public address new A records point at.
    pub address: IpAddr,
}

/// Sites feature state. Cheap to clone; shared across request tasks.
#[derive(Debug, Clone)]
pub struct Sites {
    inner: Arc<SitesInner>,
}

impl Sites {
    #[must_use]
    pub fn new(inner: SitesInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Sites {
    type Target = SitesInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Sites {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the sites feature from the startup configuration.
///
/// Fails fast when `site.address` is missing: without it every DNS record
/// would be meaningless, so the server refuses to build. A missing DNS
/// endpoint or token, by contrast, only degrades provisioning to
/// claim-without-DNS and is not an init failure.
///
/// # Errors
/// Returns [`SiteError::Config`] for missing required configuration and
/// [`SiteError::Dns`] if the HTTP client cannot be constructed.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, SiteError> {
    let address = config.site.address.ok_or_else(|| SiteError::Config {
        message: "site.address is required to provision DNS records".to_owned(),
    })?;

    let dns = DnsProvisioner::builder()
        .maybe_endpoint(config.dns.endpoint.clone())
        .maybe_token(config.dns.token.clone())
        .ttl(config.dns.ttl)
        .timeout(Duration::from_secs(config.dns.timeout_seconds))
        .build()?;

    if !dns.is_configured() {
        tracing::warn!("DNS endpoint or token not configured; provisioning will skip DNS records");
    }

    let inner = SitesInner { dns, parent_domain: config.site.parent_domain.clone(), address };

    tracing::info!(parent_domain = %inner.parent_domain, "Sites slice initialized");

    Ok(InitializedSlice::new(Sites::new(inner)))
}
