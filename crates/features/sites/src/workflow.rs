//! The provisioning sequence: validate, claim, persist, best-effort DNS.

use crate::Sites;
use crate::error::SiteError;
use crate::validator;
use smint_domain::site::{SiteName, SiteRecord};
use smint_storage::SiteStore;
use tracing::{info, warn};

/// Input of one provisioning attempt. `site_name` is raw caller input;
/// normalization and validation happen inside [`provision`].
#[derive(Debug, Clone)]
pub struct NewSite {
    pub site_name: String,
    pub description: Option<String>,
    pub style: Option<String>,
    pub initial_content: Option<Vec<String>>,
}

/// Outcome of a successful provisioning attempt.
#[derive(Debug, Clone)]
pub struct Provisioned {
    pub name: SiteName,
    pub site_url: String,
}

/// Provisions a new site end to end.
///
/// Steps, in order:
/// 1. validate the name (syntax, reserved set, advisory existence check);
/// 2. claim the namespace entry, the atomic point of no return, never
///    rolled back afterwards;
/// 3. write the site record; a failure here is a server fault but the claim
///    stays consumed;
/// 4. create the DNS A record, best effort: a failure is logged at warn and
///    does not fail the request, since the claimed site is reachable once
///    the record is created out of band;
/// 5. synthesize the public URL `https://<name>.<parent_domain>`.
///
/// Losing a claim race between steps 1 and 2 surfaces as
/// [`SiteError::AlreadyExists`], same as the advisory check.
///
/// # Errors
/// User errors ([`SiteError::is_user_error`]) plus [`SiteError::Storage`] /
/// [`SiteError::Record`] for persistence faults.
pub async fn provision(
    sites: &Sites,
    store: &SiteStore,
    new: NewSite,
) -> Result<Provisioned, SiteError> {
    let name = validator::validate(store, &new.site_name)?;

    store.claim(name.as_str()).await?;

    let record = SiteRecord::new(name.clone(), new.description, new.style, new.initial_content);
    let data = serde_json::to_vec_pretty(&record)?;
    store.write_record(name.as_str(), &data).await.map_err(SiteError::Storage)?;

    if let Err(err) = sites.dns.create_address_record(name.as_str(), sites.address).await {
        warn!(site = %name, error = %err, "DNS record creation failed; site stays provisioned");
    }

    let site_url = format!("https://{name}.{}", sites.parent_domain);
    info!(site = %name, url = %site_url, "Site provisioned");

    Ok(Provisioned { name, site_url })
}
