//! Facade crate for `SiteMint` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] during server bootstrap to register feature slices;
//!   extend it as new slices appear.

pub use smint_domain as domain;
use smint_domain::config::ApiConfig;
pub use smint_kernel as kernel;

pub mod server {
    pub mod router {
        pub use smint_kernel::server::router::system_router;
        pub use smint_sites::api::router as sites_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use smint_sites as sites;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["server", "sites"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Sites
    slices.push(features::sites::init(config)?);

    Ok(slices)
}
