//! Shared constants used across slices and routers.

/// OpenAPI tag for platform endpoints (health, docs).
pub const SYSTEM_TAG: &str = "System";

/// OpenAPI tag for site provisioning endpoints.
pub const SITES_TAG: &str = "Sites";

/// OpenAPI tag for static catalog endpoints (sections, themes).
pub const CATALOG_TAG: &str = "Catalog";
