use crate::error::StoreError;
use crate::store::{SiteStore, SiteStoreInner};
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::fs;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// A type-safe fluent builder for [`SiteStore`]; a root is required before
/// the store can connect.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct SiteStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    create: bool,
}

#[allow(private_bounds)]
impl<S: Sealed> SiteStoreBuilder<S> {
    /// Sets whether the namespace root should be created if missing.
    #[must_use = "Sets whether the namespace root is created when missing"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.create = enable;
        self
    }
}

impl Default for SiteStoreBuilder<NoRoot> {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteStoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default configuration"]
    pub fn new() -> Self {
        Self { state: NoRoot, create: true }
    }

    /// Sets the namespace root directory.
    #[must_use = "Sets the root directory path for the store"]
    pub fn root(self, path: impl Into<PathBuf>) -> SiteStoreBuilder<WithRoot> {
        SiteStoreBuilder { state: WithRoot(path.into()), create: self.create }
    }
}

impl SiteStoreBuilder<WithRoot> {
    /// Consumes the configuration and initializes the store.
    ///
    /// Boot sequence:
    /// 1. Creates the root directory when `create(true)` is set.
    /// 2. Canonicalizes the root to a physical path, closing off
    ///    symlink-based escapes.
    /// 3. Purges orphaned temp files from earlier crashes (non-critical;
    ///    failures are logged and initialization proceeds).
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the root cannot be created or resolved.
    pub async fn connect(self) -> Result<SiteStore, StoreError> {
        let root = &self.state.0;

        if self.create {
            fs::create_dir_all(root).await.map_err(|e| StoreError::io(root, e))?;
            info!(path = %root.display(), "Bootstrapped site namespace root");
        }

        let canonical = fs::canonicalize(root).await.map_err(|e| StoreError::io(root, e))?;

        let store = SiteStore {
            inner: Arc::new(SiteStoreInner { root: canonical, tmp_counter: AtomicU64::new(1) }),
        };

        store.purge_tmp().await;

        Ok(store)
    }
}
