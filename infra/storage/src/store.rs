//! Core store implementation: exclusive directory claims and atomic record
//! writes under a sandboxed root.

use crate::builder::SiteStoreBuilder;
use crate::error::StoreError;
use crate::maintenance;
use crate::security;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// File name of the persisted record inside a claimed entry.
pub const RECORD_FILE: &str = "config.json";

/// Marker infix of in-flight temporary files, targeted by the boot purge.
pub(crate) const TMP_MARKER: &str = ".sminttmp.";

/// The internal shared state of a [`SiteStore`] instance.
#[derive(Debug)]
pub struct SiteStoreInner {
    /// The canonicalized physical root of the namespace.
    pub(crate) root: PathBuf,
    /// A unique counter used to generate temporary file names.
    pub(crate) tmp_counter: AtomicU64,
}

/// A thread-safe handle to the site namespace.
///
/// Internally reference-counted; clone freely across tasks. All methods are
/// safe under unbounded concurrency; exclusivity rests entirely on the
/// filesystem's atomic `create_dir`, not on any in-process synchronization.
#[derive(Debug, Clone)]
pub struct SiteStore {
    pub(crate) inner: Arc<SiteStoreInner>,
}

impl Deref for SiteStore {
    type Target = SiteStoreInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl SiteStore {
    #[must_use = "The store is not initialized until you call .connect()"]
    pub fn builder() -> SiteStoreBuilder {
        SiteStoreBuilder::new()
    }

    /// The canonical namespace root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Atomically claims `name`, consuming it from the free pool forever.
    ///
    /// The claim is a single exclusive `create_dir`: it either creates the
    /// entry or fails because the entry exists, with nothing in between and
    /// no visible intermediate state. Exactly one of any number of
    /// concurrent callers for the same name succeeds; all others receive
    /// [`StoreError::AlreadyClaimed`].
    ///
    /// The parent directory is fsynced after a successful claim so the
    /// reservation survives a crash.
    ///
    /// # Errors
    /// - [`StoreError::AlreadyClaimed`] if the name is taken (benign race).
    /// - [`StoreError::InvalidEntryName`] if the name fails the sandbox guard.
    /// - [`StoreError::Io`] on filesystem failure.
    pub async fn claim(&self, name: &str) -> Result<(), StoreError> {
        let entry = security::entry_path(&self.root, name)?;

        match fs::create_dir(&entry).await {
            Ok(()) => {},
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyClaimed { name: name.to_owned() });
            },
            Err(err) => return Err(StoreError::io(entry, err)),
        }

        Self::sync_dir(&self.root).await;

        debug!(name, "Namespace entry claimed");
        Ok(())
    }

    /// Advisory existence check: true at the time of the call, with no
    /// staleness guarantee against concurrent claims. Never rely on this for
    /// exclusivity; that is what [`claim`](Self::claim) is for.
    pub fn exists(&self, name: &str) -> Result<bool, StoreError> {
        let entry = security::entry_path(&self.root, name)?;
        Ok(entry.exists())
    }

    /// Writes the entry's record atomically (`config.json`).
    ///
    /// Uses the atomic-swap pattern: data goes to a unique temp file inside
    /// the entry, is fsynced, and is renamed into place, so the record is
    /// never observable half-written. A failure here does **not** release
    /// the claim; the entry remains consumed as evidence of the attempt.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the entry has not been claimed or the
    /// write fails.
    pub async fn write_record(&self, name: &str, data: &[u8]) -> Result<(), StoreError> {
        let target = security::entry_path(&self.root, name)?.join(RECORD_FILE);
        let temp = self.unique_tmp_path(&target);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .await
                .map_err(|e| StoreError::io(&temp, e))?;
            file.write_all(data).await.map_err(|e| StoreError::io(&temp, e))?;
            file.sync_all().await.map_err(|e| StoreError::io(&temp, e))?;
        }

        fs::rename(&temp, &target).await.map_err(|e| StoreError::io(&target, e))?;

        if let Some(parent) = target.parent() {
            Self::sync_dir(parent).await;
        }

        debug!(name, "Record written atomically");
        Ok(())
    }

    /// Reads the entry's persisted record.
    ///
    /// # Errors
    /// Returns [`StoreError::RecordNotFound`] if the entry or its record is
    /// missing.
    pub async fn read_record(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let target = security::entry_path(&self.root, name)?.join(RECORD_FILE);

        match fs::read(&target).await {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::RecordNotFound { name: name.to_owned() })
            },
            Err(err) => Err(StoreError::io(target, err)),
        }
    }

    /// Removes stale temporary files left behind by earlier crashes.
    /// Claim directories are never touched.
    pub async fn purge_tmp(&self) {
        maintenance::purge_tmp(&self.root).await;
    }

    fn unique_tmp_path(&self, target: &Path) -> PathBuf {
        let counter = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or(RECORD_FILE);
        target.with_file_name(format!("{file_name}{TMP_MARKER}{counter}"))
    }

    async fn sync_dir(path: &Path) {
        match fs::File::open(path).await {
            Ok(dir) => {
                if let Err(err) = dir.sync_all().await {
                    tracing::warn!(path = %path.display(), error = %err, "Directory sync failed");
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Directory open failed");
            },
        }
    }
}
