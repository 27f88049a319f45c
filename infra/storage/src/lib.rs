//! A filesystem-backed reservation store for uniquely-named site entries.
//!
//! The store treats one directory per name under a configured root as the
//! durable namespace: the directory's existence *is* the claim. Claiming is
//! built on the only primitive that is race-free across arbitrarily many
//! concurrent callers and processes sharing the same root: an exclusive
//! `create_dir` that fails if the entry already exists. There is no
//! check-then-create anywhere in this crate, and no in-process lock: a mutex
//! could not coordinate with other processes sharing the root.
//!
//! # Core guarantees
//!
//! - **Exclusive claims**: for any name, at most one `claim` call ever
//!   succeeds, no matter how many callers race for it.
//! - **Atomic record writes**: the per-entry record is written with a
//!   unique-temp + `fsync` + rename swap, so a crash never leaves a
//!   partially-visible record.
//! - **No rollback**: a claimed entry is never returned to the free pool by
//!   this crate, even when the subsequent record write fails.
//! - **Sandboxing**: entry names are restricted to a single flat path
//!   segment; traversal out of the root is impossible.
//! - **Self-healing**: orphaned temp files from earlier crashes are purged
//!   during initialization. Claim directories are never purged.
//!
//! # Example
//!
//! ```rust
//! use smint_storage::{SiteStore, StoreError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), StoreError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # let root = tmp.path().join("sites");
//!     let store = SiteStore::builder().root(&root).connect().await?;
//!
//!     store.claim("my-site").await?;
//!     store.write_record("my-site", br#"{"siteName":"my-site"}"#).await?;
//!
//!     assert!(store.exists("my-site")?);
//!     assert!(matches!(
//!         store.claim("my-site").await,
//!         Err(StoreError::AlreadyClaimed { .. })
//!     ));
//!     Ok(())
//! }
//! ```

mod builder;
mod error;
mod maintenance;
mod security;
mod store;

pub use builder::SiteStoreBuilder;
pub use error::StoreError;
pub use store::{RECORD_FILE, SiteStore};
