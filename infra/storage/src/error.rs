use std::path::PathBuf;

/// A specialized error enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The entry already exists in the namespace. Benign under concurrency:
    /// it is the expected signal for the loser of a claim race.
    #[error("entry already claimed: {name}")]
    AlreadyClaimed { name: String },

    /// The name is not a safe single path segment for this store. Domain
    /// validation happens upstream; this is the sandbox guard.
    #[error("invalid entry name: {name:?}")]
    InvalidEntryName { name: String },

    /// The entry has no persisted record (claimed but record write failed,
    /// or never claimed).
    #[error("record not found for entry: {name}")]
    RecordNotFound { name: String },

    /// Hardware or filesystem failure.
    #[error("storage I/O failure at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
