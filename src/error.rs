use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by store operations.
///
/// Not-found is never an error here: point reads report absence as
/// `Ok(None)` and range reads as an empty result. A namespace containing the
/// reserved delimiter is a caller-contract violation and panics at the write
/// that introduces it rather than appearing in this enum.
#[derive(Error, Debug)]
pub enum Error {
    /// Failure reported by the underlying storage engine.
    #[error("storage engine error: {0}")]
    Engine(#[from] rocksdb::Error),

    /// I/O failure while preparing the store directory at open.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored key carried no namespace delimiter, so it cannot have been
    /// written through the composite-key codec.
    #[error("composite key {0:?} has no namespace delimiter")]
    UndelimitedKey(Vec<u8>),

    /// The store's reader-writer lock was poisoned by a panicked writer.
    #[error("store lock poisoned by a panicked writer")]
    LockPoisoned,
}
