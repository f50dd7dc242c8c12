//! Prefix-namespaced view over a flat, lexicographically-ordered key-value
//! store (RocksDB).
//!
//! One physical keyspace is partitioned into caller-chosen namespaces.
//! A `(namespace, key)` pair is encoded into a single composite key so that
//! all entries of a namespace form one contiguous, correctly ordered region
//! in the engine's native key order. Point operations (put/get/remove/move)
//! and bounded directional scans operate on that region without callers ever
//! touching composite keys or iterator lifetimes.
//!
//! # Key Concepts
//!
//! - [`PrefixStore`]: the namespaced façade over the engine handle. Point
//!   operations run under an instance-level reader-writer lock; range scans
//!   acquire a point-in-time snapshot and iterate outside the lock.
//! - [`Visitor`]: bounded cursor-seeded traversal of the engine iterator,
//!   decoding each entry and optionally halting at the namespace boundary.
//! - [`make_key`] / [`unmake_key`]: the reversible, order-preserving
//!   composite-key codec. The reserved delimiter is a NUL byte, so namespaces
//!   may contain printable separators such as `/`.
//!
//! # Example
//!
//! ```no_run
//! use prefix_store::{PrefixStore, StoreConfig};
//! use prefix_store::traits::{StoreReader, StoreWriter};
//! use std::path::Path;
//!
//! let store = PrefixStore::open(Path::new("/tmp/demo-store"), StoreConfig::default())?;
//!
//! store.put(b"person", b"joe", b"engineer")?;
//! store.put(b"animal", b"tiger", b"striped")?;
//!
//! assert_eq!(store.get(b"person", b"joe")?, Some(b"engineer".to_vec()));
//!
//! // Scans never bleed across the namespace boundary.
//! let people = store.look_forward(b"person", b"", 10)?;
//! assert_eq!(people.len(), 1);
//!
//! store.close();
//! # Ok::<(), prefix_store::Error>(())
//! ```

mod constants;
pub use constants::{
    DEFAULT_BLOOM_FILTER_BITS, DEFAULT_CACHE_SIZE, FIRST_BOOKEND, LAST_BOOKEND, PREFIX_DELIM,
};

mod key_codec;
pub use key_codec::{check_prefix, make_key, unmake_key};

mod visitor;
pub use visitor::{Direction, Visit, VisitOutcome, Visitor};

mod config;
pub use config::StoreConfig;

mod error;
pub use error::{Error, Result};

mod store;
pub use store::PrefixStore;

pub mod traits;
