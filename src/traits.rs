//! Object-safe read/write traits over the namespaced store.
//!
//! Splitting the surface lets consumers that only ever read hold a
//! `&dyn StoreReader` and never see the write half.

use crate::error::Result;
use crate::visitor::Visit;

/// Read operations over the namespaced keyspace.
pub trait StoreReader {
    /// Point read. `Ok(None)` means absent, which is distinct from an
    /// empty-but-present value (`Ok(Some(vec![]))`).
    fn get(&self, namespace: &[u8], key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Up to `limit` entries of `namespace` in ascending key order, starting
    /// at `start_key` (inclusive). An empty `start_key` starts at the first
    /// entry of the namespace. Never returns entries of another namespace.
    fn look_forward(&self, namespace: &[u8], start_key: &[u8], limit: usize) -> Result<Vec<Visit>>;

    /// Up to `limit` entries of `namespace` in descending key order, starting
    /// at `start_key` (inclusive). An empty `start_key` starts at the last
    /// entry of the namespace.
    fn look_backward(&self, namespace: &[u8], start_key: &[u8], limit: usize) -> Result<Vec<Visit>>;

    /// The nearest entry strictly before the `(namespace, start_key)` cursor
    /// in global key order. Not namespace-bounded: at the lower edge of a
    /// namespace this is the previous namespace's last entry.
    fn behind(&self, namespace: &[u8], start_key: &[u8]) -> Result<Option<Visit>>;

    /// The very last entry of the whole store, across all namespaces.
    fn last(&self) -> Result<Option<Visit>>;
}

/// Write operations over the namespaced keyspace.
pub trait StoreWriter {
    /// Stores `value` under `(namespace, key)`, overwriting any existing
    /// value.
    ///
    /// # Panics
    ///
    /// Panics if `namespace` contains the reserved delimiter byte; accepting
    /// it would corrupt decoding for every future read in that namespace.
    fn put(&self, namespace: &[u8], key: &[u8], value: &[u8]) -> Result<()>;

    /// Deletes `(namespace, key)` and returns the value that was present, or
    /// `Ok(None)` when nothing was stored there.
    fn remove(&self, namespace: &[u8], key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Relocates the value at the source to the destination in one critical
    /// section. When the source is absent this is a no-op and the
    /// destination is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if either namespace contains the reserved delimiter byte.
    fn move_entry(
        &self,
        from_namespace: &[u8],
        from_key: &[u8],
        to_namespace: &[u8],
        to_key: &[u8],
    ) -> Result<()>;
}
