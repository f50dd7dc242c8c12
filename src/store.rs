use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rocksdb::{
    BlockBasedOptions, Cache, DB, DBRawIterator, Options, ReadOptions, Snapshot, WriteOptions,
};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::key_codec::{check_prefix, make_key, unmake_key};
use crate::traits::{StoreReader, StoreWriter};
use crate::visitor::{Visit, VisitOutcome, Visitor};

/// Upper bound on the result preallocation for look_* calls, so an
/// effectively-unbounded limit does not reserve unbounded memory.
const LOOK_PREALLOC_CAP: usize = 1024;

/// Namespaced façade over one engine handle.
///
/// Point operations (put/get/remove/move) encode through the composite-key
/// codec and run under the store's own reader-writer lock: writers hold the
/// write half for their whole read-modify-write critical section, point
/// reads share the read half. Range operations acquire a point-in-time
/// snapshot under a momentary read lock and then iterate entirely outside
/// the lock, so long scans never block concurrent point writes and still
/// observe a single consistent view.
///
/// Every store instance owns its lock and engine handle; any number of
/// independently-configured stores can coexist in one process. Dropping the
/// store (or calling [`close`](PrefixStore::close)) releases the engine
/// handle and the default read/write options exactly once.
pub struct PrefixStore {
    db: DB,
    lock: RwLock<()>,
    read_opts: ReadOptions,
    write_opts: WriteOptions,
    path: PathBuf,
}

impl PrefixStore {
    /// Opens (or creates) a store at `path`, creating parent directories as
    /// needed.
    pub fn open(path: &Path, config: StoreConfig) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let cache = Cache::new_lru_cache(config.cache_size);
        let mut block_opts = BlockBasedOptions::default();
        block_opts.set_block_cache(&cache);
        block_opts.set_bloom_filter(config.bloom_filter_bits, false);

        let mut opts = Options::default();
        opts.create_if_missing(config.create_if_missing);
        opts.set_block_based_table_factory(&block_opts);

        let db = DB::open(&opts, path)?;

        let read_opts = ReadOptions::default();
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(config.sync_writes);

        info!(
            path = %path.display(),
            cache_size = config.cache_size,
            sync_writes = config.sync_writes,
            "opened prefix store"
        );

        Ok(Self {
            db,
            lock: RwLock::new(()),
            read_opts,
            write_opts,
            path: path.to_path_buf(),
        })
    }

    /// Releases the engine handle and the default read/write options.
    ///
    /// Equivalent to dropping the store; provided so callers can make the
    /// release explicit.
    pub fn close(self) {
        info!(path = %self.path.display(), "closing prefix store");
    }

    /// Visits up to `limit` entries of `namespace` in ascending key order,
    /// starting at `start_key` (inclusive; empty means the start of the
    /// namespace), invoking `visit_fn` for each. The callback can end the
    /// scan early by returning [`VisitOutcome::Stop`].
    ///
    /// The scan runs against a snapshot taken when the call starts; writes
    /// that land after that, including writes made from inside the callback,
    /// are not observed.
    pub fn scan_forward<F>(
        &self,
        namespace: &[u8],
        start_key: &[u8],
        limit: usize,
        visit_fn: F,
    ) -> Result<()>
    where
        F: FnMut(&[u8], &[u8], &[u8]) -> Result<VisitOutcome>,
    {
        let snapshot = self.read_snapshot()?;
        let mut iter = snapshot.raw_iterator();
        let mut visitor = Visitor::forward(namespace, &mut iter, visit_fn);
        if !start_key.is_empty() {
            visitor.set_cursor(namespace, start_key);
        }
        visitor.visit(limit, true)
    }

    /// Descending counterpart of [`scan_forward`](PrefixStore::scan_forward).
    /// An empty `start_key` starts at the end of the namespace.
    pub fn scan_backward<F>(
        &self,
        namespace: &[u8],
        start_key: &[u8],
        limit: usize,
        visit_fn: F,
    ) -> Result<()>
    where
        F: FnMut(&[u8], &[u8], &[u8]) -> Result<VisitOutcome>,
    {
        let snapshot = self.read_snapshot()?;
        let mut iter = snapshot.raw_iterator();
        let mut visitor = Visitor::backward(namespace, &mut iter, visit_fn);
        if !start_key.is_empty() {
            visitor.set_cursor(namespace, start_key);
        }
        visitor.visit(limit, true)
    }

    /// Acquires a point-in-time snapshot. Only this acquisition is
    /// synchronized with writers; consuming the snapshot is not.
    fn read_snapshot(&self) -> Result<Snapshot<'_>> {
        let _guard = self.read_lock()?;
        Ok(self.db.snapshot())
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, ()>> {
        self.lock.read().map_err(|_| Error::LockPoisoned)
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, ()>> {
        self.lock.write().map_err(|_| Error::LockPoisoned)
    }

    /// Read-then-delete on a composite key. Must be called with the write
    /// lock held. A delete failure after the value was already read is
    /// recorded but not escalated; the caller still receives the value.
    fn remove_composite(&self, composite: &[u8]) -> Result<Option<Vec<u8>>> {
        let prior = self.db.get_opt(composite, &self.read_opts)?;
        if let Err(e) = self.db.delete_opt(composite, &self.write_opts) {
            warn!(
                composite = ?composite,
                error = %e,
                "delete failed after value was read; not escalated"
            );
        }
        Ok(prior)
    }

    /// Decodes the iterator's current entry into a [`Visit`]. `None` when
    /// the iterator is not positioned on an entry.
    fn visit_at(iter: &DBRawIterator<'_>) -> Result<Option<Visit>> {
        let (Some(composite), Some(value)) = (iter.key(), iter.value()) else {
            return Ok(None);
        };
        let (namespace, key) =
            unmake_key(composite).ok_or_else(|| Error::UndelimitedKey(composite.to_vec()))?;
        Ok(Some(Visit::new(namespace, key, value)))
    }
}

impl StoreReader for PrefixStore {
    fn get(&self, namespace: &[u8], key: &[u8]) -> Result<Option<Vec<u8>>> {
        let _guard = self.read_lock()?;
        let value = self.db.get_opt(make_key(namespace, key), &self.read_opts)?;
        Ok(value)
    }

    fn look_forward(&self, namespace: &[u8], start_key: &[u8], limit: usize) -> Result<Vec<Visit>> {
        let mut visits = Vec::with_capacity(limit.min(LOOK_PREALLOC_CAP));
        self.scan_forward(namespace, start_key, limit, |namespace, key, value| {
            visits.push(Visit::new(namespace, key, value));
            Ok(VisitOutcome::Continue)
        })?;
        Ok(visits)
    }

    fn look_backward(&self, namespace: &[u8], start_key: &[u8], limit: usize) -> Result<Vec<Visit>> {
        let mut visits = Vec::with_capacity(limit.min(LOOK_PREALLOC_CAP));
        self.scan_backward(namespace, start_key, limit, |namespace, key, value| {
            visits.push(Visit::new(namespace, key, value));
            Ok(VisitOutcome::Continue)
        })?;
        Ok(visits)
    }

    fn behind(&self, namespace: &[u8], start_key: &[u8]) -> Result<Option<Visit>> {
        let snapshot = self.read_snapshot()?;
        let mut iter = snapshot.raw_iterator();

        iter.seek(make_key(namespace, start_key));
        if iter.valid() {
            iter.prev();
        } else {
            // Cursor is past the end of the keyspace; the nearest prior
            // entry is the last one overall.
            iter.status()?;
            iter.seek_to_last();
        }

        if !iter.valid() {
            iter.status()?;
            return Ok(None);
        }
        Self::visit_at(&iter)
    }

    fn last(&self) -> Result<Option<Visit>> {
        let snapshot = self.read_snapshot()?;
        let mut iter = snapshot.raw_iterator();

        iter.seek_to_last();
        if !iter.valid() {
            iter.status()?;
            return Ok(None);
        }
        Self::visit_at(&iter)
    }
}

impl StoreWriter for PrefixStore {
    fn put(&self, namespace: &[u8], key: &[u8], value: &[u8]) -> Result<()> {
        assert!(
            check_prefix(namespace),
            "namespace {namespace:?} contains the reserved delimiter byte"
        );
        let _guard = self.write_lock()?;
        self.db
            .put_opt(make_key(namespace, key), value, &self.write_opts)?;
        Ok(())
    }

    fn remove(&self, namespace: &[u8], key: &[u8]) -> Result<Option<Vec<u8>>> {
        let _guard = self.write_lock()?;
        self.remove_composite(&make_key(namespace, key))
    }

    fn move_entry(
        &self,
        from_namespace: &[u8],
        from_key: &[u8],
        to_namespace: &[u8],
        to_key: &[u8],
    ) -> Result<()> {
        assert!(
            check_prefix(from_namespace),
            "namespace {from_namespace:?} contains the reserved delimiter byte"
        );
        assert!(
            check_prefix(to_namespace),
            "namespace {to_namespace:?} contains the reserved delimiter byte"
        );

        let _guard = self.write_lock()?;
        let from = make_key(from_namespace, from_key);
        match self.remove_composite(&from)? {
            Some(value) => {
                let to = make_key(to_namespace, to_key);
                self.db.put_opt(to, value, &self.write_opts)?;
                Ok(())
            }
            None => {
                debug!(
                    from_namespace = ?from_namespace,
                    from_key = ?from_key,
                    "move of absent entry is a no-op"
                );
                Ok(())
            }
        }
    }
}
