use crate::constants::{DEFAULT_BLOOM_FILTER_BITS, DEFAULT_CACHE_SIZE};

/// Engine tuning knobs recognized when opening a [`PrefixStore`].
///
/// These map directly onto the options the underlying engine recognizes:
/// an LRU block cache budget, a bloom filter bit budget, create-if-missing,
/// and fsync-on-write durability for the store's default write options.
///
/// [`PrefixStore`]: crate::PrefixStore
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// LRU block cache capacity, in bytes.
    pub cache_size: usize,
    /// Bloom filter budget, in bits per key.
    pub bloom_filter_bits: f64,
    /// Create the database if it does not exist yet.
    pub create_if_missing: bool,
    /// Fsync every write before acknowledging it.
    pub sync_writes: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            bloom_filter_bits: DEFAULT_BLOOM_FILTER_BITS,
            create_if_missing: true,
            sync_writes: false,
        }
    }
}
