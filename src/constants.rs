/// Reserved byte separating the namespace from the key inside a composite
/// key. A non-printable sentinel so namespaces may contain path-like
/// separators (`person/admin`). Must never appear inside a namespace; see
/// [`check_prefix`](crate::check_prefix).
pub const PREFIX_DELIM: u8 = 0x00;

/// Bookend sentinel for "the very beginning of a namespace". Seeking to
/// `namespace ++ DELIM ++ FIRST_BOOKEND` lands on the first entry at or after
/// the namespace's lower bound.
pub const FIRST_BOOKEND: &[u8] = b"";

/// Bookend sentinel for "the very end of a namespace". A reverse seek to
/// `namespace ++ DELIM ++ LAST_BOOKEND` lands on the last entry whose key
/// sorts at or below it.
pub const LAST_BOOKEND: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF];

/// Default LRU block cache budget handed to the engine, in bytes.
pub const DEFAULT_CACHE_SIZE: usize = 8 * 1024 * 1024;

/// Default bloom filter budget, in bits per key.
pub const DEFAULT_BLOOM_FILTER_BITS: f64 = 10.0;
