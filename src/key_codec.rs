use crate::constants::PREFIX_DELIM;

/// Encodes a `(namespace, key)` pair into the single composite key stored in
/// the engine: `namespace ++ PREFIX_DELIM ++ key`.
///
/// Because the delimiter sorts below every byte a valid namespace may
/// contain, composite keys order first by namespace and then by key, and no
/// namespace's region can interleave with another's — even when one
/// namespace is a textual prefix of the other.
///
/// Total for all well-formed input. Callers are responsible for validating
/// the namespace with [`check_prefix`] first.
#[inline]
pub fn make_key(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    let mut composite = Vec::with_capacity(namespace.len() + 1 + key.len());
    composite.extend_from_slice(namespace);
    composite.push(PREFIX_DELIM);
    composite.extend_from_slice(key);
    composite
}

/// Splits a composite key back into `(namespace, key)` at the *first*
/// delimiter occurrence.
///
/// Keys may legitimately contain the delimiter; only the first occurrence is
/// the split point, so such keys survive the round trip verbatim. Returns
/// `None` when the delimiter is absent entirely, which means the bytes were
/// not produced by [`make_key`].
#[inline]
pub fn unmake_key(composite: &[u8]) -> Option<(&[u8], &[u8])> {
    let split = composite.iter().position(|&b| b == PREFIX_DELIM)?;
    Some((&composite[..split], &composite[split + 1..]))
}

/// Returns `true` when `namespace` is safe to encode: it must not contain
/// the reserved delimiter byte anywhere. A namespace that fails this check
/// would corrupt the `(namespace, key)` decomposition of every later read,
/// so write paths reject it fail-fast.
#[inline]
pub fn check_prefix(namespace: &[u8]) -> bool {
    !namespace.contains(&PREFIX_DELIM)
}
