use rocksdb::DBRawIterator;

use crate::constants::{FIRST_BOOKEND, LAST_BOOKEND};
use crate::error::{Error, Result};
use crate::key_codec::{make_key, unmake_key};

/// One decoded entry observed during a scan: an owned `(namespace, key,
/// value)` snapshot of the engine's current position. Ephemeral; produced
/// only while a range query drains its iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub namespace: Vec<u8>,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Visit {
    pub(crate) fn new(namespace: &[u8], key: &[u8], value: &[u8]) -> Self {
        Self {
            namespace: namespace.to_vec(),
            key: key.to_vec(),
            value: value.to_vec(),
        }
    }
}

/// What a visit callback wants to happen next.
///
/// A deliberate early stop is an outcome, not an error: `Stop` ends the scan
/// successfully with whatever was already produced, while a genuine failure
/// is returned through the callback's `Err` channel and propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Keep scanning.
    Continue,
    /// End the scan successfully without visiting further entries.
    Stop,
}

/// Traversal direction. Picks both the seek primitive (forward seeks to the
/// first entry at or after the cursor, backward to the last entry at or
/// before it) and the advance primitive (`next` vs `prev`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Bounded, directional traversal over a borrowed engine iterator.
///
/// The visitor does not own the iterator or its snapshot; the caller is
/// responsible for their lifecycle and the borrow checker guarantees the
/// visitor cannot outlive either. Each visited entry is decoded through the
/// composite-key codec and handed to the callback as borrowed slices.
pub struct Visitor<'i, 'd, F> {
    iter: &'i mut DBRawIterator<'d>,
    direction: Direction,
    cursor: Vec<u8>,
    visit_fn: F,
}

impl<'i, 'd, F> Visitor<'i, 'd, F>
where
    F: FnMut(&[u8], &[u8], &[u8]) -> Result<VisitOutcome>,
{
    /// Ascending visitor seeded at the very beginning of `namespace`.
    pub fn forward(namespace: &[u8], iter: &'i mut DBRawIterator<'d>, visit_fn: F) -> Self {
        Self {
            iter,
            direction: Direction::Forward,
            cursor: make_key(namespace, FIRST_BOOKEND),
            visit_fn,
        }
    }

    /// Descending visitor seeded at the very end of `namespace`.
    pub fn backward(namespace: &[u8], iter: &'i mut DBRawIterator<'d>, visit_fn: F) -> Self {
        Self {
            iter,
            direction: Direction::Backward,
            cursor: make_key(namespace, LAST_BOOKEND),
            visit_fn,
        }
    }

    /// Repositions the cursor to `(namespace, start_key)`, replacing the
    /// bookend the constructor seeded.
    pub fn set_cursor(&mut self, namespace: &[u8], start_key: &[u8]) {
        self.cursor = make_key(namespace, start_key);
    }

    /// Seeks the iterator to the cursor and visits up to `limit` entries in
    /// the visitor's direction.
    ///
    /// With `strict` set, the scan halts (without consuming the entry) the
    /// moment a decoded namespace differs from the cursor's namespace, which
    /// keeps a namespace scan from bleeding into the next region once its
    /// own entries are exhausted.
    ///
    /// A `limit` of zero and an immediately-invalid iterator both yield zero
    /// visits and no error. Any error reported by the iterator itself is
    /// surfaced after the loop, even when the limit was reached first.
    pub fn visit(&mut self, mut limit: usize, strict: bool) -> Result<()> {
        match self.direction {
            Direction::Forward => self.iter.seek(&self.cursor),
            Direction::Backward => self.iter.seek_for_prev(&self.cursor),
        }

        // Cursor keys are always produced by make_key, so the boundary
        // namespace is decodable whenever strict mode asks for it.
        let boundary = if strict {
            unmake_key(&self.cursor).map(|(namespace, _)| namespace.to_vec())
        } else {
            None
        };

        while self.iter.valid() && limit > 0 {
            limit -= 1;

            let (Some(composite), Some(value)) = (self.iter.key(), self.iter.value()) else {
                break; // valid() guarantees both are present
            };
            let (namespace, key) = unmake_key(composite)
                .ok_or_else(|| Error::UndelimitedKey(composite.to_vec()))?;

            if let Some(boundary) = &boundary {
                if namespace != boundary.as_slice() {
                    break;
                }
            }

            match (self.visit_fn)(namespace, key, value)? {
                VisitOutcome::Continue => {}
                VisitOutcome::Stop => return Ok(()),
            }

            match self.direction {
                Direction::Forward => self.iter.next(),
                Direction::Backward => self.iter.prev(),
            }
        }

        self.iter.status().map_err(Error::from)
    }
}
