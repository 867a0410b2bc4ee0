//! # qptrie
//!
//! An ordered map from byte strings to values, backed by a qp-trie
//! (quadbit popcount-indexed trie), with cheap copy-on-write snapshots.
//!
//! Interior nodes test one 4-bit nibble of the key and address their
//! children through a 17-bit popcount bitmap, so lookups touch only the
//! nibble positions where stored keys actually diverge. A "no byte" sentinel
//! bit sorts key ends below every real nibble, which makes in-order
//! traversal yield keys in byte-lexicographic order.
//!
//! ## Features
//!
//! - **Point lookups**: O(key length) [`Trie::get`]
//! - **Ordered iteration**: [`Trie::iter`] yields entries in key order
//! - **Predecessor queries**: [`Trie::get_less_or_equal`]
//! - **Bounded scans**: [`Trie::walk`] with a predicate filter
//! - **Snapshots**: cloning is O(1); [`Trie::txn`] gives isolated
//!   copy-on-write transactions with commit/abort
//!
//! ## Example
//!
//! ```rust
//! use qptrie::Trie;
//!
//! let mut tr: Trie<u64> = Trie::new();
//! tr.upsert(b"user:1001", 1)?;
//! tr.upsert(b"user:1002", 2)?;
//!
//! assert_eq!(tr.get(b"user:1001")?, Some(&1));
//!
//! let mut tx = tr.txn();
//! tx.upsert(b"user:1003", 3)?;
//! let updated = tx.commit();
//!
//! assert_eq!(tr.len(), 2); // the source trie is untouched
//! assert_eq!(updated.len(), 3);
//! # Ok::<(), qptrie::TrieError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod iter;
mod nibble;
mod node;
mod trie;
mod txn;


use std::sync::Arc;

use thiserror::Error;

pub use iter::{Iter, KvPair};
pub use trie::Trie;
pub use txn::Txn;

/// Maximum key length in bytes. Nibble positions are addressed with 16 bits,
/// two per byte.
pub const MAX_KEY_BYTES: usize = (u16::MAX >> 1) as usize;

/// Errors returned by trie operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The key is zero-length.
    #[error("empty key")]
    KeyEmpty,
    /// The key exceeds [`MAX_KEY_BYTES`].
    #[error("max key length is {} bytes", MAX_KEY_BYTES)]
    KeyTooLong,
    /// A structural invariant was violated. This is a bug in the library;
    /// it is raised by panic, never returned.
    #[error("internal invariant violated")]
    Internal,
}

/// Hook run on insert: receives the new value and returns the value to
/// store.
pub type OnInsertFn<V> = Arc<dyn Fn(V) -> V + Send + Sync>;

/// Hook run on update: receives the new value and a reference to the stored
/// one, and returns the value to store.
pub type OnUpdateFn<V> = Arc<dyn Fn(V, &V) -> V + Send + Sync>;

/// Construction options for a [`Trie`], consumed by [`Trie::with_config`].
///
/// Both hooks default to "store the new value unchanged".
///
/// ```rust
/// use qptrie::{Config, Trie};
///
/// // Keep a running sum on repeated upserts of the same key.
/// let mut tr: Trie<u64> = Trie::with_config(Config::new().on_update(|new, old| new + *old));
/// tr.upsert(b"hits", 1)?;
/// tr.upsert(b"hits", 1)?;
/// assert_eq!(tr.get(b"hits")?, Some(&2));
/// # Ok::<(), qptrie::TrieError>(())
/// ```
pub struct Config<V> {
    pub(crate) on_insert: Option<OnInsertFn<V>>,
    pub(crate) on_update: Option<OnUpdateFn<V>>,
}

impl<V> Config<V> {
    /// Creates a configuration with default hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook run when a new key is inserted.
    pub fn on_insert(mut self, f: impl Fn(V) -> V + Send + Sync + 'static) -> Self {
        self.on_insert = Some(Arc::new(f));
        self
    }

    /// Sets the hook run when an existing key's value is replaced.
    pub fn on_update(mut self, f: impl Fn(V, &V) -> V + Send + Sync + 'static) -> Self {
        self.on_update = Some(Arc::new(f));
        self
    }
}

impl<V> Default for Config<V> {
    fn default() -> Self {
        Self {
            on_insert: None,
            on_update: None,
        }
    }
}
