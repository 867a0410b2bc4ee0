//! Copy-on-write transactions.
//!
//! A transaction holds two O(1) snapshots of its source trie: `old`, which is
//! never mutated, and `new`, which receives the transaction's writes. Taking
//! the snapshots raises the strong count of every shared root, so any
//! mutation descent on `new` clones the nodes it touches before writing
//! (see [`crate::node`]) and untouched subtrees stay shared with the source.
//! The source trie itself is never modified and stays valid for reads
//! throughout.

use crate::trie::Trie;
use crate::TrieError;

/// An isolated batch of mutations over a snapshot of a [`Trie`].
///
/// Writes are only visible through the transaction until [`Txn::commit`]
/// returns the new trie; [`Txn::abort`] returns the pre-transaction state
/// instead and discards the writes.
pub struct Txn<V> {
    pub(crate) old: Trie<V>,
    pub(crate) new: Trie<V>,
}

impl<V: Clone> Trie<V> {
    /// Opens a transaction over the current state.
    ///
    /// The source trie is left untouched; it may keep serving reads, and
    /// several transactions may be opened from the same source
    /// independently.
    pub fn txn(&self) -> Txn<V> {
        Txn {
            old: self.clone(),
            new: self.clone(),
        }
    }
}

impl<V> Txn<V> {
    /// Looks up `key` in the transaction's view, including uncommitted
    /// writes.
    pub fn get(&self, key: &[u8]) -> Result<Option<&V>, TrieError> {
        self.new.get(key)
    }

    /// Finalizes the transaction, returning the trie with all of its writes
    /// applied. The pre-transaction state is discarded.
    pub fn commit(self) -> Trie<V> {
        self.new
    }

    /// Discards the transaction's writes and returns the pre-transaction
    /// state.
    pub fn abort(self) -> Trie<V> {
        self.old
    }
}

impl<V: Clone> Txn<V> {
    /// Inserts or updates within the transaction. Same contract as
    /// [`Trie::upsert`].
    pub fn upsert(&mut self, key: &[u8], value: V) -> Result<Option<V>, TrieError> {
        self.new.upsert(key, value)
    }

    /// Removes a key within the transaction. Same contract as
    /// [`Trie::delete`].
    pub fn delete(&mut self, key: &[u8]) -> Result<Option<V>, TrieError> {
        self.new.delete(key)
    }
}
