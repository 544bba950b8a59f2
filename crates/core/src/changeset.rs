//! Changeset of row indices describing how an ordered collection changed.
//!
//! A Changeset carries three ordered index lists: `deleted`, `inserted` and
//! `updated`. Deleted and updated indices reference positions before the
//! change, inserted indices reference positions after it (standard list-diff
//! semantics). Changesets are computed by a collaborator (a differ or a
//! database notification); this crate only consumes them.

use alloc::vec;
use alloc::vec::Vec;

/// A set of row-index changes to an ordered collection.
///
/// The binding layer uses a changeset to decide whether an incremental
/// batched update of the list view is safe, via [`Changeset::projects`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Changeset {
    /// Pre-change indices of deleted rows
    pub deleted: Vec<usize>,
    /// Post-change indices of inserted rows
    pub inserted: Vec<usize>,
    /// Pre-change indices of updated rows
    pub updated: Vec<usize>,
}

impl Changeset {
    /// Creates a new empty changeset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a changeset describing a single insertion.
    pub fn inserted_at(index: usize) -> Self {
        Self {
            deleted: Vec::new(),
            inserted: vec![index],
            updated: Vec::new(),
        }
    }

    /// Creates a changeset describing a single deletion.
    pub fn deleted_at(index: usize) -> Self {
        Self {
            deleted: vec![index],
            inserted: Vec::new(),
            updated: Vec::new(),
        }
    }

    /// Creates a changeset describing a single in-place update.
    pub fn updated_at(index: usize) -> Self {
        Self {
            deleted: Vec::new(),
            inserted: Vec::new(),
            updated: vec![index],
        }
    }

    /// Returns true if there are no changes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.inserted.is_empty() && self.updated.is_empty()
    }

    /// Returns the total number of recorded changes.
    #[inline]
    pub fn len(&self) -> usize {
        self.deleted.len() + self.inserted.len() + self.updated.len()
    }

    /// Records a deletion at a pre-change index.
    #[inline]
    pub fn record_delete(&mut self, index: usize) {
        self.deleted.push(index);
    }

    /// Records an insertion at a post-change index.
    #[inline]
    pub fn record_insert(&mut self, index: usize) {
        self.inserted.push(index);
    }

    /// Records an update at a pre-change index.
    #[inline]
    pub fn record_update(&mut self, index: usize) {
        self.updated.push(index);
    }

    /// Checks whether this changeset projects `before` rows onto `after` rows.
    ///
    /// The projection holds when `after == before + inserted - deleted`,
    /// computed with checked arithmetic so that deleting more rows than exist
    /// counts as a mismatch rather than wrapping. A changeset that fails this
    /// check is stale or out of order and must not be applied incrementally.
    pub fn projects(&self, before: usize, after: usize) -> bool {
        (before + self.inserted.len())
            .checked_sub(self.deleted.len())
            .map(|projected| projected == after)
            .unwrap_or(false)
    }

    /// Clears all recorded changes.
    pub fn clear(&mut self) {
        self.deleted.clear();
        self.inserted.clear();
        self.updated.clear();
    }
}
