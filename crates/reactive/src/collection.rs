//! Observable item sequence.
//!
//! `ObservableList` owns the shared item sequence and notifies subscribers
//! with `(items, Option<&Changeset>)` events. It mirrors the contract of a
//! live database result set: the same shared sequence is handed to every
//! subscriber, its contents evolve in place, and each notification carries
//! the delta that produced the new state (or `None` when the delta is
//! unknown).

use crate::subscription::{SubscriptionId, SubscriptionManager};
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use rowbind_core::{Changeset, Error, Result};

/// A shared, ordered item sequence.
///
/// Owned by the data layer; the binding layer holds a clone of the `Rc` and
/// treats the contents as read-only.
pub type SharedItems<E> = Rc<RefCell<Vec<E>>>;

/// An observable, ordered collection of items.
///
/// Single-item edits emit exact one-op changesets. Multi-op deltas are the
/// business of an external differ and enter through [`commit`](Self::commit);
/// this type never computes them.
pub struct ObservableList<E> {
    items: SharedItems<E>,
    subscriptions: SubscriptionManager<E>,
}

impl<E> Default for ObservableList<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E> ObservableList<E> {
    /// Creates a list with the given initial items.
    pub fn new(initial: Vec<E>) -> Self {
        Self {
            items: Rc::new(RefCell::new(initial)),
            subscriptions: SubscriptionManager::new(),
        }
    }

    /// Returns a handle to the shared item sequence.
    #[inline]
    pub fn items(&self) -> SharedItems<E> {
        Rc::clone(&self.items)
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Subscribes to change events.
    ///
    /// The initial state is delivered synchronously before this returns,
    /// with `changes = None` (first notification, unknown delta). Subsequent
    /// events are delivered serially, one per edit.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&SharedItems<E>, Option<&Changeset>) + 'static,
    {
        let id = self.subscriptions.subscribe(callback);
        self.subscriptions.notify(id, &self.items, None);
        id
    }

    /// Unsubscribes by ID.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.unsubscribe(id)
    }

    /// Number of active subscriptions.
    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Inserts `item` at `index` and emits an inserted-at changeset.
    pub fn insert(&mut self, index: usize, item: E) -> Result<()> {
        {
            let mut items = self.items.borrow_mut();
            if index > items.len() {
                return Err(Error::index_out_of_range(index, items.len()));
            }
            items.insert(index, item);
        }
        self.notify(Some(&Changeset::inserted_at(index)));
        Ok(())
    }

    /// Appends `item` and emits an inserted-at changeset.
    pub fn push(&mut self, item: E) {
        let index = self.items.borrow().len();
        {
            self.items.borrow_mut().push(item);
        }
        self.notify(Some(&Changeset::inserted_at(index)));
    }

    /// Removes the item at `index` and emits a deleted-at changeset.
    pub fn remove(&mut self, index: usize) -> Result<E> {
        let removed = {
            let mut items = self.items.borrow_mut();
            if index >= items.len() {
                return Err(Error::index_out_of_range(index, items.len()));
            }
            items.remove(index)
        };
        self.notify(Some(&Changeset::deleted_at(index)));
        Ok(removed)
    }

    /// Replaces the item at `index` and emits an updated-at changeset.
    pub fn update(&mut self, index: usize, item: E) -> Result<()> {
        {
            let mut items = self.items.borrow_mut();
            let len = items.len();
            let slot = items
                .get_mut(index)
                .ok_or(Error::index_out_of_range(index, len))?;
            *slot = item;
        }
        self.notify(Some(&Changeset::updated_at(index)));
        Ok(())
    }

    /// Replaces the whole sequence and emits a reload event (`None` delta).
    pub fn replace_all(&mut self, items: Vec<E>) {
        *self.items.borrow_mut() = items;
        self.notify(None);
    }

    /// Installs a new state together with its precomputed changeset.
    ///
    /// `changes` must describe the transition from the previous contents to
    /// `items` under standard list-diff index semantics. The changeset is
    /// forwarded to subscribers untouched; consistency is checked downstream
    /// by the binding layer, which falls back to a full reload on mismatch.
    pub fn commit(&mut self, items: Vec<E>, changes: Option<&Changeset>) {
        *self.items.borrow_mut() = items;
        self.notify(changes);
    }

    fn notify(&self, changes: Option<&Changeset>) {
        self.subscriptions.notify_all(&self.items, changes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// Captures every delivered event as (item snapshot, changeset).
    fn record(
        list: &mut ObservableList<i64>,
    ) -> Rc<RefCell<Vec<(Vec<i64>, Option<Changeset>)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = log.clone();
        list.subscribe(move |items, changes| {
            log_clone
                .borrow_mut()
                .push((items.borrow().clone(), changes.cloned()));
        });
        log
    }

    #[test]
    fn test_subscribe_delivers_initial_event() {
        let mut list = ObservableList::new(vec![1, 2, 3]);
        let log = record(&mut list);

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], (vec![1, 2, 3], None));
    }

    #[test]
    fn test_push_emits_insert_changeset() {
        let mut list = ObservableList::new(vec![1, 2]);
        let log = record(&mut list);

        list.push(3);

        let log = log.borrow();
        assert_eq!(log[1], (vec![1, 2, 3], Some(Changeset::inserted_at(2))));
    }

    #[test]
    fn test_insert_at_index() {
        let mut list = ObservableList::new(vec![1, 3]);
        let log = record(&mut list);

        list.insert(1, 2).unwrap();

        let log = log.borrow();
        assert_eq!(log[1], (vec![1, 2, 3], Some(Changeset::inserted_at(1))));
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut list = ObservableList::new(vec![1]);
        let err = list.insert(5, 9).unwrap_err();
        assert_eq!(err, Error::index_out_of_range(5, 1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_emits_delete_changeset() {
        let mut list = ObservableList::new(vec![1, 2, 3]);
        let log = record(&mut list);

        assert_eq!(list.remove(0).unwrap(), 1);

        let log = log.borrow();
        assert_eq!(log[1], (vec![2, 3], Some(Changeset::deleted_at(0))));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list: ObservableList<i64> = ObservableList::new(vec![]);
        assert_eq!(list.remove(0).unwrap_err(), Error::index_out_of_range(0, 0));
    }

    #[test]
    fn test_update_emits_update_changeset() {
        let mut list = ObservableList::new(vec![1, 2, 3]);
        let log = record(&mut list);

        list.update(1, 20).unwrap();

        let log = log.borrow();
        assert_eq!(log[1], (vec![1, 20, 3], Some(Changeset::updated_at(1))));
    }

    #[test]
    fn test_replace_all_emits_reload() {
        let mut list = ObservableList::new(vec![1]);
        let log = record(&mut list);

        list.replace_all(vec![7, 8, 9]);

        let log = log.borrow();
        assert_eq!(log[1], (vec![7, 8, 9], None));
    }

    #[test]
    fn test_commit_forwards_changeset_untouched() {
        let mut list = ObservableList::new(vec![1, 2, 3]);
        let log = record(&mut list);

        let mut changes = Changeset::new();
        changes.record_delete(0);
        changes.record_insert(2);
        list.commit(vec![2, 3, 4], Some(&changes));

        let log = log.borrow();
        assert_eq!(log[1], (vec![2, 3, 4], Some(changes)));
    }

    #[test]
    fn test_shared_items_stay_live() {
        let mut list = ObservableList::new(vec![1]);
        let handle = list.items();

        list.push(2);
        list.remove(0).unwrap();

        // The handle observes every mutation; no new sequence is allocated.
        assert_eq!(*handle.borrow(), vec![2]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut list = ObservableList::new(vec![1]);
        let log = Rc::new(RefCell::new(0usize));
        let log_clone = log.clone();
        let id = list.subscribe(move |_, _| {
            *log_clone.borrow_mut() += 1;
        });

        assert!(list.unsubscribe(id));
        list.push(2);

        assert_eq!(*log.borrow(), 1); // only the initial event
    }
}
