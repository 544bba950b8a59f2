//! Subscription management for observable collections.
//!
//! This module provides subscription IDs and a manager for tracking active
//! subscriptions to an observable item sequence.

use crate::collection::SharedItems;
use alloc::boxed::Box;
use alloc::vec::Vec;
use hashbrown::HashMap;
use rowbind_core::Changeset;

/// Unique identifier for a subscription.
pub type SubscriptionId = u64;

/// Callback type for change notifications.
///
/// Receives the shared item sequence and the changeset that produced it;
/// `None` means the delta is unknown and the whole view must be rebuilt.
pub type ChangeCallback<E> = Box<dyn Fn(&SharedItems<E>, Option<&Changeset>)>;

/// A subscription to collection changes.
pub struct Subscription<E> {
    /// Unique identifier
    id: SubscriptionId,
    /// Callback to invoke on changes
    callback: ChangeCallback<E>,
    /// Whether this subscription is active
    active: bool,
}

impl<E> Subscription<E> {
    /// Creates a new subscription.
    pub fn new<F>(id: SubscriptionId, callback: F) -> Self
    where
        F: Fn(&SharedItems<E>, Option<&Changeset>) + 'static,
    {
        Self {
            id,
            callback: Box::new(callback),
            active: true,
        }
    }

    /// Returns the subscription ID.
    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns whether this subscription is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivates this subscription.
    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Notifies this subscription of a change event.
    pub fn notify(&self, items: &SharedItems<E>, changes: Option<&Changeset>) {
        if self.active {
            (self.callback)(items, changes);
        }
    }
}

/// Manages subscriptions for an observable collection.
pub struct SubscriptionManager<E> {
    /// Active subscriptions
    subscriptions: HashMap<SubscriptionId, Subscription<E>>,
    /// Next subscription ID to assign
    next_id: SubscriptionId,
}

impl<E> Default for SubscriptionManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SubscriptionManager<E> {
    /// Creates a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: HashMap::new(),
            next_id: 1,
        }
    }

    /// Subscribes to changes with the given callback.
    ///
    /// Returns the subscription ID that can be used to unsubscribe.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&SharedItems<E>, Option<&Changeset>) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        let subscription = Subscription::new(id, callback);
        self.subscriptions.insert(id, subscription);

        id
    }

    /// Unsubscribes by ID.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    /// Notifies a specific subscription of a change event.
    pub fn notify(&self, id: SubscriptionId, items: &SharedItems<E>, changes: Option<&Changeset>) {
        if let Some(sub) = self.subscriptions.get(&id) {
            sub.notify(items, changes);
        }
    }

    /// Notifies all active subscriptions of a change event.
    pub fn notify_all(&self, items: &SharedItems<E>, changes: Option<&Changeset>) {
        for sub in self.subscriptions.values() {
            sub.notify(items, changes);
        }
    }

    /// Returns the number of subscriptions.
    #[inline]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns true if there are no subscriptions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Returns all subscription IDs.
    pub fn subscription_ids(&self) -> Vec<SubscriptionId> {
        self.subscriptions.keys().copied().collect()
    }

    /// Clears all subscriptions.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}
