//! Rowbind Reactive - Observable collections delivering changeset events.
//!
//! This crate is the subscription bus between a data layer and the binding
//! layer. An `ObservableList` owns a shared, ordered item sequence and
//! notifies subscribers with `(items, Option<&Changeset>)` pairs:
//!
//! - the initial notification and wholesale replacements carry `None`
//!   ("unknown delta — reload everything")
//! - single-item edits carry an exact one-op changeset
//! - precomputed multi-op deltas from an external differ are forwarded
//!   through [`ObservableList::commit`] untouched
//!
//! Delivery is synchronous and serial on the caller's thread; events never
//! overlap.
//!
//! # Example
//!
//! ```rust
//! use rowbind_core::Changeset;
//! use rowbind_reactive::ObservableList;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut list = ObservableList::new(vec!["a", "b"]);
//!
//! let deltas = Rc::new(RefCell::new(Vec::new()));
//! let log = deltas.clone();
//! list.subscribe(move |_items, changes| {
//!     log.borrow_mut().push(changes.cloned());
//! });
//!
//! list.push("c");
//!
//! // Initial delivery carries no changeset; the append carries an exact one.
//! assert_eq!(*deltas.borrow(), [None, Some(Changeset::inserted_at(2))]);
//! ```

#![no_std]

extern crate alloc;

mod collection;
mod subscription;

pub use collection::{ObservableList, SharedItems};
pub use subscription::{ChangeCallback, Subscription, SubscriptionId, SubscriptionManager};
