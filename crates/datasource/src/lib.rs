//! Rowbind Datasource - A changeset-reconciling data source for list views.
//!
//! This crate binds a live, observable item sequence to a list-rendering
//! surface. Incoming `(items, changes)` events are translated into minimal
//! animated UI updates: when the changeset is consistent with the surface's
//! current row count, the deleted/inserted/updated rows are applied as one
//! atomic batch; otherwise the surface gets a full reload, which is always
//! correct if less smooth.
//!
//! # Core Concepts
//!
//! - `RenderConfig`: cell reuse identifier plus cell factory
//! - `TableDataSource`: stores the item sequence, answers data-source
//!   queries for a single section, reconciles changesets via `apply_changes`
//! - `observe_list`: subscribes a data source to an
//!   [`ObservableList`](rowbind_reactive::ObservableList)
//!
//! # Example
//!
//! ```rust
//! use rowbind_core::CellAddress;
//! use rowbind_datasource::{observe_list, RenderConfig, TableDataSource};
//! use rowbind_reactive::ObservableList;
//! use rowbind_surface::{HeadlessCell, HeadlessList, ListSurface, SectionDataSource};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut list = ObservableList::new(vec!["alpha", "beta"]);
//!
//! // A headless surface that re-queries the list on full reloads.
//! let mut surface = HeadlessList::new();
//! let authoritative = list.items();
//! surface.set_count_source(move || authoritative.borrow().len());
//! let surface = Rc::new(RefCell::new(surface));
//!
//! let config = RenderConfig::with_configurator(
//!     "item",
//!     |cell: &mut HeadlessCell, _address, item: &&str| {
//!         cell.text = item.to_string();
//!     },
//! )
//! .unwrap();
//!
//! let mut data_source = TableDataSource::new(config);
//! data_source.bind(surface.clone());
//! let data_source = Rc::new(RefCell::new(data_source));
//!
//! // Initial event: full reload to two rows.
//! observe_list(&mut list, Rc::clone(&data_source));
//! assert_eq!(surface.borrow().rows_in_section(0), 2);
//!
//! // A single append takes the incremental path.
//! list.push("gamma");
//! assert_eq!(surface.borrow().rows_in_section(0), 3);
//! assert_eq!(surface.borrow().reload_count(), 1);
//!
//! let cell = data_source
//!     .borrow()
//!     .cell_for_row(&mut surface.borrow_mut(), CellAddress::from_row(2));
//! assert_eq!(cell.text, "gamma");
//! ```

#![no_std]

extern crate alloc;

mod config;
mod data_source;

pub use config::{RenderConfig, RenderContext};
pub use data_source::{observe_list, TableDataSource};
