//! Rowbind Core - Core types for binding live collections to list views.
//!
//! This crate provides the foundational types shared by the Rowbind crates:
//!
//! - `Changeset`: A three-part delta of row indices (deleted, inserted, updated)
//! - `CellAddress`: Two-dimensional row addressing (row within a section)
//! - `RowAnimation` / `AnimationConfig`: Animation styles for row mutations
//! - `Error`: Error types for binding operations
//!
//! # Example
//!
//! ```rust
//! use rowbind_core::{CellAddress, Changeset};
//!
//! let mut changes = Changeset::new();
//! changes.record_delete(2);
//! changes.record_insert(0);
//!
//! // 10 rows, minus one deletion, plus one insertion
//! assert!(changes.projects(10, 10));
//! assert_eq!(CellAddress::from_row(5), CellAddress::new(0, 5));
//! ```

#![no_std]

extern crate alloc;

mod address;
mod animation;
mod changeset;
mod error;

pub use address::{CellAddress, LIST_SECTION};
pub use animation::{AnimationConfig, RowAnimation};
pub use changeset::Changeset;
pub use error::{Error, Result};
