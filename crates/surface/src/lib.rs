//! Rowbind Surface - The list-rendering surface contract.
//!
//! This crate defines the two traits at the boundary between Rowbind and a
//! platform list widget:
//!
//! - `ListSurface`: what a rendering surface must offer (row counts, full
//!   reload, batched row mutations, a cell reuse pool)
//! - `SectionDataSource`: the queries a surface makes against a data source
//!   (section/row counts, cells, header/footer titles)
//!
//! It also ships `HeadlessList`, an in-memory surface that applies the
//! contract without drawing anything. Tests and benchmarks drive the binding
//! layer against it and inspect the recorded operation log.

#![no_std]

extern crate alloc;

mod headless;
mod list_surface;

pub use headless::{HeadlessCell, HeadlessList, SurfaceOp};
pub use list_surface::{ListSurface, SectionDataSource};
