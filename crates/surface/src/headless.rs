//! In-memory list surface for tests and benchmarks.
//!
//! `HeadlessList` applies the [`ListSurface`] contract without drawing:
//! batch mutations adjust a row count arithmetically, `reload_data`
//! re-queries an optional count source, and every call is recorded in an
//! operation log that tests can assert against.

use crate::list_surface::ListSurface;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use rowbind_core::{CellAddress, RowAnimation};

/// One recorded surface operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceOp {
    /// Full reload
    ReloadData,
    /// Batch scope opened
    BeginUpdates,
    /// Batch scope closed
    EndUpdates,
    /// Rows deleted with the given animation
    DeleteRows(Vec<CellAddress>, RowAnimation),
    /// Rows inserted with the given animation
    InsertRows(Vec<CellAddress>, RowAnimation),
    /// Rows reloaded in place with the given animation
    ReloadRows(Vec<CellAddress>, RowAnimation),
    /// A cell was dequeued for the given identifier
    DequeueCell(String),
}

impl SurfaceOp {
    /// Returns true for the row-level mutations (delete/insert/reload rows).
    pub fn is_row_mutation(&self) -> bool {
        matches!(
            self,
            SurfaceOp::DeleteRows(..) | SurfaceOp::InsertRows(..) | SurfaceOp::ReloadRows(..)
        )
    }
}

/// A recyclable cell produced by [`HeadlessList`].
///
/// The `text` field stands in for whatever content a real cell would render;
/// configurators write into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadlessCell {
    /// Reuse identifier this cell was dequeued for
    pub identifier: String,
    /// Address the cell was most recently dequeued at
    pub address: CellAddress,
    /// Rendered content
    pub text: String,
}

/// An in-memory [`ListSurface`].
///
/// The row count evolves the way a real widget's does: batched deletions and
/// insertions adjust it, and `reload_data` re-queries the count source when
/// one is set (a real widget re-queries its data source). Without a count
/// source, reloads leave the count unchanged.
#[derive(Default)]
pub struct HeadlessList {
    row_count: usize,
    count_source: Option<Box<dyn Fn() -> usize>>,
    pool: HashMap<String, Vec<HeadlessCell>>,
    ops: Vec<SurfaceOp>,
    in_batch: bool,
}

impl HeadlessList {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface already showing `rows` rows.
    pub fn with_rows(rows: usize) -> Self {
        Self {
            row_count: rows,
            ..Self::default()
        }
    }

    /// Sets the closure `reload_data` queries for the authoritative count.
    pub fn set_count_source<F>(&mut self, source: F)
    where
        F: Fn() -> usize + 'static,
    {
        self.count_source = Some(Box::new(source));
    }

    /// Returns the recorded operations.
    #[inline]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drains and returns the recorded operations.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }

    /// Number of full reloads recorded so far.
    pub fn reload_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::ReloadData))
            .count()
    }

    /// Number of row-level mutation calls recorded so far.
    pub fn row_mutation_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_row_mutation()).count()
    }

    /// Returns a cell to the reuse pool keyed by its identifier.
    pub fn recycle(&mut self, cell: HeadlessCell) {
        self.pool.entry(cell.identifier.clone()).or_default().push(cell);
    }

    /// Number of cells currently queued under `identifier`.
    pub fn pooled(&self, identifier: &str) -> usize {
        self.pool.get(identifier).map(Vec::len).unwrap_or(0)
    }
}

impl ListSurface for HeadlessList {
    type Cell = HeadlessCell;

    fn rows_in_section(&self, _section: usize) -> usize {
        self.row_count
    }

    fn reload_data(&mut self) {
        self.ops.push(SurfaceOp::ReloadData);
        if let Some(source) = &self.count_source {
            self.row_count = source();
        }
    }

    fn begin_updates(&mut self) {
        assert!(!self.in_batch, "begin_updates inside an open batch scope");
        self.in_batch = true;
        self.ops.push(SurfaceOp::BeginUpdates);
    }

    fn end_updates(&mut self) {
        assert!(self.in_batch, "end_updates without begin_updates");
        self.in_batch = false;
        self.ops.push(SurfaceOp::EndUpdates);
    }

    fn delete_rows(&mut self, rows: &[CellAddress], animation: RowAnimation) {
        assert!(
            rows.len() <= self.row_count,
            "deleting {} rows from a surface showing {}",
            rows.len(),
            self.row_count
        );
        self.row_count -= rows.len();
        self.ops.push(SurfaceOp::DeleteRows(rows.to_vec(), animation));
    }

    fn insert_rows(&mut self, rows: &[CellAddress], animation: RowAnimation) {
        self.row_count += rows.len();
        self.ops.push(SurfaceOp::InsertRows(rows.to_vec(), animation));
    }

    fn reload_rows(&mut self, rows: &[CellAddress], animation: RowAnimation) {
        self.ops.push(SurfaceOp::ReloadRows(rows.to_vec(), animation));
    }

    fn dequeue_cell(&mut self, identifier: &str, address: CellAddress) -> HeadlessCell {
        self.ops.push(SurfaceOp::DequeueCell(identifier.into()));
        let mut cell = self
            .pool
            .get_mut(identifier)
            .and_then(Vec::pop)
            .unwrap_or_else(|| HeadlessCell {
                identifier: identifier.into(),
                ..HeadlessCell::default()
            });
        cell.address = address;
        cell
    }
}
