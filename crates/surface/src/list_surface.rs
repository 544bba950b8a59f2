//! Traits at the boundary between the binding layer and a list widget.

use rowbind_core::{CellAddress, RowAnimation};

/// A stateful list-rendering surface capable of batched row updates.
///
/// The surface owns the visual state: it reports how many rows it currently
/// shows, mutates rows inside a batch scope, and hands out reusable cells
/// keyed by an identifier. Implementations are expected to be driven from a
/// single thread; delivery of events is serial by contract.
///
/// Row mutations between [`begin_updates`](Self::begin_updates) and
/// [`end_updates`](Self::end_updates) form one atomic layout pass: the
/// surface resolves final row positions once, at the end of the scope, so
/// the standard delete-then-insert-then-reload submission order yields a
/// consistent result.
pub trait ListSurface {
    /// The rendered cell type handed back from the factory.
    type Cell;

    /// Number of rows currently shown in `section`.
    fn rows_in_section(&self, section: usize) -> usize;

    /// Discards all visual state and re-renders from the data source.
    ///
    /// Always correct, never incremental. The binding layer falls back to
    /// this whenever a changeset cannot be trusted.
    fn reload_data(&mut self);

    /// Opens a batch scope for row mutations.
    fn begin_updates(&mut self);

    /// Closes the current batch scope, committing one atomic layout pass.
    fn end_updates(&mut self);

    /// Deletes the rows at the given pre-change addresses.
    fn delete_rows(&mut self, rows: &[CellAddress], animation: RowAnimation);

    /// Inserts rows at the given post-change addresses.
    fn insert_rows(&mut self, rows: &[CellAddress], animation: RowAnimation);

    /// Re-renders the rows at the given addresses in place.
    fn reload_rows(&mut self, rows: &[CellAddress], animation: RowAnimation);

    /// Acquires a cell from the reuse pool, or a fresh one if none is queued.
    fn dequeue_cell(&mut self, identifier: &str, address: CellAddress) -> Self::Cell;
}

/// The queries a list surface makes against its bound data source.
///
/// Rowbind data sources answer for exactly one section; see
/// [`rowbind_core::LIST_SECTION`].
pub trait SectionDataSource<S: ListSurface> {
    /// Number of sections. Always 1 for Rowbind data sources.
    fn number_of_sections(&self) -> usize {
        1
    }

    /// Number of rows in `section`.
    fn number_of_rows(&self, section: usize) -> usize;

    /// Renders the cell at `address`, dequeuing from `surface` as needed.
    ///
    /// # Panics
    ///
    /// Implementations panic when no item sequence has been stored yet or
    /// when `address.row` is out of range. Both indicate a mis-wired system.
    fn cell_for_row(&self, surface: &mut S, address: CellAddress) -> S::Cell;

    /// Static header title for `section`, if any.
    fn header_title(&self, _section: usize) -> Option<&str> {
        None
    }

    /// Static footer title for `section`, if any.
    fn footer_title(&self, _section: usize) -> Option<&str> {
        None
    }
}
