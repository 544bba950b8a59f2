//! The changeset-reconciling table data source.
//!
//! `TableDataSource` answers the standard data-source queries for a single
//! section and applies each incoming `(items, changes)` event to the bound
//! surface with minimal visual disruption: an incremental batched update
//! when the changeset is consistent with the surface's current row count,
//! a full reload otherwise.

use crate::config::RenderConfig;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use rowbind_core::{AnimationConfig, CellAddress, Changeset, LIST_SECTION};
use rowbind_reactive::{ObservableList, SharedItems, SubscriptionId};
use rowbind_surface::{ListSurface, SectionDataSource};

/// A list data source that reconciles changesets against a bound surface.
///
/// One instance serves one surface for its whole lifetime. Configure it
/// (render config, animation config, header/footer titles), bind a surface,
/// then feed it change events — either directly through
/// [`apply_changes`](Self::apply_changes) or by subscribing it to an
/// [`ObservableList`] with [`observe_list`].
///
/// The data source stores a handle to the item sequence from the first
/// event it ever receives and never reassigns it. Later events are checked
/// against the surface's own row count, not the stored handle, so feeding a
/// different sequence later leaves the stored one in place. With a live
/// shared sequence (the [`ObservableList`] contract) the stored handle
/// always reflects the latest state; the behavior only becomes observable
/// when callers hand in detached snapshots.
pub struct TableDataSource<E, S: ListSurface> {
    items: Option<SharedItems<E>>,
    surface: Option<Rc<RefCell<S>>>,
    config: RenderConfig<E, S>,
    animations: AnimationConfig,
    header_title: Option<String>,
    footer_title: Option<String>,
}

impl<E, S: ListSurface> TableDataSource<E, S> {
    /// Creates a data source with the given render configuration.
    pub fn new(config: RenderConfig<E, S>) -> Self {
        Self {
            items: None,
            surface: None,
            config,
            animations: AnimationConfig::default(),
            header_title: None,
            footer_title: None,
        }
    }

    /// Binds the rendering surface this data source drives.
    pub fn bind(&mut self, surface: Rc<RefCell<S>>) {
        self.surface = Some(surface);
    }

    /// Returns the bound surface, if any.
    pub fn surface(&self) -> Option<Rc<RefCell<S>>> {
        self.surface.clone()
    }

    /// Returns the current animation configuration.
    #[inline]
    pub fn animations(&self) -> AnimationConfig {
        self.animations
    }

    /// Replaces the animation configuration.
    pub fn set_animations(&mut self, animations: AnimationConfig) {
        self.animations = animations;
    }

    /// Toggles the animation master switch.
    ///
    /// When off, every event is applied as a full reload.
    pub fn set_animated(&mut self, animated: bool) {
        self.animations.animated = animated;
    }

    /// Sets the static header title.
    pub fn set_header_title(&mut self, title: Option<String>) {
        self.header_title = title;
    }

    /// Sets the static footer title.
    pub fn set_footer_title(&mut self, title: Option<String>) {
        self.footer_title = title;
    }

    /// Returns the configured reuse identifier.
    #[inline]
    pub fn cell_identifier(&self) -> &str {
        self.config.cell_identifier()
    }

    /// Applies one `(items, changes)` event to the bound surface.
    ///
    /// Precedence, first match wins:
    ///
    /// 1. The first event ever seen stores `items`; later events never
    ///    reassign the stored handle.
    /// 2. Animation disabled: full reload.
    /// 3. No changeset: full reload.
    /// 4. Changeset does not project the surface's current row count onto
    ///    `items.len()`: the delta is stale or out of order, full reload.
    /// 5. Otherwise one atomic batch: delete, insert, reload rows, in that
    ///    order, each with its configured animation style. All three are
    ///    submitted inside the batch scope even when empty, so the surface
    ///    resolves final positions in a single layout pass.
    ///
    /// A full reload is not an error, it is the always-correct fallback; a
    /// visible refresh beats an out-of-bounds incremental update.
    ///
    /// # Panics
    ///
    /// Panics when no surface is bound. Delivering events to an unbound
    /// data source is a wiring bug with no recovery path.
    pub fn apply_changes(&mut self, items: SharedItems<E>, changes: Option<&Changeset>) {
        if self.items.is_none() {
            self.items = Some(Rc::clone(&items));
        }

        let surface = self
            .surface
            .as_ref()
            .expect("a list surface must be bound to the data source before change events are delivered");
        let mut surface = surface.borrow_mut();

        if !self.animations.animated {
            surface.reload_data();
            return;
        }

        let Some(changes) = changes else {
            surface.reload_data();
            return;
        };

        let last_row_count = surface.rows_in_section(LIST_SECTION);
        if !changes.projects(last_row_count, items.borrow().len()) {
            surface.reload_data();
            return;
        }

        let deleted = to_addresses(&changes.deleted);
        let inserted = to_addresses(&changes.inserted);
        let updated = to_addresses(&changes.updated);

        surface.begin_updates();
        surface.delete_rows(&deleted, self.animations.delete);
        surface.insert_rows(&inserted, self.animations.insert);
        surface.reload_rows(&updated, self.animations.update);
        surface.end_updates();
    }
}

impl<E, S: ListSurface> SectionDataSource<S> for TableDataSource<E, S> {
    fn number_of_rows(&self, _section: usize) -> usize {
        self.items
            .as_ref()
            .map(|items| items.borrow().len())
            .unwrap_or(0)
    }

    fn cell_for_row(&self, surface: &mut S, address: CellAddress) -> S::Cell {
        let items = self
            .items
            .as_ref()
            .expect("cell requested before the first change event was delivered");
        let items = items.borrow();
        let item = items.get(address.row).unwrap_or_else(|| {
            panic!("row {} out of range for {} items", address.row, items.len())
        });
        self.config.make_cell(surface, address, item)
    }

    fn header_title(&self, _section: usize) -> Option<&str> {
        self.header_title.as_deref()
    }

    fn footer_title(&self, _section: usize) -> Option<&str> {
        self.footer_title.as_deref()
    }
}

/// Subscribes a shared data source to an observable list.
///
/// Every event the list emits — the synchronous initial one included — is
/// forwarded to [`TableDataSource::apply_changes`]. Returns the subscription
/// ID for later unsubscription.
pub fn observe_list<E, S>(
    list: &mut ObservableList<E>,
    data_source: Rc<RefCell<TableDataSource<E, S>>>,
) -> SubscriptionId
where
    E: 'static,
    S: ListSurface + 'static,
{
    list.subscribe(move |items, changes| {
        data_source.borrow_mut().apply_changes(Rc::clone(items), changes);
    })
}

fn to_addresses(rows: &[usize]) -> Vec<CellAddress> {
    rows.iter().copied().map(CellAddress::from_row).collect()
}
