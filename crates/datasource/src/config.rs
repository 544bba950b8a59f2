//! Render configuration: cell identifier and cell factory.

use alloc::boxed::Box;
use alloc::string::String;
use rowbind_core::{CellAddress, Error, Result};
use rowbind_surface::ListSurface;

/// Configuration handed to a cell factory alongside the surface and item.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    /// The reuse identifier configured for this data source
    pub cell_identifier: &'a str,
}

/// Immutable cell-rendering configuration for one data source.
///
/// Pairs a stable reuse identifier with a factory that produces a rendered
/// cell for `(context, surface, address, item)`. Two construction forms
/// exist:
///
/// - [`new`](Self::new) takes a raw factory and leaves dequeuing to it
/// - [`with_configurator`](Self::with_configurator) composes a reuse-pool
///   dequeue with a per-cell configurator closure
///
/// The second form is sugar over the first; both produce identical runtime
/// behavior.
pub struct RenderConfig<E, S: ListSurface> {
    cell_identifier: String,
    factory: Box<dyn Fn(&RenderContext<'_>, &mut S, CellAddress, &E) -> S::Cell>,
}

impl<E, S: ListSurface> core::fmt::Debug for RenderConfig<E, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderConfig")
            .field("cell_identifier", &self.cell_identifier)
            .finish_non_exhaustive()
    }
}

impl<E, S: ListSurface> RenderConfig<E, S> {
    /// Creates a configuration from a raw cell factory.
    ///
    /// Returns [`Error::EmptyIdentifier`] when `cell_identifier` is empty;
    /// an empty key cannot address a reuse pool.
    pub fn new<F>(cell_identifier: impl Into<String>, factory: F) -> Result<Self>
    where
        F: Fn(&RenderContext<'_>, &mut S, CellAddress, &E) -> S::Cell + 'static,
    {
        let cell_identifier = cell_identifier.into();
        if cell_identifier.is_empty() {
            return Err(Error::empty_identifier("render config"));
        }
        Ok(Self {
            cell_identifier,
            factory: Box::new(factory),
        })
    }

    /// Creates a configuration that dequeues a cell and configures it.
    ///
    /// The composed factory dequeues from the surface's reuse pool under
    /// `cell_identifier`, then runs `configure` on the cell before returning
    /// it.
    pub fn with_configurator<F>(cell_identifier: impl Into<String>, configure: F) -> Result<Self>
    where
        F: Fn(&mut S::Cell, CellAddress, &E) + 'static,
    {
        Self::new(cell_identifier, move |context, surface, address, item| {
            let mut cell = surface.dequeue_cell(context.cell_identifier, address);
            configure(&mut cell, address, item);
            cell
        })
    }

    /// Returns the configured reuse identifier.
    #[inline]
    pub fn cell_identifier(&self) -> &str {
        &self.cell_identifier
    }

    /// Runs the factory for one cell.
    pub(crate) fn make_cell(&self, surface: &mut S, address: CellAddress, item: &E) -> S::Cell {
        let context = RenderContext {
            cell_identifier: &self.cell_identifier,
        };
        (self.factory)(&context, surface, address, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use rowbind_surface::{HeadlessCell, HeadlessList};

    #[test]
    fn test_empty_identifier_rejected() {
        let result: Result<RenderConfig<i64, HeadlessList>> =
            RenderConfig::with_configurator("", |_, _, _| {});
        assert_eq!(
            result.unwrap_err(),
            Error::empty_identifier("render config")
        );
    }

    #[test]
    fn test_raw_factory() {
        let config: RenderConfig<i64, HeadlessList> =
            RenderConfig::new("item", |context, _surface, address, item: &i64| HeadlessCell {
                identifier: context.cell_identifier.to_string(),
                address,
                text: item.to_string(),
            })
            .unwrap();

        assert_eq!(config.cell_identifier(), "item");

        let mut surface = HeadlessList::new();
        let cell = config.make_cell(&mut surface, CellAddress::from_row(4), &42);
        assert_eq!(cell.identifier, "item");
        assert_eq!(cell.address, CellAddress::from_row(4));
        assert_eq!(cell.text, "42");
        // The raw factory did not touch the reuse pool.
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_configurator_dequeues_then_configures() {
        let config: RenderConfig<i64, HeadlessList> =
            RenderConfig::with_configurator("item", |cell: &mut HeadlessCell, _address, item: &i64| {
                cell.text = item.to_string();
            })
            .unwrap();

        let mut surface = HeadlessList::new();
        let cell = config.make_cell(&mut surface, CellAddress::from_row(1), &7);

        assert_eq!(cell.identifier, "item");
        assert_eq!(cell.text, "7");
        assert_eq!(
            surface.ops(),
            &[rowbind_surface::SurfaceOp::DequeueCell("item".to_string())]
        );
    }
}
