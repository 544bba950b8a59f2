//! Two-dimensional row addressing for list-rendering surfaces.

/// The single section Rowbind binds to.
///
/// Rowbind supports exactly one section: index `i` in the bound item
/// sequence corresponds to row `i` of this section. This is a deliberate
/// constraint, not a default.
pub const LIST_SECTION: usize = 0;

/// Address of a cell on a list-rendering surface: a row within a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Section index
    pub section: usize,
    /// Row index within the section
    pub row: usize,
}

impl CellAddress {
    /// Creates an address from a section and a row.
    #[inline]
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Maps a bare row number into [`LIST_SECTION`].
    ///
    /// Total over all `usize` rows.
    #[inline]
    pub fn from_row(row: usize) -> Self {
        Self {
            section: LIST_SECTION,
            row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_maps_to_section_zero() {
        let address = CellAddress::from_row(5);
        assert_eq!(address.section, 0);
        assert_eq!(address.row, 5);
    }

    #[test]
    fn test_from_row_is_total() {
        for row in [0, 1, 42, usize::MAX] {
            assert_eq!(CellAddress::from_row(row), CellAddress::new(0, row));
        }
    }
}
