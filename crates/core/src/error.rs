//! Error types for Rowbind.

use alloc::string::String;
use core::fmt;

/// Result type alias for Rowbind operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for list-binding operations.
///
/// Note the deliberately small surface: stale or absent changesets are not
/// errors (the binding layer falls back to a full reload), and delivering
/// events to an unbound data source is a programmer error that panics rather
/// than returning a value.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// An index was outside the bounds of the item sequence.
    IndexOutOfRange { index: usize, len: usize },
    /// A cell reuse identifier was empty.
    EmptyIdentifier { context: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for {} items", index, len)
            }
            Error::EmptyIdentifier { context } => {
                write!(f, "Empty cell identifier: {}", context)
            }
        }
    }
}

impl Error {
    /// Creates an index-out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates an empty-identifier error.
    pub fn empty_identifier(context: impl Into<String>) -> Self {
        Error::EmptyIdentifier {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::index_out_of_range(7, 3);
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("3"));

        let err = Error::empty_identifier("render config");
        assert!(err.to_string().contains("render config"));
    }

    #[test]
    fn test_error_constructors() {
        match Error::index_out_of_range(1, 0) {
            Error::IndexOutOfRange { index, len } => {
                assert_eq!(index, 1);
                assert_eq!(len, 0);
            }
            _ => panic!("Wrong error type"),
        }
    }
}
