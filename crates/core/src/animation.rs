//! Animation styles for row-level list mutations.

/// Animation style applied to a row mutation.
///
/// The concrete visual effect is defined by the rendering surface; surfaces
/// that do not animate may ignore the style entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowAnimation {
    /// Let the surface pick an appropriate style
    #[default]
    Automatic,
    /// Cross-fade the affected rows
    Fade,
    /// Slide in/out from the top edge
    Top,
    /// Slide in/out from the bottom edge
    Bottom,
    /// Slide in/out from the leading edge
    Left,
    /// Slide in/out from the trailing edge
    Right,
    /// Collapse/expand around the row's center
    Middle,
    /// No animation
    None,
}

/// Animation configuration for a bound list view.
///
/// Carries one style per mutation kind plus the `animated` master switch.
/// When `animated` is false the binding layer never attempts incremental
/// updates and always falls back to a full reload. The configuration is read
/// at the moment an update is applied, so it can be changed between events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Style for inserted rows
    pub insert: RowAnimation,
    /// Style for updated rows
    pub update: RowAnimation,
    /// Style for deleted rows
    pub delete: RowAnimation,
    /// Master switch; false forces full reloads
    pub animated: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            insert: RowAnimation::Automatic,
            update: RowAnimation::Automatic,
            delete: RowAnimation::Automatic,
            animated: true,
        }
    }
}

impl AnimationConfig {
    /// Creates the default configuration (all automatic, animated).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration using one style for all mutation kinds.
    pub fn uniform(style: RowAnimation) -> Self {
        Self {
            insert: style,
            update: style,
            delete: style,
            animated: true,
        }
    }

    /// Creates a configuration with animation turned off.
    pub fn disabled() -> Self {
        Self {
            animated: false,
            ..Self::default()
        }
    }
}
