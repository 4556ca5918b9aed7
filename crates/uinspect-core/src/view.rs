//! View contract consumed by the inspector.
//!
//! The inspector never depends on a concrete widget type directly. Widget
//! libraries implement [`View`] for their types; type-scoped plugins recover
//! the concrete type at runtime through [`View::as_any`].
//!
//! # Example
//!
//! ```rust,ignore
//! use uinspect_core::{View, Visibility};
//!
//! struct Label { text: String }
//!
//! impl View for Label {
//!     fn frame(&self) -> (u32, u32) { (120, 24) }
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//! }
//! ```

use std::any::Any;
use std::fmt;

/// Visibility state of a view, as reported to the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// The view is laid out and drawn.
    #[default]
    Visible,
    /// The view is laid out but not drawn.
    Invisible,
    /// The view is neither laid out nor drawn.
    Gone,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Visible => "visible",
            Visibility::Invisible => "invisible",
            Visibility::Gone => "gone",
        };
        f.write_str(s)
    }
}

/// The minimal contract the inspector needs from any widget.
///
/// Views are type-erased as `&dyn View` while the inspector walks them and
/// downcast to concrete widget types by type-scoped plugins via
/// [`as_any`](View::as_any).
///
/// The inspector only ever *reads* through this trait; it holds no reference
/// to a view beyond a single extraction call.
pub trait View: Any + Send + Sync {
    /// Developer-assigned identifier, if the view has one.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Current layout size in pixels, `(width, height)`.
    fn frame(&self) -> (u32, u32);

    /// Current visibility state.
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    /// Opacity in `0.0..=1.0`.
    fn alpha(&self) -> f32 {
        1.0
    }

    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl View for Probe {
        fn frame(&self) -> (u32, u32) {
            (8, 8)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn downcast_through_as_any() {
        let view: &dyn View = &Probe;
        assert!(view.as_any().downcast_ref::<Probe>().is_some());
        assert!(view.as_any().downcast_ref::<u32>().is_none());
    }

    #[test]
    fn visibility_display() {
        assert_eq!(Visibility::Visible.to_string(), "visible");
        assert_eq!(Visibility::Gone.to_string(), "gone");
    }
}
