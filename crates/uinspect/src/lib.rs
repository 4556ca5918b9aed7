//! # uinspect
//!
//! A debugging-time view-property inspector: given a live widget, produce
//! an ordered, human-readable sheet of its presentation state.
//!
//! This umbrella crate re-exports the framework ([`uinspect_core`]) and the
//! bundled rolling-text plugin ([`uinspect_rollingtext`]).
//!
//! ## Quick start
//!
//! ```rust
//! use uinspect::prelude::*;
//! use uinspect::rollingtext_plugin::RollingTextInspectService;
//!
//! let inspector = Inspector::new();
//! inspector.load(&RollingTextInspectService, serde_json::Value::Null);
//! ```

pub use uinspect_core;
pub use uinspect_rollingtext as rollingtext_plugin;

pub use uinspect_core::{
    Inspector, InspectorPluginService, InspectorPlugins, PluginContext, PluginError, PluginResult,
    PropertiesParser, PropertySheet, PropertyValue, View, ViewPropertiesPlugin, Visibility,
};

/// Prelude for common imports.
pub mod prelude {
    pub use uinspect_core::prelude::*;
    pub use uinspect_rollingtext::RollingTextInspectService;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollingtext::{RollingTextView, Typeface, charset};
    use uinspect_rollingtext::RollingTextInspectService;

    #[test]
    fn full_flow_produces_stable_sheets() {
        let inspector = Inspector::new();
        inspector.load(&RollingTextInspectService, serde_json::Value::Null);

        let mut view = RollingTextView::new();
        view.set_id("price");
        view.set_frame(200, 40);
        view.set_text("42");
        view.set_typeface(Typeface::BOLD);
        view.add_char_order(charset::NUMBER.chars());
        view.add_char_order("xyz".chars());

        let first = inspector.inspect(&view);
        assert_eq!(first.get("id").unwrap().to_string(), "price");
        assert_eq!(first.get("text").unwrap().to_string(), "\"42\"");
        assert_eq!(first.get("isBold").unwrap().to_string(), "true");
        assert!(!first.contains("isItalic"));
        assert_eq!(
            first.get("char order").unwrap().to_string(),
            "[Number], xyz"
        );

        let second = inspector.inspect(&view);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn unclaimed_views_still_get_baseline() {
        use std::any::Any;

        struct Plain;
        impl View for Plain {
            fn frame(&self) -> (u32, u32) {
                (64, 64)
            }
            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        let inspector = Inspector::new();
        inspector.load(&RollingTextInspectService, serde_json::Value::Null);

        let sheet = inspector.inspect(&Plain);
        assert!(sheet.contains("width"));
        assert!(!sheet.contains("text"));
    }
}
