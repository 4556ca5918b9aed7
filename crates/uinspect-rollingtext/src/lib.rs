//! # uinspect-rollingtext
//!
//! uinspect properties plugin for the [`rollingtext`] widget.
//!
//! The service registers one type-scoped plugin at the **front** of the
//! dispatch chain, so rolling-text widgets are claimed before any generic
//! fallback. The plugin's parser emits the widget's presentation state —
//! including the internal character-order list, read through a latched
//! accessor that permanently backs off if the widget's internal layout is
//! not the one this plugin was built against.
//!
//! ```rust,ignore
//! use uinspect_core::Inspector;
//! use uinspect_rollingtext::RollingTextInspectService;
//!
//! let inspector = Inspector::new();
//! inspector.load(&RollingTextInspectService, serde_json::Value::Null);
//! let sheet = inspector.inspect(&view);
//! ```

pub mod accessor;
pub mod parser;

pub use accessor::{CharOrderAccessor, OrderSource};
pub use parser::RollingTextParser;

use std::sync::Arc;

use uinspect_core::{
    InspectorPluginService, InspectorPlugins, PluginContext, PluginResult, PropertiesParser, View,
    ViewPropertiesPlugin,
};

use rollingtext::RollingTextView;

/// Type-scoped plugin claiming exactly [`RollingTextView`] instances.
///
/// Every parser created by one plugin instance shares one accessor, so a
/// latched internal-layout failure stays latched across inspections.
pub struct RollingTextPlugin {
    accessor: Arc<CharOrderAccessor>,
}

impl RollingTextPlugin {
    /// Creates a plugin with a fresh accessor.
    pub fn new() -> Self {
        Self {
            accessor: Arc::new(CharOrderAccessor::new()),
        }
    }
}

impl Default for RollingTextPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPropertiesPlugin for RollingTextPlugin {
    fn unique_key(&self) -> &'static str {
        "RollingTextView"
    }

    fn try_create<'a>(&self, view: &'a dyn View) -> Option<Box<dyn PropertiesParser + 'a>> {
        let view = view.as_any().downcast_ref::<RollingTextView>()?;
        Some(Box::new(RollingTextParser::new(
            view,
            Arc::clone(&self.accessor),
        )))
    }
}

/// Registry entry loaded by the host at startup.
pub struct RollingTextInspectService;

impl InspectorPluginService for RollingTextInspectService {
    fn name(&self) -> &'static str {
        "rollingtext"
    }

    fn on_create(&self, _ctx: &PluginContext, plugins: &mut InspectorPlugins) -> PluginResult<()> {
        plugins.prepend(Arc::new(RollingTextPlugin::new()));
        Ok(())
    }
}
