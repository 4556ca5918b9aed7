//! Plugin dispatch chain and the inspector host.
//!
//! # Dispatch
//!
//! The inspector keeps an ordered chain of [`ViewPropertiesPlugin`]s. When a
//! view is inspected, the chain is asked in order whether any plugin claims
//! the instance:
//!
//! 1. Plugins are tried in chain order.
//! 2. The first plugin whose [`try_create`](ViewPropertiesPlugin::try_create)
//!    returns a parser wins; later plugins are not consulted.
//! 3. When no plugin claims the view, the generic baseline parser runs.
//!
//! [`prepend`](InspectorPlugins::prepend) places a plugin ahead of everything
//! already registered, so type-scoped plugins are tried before generic
//! fallbacks.
//!
//! ```rust,ignore
//! use uinspect_core::{Inspector, InspectorPlugins};
//!
//! let inspector = Inspector::new();
//! inspector.load(&MyWidgetInspectService, serde_json::Value::Null);
//!
//! let sheet = inspector.inspect(&view);
//! println!("{sheet}");
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, info, trace};

use crate::parser::{GenericViewParser, PropertiesParser};
use crate::properties::PropertySheet;
use crate::service::{InspectorPluginService, PluginContext};
use crate::view::View;

/// A type-scoped parser factory in the dispatch chain.
///
/// Implementations claim views of exactly one target type (or its
/// subtypes) and decline everything else.
pub trait ViewPropertiesPlugin: Send + Sync {
    /// Stable identifier for this plugin, used in logs.
    fn unique_key(&self) -> &'static str;

    /// Returns a parser when this plugin claims `view`, `None` otherwise.
    ///
    /// Declining is not an error — the chain simply tries the next plugin.
    fn try_create<'a>(&self, view: &'a dyn View) -> Option<Box<dyn PropertiesParser + 'a>>;
}

/// Ordered, extensible chain of [`ViewPropertiesPlugin`]s.
///
/// The chain itself does not guard against duplicate registration; that is
/// the host's responsibility.
#[derive(Default)]
pub struct InspectorPlugins {
    chain: Vec<Arc<dyn ViewPropertiesPlugin>>,
}

impl InspectorPlugins {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plugin at the end of the chain.
    pub fn append(&mut self, plugin: Arc<dyn ViewPropertiesPlugin>) {
        debug!(plugin = plugin.unique_key(), "Appended properties plugin");
        self.chain.push(plugin);
    }

    /// Adds a plugin ahead of everything already registered.
    ///
    /// Prepended plugins are tried before generic fallbacks, which is the
    /// normal placement for type-scoped plugins.
    pub fn prepend(&mut self, plugin: Arc<dyn ViewPropertiesPlugin>) {
        debug!(plugin = plugin.unique_key(), "Prepended properties plugin");
        self.chain.insert(0, plugin);
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Asks the chain for a parser for `view`.
    ///
    /// Returns the first plugin's parser that claims the view, or `None`
    /// when every plugin declines.
    pub fn create_parser<'a>(&self, view: &'a dyn View) -> Option<Box<dyn PropertiesParser + 'a>> {
        for plugin in &self.chain {
            match plugin.try_create(view) {
                Some(parser) => {
                    debug!(plugin = plugin.unique_key(), "Plugin claimed view");
                    return Some(parser);
                }
                None => {
                    trace!(plugin = plugin.unique_key(), "Plugin declined view");
                }
            }
        }
        None
    }
}

impl std::fmt::Debug for InspectorPlugins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspectorPlugins")
            .field("chain", &self.chain.iter().map(|p| p.unique_key()).collect::<Vec<_>>())
            .finish()
    }
}

/// The inspector host: loads plugin services and runs extractions.
///
/// `Inspector` is `Send + Sync`; the chain sits behind a `RwLock` so
/// services can be loaded while inspections read. Each call to
/// [`inspect`](Self::inspect) is synchronous and runs to completion —
/// there is no background work and no cancellation.
#[derive(Default)]
pub struct Inspector {
    plugins: RwLock<InspectorPlugins>,
}

impl Inspector {
    /// Creates an inspector with an empty plugin chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a plugin service, passing it the raw JSON config section.
    ///
    /// A failing service is logged and skipped; the chain keeps whatever
    /// state it had before the call.
    pub fn load(&self, service: &dyn InspectorPluginService, config: serde_json::Value) {
        let ctx = PluginContext::new(Arc::new(config));
        let mut plugins = self.plugins.write();
        match service.on_create(&ctx, &mut plugins) {
            Ok(()) => info!(service = service.name(), "Loaded inspector plugin service"),
            Err(e) => error!(service = service.name(), error = %e, "Plugin service failed to load"),
        }
    }

    /// Runs one extraction for `view` and returns the ordered sheet.
    ///
    /// Falls back to the generic baseline parser when no plugin claims the
    /// view, so the result is never empty.
    pub fn inspect(&self, view: &dyn View) -> PropertySheet {
        let mut sheet = PropertySheet::new();
        let plugins = self.plugins.read();
        match plugins.create_parser(view) {
            Some(parser) => parser.parse(&mut sheet),
            None => GenericViewParser::new(view).parse(&mut sheet),
        }
        sheet
    }

    /// Read-only access to the plugin chain, for host-level introspection.
    pub fn with_plugins<R>(&self, f: impl FnOnce(&InspectorPlugins) -> R) -> R {
        f(&self.plugins.read())
    }
}
