//! Plugin service lifecycle.
//!
//! An [`InspectorPluginService`] is the unit the host loads at startup.
//! Its [`on_create`](InspectorPluginService::on_create) hook runs exactly
//! once per load and is where the service registers its type-scoped
//! plugins into the dispatch chain.
//!
//! # Configuration
//!
//! The host hands each service its raw JSON config section through
//! [`PluginContext`]. Services deserialise a typed struct with
//! [`get_config`](PluginContext::get_config); use `#[serde(default)]` to
//! make every field optional.
//!
//! ```rust,ignore
//! #[derive(serde::Deserialize, Default)]
//! struct MyConfig { verbose: bool }
//!
//! fn on_create(&self, ctx: &PluginContext, plugins: &mut InspectorPlugins) -> PluginResult<()> {
//!     let cfg: MyConfig = ctx.get_config()?;
//!     plugins.prepend(Arc::new(MyPlugin::new(cfg.verbose)));
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use crate::error::PluginResult;
use crate::plugins::InspectorPlugins;

/// Context passed to a service's `on_create` hook.
#[derive(Clone, Debug)]
pub struct PluginContext {
    /// Raw JSON value for this service's config section.
    config: Arc<serde_json::Value>,
}

impl PluginContext {
    /// Wraps a raw config section.
    pub fn new(config: Arc<serde_json::Value>) -> Self {
        Self { config }
    }

    /// Deserialises the config section into `T`.
    ///
    /// Returns `Err` if the section is missing required fields or has the
    /// wrong shape.
    pub fn get_config<T>(&self) -> serde_json::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        T::deserialize(self.config.as_ref())
    }
}

/// A loadable inspector plugin service.
///
/// Implementations register their parser factories with the dispatch chain
/// when loaded. Loading the same service twice registers its plugins twice;
/// guarding against that is the host's job, not the service's.
pub trait InspectorPluginService: Send + Sync {
    /// Human-readable service name, used in logs and as the config key.
    fn name(&self) -> &'static str;

    /// Called once at load time to register plugins into the chain.
    fn on_create(&self, ctx: &PluginContext, plugins: &mut InspectorPlugins) -> PluginResult<()>;
}
