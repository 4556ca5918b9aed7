//! # uinspect Core
//!
//! Core framework for the uinspect view-property inspector.
//!
//! The inspector walks a live view hierarchy and, for each view, produces an
//! ordered sheet of display properties. This crate provides the pieces every
//! other crate builds on:
//!
//! - **View contract**: type-erased access to widgets with runtime
//!   downcasting ([`View`])
//! - **Property sheets**: insertion-ordered name → display-value mappings
//!   ([`PropertySheet`], [`PropertyValue`])
//! - **Parsers**: baseline extraction shared by all views plus per-type
//!   overrides ([`PropertiesParser`], [`GenericViewParser`])
//! - **Dispatch chain**: ordered, extensible plugin registry with
//!   high-priority prepend ([`ViewPropertiesPlugin`], [`InspectorPlugins`])
//! - **Host**: service loading and per-view extraction ([`Inspector`])
//!
//! ## Dispatch flow
//!
//! ```text
//! ┌────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ Inspector  │────▶│ InspectorPlugins │────▶│ plugin.try_create │──▶ parser
//! │  .inspect  │     │  (chain, in      │     │  Some → claimed   │
//! └────────────┘     │   order)         │────▶│  None → next      │
//!                    └──────────────────┘     └──────────────────┘
//! ```
//!
//! Extraction is read-only and synchronous: a parser borrows the view for
//! one call, appends its entries, and is dropped.

pub mod error;
pub mod parser;
pub mod plugins;
pub mod properties;
pub mod service;
pub mod util;
pub mod view;

pub use error::{PluginError, PluginResult};
pub use parser::{GenericViewParser, PropertiesParser};
pub use plugins::{Inspector, InspectorPlugins, ViewPropertiesPlugin};
pub use properties::{PropertySheet, PropertyValue};
pub use service::{InspectorPluginService, PluginContext};
pub use view::{View, Visibility};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::error::{PluginError, PluginResult};
    pub use crate::parser::PropertiesParser;
    pub use crate::plugins::{Inspector, InspectorPlugins, ViewPropertiesPlugin};
    pub use crate::properties::{PropertySheet, PropertyValue};
    pub use crate::service::{InspectorPluginService, PluginContext};
    pub use crate::view::{View, Visibility};
}
