//! Error types for the uinspect framework.

use thiserror::Error;

/// Errors raised while loading an inspector plugin service.
///
/// Extraction itself never errors — failed optional sections manifest only
/// as missing keys in the output sheet. Load-time failures are logged by
/// the host and the offending service is skipped.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The plugin's config section could not be deserialised.
    #[error("invalid plugin config: {0}")]
    Config(#[from] serde_json::Error),

    /// The service failed to initialise.
    #[error("plugin load failed: {0}")]
    Failed(String),
}

impl PluginError {
    /// Creates a load-failure error from any message.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

/// Result type for plugin lifecycle operations.
pub type PluginResult<T> = Result<T, PluginError>;
