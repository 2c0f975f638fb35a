//! The SLI plugin contract.
//!
//! A plugin turns the option map of an SLO's `plugin:` block into a query
//! string. Hosts dispatch on [`SliPlugin::id`] and [`SliPlugin::version`];
//! the trait is object-safe, so plugins can be held as `Box<dyn SliPlugin>`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// SLO metadata supplied by the host (service, SLO name, objective...).
pub type Meta = HashMap<String, String>;

/// SLO labels supplied by the host.
pub type Labels = HashMap<String, String>;

/// Plugin options from the SLO definition.
pub type Options = HashMap<String, String>;

/// The `plugin:` block of an SLI definition.
///
/// ```yaml
/// plugin:
///   id: "sloth-common/deckhouse/http_error_rate"
///   options:
///     namespace: "default"
///     service: "api"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRef {
    /// Registered plugin ID.
    pub id: String,
    /// Options passed to the plugin.
    #[serde(default)]
    pub options: Options,
}

/// A plugin that renders an SLI query from options.
pub trait SliPlugin: Send + Sync {
    /// Version of the plugin interface, e.g. `prometheus/v1`.
    fn version(&self) -> &'static str;

    /// Registering ID of the plugin.
    fn id(&self) -> &'static str;

    /// Render the query.
    ///
    /// # Errors
    ///
    /// Returns an error when the options are invalid or the query cannot be
    /// rendered.
    fn query(&self, meta: &Meta, labels: &Labels, options: &Options) -> Result<String>;

    /// Render the query for a `plugin:` block after checking it targets this plugin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PluginMismatch`] when `plugin_ref.id` differs from
    /// [`SliPlugin::id`], otherwise whatever [`SliPlugin::query`] returns.
    fn query_for(&self, meta: &Meta, labels: &Labels, plugin_ref: &PluginRef) -> Result<String> {
        if plugin_ref.id != self.id() {
            return Err(Error::PluginMismatch {
                expected: self.id().to_string(),
                found: plugin_ref.id.clone(),
            });
        }

        self.query(meta, labels, &plugin_ref.options)
    }
}
