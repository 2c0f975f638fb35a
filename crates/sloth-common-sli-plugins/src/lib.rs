//! Common SLI plugins for sloth.
//!
//! Each plugin renders a Prometheus query from the options of an SLO's
//! `plugin:` block. The `{{.window}}` token is left in the query for sloth to
//! replace with the SLO window.
//!
//! ```
//! use sloth_common_sli_plugins::deckhouse::http_error_rate::HttpErrorRate;
//! use sloth_common_sli_plugins::{Labels, Meta, Options, SliPlugin};
//!
//! let options = Options::from([
//!     ("namespace".to_string(), "default".to_string()),
//!     ("service".to_string(), "api".to_string()),
//! ]);
//!
//! let query = HttpErrorRate.query(&Meta::new(), &Labels::new(), &options)?;
//! assert!(query.contains(r#"namespace="default",service="api""#));
//! # Ok::<(), sloth_common_sli_plugins::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod deckhouse;
pub mod error;
pub mod options;
pub mod plugin;

pub use error::{Error, Result};
pub use plugin::{Labels, Meta, Options, PluginRef, SliPlugin};
