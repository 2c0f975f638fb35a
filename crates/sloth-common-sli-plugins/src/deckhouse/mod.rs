//! Plugins for metrics exported by Deckhouse Kubernetes modules.

pub mod http_error_rate;
