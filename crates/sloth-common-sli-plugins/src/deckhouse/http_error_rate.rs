//! HTTP error rate of a service behind the Deckhouse ingress-nginx controller.
//!
//! Errors are `5xx` and `429` responses from
//! `ingress_nginx_detail_responses_total`. The denominator is filtered with
//! `> 0` so idle windows produce no series instead of dividing by zero, and
//! `OR on() vector(0)` turns "no series" into a 0 error rate.
//!
//! Options:
//!
//! - `namespace` (required): namespace of the service.
//! - `service` (required): service name.
//! - `filter` (optional): extra label matchers, e.g. `host="example.com"`.
//!   Surrounding braces and commas are tolerated.

use std::collections::HashMap;

use sli_template::QueryTemplate;
use tracing::debug;

use crate::error::Result;
use crate::options::{label_filter, required_string};
use crate::plugin::{Labels, Meta, Options, SliPlugin};

/// Version of the plugin interface.
pub const SLI_PLUGIN_VERSION: &str = "prometheus/v1";

/// Registering ID of the plugin.
pub const SLI_PLUGIN_ID: &str = "sloth-common/deckhouse/http_error_rate";

/// Left in the query for sloth to fill in.
const WINDOW_KEY: &str = "window";

const QUERY_TEMPLATE: &str = concat!(
    "\n",
    "(\n",
    "  sum(rate(ingress_nginx_detail_responses_total{ {{.filter}}namespace=\"{{.namespace}}\",service=\"{{.service}}\",response_code=~\"(5..|429)\" }[{{.window}}])) \n",
    "  /          \n",
    "  (sum(rate(ingress_nginx_detail_responses_total{ {{.filter}}namespace=\"{{.namespace}}\",service=\"{{.service}}\" }[{{.window}}])) > 0)\n",
    ") OR on() vector(0)\n",
);

/// The `sloth-common/deckhouse/http_error_rate` plugin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpErrorRate;

impl SliPlugin for HttpErrorRate {
    fn version(&self) -> &'static str {
        SLI_PLUGIN_VERSION
    }

    fn id(&self) -> &'static str {
        SLI_PLUGIN_ID
    }

    fn query(&self, meta: &Meta, labels: &Labels, options: &Options) -> Result<String> {
        sli_plugin(meta, labels, options)
    }
}

/// Render the error rate query.
///
/// `meta` and `labels` are accepted for the plugin signature and not read.
///
/// # Errors
///
/// Returns [`crate::Error::MissingRequiredOption`] when `service` or
/// `namespace` is missing or blank, and [`crate::Error::TemplateRender`] if the
/// query template cannot be rendered.
pub fn sli_plugin(_meta: &Meta, _labels: &Labels, options: &Options) -> Result<String> {
    let service = required_string("service", options)?;
    let namespace = required_string("namespace", options)?;
    let filter = label_filter(options);

    let template = QueryTemplate::parse(QUERY_TEMPLATE)?.preserve(WINDOW_KEY);
    let data = HashMap::from([
        ("filter", filter.as_str()),
        ("service", service.as_str()),
        ("namespace", namespace.as_str()),
    ]);
    let query = template.render(&data)?;

    debug!(
        plugin = SLI_PLUGIN_ID,
        namespace = %namespace,
        service = %service,
        "rendered SLI query"
    );

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_requires_exactly_the_options() {
        let template = QueryTemplate::parse(QUERY_TEMPLATE)
            .unwrap()
            .preserve(WINDOW_KEY);
        assert_eq!(template.keys(), vec!["filter", "namespace", "service"]);
    }

    #[test]
    fn test_plugin_identity() {
        assert_eq!(HttpErrorRate.version(), "prometheus/v1");
        assert_eq!(HttpErrorRate.id(), "sloth-common/deckhouse/http_error_rate");
    }

    #[test]
    fn test_service_checked_before_namespace() {
        let err = sli_plugin(&Meta::new(), &Labels::new(), &Options::new()).unwrap_err();
        assert_eq!(err.to_string(), "could not get service: service is required");
    }

    #[test]
    fn test_values_are_trimmed() {
        let options = Options::from([
            ("namespace".to_string(), " default ".to_string()),
            ("service".to_string(), "\ttest\n".to_string()),
        ]);
        let query = sli_plugin(&Meta::new(), &Labels::new(), &options).unwrap();
        assert!(query.contains(r#"{ namespace="default",service="test",response_code"#));
    }
}
