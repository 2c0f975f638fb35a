//! Error types for SLI plugin operations.

use thiserror::Error;

/// The error type returned by SLI plugins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required option was absent or blank after trimming.
    #[error("could not get {key}: {key} is required")]
    MissingRequiredOption {
        /// The option key.
        key: String,
    },

    /// The query template could not be rendered.
    #[error("could not render query template: {0}")]
    TemplateRender(#[from] sli_template::Error),

    /// A plugin reference names a different plugin.
    #[error("plugin reference targets {found}, not {expected}")]
    PluginMismatch {
        /// ID of the plugin that was asked to render.
        expected: String,
        /// ID found in the plugin reference.
        found: String,
    },
}

/// A specialized Result type for SLI plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn render_step() -> Result<String> {
        Err(sli_template::Error::MissingValue {
            key: "namespace".to_string(),
        })?
    }

    #[test]
    fn test_template_error_converts_with_question_mark() {
        let err = render_step().unwrap_err();
        assert_eq!(
            err,
            Error::TemplateRender(sli_template::Error::MissingValue {
                key: "namespace".to_string()
            })
        );
        assert_eq!(
            err.to_string(),
            "could not render query template: map has no entry for key \"namespace\""
        );
    }

    #[test]
    fn test_template_error_from() {
        let err = Error::from(sli_template::Error::Unterminated { offset: 12 });
        assert!(matches!(
            err,
            Error::TemplateRender(sli_template::Error::Unterminated { offset: 12 })
        ));
        assert_eq!(
            err.to_string(),
            "could not render query template: unterminated placeholder starting at byte 12"
        );
    }
}
