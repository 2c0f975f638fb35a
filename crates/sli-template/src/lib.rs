//! Strict placeholder templates for SLI monitoring queries.
//!
//! A [`QueryTemplate`] is plain text with `{{.key}}` placeholders. Rendering is
//! all-or-nothing: every placeholder must have a value, and the check happens
//! before any output is written. Keys declared with [`QueryTemplate::preserve`]
//! are passed through verbatim so a later stage (usually the SLO generator
//! filling in `{{.window}}`) can expand them.
//!
//! ```
//! use std::collections::HashMap;
//! use sli_template::QueryTemplate;
//!
//! let tpl = QueryTemplate::parse(r#"rate(http_requests_total{job="{{.job}}"}[{{.window}}])"#)?
//!     .preserve("window");
//!
//! let values = HashMap::from([("job", "api")]);
//! assert_eq!(
//!     tpl.render(&values)?,
//!     r#"rate(http_requests_total{job="api"}[{{.window}}])"#,
//! );
//! # Ok::<(), sli_template::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;

pub use error::{Error, Result};

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed query template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    segments: Vec<Segment>,
    preserved: BTreeSet<String>,
}

impl QueryTemplate {
    /// Parse template text.
    ///
    /// Single braces are literal text, so label matchers such as
    /// `metric{ job="x" }` need no escaping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unterminated`] for a `{{` with no matching `}}`, and
    /// [`Error::InvalidPlaceholder`] when the text between the braces is not
    /// `.` followed by one or more ASCII alphanumerics or underscores.
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }

            let body_start = start + OPEN.len();
            let Some(len) = rest[body_start..].find(CLOSE) else {
                return Err(Error::Unterminated {
                    offset: offset + start,
                });
            };

            let body = &rest[body_start..body_start + len];
            let key = body
                .strip_prefix('.')
                .filter(|key| is_valid_key(key))
                .ok_or_else(|| Error::InvalidPlaceholder {
                    offset: offset + start,
                    body: body.to_string(),
                })?;
            segments.push(Segment::Placeholder(key.to_string()));

            let consumed = body_start + len + CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        trace!(segments = segments.len(), "parsed query template");

        Ok(Self {
            segments,
            preserved: BTreeSet::new(),
        })
    }

    /// Keep `{{.key}}` in the output unexpanded instead of requiring a value.
    #[must_use]
    pub fn preserve(mut self, key: impl Into<String>) -> Self {
        self.preserved.insert(key.into());
        self
    }

    /// Placeholder keys that need a value, in first-use order, without duplicates.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(key) = segment
                && !self.preserved.contains(key)
                && !keys.contains(&key.as_str())
            {
                keys.push(key.as_str());
            }
        }
        keys
    }

    /// Render the template with `values`.
    ///
    /// Values are inserted as-is. Entries for keys the template never uses are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingValue`] naming the first key (in template order)
    /// that has no entry in `values`. Nothing is rendered in that case.
    pub fn render<V: AsRef<str>>(&self, values: &HashMap<&str, V>) -> Result<String> {
        if let Some(key) = self.keys().into_iter().find(|key| !values.contains_key(key)) {
            return Err(Error::MissingValue {
                key: key.to_string(),
            });
        }

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(key) => match values.get(key.as_str()) {
                    Some(value) if !self.preserved.contains(key) => out.push_str(value.as_ref()),
                    _ => {
                        out.push_str(OPEN);
                        out.push('.');
                        out.push_str(key);
                        out.push_str(CLOSE);
                    }
                },
            }
        }

        Ok(out)
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
