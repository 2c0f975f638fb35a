//! Helpers for reading plugin options.

use crate::Options;
use crate::error::{Error, Result};

/// Characters stripped from both ends of a label filter.
const FILTER_TRIM: [char; 3] = ['{', '}', ','];

/// Read a required option, trimmed of surrounding whitespace.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredOption`] when the key is absent or the
/// trimmed value is empty.
pub fn required_string(key: &str, options: &Options) -> Result<String> {
    let value = options.get(key).map_or("", String::as_str).trim();

    if value.is_empty() {
        return Err(Error::MissingRequiredOption {
            key: key.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Read the optional `filter` option as a label-matcher prefix.
///
/// Braces and commas are stripped from the edges only, so a comma inside a
/// quoted value survives. A non-empty result gets one trailing comma so it can
/// sit directly before the next matcher.
pub fn label_filter(options: &Options) -> String {
    let filter = options
        .get("filter")
        .map_or("", String::as_str)
        .trim_matches(FILTER_TRIM.as_slice());

    if filter.is_empty() {
        String::new()
    } else {
        format!("{filter},")
    }
}
