//! Validation and normalization of submitted (name, URL) pairs.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

/// Scheme probe for normalization. Case-insensitive on purpose, unlike the
/// format rule below.
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("SCHEME_RE compiles"));

/// Accepted web address shape: `http`/`https`, `://`, then a host/path that
/// does not open with whitespace or one of `$.?#`.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?)://[^\s$.?#].[^\s]*$").expect("URL_RE compiles"));

/// Why a submitted (name, URL) pair was rejected.
///
/// The display strings double as the user-facing alert text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name or URL was left blank.
    #[error("Please submit values for both fields.")]
    MissingField,
    /// The URL does not look like a web address.
    #[error("Please provide a valid web address.")]
    InvalidUrl,
}

/// Prefix `https://` onto bare host/paths; scheme-bearing input is untouched.
pub fn normalize_url(raw: &str) -> String {
    if SCHEME_RE.is_match(raw) {
        raw.to_owned()
    } else {
        format!("https://{raw}")
    }
}

/// Check a submitted (name, raw URL) pair and return the normalized URL,
/// which is both the storage key and the link target.
///
/// Empty fields are rejected before normalization, so a blank URL reports
/// a missing field rather than a format failure.
///
/// # Errors
///
/// [`ValidationError::MissingField`] if either field is empty, or
/// [`ValidationError::InvalidUrl`] if the normalized URL fails the format
/// rule.
pub fn validate(name: &str, raw_url: &str) -> Result<String, ValidationError> {
    if name.is_empty() || raw_url.is_empty() {
        return Err(ValidationError::MissingField);
    }

    let url = normalize_url(raw_url);
    if !URL_RE.is_match(&url) {
        return Err(ValidationError::InvalidUrl);
    }

    Ok(url)
}
