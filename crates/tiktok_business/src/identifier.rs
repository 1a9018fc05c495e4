use std::fmt;

use thiserror::Error;

/// Raw TikTok app-id input as callers supply it: a single token, a
/// comma-delimited string, or an ordered token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TtAppIds {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for TtAppIds {
    fn from(value: &str) -> Self {
        TtAppIds::One(value.to_string())
    }
}

impl From<String> for TtAppIds {
    fn from(value: String) -> Self {
        TtAppIds::One(value)
    }
}

impl From<Vec<String>> for TtAppIds {
    fn from(value: Vec<String>) -> Self {
        TtAppIds::Many(value)
    }
}

impl From<&[&str]> for TtAppIds {
    fn from(value: &[&str]) -> Self {
        TtAppIds::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TtAppIds {
    fn from(value: [&str; N]) -> Self {
        TtAppIds::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Canonical comma-joined app-id string, only constructed by
/// [`validate_tt_app_ids`]. Matches `^[0-9]+(,[0-9]+)*$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTtAppIds(String);

impl NormalizedTtAppIds {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Splits back into the ordered numeric tokens the input carried.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(',')
    }
}

impl fmt::Display for NormalizedTtAppIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// App-id validation diagnostics. Each malformed input maps to exactly one
/// kind; the check order below is what picks the more specific kind when
/// several would match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("TikTok app id must not be empty")]
    Empty,
    #[error("TikTok app id must contain only digits and commas: `{input}`")]
    Format { input: String },
    #[error("TikTok app id must not contain whitespace: `{input}`")]
    Spaces { input: String },
    #[error("TikTok app id contains a full-width comma (U+FF0C); use an ASCII comma: `{input}`")]
    FullwidthComma { input: String },
    #[error("TikTok app id must not start or end with a comma: `{input}`")]
    TrailingComma { input: String },
    #[error("TikTok app id must not contain consecutive commas: `{input}`")]
    ConsecutiveCommas { input: String },
}

/// Validates and normalizes a raw app-id input into the canonical
/// comma-joined form.
///
/// Pure and deterministic: every input either normalizes or fails with
/// exactly one diagnostic. Sequence inputs are joined after per-token checks
/// and never hit the delimiter/whitespace checks, which only apply to string
/// inputs. Leading zeros and duplicate tokens pass through untouched; no
/// numeric-range or uniqueness checking happens here.
pub fn validate_tt_app_ids(input: impl Into<TtAppIds>) -> Result<NormalizedTtAppIds, IdentifierError> {
    match input.into() {
        TtAppIds::Many(tokens) => validate_sequence(tokens),
        TtAppIds::One(raw) => validate_string(raw),
    }
}

fn validate_sequence(tokens: Vec<String>) -> Result<NormalizedTtAppIds, IdentifierError> {
    if tokens.is_empty() {
        return Err(IdentifierError::Empty);
    }
    for token in &tokens {
        if token.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if !token.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(IdentifierError::Format {
                input: token.clone(),
            });
        }
    }
    Ok(NormalizedTtAppIds(tokens.join(",")))
}

fn validate_string(raw: String) -> Result<NormalizedTtAppIds, IdentifierError> {
    const FULLWIDTH_COMMA: char = '\u{ff0c}';

    if raw.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(IdentifierError::Spaces { input: raw });
    }
    if raw.contains(FULLWIDTH_COMMA) {
        return Err(IdentifierError::FullwidthComma { input: raw });
    }
    if raw.starts_with(',') || raw.ends_with(',') {
        return Err(IdentifierError::TrailingComma { input: raw });
    }
    if raw.contains(",,") {
        return Err(IdentifierError::ConsecutiveCommas { input: raw });
    }
    if !raw.chars().all(|ch| ch.is_ascii_digit() || ch == ',') {
        return Err(IdentifierError::Format { input: raw });
    }
    Ok(NormalizedTtAppIds(raw))
}
