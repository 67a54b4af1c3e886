//! Validation failures produced while creating short URLs.
//!
//! Validation collects every failing field into [`ValidationErrors`], then
//! [`ValidationErrors::classify`] reduces the collection to the single
//! [`ValidationError`] that gets reported to the client.

use std::collections::BTreeMap;
use std::fmt;

/// Request field a validation failure is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Url,
    Shortcode,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Url => f.write_str("url"),
            Field::Shortcode => f.write_str("shortcode"),
        }
    }
}

/// Symbolic reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reason {
    NotPresent,
    NotUnique,
    Format,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NotPresent => f.write_str("not_present"),
            Reason::NotUnique => f.write_str("not_unique"),
            Reason::Format => f.write_str("format"),
        }
    }
}

/// The one validation failure reported for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("url is not present")]
    UrlMissing,
    #[error("shortcode is already in use")]
    ShortcodeNotUnique,
    #[error("shortcode has an invalid format")]
    ShortcodeBadFormat,
    #[error("submitted entity is unprocessable")]
    Other,
}

/// Every failure collected for a request, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, Vec<Reason>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `reason` against `field`. Repeated reasons are kept once.
    pub fn add(&mut self, field: Field, reason: Reason) {
        let reasons = self.fields.entry(field).or_default();
        if !reasons.contains(&reason) {
            reasons.push(reason);
        }
    }

    pub fn with(mut self, field: Field, reason: Reason) -> Self {
        self.add(field, reason);
        self
    }

    pub fn get(&self, field: Field) -> Option<&[Reason]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Picks the failure to report.
    ///
    /// Rules are checked in order and the first match wins:
    ///
    /// 1. `url` is exactly `[not_present]` → [`ValidationError::UrlMissing`]
    /// 2. `shortcode` is exactly `[not_unique]` → [`ValidationError::ShortcodeNotUnique`]
    /// 3. `shortcode` is exactly `[format]` → [`ValidationError::ShortcodeBadFormat`]
    /// 4. anything else → [`ValidationError::Other`]
    ///
    /// A field carrying several reasons matches none of the specific rules.
    pub fn classify(&self) -> ValidationError {
        if self.get(Field::Url) == Some(&[Reason::NotPresent][..]) {
            ValidationError::UrlMissing
        } else if self.get(Field::Shortcode) == Some(&[Reason::NotUnique][..]) {
            ValidationError::ShortcodeNotUnique
        } else if self.get(Field::Shortcode) == Some(&[Reason::Format][..]) {
            ValidationError::ShortcodeBadFormat
        } else {
            ValidationError::Other
        }
    }
}

impl From<&ValidationErrors> for ValidationError {
    fn from(errors: &ValidationErrors) -> Self {
        errors.classify()
    }
}
