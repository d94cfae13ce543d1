//! Input sanitization for user-supplied name fields.
//!
//! Every name reaching storage passes through [`sanitize`]: whitespace is
//! trimmed, a fixed set of characters is deleted outright (not escaped),
//! and the result is length-capped. Parameter binding in the storage layer
//! already prevents injection; sanitization additionally constrains the
//! shape of persisted data.

use std::fmt;

use thiserror::Error;

/// Characters deleted from user input before storage.
pub const REJECTED_CHARS: &[char] = &['<', '>', '"', '\'', '%', ';', '(', ')', '&', '+'];

/// Maximum length of a sanitized name, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// Why a raw input string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SanitizeError {
    /// The input was empty or contained only whitespace.
    #[error("input is empty")]
    EmptyInput,

    /// Nothing remained after removing rejected characters.
    #[error("input is empty after sanitization")]
    EmptyAfterSanitization,
}

/// Cleans a raw user-supplied string for storage.
///
/// The pipeline runs in a fixed order: trim surrounding whitespace, delete
/// every occurrence of a character in [`REJECTED_CHARS`], then cap the
/// result at [`MAX_NAME_LENGTH`] characters. The cap is computed from the
/// trimmed input BEFORE character removal, so an input longer than the cap
/// whose tail survives deletion can still come out shorter than the cap.
///
/// On success the returned string is non-empty, at most `MAX_NAME_LENGTH`
/// characters, and contains no rejected character.
///
/// # Errors
///
/// Returns [`SanitizeError::EmptyInput`] for whitespace-only input and
/// [`SanitizeError::EmptyAfterSanitization`] when deletion consumes the
/// entire string.
///
/// # Example
///
/// ```
/// use rolodex_core::sanitize::sanitize;
///
/// assert_eq!(sanitize("  Jo<hn  ").unwrap(), "John");
/// assert!(sanitize("<>\"';").is_err());
/// ```
pub fn sanitize(raw: &str) -> Result<String, SanitizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SanitizeError::EmptyInput);
    }

    // Cap based on the pre-deletion trimmed length, matching the persisted
    // data contract: results may be shorter than the cap when characters
    // were removed.
    let cap = trimmed.chars().count().min(MAX_NAME_LENGTH);
    let cleaned: String =
        trimmed.chars().filter(|c| !REJECTED_CHARS.contains(c)).take(cap).collect();

    if cleaned.is_empty() {
        return Err(SanitizeError::EmptyAfterSanitization);
    }

    Ok(cleaned)
}

/// Which name field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// The customer's first name.
    FirstName,
    /// The customer's last name.
    LastName,
}

impl NameField {
    /// Wire-format field name as it appears in request bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
        }
    }

    /// Human-readable label for error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name field rejected by the sanitizer, with the field identity attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {source}")]
pub struct InvalidNameError {
    /// The field that failed.
    pub field: NameField,
    /// The underlying sanitization failure.
    pub source: SanitizeError,
}
