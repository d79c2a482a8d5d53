use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of characters in every short code.
pub const LENGTH: usize = 6;

/// The symbols a short code may contain: ASCII letters, digits and `_`.
pub const ALPHABET: &[u8; 63] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

/// A validated short code identifier for a shortened URL.
///
/// Short codes are exactly six characters long and contain only
/// ASCII alphanumeric characters or underscores. Comparison is
/// case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output),
    /// or for lookups where an invalid code simply never matches.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), CoreError> {
        let len = code.chars().count();
        if len != LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be {}, got {}",
                LENGTH, len
            )));
        }

        if !code.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only alphanumeric characters or underscores: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("abc123").is_ok());
        assert!(ShortCode::new("A_b_C_").is_ok());
        assert!(ShortCode::new("______").is_ok());
        assert!(ShortCode::new("000000").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortCode::new("").is_err());
        assert!(ShortCode::new("abc12").is_err());
        assert!(ShortCode::new("abc1234").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("abc-12").is_err());
        assert!(ShortCode::new("abc 12").is_err());
        assert!(ShortCode::new("abc/12").is_err());
        assert!(ShortCode::new("abc!12").is_err());
    }

    #[test]
    fn non_ascii_alphanumerics_are_rejected() {
        // six chars, but not in the ASCII alphabet
        assert!(ShortCode::new("abcdeé").is_err());
        assert!(ShortCode::new("１２３４５６").is_err());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let lower = ShortCode::new("abcdef").unwrap();
        let upper = ShortCode::new("ABCDEF").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn alphabet_has_63_distinct_symbols() {
        let mut symbols = ALPHABET.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 63);
    }

    #[test]
    fn display() {
        let code = ShortCode::new("my_cod").unwrap();
        assert_eq!(code.to_string(), "my_cod");
    }
}
