use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid language code: {0:?}")]
pub struct InvalidLanguageCode(pub String);

/// Language code sent with every request except language detection.
///
/// Only the shape is checked here (ASCII letters with an optional `-` region
/// suffix, e.g. `en`, `zh-TW`); whether the service supports the language is
/// the service's call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for LanguageCode {
    type Err = InvalidLanguageCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (primary, region) = match s.split_once('-') {
            Some((p, r)) => (p, Some(r)),
            None => (s, None),
        };
        let letters = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic())
        };
        if !letters(primary, 2, 3) || region.is_some_and(|r| !letters(r, 2, 4)) {
            return Err(InvalidLanguageCode(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
