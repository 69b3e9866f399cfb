//! Character set building for password generation.

use crate::error::{Error, Result};

use super::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~";

/// Glyphs that are easy to misread in common fonts.
pub const AMBIGUOUS: &[char] = &['0', 'O', 'o', '1', 'l', 'I', '|'];

/// Ordered, duplicate-free alphabet assembled from the enabled classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Build the alphabet for `config`.
    ///
    /// Classes are appended in a fixed order (lower, upper, digits,
    /// symbols). Fails when no class is enabled or nothing survives the
    /// ambiguity filter.
    pub fn build(config: &GenerationConfig) -> Result<Self> {
        if !config.has_char_class() {
            return Err(Error::invalid("at least one character class must be enabled"));
        }

        let mut chars: Vec<char> = Vec::with_capacity(90);

        if config.include_lowercase {
            chars.extend(LOWERCASE.chars());
        }
        if config.include_uppercase {
            chars.extend(UPPERCASE.chars());
        }
        if config.include_numbers {
            chars.extend(DIGITS.chars());
        }
        if config.include_symbols {
            chars.extend(SYMBOLS.chars());
        }

        if config.exclude_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(c));
        }

        if chars.is_empty() {
            return Err(Error::invalid("character set is empty after filtering"));
        }

        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}
