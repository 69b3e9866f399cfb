//! Generation options shared by the character and word generators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Word list used for passphrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordLanguage {
    #[default]
    En,
    Es,
}

impl WordLanguage {
    pub const ALL: [WordLanguage; 2] = [WordLanguage::En, WordLanguage::Es];

    pub fn code(self) -> &'static str {
        match self {
            WordLanguage::En => "en",
            WordLanguage::Es => "es",
        }
    }
}

impl fmt::Display for WordLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WordLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(WordLanguage::En),
            "es" | "spanish" | "español" => Ok(WordLanguage::Es),
            other => Err(format!("unknown word list language: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Characters per password.
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    /// Digits for character passwords, numeric suffix for passphrases.
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Drop visually confusable glyphs (0/O/o, 1/l/I/|).
    pub exclude_ambiguous: bool,
    pub word_count: usize,
    pub word_separator: String,
    pub word_language: WordLanguage,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
            word_count: 4,
            word_separator: String::from("-"),
            word_language: WordLanguage::En,
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_lowercase(mut self, include: bool) -> Self {
        self.include_lowercase = include;
        self
    }

    pub fn with_uppercase(mut self, include: bool) -> Self {
        self.include_uppercase = include;
        self
    }

    pub fn with_numbers(mut self, include: bool) -> Self {
        self.include_numbers = include;
        self
    }

    pub fn with_symbols(mut self, include: bool) -> Self {
        self.include_symbols = include;
        self
    }

    pub fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    pub fn words(mut self, count: usize) -> Self {
        self.word_count = count;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.word_separator = separator.into();
        self
    }

    pub fn language(mut self, language: WordLanguage) -> Self {
        self.word_language = language;
        self
    }

    /// True when at least one character class is enabled.
    pub fn has_char_class(&self) -> bool {
        self.include_lowercase || self.include_uppercase || self.include_numbers || self.include_symbols
    }
}
