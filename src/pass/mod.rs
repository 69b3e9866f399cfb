//! Password and passphrase generation.

pub mod charset;
mod config;
mod generate;
pub mod words;

use std::fmt;

use zeroize::Zeroize;

pub use charset::CharacterSet;
pub use config::{GenerationConfig, WordLanguage};
pub use generate::{generate, generate_batch};
pub use words::generate as generate_words;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordKind {
    Charset,
    Words,
}

/// A generated secret plus the quantities its entropy depends on.
///
/// For character passwords `alphabet_size` is the character set size and
/// `symbols` the character count; for passphrases they are the word list
/// size and the number of words drawn from it. The value is wiped when
/// dropped.
#[derive(Clone, PartialEq)]
pub struct GeneratedPassword {
    value: String,
    alphabet_size: usize,
    symbols: usize,
    entropy_bits: f64,
    kind: PasswordKind,
}

impl GeneratedPassword {
    pub(crate) fn new(
        value: String,
        alphabet_size: usize,
        symbols: usize,
        entropy_bits: f64,
        kind: PasswordKind,
    ) -> Self {
        Self {
            value,
            alphabet_size,
            symbols,
            entropy_bits,
            kind,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Draws from the alphabet: characters for a charset password, words
    /// for a passphrase. Not the string length; a passphrase's numeric
    /// suffix is not counted either.
    pub fn symbol_count(&self) -> usize {
        self.symbols
    }

    pub fn kind(&self) -> PasswordKind {
        self.kind
    }

    /// Entropy of the generator's own sample space.
    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("value", &"<redacted>")
            .field("alphabet_size", &self.alphabet_size)
            .field("symbols", &self.symbols)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
