//! Passphrase generation from embedded word lists.

use std::sync::LazyLock;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{GeneratedPassword, GenerationConfig, PasswordKind, WordLanguage};
use crate::error::{Error, Result};
use crate::rng::SecureRandom;

const EN_WORDS: &str = include_str!("words/en.txt");
const ES_WORDS: &str = include_str!("words/es.txt");

/// Range of the optional numeric suffix token.
pub const SUFFIX_MIN: u32 = 100;
pub const SUFFIX_MAX: u32 = 999;

static EN_LIST: LazyLock<Vec<&'static str>> = LazyLock::new(|| parse_list(EN_WORDS));
static ES_LIST: LazyLock<Vec<&'static str>> = LazyLock::new(|| parse_list(ES_WORDS));

fn parse_list(src: &'static str) -> Vec<&'static str> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Word list for `language`.
pub fn word_list(language: WordLanguage) -> &'static [&'static str] {
    match language {
        WordLanguage::En => &EN_LIST,
        WordLanguage::Es => &ES_LIST,
    }
}

/// Upper-case the first letter, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generate a passphrase of `config.word_count` capitalized words joined
/// by `config.word_separator`, plus a 3-digit token when
/// `config.include_numbers` is set.
pub fn generate<R: RngCore + CryptoRng>(
    config: &GenerationConfig,
    rng: &mut SecureRandom<R>,
) -> Result<GeneratedPassword> {
    if config.word_count == 0 {
        return Err(Error::invalid("word count must be positive"));
    }

    let list = word_list(config.word_language);
    let bound = u32::try_from(list.len())
        .map_err(|_| Error::invalid("word list too large"))?;

    let mut tokens: Vec<String> = Vec::with_capacity(config.word_count + 1);
    for _ in 0..config.word_count {
        let word = list[rng.next_int(bound)? as usize];
        tokens.push(capitalize(word));
    }

    let mut entropy = config.word_count as f64 * (list.len() as f64).log2();
    if config.include_numbers {
        tokens.push(rng.next_in_range(SUFFIX_MIN, SUFFIX_MAX)?.to_string());
        entropy += f64::from(SUFFIX_MAX - SUFFIX_MIN + 1).log2();
    }

    let value = tokens.join(&config.word_separator);
    tokens.zeroize();

    log::debug!(
        "generated {}-word passphrase from {} list ({} words)",
        config.word_count,
        config.word_language,
        list.len()
    );
    Ok(GeneratedPassword::new(
        value,
        list.len(),
        config.word_count,
        entropy,
        PasswordKind::Words,
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::rng::seeded;

    #[test]
    fn lists_are_lowercase_and_deduplicated() {
        for lang in WordLanguage::ALL {
            let list = word_list(lang);
            assert!(list.len() >= 256, "{lang} list too small");
            let unique: HashSet<&str> = list.iter().copied().collect();
            assert_eq!(unique.len(), list.len(), "{lang} list has duplicates");
            for word in list {
                assert_eq!(word.to_lowercase(), *word);
                assert!(!word.contains(char::is_whitespace));
            }
        }
    }

    #[test]
    fn token_count_and_capitals() {
        let mut rng = seeded(20);
        let config = GenerationConfig::default()
            .words(6)
            .with_numbers(false)
            .separator("-");
        let pass = generate(&config, &mut rng).unwrap();
        let tokens: Vec<&str> = pass.as_str().split('-').collect();
        assert_eq!(tokens.len(), 6);
        assert_eq!(pass.symbol_count(), 6);
        let list = word_list(WordLanguage::En);
        for token in tokens {
            assert!(token.chars().next().unwrap().is_uppercase());
            assert!(list.contains(&token.to_lowercase().as_str()));
        }
    }

    #[test]
    fn numeric_suffix_is_three_digits() {
        let mut rng = seeded(21);
        let config = GenerationConfig::default().words(3).with_numbers(true).separator(" ");
        for _ in 0..50 {
            let pass = generate(&config, &mut rng).unwrap();
            let tokens: Vec<&str> = pass.as_str().split(' ').collect();
            assert_eq!(tokens.len(), 4);
            assert_eq!(pass.symbol_count(), 3);
            let n: u32 = tokens[3].parse().unwrap();
            assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&n));
        }
    }

    #[test]
    fn separator_is_verbatim() {
        let mut rng = seeded(22);
        let config = GenerationConfig::default()
            .words(3)
            .with_numbers(false)
            .separator(" :: ");
        let pass = generate(&config, &mut rng).unwrap();
        assert_eq!(pass.as_str().matches(" :: ").count(), 2);
    }

    #[test]
    fn spanish_list_capitalizes_unicode() {
        assert_eq!(capitalize("ñandu"), "Ñandu");
        assert_eq!(capitalize(""), "");
        let mut rng = seeded(23);
        let config = GenerationConfig::default()
            .language(WordLanguage::Es)
            .with_numbers(false)
            .words(4);
        let pass = generate(&config, &mut rng).unwrap();
        let list = word_list(WordLanguage::Es);
        assert_eq!(pass.alphabet_size(), list.len());
        for token in pass.as_str().split('-') {
            assert!(list.contains(&token.to_lowercase().as_str()));
        }
    }

    #[test]
    fn zero_words_is_rejected() {
        let mut rng = seeded(24);
        let config = GenerationConfig::default().words(0);
        assert!(matches!(
            generate(&config, &mut rng),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn entropy_counts_words_and_suffix() {
        let mut rng = seeded(25);
        let list_len = word_list(WordLanguage::En).len() as f64;
        let plain = generate(&GenerationConfig::default().words(5).with_numbers(false), &mut rng).unwrap();
        assert!((plain.entropy_bits() - 5.0 * list_len.log2()).abs() < 1e-9);
        let suffixed = generate(&GenerationConfig::default().words(5).with_numbers(true), &mut rng).unwrap();
        assert!((suffixed.entropy_bits() - plain.entropy_bits() - 900f64.log2()).abs() < 1e-9);
    }
}
