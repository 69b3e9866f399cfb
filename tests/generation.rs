use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use passlab::pass::{self, charset, words};
use passlab::{
    Error, GenerationConfig, PasswordKind, SecureRandom, WordLanguage, generate_charset_password,
    generate_word_password,
};

#[test]
fn charset_password_has_requested_length_and_alphabet() {
    let config = GenerationConfig::default().length(32).with_symbols(false);
    let allowed: HashSet<char> = format!("{}{}{}", charset::LOWERCASE, charset::UPPERCASE, charset::DIGITS)
        .chars()
        .collect();

    for _ in 0..50 {
        let password = generate_charset_password(&config).unwrap();
        assert_eq!(password.as_str().chars().count(), 32);
        assert_eq!(password.alphabet_size(), 62);
        assert_eq!(password.kind(), PasswordKind::Charset);
        assert!(password.as_str().chars().all(|c| allowed.contains(&c)));
    }
}

#[test]
fn ambiguous_characters_never_appear() {
    let config = GenerationConfig::default().length(200).exclude_ambiguous(true);
    let password = generate_charset_password(&config).unwrap();
    assert!(!password.as_str().chars().any(|c| charset::AMBIGUOUS.contains(&c)));
}

#[test]
fn no_character_class_is_rejected() {
    let config = GenerationConfig::default()
        .with_lowercase(false)
        .with_uppercase(false)
        .with_numbers(false)
        .with_symbols(false);
    assert!(matches!(
        generate_charset_password(&config),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn zero_length_is_rejected() {
    let config = GenerationConfig::default().length(0);
    assert!(matches!(
        generate_charset_password(&config),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn passphrase_tokens_come_from_the_list() {
    for lang in WordLanguage::ALL {
        let config = GenerationConfig::default()
            .words(5)
            .with_numbers(false)
            .separator("_")
            .language(lang);
        let list: HashSet<&str> = words::word_list(lang).iter().copied().collect();

        let phrase = generate_word_password(&config).unwrap();
        let tokens: Vec<&str> = phrase.as_str().split('_').collect();
        assert_eq!(tokens.len(), 5);
        assert_eq!(phrase.kind(), PasswordKind::Words);
        for token in tokens {
            assert!(list.contains(token.to_lowercase().as_str()), "{token}");
            assert!(token.chars().next().unwrap().is_uppercase());
        }
    }
}

#[test]
fn passphrase_suffix_is_last_token() {
    let config = GenerationConfig::default().words(3).with_numbers(true).separator(" ");
    let phrase = generate_word_password(&config).unwrap();
    let tokens: Vec<&str> = phrase.as_str().split(' ').collect();
    assert_eq!(tokens.len(), 4);
    let suffix: u32 = tokens[3].parse().unwrap();
    assert!((words::SUFFIX_MIN..=words::SUFFIX_MAX).contains(&suffix));
}

/// Pearson chi-square of 1000 single-letter draws against a uniform
/// distribution over a-z.
fn chi_square(seed: u64) -> f64 {
    let mut rng = SecureRandom::from_rng(ChaCha20Rng::seed_from_u64(seed));
    let config = GenerationConfig::default()
        .length(1)
        .with_uppercase(false)
        .with_numbers(false)
        .with_symbols(false);

    let mut counts = [0u32; 26];
    for password in pass::generate_batch(&config, 1000, &mut rng).unwrap() {
        let c = password.as_str().as_bytes()[0];
        counts[(c - b'a') as usize] += 1;
    }

    let expected = 1000.0 / 26.0;
    counts
        .iter()
        .map(|&n| (f64::from(n) - expected).powi(2) / expected)
        .sum()
}

#[test]
fn single_letters_are_uniform() {
    // 25 degrees of freedom, 95% critical value.
    const CRITICAL: f64 = 37.65;
    // A fair generator fails about one run in twenty.
    let failures = (0..20).filter(|&seed| chi_square(seed) > CRITICAL).count();
    assert!(failures <= 4, "{failures} of 20 runs rejected uniformity");
}
