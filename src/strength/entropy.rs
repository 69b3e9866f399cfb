//! Brute-force entropy from the character classes a password actually uses.

/// Character class a code point is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    /// Anything that is not an ASCII letter or digit.
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Number of symbols an attacker must try for this class.
    pub fn size(self) -> usize {
        match self {
            CharClass::Lower => 26,
            CharClass::Upper => 26,
            CharClass::Digit => 10,
            CharClass::Symbol => 32,
        }
    }

    pub fn of(c: char) -> Self {
        match c {
            'a'..='z' => CharClass::Lower,
            'A'..='Z' => CharClass::Upper,
            '0'..='9' => CharClass::Digit,
            _ => CharClass::Symbol,
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Lower => 1,
            CharClass::Upper => 2,
            CharClass::Digit => 4,
            CharClass::Symbol => 8,
        }
    }
}

/// Set of classes present in a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses(u8);

impl CharClasses {
    pub fn of(password: &str) -> Self {
        Self(password.chars().fold(0, |acc, c| acc | CharClass::of(c).bit()))
    }

    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Sum of the sizes of the present classes.
    pub fn alphabet_size(self) -> usize {
        self.iter().map(CharClass::size).sum()
    }
}

/// Calculate password entropy in bits.
/// entropy = length * log2(charset_size)
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 || password_length == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Alphabet size implied by the classes present in `password`.
pub fn effective_alphabet_size(password: &str) -> usize {
    CharClasses::of(password).alphabet_size()
}

/// Entropy of `password` over its realized alphabet. Empty input is 0 bits.
pub fn entropy_bits(password: &str) -> f64 {
    calculate_entropy(password.chars().count(), effective_alphabet_size(password))
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
