//! Password and passphrase generation, strength reporting and an
//! attack-cost simulator.
//!
//! ```no_run
//! use passlab::{GenerationConfig, evaluate_strength, generate_charset_password};
//!
//! let password = generate_charset_password(&GenerationConfig::default().length(20))?;
//! let report = evaluate_strength(password.as_str())?;
//! println!("{} bits, {}", report.entropy_bits, report.label());
//! # Ok::<(), passlab::Error>(())
//! ```

pub mod error;
pub mod pass;
pub mod rng;
pub mod settings;
pub mod sim;
pub mod strength;

pub use error::{Error, Result};
pub use pass::{CharacterSet, GeneratedPassword, GenerationConfig, PasswordKind, WordLanguage};
pub use rng::SecureRandom;
pub use settings::{FileStore, KeyValueStore, MemoryStore, Settings};
pub use sim::{
    AttackKind, AttackMethod, AttackSimulator, HardwareProfile, SimulationConfig,
    SimulationSnapshot, SimulationState, SimulationSummary,
};
pub use strength::{StrengthEvaluator, StrengthOracle, StrengthReport, ZxcvbnOracle};

/// Character password from the OS CSPRNG.
pub fn generate_charset_password(config: &GenerationConfig) -> Result<GeneratedPassword> {
    pass::generate(config, &mut SecureRandom::new())
}

/// Passphrase from the configured word list and the OS CSPRNG.
pub fn generate_word_password(config: &GenerationConfig) -> Result<GeneratedPassword> {
    pass::generate_words(config, &mut SecureRandom::new())
}

/// Entropy estimate plus the zxcvbn assessment.
pub fn evaluate_strength(password: &str) -> Result<StrengthReport> {
    StrengthEvaluator::new().evaluate(password)
}
