//! Password strength evaluation.
//!
//! Two complementary measures are reported side by side: the brute-force
//! entropy of the realized alphabet (computed locally) and the oracle's
//! pattern-aware score. A password can have high raw entropy and still
//! score low because of a detectable pattern.

pub mod entropy;
mod oracle;

use serde::Serialize;
use zxcvbn::time_estimates::CrackTimeSeconds;

use crate::error::Result;

pub use entropy::{
    CharClass, CharClasses, calculate_entropy, effective_alphabet_size, entropy_bits,
    entropy_strength,
};
pub use oracle::{CrackTimes, MatchSegment, OracleAssessment, StrengthOracle, ZxcvbnOracle};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    /// Oracle score, 0 to 4.
    pub score: u8,
    pub entropy_bits: f64,
    /// Empty when the oracle has nothing to warn about.
    pub warning: String,
    pub suggestions: Vec<String>,
    pub crack_times: CrackTimes,
    /// Pattern of the longest matched segment.
    pub pattern: String,
    pub sequence: Vec<MatchSegment>,
}

impl StrengthReport {
    pub fn label(&self) -> &'static str {
        score_label(self.score)
    }
}

pub fn score_label(score: u8) -> &'static str {
    match score {
        0 => "Very weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Strong",
        _ => "Very strong",
    }
}

pub struct StrengthEvaluator<O = ZxcvbnOracle> {
    oracle: O,
}

impl StrengthEvaluator<ZxcvbnOracle> {
    pub fn new() -> Self {
        Self {
            oracle: ZxcvbnOracle::new(),
        }
    }
}

impl Default for StrengthEvaluator<ZxcvbnOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: StrengthOracle> StrengthEvaluator<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    /// Local entropy estimate; never consults the oracle.
    pub fn entropy_bits(&self, password: &str) -> f64 {
        entropy_bits(password)
    }

    /// Full report. Fails only if the oracle does.
    pub fn evaluate(&self, password: &str) -> Result<StrengthReport> {
        let assessment = self.oracle.assess(password).inspect_err(|e| {
            log::warn!("{} oracle failed: {e}", self.oracle.name());
        })?;

        let pattern = dominant_pattern(&assessment.sequence);

        Ok(StrengthReport {
            score: assessment.score.min(4),
            entropy_bits: entropy_bits(password),
            warning: assessment.warning.unwrap_or_default(),
            suggestions: assessment.suggestions,
            crack_times: assessment.crack_times,
            pattern,
            sequence: assessment.sequence,
        })
    }
}

fn dominant_pattern(sequence: &[MatchSegment]) -> String {
    sequence
        .iter()
        .rev()
        .max_by_key(|seg| seg.token.chars().count())
        .map(|seg| seg.pattern.clone())
        .unwrap_or_else(|| String::from("none"))
}

/// Human-readable duration in zxcvbn's wording ("3 months", "centuries").
pub fn format_duration(seconds: f64) -> String {
    CrackTimeSeconds::Float(seconds).to_string()
}
