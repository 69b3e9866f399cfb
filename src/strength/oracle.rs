//! Heuristic strength oracle seam.
//!
//! Pattern and dictionary scoring is delegated to an implementation of
//! [`StrengthOracle`]. The default one wraps the `zxcvbn` crate.

use serde::{Deserialize, Serialize};
use zxcvbn::matching::patterns::MatchPattern;
use zxcvbn::time_estimates::{self, CrackTimeSeconds};
use zxcvbn::{Score, zxcvbn};

use crate::error::Result;

/// Seconds to crack under each standard scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrackTimes {
    pub online_throttling_100_per_hour: f64,
    pub online_no_throttling_10_per_second: f64,
    pub offline_slow_hashing_1e4_per_second: f64,
    pub offline_fast_hashing_1e10_per_second: f64,
}

impl CrackTimes {
    /// Crack times zxcvbn assigns to `guesses`.
    pub fn for_guesses(guesses: u64) -> Self {
        time_estimates::CrackTimes::new(guesses).into()
    }

    /// Scenario label and seconds, slowest attacker first.
    pub fn scenarios(&self) -> [(&'static str, f64); 4] {
        [
            ("online, throttled (100/h)", self.online_throttling_100_per_hour),
            ("online, unthrottled (10/s)", self.online_no_throttling_10_per_second),
            ("offline, slow hash (1e4/s)", self.offline_slow_hashing_1e4_per_second),
            ("offline, fast hash (1e10/s)", self.offline_fast_hashing_1e10_per_second),
        ]
    }
}

impl From<time_estimates::CrackTimes> for CrackTimes {
    fn from(times: time_estimates::CrackTimes) -> Self {
        Self {
            online_throttling_100_per_hour: seconds(times.online_throttling_100_per_hour()),
            online_no_throttling_10_per_second: seconds(times.online_no_throttling_10_per_second()),
            offline_slow_hashing_1e4_per_second: seconds(
                times.offline_slow_hashing_1e4_per_second(),
            ),
            offline_fast_hashing_1e10_per_second: seconds(
                times.offline_fast_hashing_1e10_per_second(),
            ),
        }
    }
}

fn seconds(time: CrackTimeSeconds) -> f64 {
    match time {
        CrackTimeSeconds::Integer(secs) => secs as f64,
        CrackTimeSeconds::Float(secs) => secs,
    }
}

/// One matched piece of the password and the pattern that matched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSegment {
    pub pattern: String,
    pub token: String,
}

/// What an oracle reports about a password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleAssessment {
    /// 0 (too guessable) to 4 (very unguessable).
    pub score: u8,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    pub crack_times: CrackTimes,
    pub sequence: Vec<MatchSegment>,
}

pub trait StrengthOracle {
    /// Assess `password`. Failures should be reported as
    /// [`crate::Error::OracleUnavailable`].
    fn assess(&self, password: &str) -> Result<OracleAssessment>;

    fn name(&self) -> &'static str;
}

/// Oracle backed by the zxcvbn estimator.
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnOracle {
    user_inputs: Vec<String>,
}

impl ZxcvbnOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context strings (user name, site) penalised when they appear in
    /// the password.
    pub fn with_user_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

impl StrengthOracle for ZxcvbnOracle {
    fn assess(&self, password: &str) -> Result<OracleAssessment> {
        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn(password, &inputs);

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback.suggestions().iter().map(|s| s.to_string()).collect(),
            ),
            None => (None, Vec::new()),
        };

        let sequence = entropy
            .sequence()
            .iter()
            .map(|m| MatchSegment {
                pattern: pattern_label(&m.pattern).to_string(),
                token: m.token.clone(),
            })
            .collect();

        Ok(OracleAssessment {
            score: score_value(entropy.score()),
            warning,
            suggestions,
            crack_times: entropy.crack_times().into(),
            sequence,
        })
    }

    fn name(&self) -> &'static str {
        "zxcvbn"
    }
}

fn score_value(score: Score) -> u8 {
    match score {
        Score::Zero => 0,
        Score::One => 1,
        Score::Two => 2,
        Score::Three => 3,
        Score::Four => 4,
        _ => 0,
    }
}

fn pattern_label(pattern: &MatchPattern) -> &'static str {
    match pattern {
        MatchPattern::Dictionary(_) => "dictionary",
        MatchPattern::Spatial(_) => "spatial",
        MatchPattern::Repeat(_) => "repeat",
        MatchPattern::Sequence(_) => "sequence",
        MatchPattern::Regex(_) => "regex",
        MatchPattern::Date(_) => "date",
        MatchPattern::BruteForce => "bruteforce",
    }
}
