//! Attack strategies and their modelled coverage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    /// Exhaustive enumeration of the keyspace.
    #[default]
    Sequential,
    /// Candidates from wordlists of leaked and common passwords.
    Dictionary,
    /// Wordlist candidates with mangling rules and appended characters.
    Hybrid,
}

impl AttackKind {
    pub const ALL: [AttackKind; 3] = [
        AttackKind::Sequential,
        AttackKind::Dictionary,
        AttackKind::Hybrid,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AttackKind::Sequential => "sequential",
            AttackKind::Dictionary => "dictionary",
            AttackKind::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AttackKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "brute-force" | "bruteforce" => Ok(AttackKind::Sequential),
            "dictionary" => Ok(AttackKind::Dictionary),
            "hybrid" => Ok(AttackKind::Hybrid),
            other => Err(format!("unknown attack method: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackMethod {
    pub kind: AttackKind,
    /// Multiplier on the hardware's effective guess rate.
    pub relative_speed_factor: f64,
    /// Chance the method finds the password at all, in [0, 1].
    pub success_probability: f64,
    /// Share of the full keyspace the method covers, in (0, 1].
    pub search_space_fraction: f64,
}

impl AttackMethod {
    pub fn sequential() -> Self {
        Self {
            kind: AttackKind::Sequential,
            relative_speed_factor: 1.0,
            success_probability: 1.0,
            search_space_fraction: 1.0,
        }
    }

    pub fn dictionary() -> Self {
        Self {
            kind: AttackKind::Dictionary,
            relative_speed_factor: 1.5,
            success_probability: 0.35,
            search_space_fraction: 0.05,
        }
    }

    pub fn hybrid() -> Self {
        Self {
            kind: AttackKind::Hybrid,
            relative_speed_factor: 1.2,
            success_probability: 0.6,
            search_space_fraction: 0.25,
        }
    }

    /// Built-in parameters for `kind`.
    pub fn of(kind: AttackKind) -> Self {
        match kind {
            AttackKind::Sequential => Self::sequential(),
            AttackKind::Dictionary => Self::dictionary(),
            AttackKind::Hybrid => Self::hybrid(),
        }
    }

    pub fn custom(
        kind: AttackKind,
        relative_speed_factor: f64,
        success_probability: f64,
        search_space_fraction: f64,
    ) -> Result<Self> {
        let method = Self {
            kind,
            relative_speed_factor,
            success_probability,
            search_space_fraction,
        };
        method.validate()?;
        Ok(method)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.relative_speed_factor.is_finite() && self.relative_speed_factor > 0.0) {
            return Err(Error::invalid("relative speed factor must be positive"));
        }
        if !(0.0..=1.0).contains(&self.success_probability) {
            return Err(Error::invalid("success probability must be within [0, 1]"));
        }
        if !(self.search_space_fraction > 0.0 && self.search_space_fraction <= 1.0) {
            return Err(Error::invalid("search space fraction must be within (0, 1]"));
        }
        Ok(())
    }
}

impl Default for AttackMethod {
    fn default() -> Self {
        Self::sequential()
    }
}
