//! Adversary hardware profiles.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named adversary compute capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub id: String,
    pub name: String,
    /// Guesses per second before the length penalty.
    pub hashes_per_second_base: u64,
    pub power_draw_kw: f64,
}

impl HardwareProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hashes_per_second_base: u64,
        power_draw_kw: f64,
    ) -> Result<Self> {
        let profile = Self {
            id: id.into(),
            name: name.into(),
            hashes_per_second_base,
            power_draw_kw,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hashes_per_second_base == 0 {
            return Err(Error::invalid(format!(
                "hardware '{}' must have a positive hash rate",
                self.id
            )));
        }
        if !(self.power_draw_kw.is_finite() && self.power_draw_kw > 0.0) {
            return Err(Error::invalid(format!(
                "hardware '{}' must have a positive power draw",
                self.id
            )));
        }
        Ok(())
    }
}

static CATALOG: LazyLock<Vec<HardwareProfile>> = LazyLock::new(|| {
    [
        ("basic-cpu", "Basic CPU", 500_000, 0.065),
        ("high-end-cpu", "High-end CPU", 10_000_000, 0.25),
        ("consumer-gpu", "Consumer GPU", 1_000_000_000, 0.3),
        ("high-end-gpu", "High-end GPU", 10_000_000_000, 0.45),
        ("gpu-rig", "8x GPU rig", 100_000_000_000, 3.6),
        ("cluster", "Cracking cluster", 1_000_000_000_000, 40.0),
    ]
    .into_iter()
    .map(|(id, name, hps, kw)| HardwareProfile {
        id: id.to_string(),
        name: name.to_string(),
        hashes_per_second_base: hps,
        power_draw_kw: kw,
    })
    .collect()
});

/// Built-in profiles, slowest first.
pub fn catalog() -> &'static [HardwareProfile] {
    &CATALOG
}

/// Look up a built-in profile by id (case-insensitive).
pub fn find(id: &str) -> Option<HardwareProfile> {
    catalog()
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id.trim()))
        .cloned()
}

/// The slowest built-in profile.
pub fn baseline() -> HardwareProfile {
    catalog()[0].clone()
}
