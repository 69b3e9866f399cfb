//! Attack cost model: keyspace, guess rate, time and energy.
//!
//! All quantities are `f64`. Integer-valued results (search space,
//! attempts) are exact up to 2^53 and saturate to infinity for keyspaces
//! beyond the `f64` range.

/// Candidates the attack must cover: `ceil(alphabet^length * fraction)`.
pub fn search_space(alphabet_size: usize, password_length: usize, fraction: f64) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    let keyspace = (alphabet_size as f64).powf(password_length as f64);
    (keyspace * fraction).ceil()
}

/// Guess rate after the length penalty: `base / max(1, log2(length))`.
pub fn effective_speed(hashes_per_second_base: u64, password_length: usize) -> f64 {
    let penalty = (password_length as f64).log2().max(1.0);
    hashes_per_second_base as f64 / penalty
}

/// Seconds to exhaust `search_space` at `attempt_rate` guesses/s.
pub fn completion_seconds(search_space: f64, attempt_rate: f64) -> f64 {
    if search_space <= 0.0 || attempt_rate <= 0.0 {
        return 0.0;
    }
    search_space / attempt_rate
}

/// Attempts made after `elapsed_seconds`, capped at the search space.
pub fn attempts_after(elapsed_seconds: f64, attempt_rate: f64, search_space: f64) -> f64 {
    (elapsed_seconds.max(0.0) * attempt_rate).floor().min(search_space)
}

/// Energy drawn in kWh.
pub fn energy_kwh(elapsed_seconds: f64, power_draw_kw: f64) -> f64 {
    elapsed_seconds.max(0.0) / 3600.0 * power_draw_kw
}

/// Attempts per watt-hour; zero while no energy has been spent.
pub fn efficiency(attempts: f64, energy_kwh: f64) -> f64 {
    if energy_kwh <= 0.0 {
        return 0.0;
    }
    attempts / (energy_kwh * 1000.0)
}

// Largest f64 below 100.
const BELOW_FULL: f64 = 99.999_999_999_999_99;

/// Share of the search space covered, in percent.
///
/// Reads exactly 100 only when `attempts == search_space`; rounding never
/// reports a finished search early.
pub fn progress_percent(attempts: f64, search_space: f64) -> f64 {
    if search_space <= 0.0 {
        return 0.0;
    }
    if attempts >= search_space {
        return 100.0;
    }
    (100.0 * attempts / search_space).min(BELOW_FULL)
}
