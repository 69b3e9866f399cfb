//! Attack simulator.
//!
//! [`AttackSimulator`] is a plain state machine. It never reads a clock or
//! schedules anything itself: the host calls [`AttackSimulator::tick`] with
//! an absolute clock reading in seconds (any fixed origin, e.g. seconds
//! since the host loop began) and the simulator recomputes everything from
//! that reading, so irregular or late ticks are harmless.

pub mod hardware;
mod history;
pub mod method;
pub mod model;

pub use hardware::HardwareProfile;
pub use history::{HISTORY_LEN, History, Sample};
pub use method::{AttackKind, AttackMethod};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::pass::GeneratedPassword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationState {
    #[default]
    Idle,
    Running,
    Paused,
    Complete,
}

impl std::fmt::Display for SimulationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SimulationState::Idle => "idle",
            SimulationState::Running => "running",
            SimulationState::Paused => "paused",
            SimulationState::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// What is being attacked, how, and on what.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub password_length: usize,
    pub alphabet_size: usize,
    pub method: AttackMethod,
    pub hardware: HardwareProfile,
}

impl SimulationConfig {
    pub fn new(
        password_length: usize,
        alphabet_size: usize,
        method: AttackMethod,
        hardware: HardwareProfile,
    ) -> Self {
        Self {
            password_length,
            alphabet_size,
            method,
            hardware,
        }
    }

    /// Target a generated password using its own alphabet and symbol count.
    ///
    /// For a passphrase the keyspace covers the drawn words only. A numeric
    /// suffix is left out, so its search space is `2^entropy_bits / 900`
    /// rather than `2^entropy_bits`.
    pub fn for_password(
        password: &GeneratedPassword,
        method: AttackMethod,
        hardware: HardwareProfile,
    ) -> Self {
        Self::new(password.symbol_count(), password.alphabet_size(), method, hardware)
    }

    pub fn validate(&self) -> Result<()> {
        self.method.validate()?;
        self.hardware.validate()
    }
}

/// Derived, time-independent quantities for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttackModel {
    pub search_space: f64,
    pub effective_speed: f64,
    /// Guesses per second after the method's speed factor.
    pub attempt_rate: f64,
    pub estimated_completion_seconds: f64,
}

impl AttackModel {
    pub fn from_config(config: &SimulationConfig) -> Self {
        let search_space = model::search_space(
            config.alphabet_size,
            config.password_length,
            config.method.search_space_fraction,
        );
        let effective_speed = model::effective_speed(
            config.hardware.hashes_per_second_base,
            config.password_length,
        );
        let attempt_rate = effective_speed * config.method.relative_speed_factor;
        Self {
            search_space,
            effective_speed,
            attempt_rate,
            estimated_completion_seconds: model::completion_seconds(search_space, attempt_rate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationSnapshot {
    pub state: SimulationState,
    pub elapsed_seconds: f64,
    pub attempts: f64,
    pub search_space: f64,
    pub progress_percent: f64,
    pub effective_speed: f64,
    pub energy_kwh: f64,
    pub efficiency: f64,
    pub estimated_completion_seconds: f64,
}

/// Everything a report needs after (or during) a run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub method: AttackKind,
    pub hardware: HardwareProfile,
    pub password_length: usize,
    pub alphabet_size: usize,
    pub success_probability: f64,
    pub snapshot: SimulationSnapshot,
    pub history: History,
}

#[derive(Debug, Clone)]
pub struct AttackSimulator {
    config: SimulationConfig,
    model: AttackModel,
    state: SimulationState,
    session: u64,
    // Elapsed time from closed Running segments.
    banked_seconds: f64,
    // Clock reading at the start of the current Running segment.
    segment_start: Option<f64>,
    elapsed_seconds: f64,
    attempts: f64,
    history: History,
}

impl AttackSimulator {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let model = AttackModel::from_config(&config);
        log::debug!(
            "simulator: space={} rate={:.1}/s eta={:.3}s",
            model.search_space,
            model.attempt_rate,
            model.estimated_completion_seconds
        );
        Ok(Self {
            config,
            model,
            state: SimulationState::Idle,
            session: 0,
            banked_seconds: 0.0,
            segment_start: None,
            elapsed_seconds: 0.0,
            attempts: 0.0,
            history: History::new(),
        })
    }

    /// Swap the target, method or hardware. Always resets, even while
    /// running, so accumulated attempts never meet a new search space.
    pub fn configure(&mut self, config: SimulationConfig) -> Result<()> {
        config.validate()?;
        self.model = AttackModel::from_config(&config);
        self.config = config;
        self.reset();
        Ok(())
    }

    pub fn start(&mut self, now: f64) {
        match self.state {
            SimulationState::Idle | SimulationState::Paused => {
                log::debug!("simulator: {} -> running at {now:.3}", self.state);
                self.segment_start = Some(now);
                self.state = SimulationState::Running;
            }
            SimulationState::Running | SimulationState::Complete => {}
        }
    }

    /// Freeze the run, counting time up to `now`.
    pub fn pause(&mut self, now: f64) {
        if self.state != SimulationState::Running {
            return;
        }
        self.advance(now);
        if self.state == SimulationState::Running {
            self.banked_seconds = self.elapsed_seconds;
            self.segment_start = None;
            self.state = SimulationState::Paused;
            log::debug!("simulator: paused at {:.3}s", self.elapsed_seconds);
        }
    }

    pub fn reset(&mut self) {
        self.state = SimulationState::Idle;
        self.banked_seconds = 0.0;
        self.segment_start = None;
        self.elapsed_seconds = 0.0;
        self.attempts = 0.0;
        self.history.clear();
        self.session = self.session.wrapping_add(1);
        log::debug!("simulator: reset, session {}", self.session);
    }

    /// Advance to clock reading `now` and record a sample.
    ///
    /// Only a running simulation moves; other states hand back the
    /// current snapshot untouched.
    pub fn tick(&mut self, now: f64) -> SimulationSnapshot {
        if self.state == SimulationState::Running {
            self.advance(now);
            let snapshot = self.snapshot();
            self.history.push(Sample {
                elapsed_seconds: snapshot.elapsed_seconds,
                effective_speed: snapshot.effective_speed,
                energy_kwh: snapshot.energy_kwh,
                efficiency: snapshot.efficiency,
                progress_percent: snapshot.progress_percent,
            });
            return snapshot;
        }
        self.snapshot()
    }

    /// Like [`tick`](Self::tick), but ignored unless `session` is still
    /// current. A timer armed before a reset carries the old session.
    pub fn tick_session(&mut self, session: u64, now: f64) -> SimulationSnapshot {
        if session != self.session {
            log::debug!("simulator: dropping tick for stale session {session}");
            return self.snapshot();
        }
        self.tick(now)
    }

    fn advance(&mut self, now: f64) {
        let Some(start) = self.segment_start else {
            return;
        };
        let candidate = self.banked_seconds + (now - start).max(0.0);
        let elapsed = candidate.max(self.elapsed_seconds);
        let attempts =
            model::attempts_after(elapsed, self.model.attempt_rate, self.model.search_space)
                .max(self.attempts);

        // Past the estimate the search is exhausted even if rounding left
        // `attempts` one short.
        if attempts >= self.model.search_space
            || elapsed >= self.model.estimated_completion_seconds
        {
            self.attempts = self.model.search_space;
            let finish = candidate.min(self.model.estimated_completion_seconds);
            self.elapsed_seconds = finish.max(self.elapsed_seconds);
            self.banked_seconds = self.elapsed_seconds;
            self.segment_start = None;
            self.state = SimulationState::Complete;
            log::debug!("simulator: complete after {:.3}s", self.elapsed_seconds);
        } else {
            self.elapsed_seconds = elapsed;
            self.attempts = attempts;
        }
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        let energy_kwh = model::energy_kwh(self.elapsed_seconds, self.config.hardware.power_draw_kw);
        let progress_percent = if self.state == SimulationState::Complete {
            100.0
        } else {
            model::progress_percent(self.attempts, self.model.search_space)
        };
        SimulationSnapshot {
            state: self.state,
            elapsed_seconds: self.elapsed_seconds,
            attempts: self.attempts,
            search_space: self.model.search_space,
            progress_percent,
            effective_speed: self.model.effective_speed,
            energy_kwh,
            efficiency: model::efficiency(self.attempts, energy_kwh),
            estimated_completion_seconds: self.model.estimated_completion_seconds,
        }
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            method: self.config.method.kind,
            hardware: self.config.hardware.clone(),
            password_length: self.config.password_length,
            alphabet_size: self.config.alphabet_size,
            success_probability: self.config.method.success_probability,
            snapshot: self.snapshot(),
            history: self.history.clone(),
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn model(&self) -> &AttackModel {
        &self.model
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl TryFrom<SimulationConfig> for AttackSimulator {
    type Error = Error;

    fn try_from(config: SimulationConfig) -> Result<Self> {
        Self::new(config)
    }
}
