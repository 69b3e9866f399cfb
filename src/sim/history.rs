//! Bounded time series of simulator samples.

use std::collections::VecDeque;

use serde::Serialize;

/// Samples kept; older ones are dropped.
pub const HISTORY_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub elapsed_seconds: f64,
    pub effective_speed: f64,
    pub energy_kwh: f64,
    pub efficiency: f64,
    pub progress_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct History {
    samples: VecDeque<Sample>,
}

impl History {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == HISTORY_LEN {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(t: f64) -> Sample {
        Sample {
            elapsed_seconds: t,
            effective_speed: 1.0,
            energy_kwh: 0.0,
            efficiency: 0.0,
            progress_percent: 0.0,
        }
    }

    #[test]
    fn keeps_most_recent() {
        let mut history = History::new();
        for i in 0..45 {
            history.push(sample(i as f64));
        }
        assert_eq!(history.len(), HISTORY_LEN);
        assert_eq!(history.iter().next().unwrap().elapsed_seconds, 15.0);
        assert_eq!(history.latest().unwrap().elapsed_seconds, 44.0);
    }

    #[test]
    fn clear_empties() {
        let mut history = History::new();
        history.push(sample(1.0));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
