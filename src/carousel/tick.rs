use serde::{Deserialize, Serialize};

/// Rate limit for the mechanical advance cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickConfig {
    /// Minimum spacing between emitted ticks, regardless of how fast the
    /// year changes underneath.
    pub min_interval_ms: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self { min_interval_ms: 80 }
    }
}

/// Change detector plus rate limiter for the year-advance cue.
///
/// Fires at most once per distinct year change and never twice within the
/// configured interval. The first observed year primes the detector without
/// firing. Timestamps come from the host so tests stay deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEmitter {
    config: TickConfig,
    last_year: Option<i32>,
    last_tick_at_ms: Option<u64>,
}

impl TickEmitter {
    #[must_use]
    pub fn new(config: TickConfig) -> Self {
        Self {
            config,
            last_year: None,
            last_tick_at_ms: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> TickConfig {
        self.config
    }

    /// Observes the current discrete year. Returns `true` when the cue
    /// should fire. A year change inside the rate-limit window is still
    /// recorded, just not audible.
    pub fn observe(&mut self, year: i32, now_ms: u64) -> bool {
        let changed = self.last_year.is_some_and(|last| last != year);
        self.last_year = Some(year);
        if !changed {
            return false;
        }

        if let Some(last_tick) = self.last_tick_at_ms {
            if now_ms.saturating_sub(last_tick) < self.config.min_interval_ms {
                return false;
            }
        }

        self.last_tick_at_ms = Some(now_ms);
        true
    }

    /// Forgets history; the next observation primes without firing.
    pub fn reset(&mut self) {
        self.last_year = None;
        self.last_tick_at_ms = None;
    }
}
