use serde::{Deserialize, Serialize};

use crate::error::{ArchiveError, ArchiveResult};

/// Tuning for the deterministic floating-index convergence.
///
/// The approach is an exponential decay toward the target, stepped once per
/// host frame, with an epsilon snap so it terminates exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproachConfig {
    /// Fraction of remaining distance closed per second, as a decay rate.
    pub rate_per_second: f64,
    /// Remaining distance below which the value snaps onto the target.
    pub settle_epsilon: f64,
}

impl Default for ApproachConfig {
    fn default() -> Self {
        Self {
            rate_per_second: 12.0,
            settle_epsilon: 1e-3,
        }
    }
}

impl ApproachConfig {
    pub(crate) fn validate(self) -> ArchiveResult<Self> {
        if !self.rate_per_second.is_finite() || self.rate_per_second <= 0.0 {
            return Err(ArchiveError::InvalidData(
                "approach rate must be finite and > 0".to_owned(),
            ));
        }
        if !self.settle_epsilon.is_finite() || self.settle_epsilon <= 0.0 {
            return Err(ArchiveError::InvalidData(
                "settle epsilon must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// The continuous carousel position, converging toward a discrete target.
///
/// Retargeting supersedes any in-flight approach; there is never more than
/// one live target. The value moves strictly toward the target and never
/// overshoots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingIndex {
    value: f64,
    target: f64,
    settled: bool,
}

impl FloatingIndex {
    #[must_use]
    pub fn at(value: f64) -> Self {
        Self {
            value,
            target: value,
            settled: true,
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn is_settled(self) -> bool {
        self.settled
    }

    /// Points the approach at a new target, cancelling the previous one.
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
        self.settled = self.value == target;
    }

    /// Jumps value and target together (non-animated navigation).
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.settled = true;
    }

    /// Advances one frame. Returns `true` while still converging.
    ///
    /// Non-positive or non-finite `dt_seconds` leaves the value unchanged.
    pub fn advance(&mut self, dt_seconds: f64, config: ApproachConfig) -> bool {
        if self.settled {
            return false;
        }
        if !dt_seconds.is_finite() || dt_seconds <= 0.0 {
            return true;
        }

        let remaining = self.target - self.value;
        let blend = 1.0 - (-config.rate_per_second * dt_seconds).exp();
        self.value += remaining * blend;

        if (self.target - self.value).abs() <= config.settle_epsilon {
            self.value = self.target;
            self.settled = true;
        }
        !self.settled
    }
}

impl Default for FloatingIndex {
    fn default() -> Self {
        Self::at(0.0)
    }
}
