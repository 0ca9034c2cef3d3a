use serde::{Deserialize, Serialize};

use crate::error::{ArchiveError, ArchiveResult};

/// What the pointer is currently doing to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PointerMode {
    #[default]
    Idle,
    DraggingCards,
    DraggingScrubber,
}

/// Wheel gating: one discrete step per gesture, not one per event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Deltas at or below this magnitude are ignored as jitter.
    pub step_threshold: f64,
    /// Further step-producing events are ignored until this elapses.
    pub cooldown_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            step_threshold: 10.0,
            cooldown_ms: 100,
        }
    }
}

impl WheelConfig {
    pub(crate) fn validate(self) -> ArchiveResult<Self> {
        if !self.step_threshold.is_finite() || self.step_threshold < 0.0 {
            return Err(ArchiveError::InvalidData(
                "wheel step threshold must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Elapsed-time gate over wheel deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelGate {
    last_step_at_ms: Option<u64>,
}

impl WheelGate {
    /// Returns the step direction (`+1`/`-1`) when this delta should advance
    /// the carousel, `None` while gated or below threshold.
    pub fn ingest(&mut self, delta: f64, now_ms: u64, config: WheelConfig) -> Option<i32> {
        if !delta.is_finite() {
            return None;
        }
        if let Some(last) = self.last_step_at_ms {
            if now_ms.saturating_sub(last) < config.cooldown_ms {
                return None;
            }
        }
        if delta.abs() <= config.step_threshold {
            return None;
        }
        self.last_step_at_ms = Some(now_ms);
        Some(if delta > 0.0 { 1 } else { -1 })
    }
}

/// Cumulative pixel accumulator for a live card drag.
///
/// The accumulator keeps fractional precision across the whole gesture, so
/// dragging `+d` then `-d` pixels lands back on the starting slot exactly.
/// A short post-release window lets callers swallow the click that ends a
/// drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    active: bool,
    start_index: usize,
    accumulated_px: f64,
    released_at_ms: Option<u64>,
}

impl DragState {
    pub fn begin(&mut self, start_index: usize) {
        self.active = true;
        self.start_index = start_index;
        self.accumulated_px = 0.0;
        self.released_at_ms = None;
    }

    /// Adds one pointer-move delta. Non-finite deltas are dropped.
    pub fn accumulate(&mut self, delta_px: f64) {
        if self.active && delta_px.is_finite() {
            self.accumulated_px += delta_px;
        }
    }

    /// Fractional slot the gesture currently points at. Dragging left
    /// (negative pixels) moves forward through the years.
    #[must_use]
    pub fn target_index(&self, sensitivity_px_per_slot: f64) -> f64 {
        self.start_index as f64 - self.accumulated_px / sensitivity_px_per_slot
    }

    pub fn end(&mut self, now_ms: u64) {
        self.active = false;
        self.accumulated_px = 0.0;
        self.released_at_ms = Some(now_ms);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// True while dragging or within `guard_ms` of release.
    #[must_use]
    pub fn suppresses_click(&self, now_ms: u64, guard_ms: u64) -> bool {
        if self.active {
            return true;
        }
        self.released_at_ms
            .is_some_and(|released| now_ms.saturating_sub(released) < guard_ms)
    }
}
