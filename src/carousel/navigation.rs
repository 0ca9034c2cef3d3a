use serde::{Deserialize, Serialize};

use crate::carousel::motion::{ApproachConfig, FloatingIndex};
use crate::catalog::year_index::{YearIndex, decade_of};
use crate::error::{ArchiveError, ArchiveResult};
use crate::interaction::{DragState, PointerMode, WheelConfig, WheelGate};

/// Input tuning shared by every carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselTuning {
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub approach: ApproachConfig,
    /// Clicks within this window after a drag release are swallowed.
    #[serde(default = "default_drag_click_guard_ms")]
    pub drag_click_guard_ms: u64,
}

fn default_drag_click_guard_ms() -> u64 {
    100
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            wheel: WheelConfig::default(),
            approach: ApproachConfig::default(),
            drag_click_guard_ms: default_drag_click_guard_ms(),
        }
    }
}

impl CarouselTuning {
    pub(crate) fn validate(self) -> ArchiveResult<Self> {
        self.wheel.validate()?;
        self.approach.validate()?;
        Ok(self)
    }
}

/// The year-carousel state machine.
///
/// Owns the authoritative discrete selection (`current_index`) and the
/// continuous `FloatingIndex` that converges to it. All mutation flows
/// through these operations; out-of-range targets clamp, and a zero-year
/// carousel degenerates to an inert state where every operation no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    years: Vec<i32>,
    current_index: usize,
    floating: FloatingIndex,
    drag: DragState,
    wheel: WheelGate,
    pointer_mode: PointerMode,
    drag_sensitivity: f64,
    tuning: CarouselTuning,
}

impl NavigationController {
    /// `drag_sensitivity` is pixels per slot; it differs between the full
    /// and minimized presentations.
    pub fn new(
        index: &YearIndex,
        initial_index: usize,
        drag_sensitivity: f64,
        tuning: CarouselTuning,
    ) -> ArchiveResult<Self> {
        let tuning = tuning.validate()?;
        if !drag_sensitivity.is_finite() || drag_sensitivity <= 0.0 {
            return Err(ArchiveError::InvalidData(
                "drag sensitivity must be finite and > 0".to_owned(),
            ));
        }

        let years = index.years().to_vec();
        let current_index = if years.is_empty() {
            0
        } else {
            initial_index.min(years.len() - 1)
        };

        Ok(Self {
            years,
            current_index,
            floating: FloatingIndex::at(current_index as f64),
            drag: DragState::default(),
            wheel: WheelGate::default(),
            pointer_mode: PointerMode::Idle,
            drag_sensitivity,
            tuning,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// `None` only in the degenerate zero-year state.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.years.is_empty() {
            None
        } else {
            Some(self.current_index)
        }
    }

    #[must_use]
    pub fn current_year(&self) -> Option<i32> {
        self.years.get(self.current_index).copied()
    }

    #[must_use]
    pub fn floating_index(&self) -> f64 {
        self.floating.value()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.floating.is_settled()
    }

    #[must_use]
    pub fn pointer_mode(&self) -> PointerMode {
        self.pointer_mode
    }

    #[must_use]
    pub fn tuning(&self) -> CarouselTuning {
        self.tuning
    }

    /// Clamped navigation; negative and past-the-end targets saturate at
    /// the boundary years rather than rejecting.
    pub fn go_to_index(&mut self, index: i64, animated: bool) {
        if self.years.is_empty() {
            return;
        }
        let clamped = index.clamp(0, self.years.len() as i64 - 1) as usize;
        self.current_index = clamped;
        if animated {
            self.floating.retarget(clamped as f64);
        } else {
            self.floating.snap_to(clamped as f64);
        }
    }

    pub fn step(&mut self, direction: i32) {
        if self.years.is_empty() {
            return;
        }
        self.go_to_index(self.current_index as i64 + i64::from(direction), true);
    }

    /// Navigates to the closest catalog year; ties resolve earlier.
    pub fn go_to_year(&mut self, year: i32, animated: bool) {
        let Some(nearest) = nearest_year(&self.years, year) else {
            return;
        };
        if let Ok(position) = self.years.binary_search(&nearest) {
            self.go_to_index(position as i64, animated);
        }
    }

    /// Jumps to the first (earliest) year of `decade`. Returns `false` when
    /// the decade has no catalog years. Landing on the start of the era is
    /// deliberate; nearest-to-current would defeat decade jumps as chapter
    /// marks.
    pub fn go_to_decade(&mut self, decade: i32) -> bool {
        let Some(first) = self
            .years
            .iter()
            .copied()
            .find(|&year| decade_of(year) == decade)
        else {
            return false;
        };
        self.go_to_year(first, true);
        true
    }

    /// Wheel input. Returns `true` when the delta produced a step.
    pub fn ingest_wheel(&mut self, delta: f64, now_ms: u64) -> bool {
        if self.years.is_empty() {
            return false;
        }
        match self.wheel.ingest(delta, now_ms, self.tuning.wheel) {
            Some(direction) => {
                self.step(direction);
                true
            }
            None => false,
        }
    }

    pub fn begin_drag(&mut self) {
        if self.years.is_empty() {
            return;
        }
        self.pointer_mode = PointerMode::DraggingCards;
        self.drag.begin(self.current_index);
    }

    /// Feeds one pointer-move delta of a live card drag. The selection
    /// rubber-bands to the rounded accumulator position while the gesture
    /// keeps fractional precision, so reversing a drag is exact.
    pub fn ingest_drag_delta(&mut self, delta_px: f64) {
        if self.years.is_empty() || !self.drag.is_active() {
            return;
        }
        self.drag.accumulate(delta_px);
        let target = self.drag.target_index(self.drag_sensitivity);
        let rounded = target.round() as i64;
        let clamped = rounded.clamp(0, self.years.len() as i64 - 1) as usize;
        if clamped != self.current_index {
            self.current_index = clamped;
            self.floating.retarget(clamped as f64);
        }
    }

    pub fn end_drag(&mut self, now_ms: u64) {
        if !self.drag.is_active() {
            return;
        }
        self.drag.end(now_ms);
        self.pointer_mode = PointerMode::Idle;
        self.floating.retarget(self.current_index as f64);
    }

    /// True while a drag gesture should swallow the click that ends it.
    #[must_use]
    pub fn is_click_suppressed(&self, now_ms: u64) -> bool {
        self.drag
            .suppresses_click(now_ms, self.tuning.drag_click_guard_ms)
    }

    pub fn begin_scrubber(&mut self) {
        if self.years.is_empty() {
            return;
        }
        self.pointer_mode = PointerMode::DraggingScrubber;
    }

    /// Absolute scrubber position, `fraction` in `[0, 1]` across the whole
    /// year range. While the scrubber is held the floating index follows the
    /// pointer exactly; otherwise this animates to the nearest slot.
    pub fn ingest_scrubber_fraction(&mut self, fraction: f64) {
        if self.years.is_empty() || !fraction.is_finite() {
            return;
        }
        let clamped = fraction.clamp(0.0, 1.0);
        let target = clamped * (self.years.len() - 1) as f64;
        if self.pointer_mode == PointerMode::DraggingScrubber {
            self.floating.snap_to(target);
            self.current_index = target.round() as usize;
        } else {
            self.go_to_index(target.round() as i64, true);
        }
    }

    /// Releases the scrubber: snaps the selection to the nearest slot and
    /// eases the floating index onto it.
    pub fn end_scrubber(&mut self) {
        if self.pointer_mode != PointerMode::DraggingScrubber {
            return;
        }
        self.pointer_mode = PointerMode::Idle;
        if self.years.is_empty() {
            return;
        }
        let final_index = (self.floating.value().round() as i64)
            .clamp(0, self.years.len() as i64 - 1) as usize;
        self.current_index = final_index;
        self.floating.retarget(final_index as f64);
    }

    /// Advances the floating index one frame. Returns `true` while still
    /// animating (the host should keep scheduling frames).
    pub fn advance(&mut self, dt_seconds: f64) -> bool {
        self.floating.advance(dt_seconds, self.tuning.approach)
    }
}

fn nearest_year(years: &[i32], year: i32) -> Option<i32> {
    years.iter().copied().fold(None, |best, candidate| match best {
        None => Some(candidate),
        Some(current) => {
            let candidate_distance = i64::from(candidate).abs_diff(i64::from(year));
            let current_distance = i64::from(current).abs_diff(i64::from(year));
            if candidate_distance < current_distance {
                Some(candidate)
            } else {
                Some(current)
            }
        }
    })
}
