use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ArchiveError, ArchiveResult};

/// Tuning for card placement around the focused slot.
///
/// `base_gap` is the spacing between the focused card and its first
/// neighbor; each further step shrinks by `compression`, so distant cards
/// pile up toward the edges instead of marching off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutProfile {
    pub base_gap: f64,
    pub compression: f64,
    pub focused_scale: f64,
    pub side_scale_base: f64,
    pub scale_falloff: f64,
    pub min_scale: f64,
    pub opacity_base: f64,
    pub opacity_falloff: f64,
    pub min_opacity: f64,
    pub tilt_per_offset: f64,
    pub focused_lift: f64,
    pub side_drop: f64,
    pub visible_range: usize,
    pub drag_sensitivity: f64,
}

impl LayoutProfile {
    /// Full-page timeline presentation.
    #[must_use]
    pub fn full() -> Self {
        Self {
            base_gap: 140.0,
            compression: 0.8,
            focused_scale: 1.15,
            side_scale_base: 0.9,
            scale_falloff: 0.08,
            min_scale: 0.5,
            opacity_base: 0.85,
            opacity_falloff: 0.15,
            min_opacity: 0.25,
            tilt_per_offset: 4.0,
            focused_lift: -25.0,
            side_drop: 3.0,
            visible_range: 6,
            drag_sensitivity: 60.0,
        }
    }

    /// Compact strip presentation (carousel docked under another view).
    #[must_use]
    pub fn minimized() -> Self {
        Self {
            base_gap: 70.0,
            compression: 0.75,
            focused_scale: 1.0,
            side_scale_base: 0.85,
            scale_falloff: 0.08,
            min_scale: 0.5,
            opacity_base: 0.85,
            opacity_falloff: 0.15,
            min_opacity: 0.25,
            tilt_per_offset: 2.0,
            focused_lift: -8.0,
            side_drop: 3.0,
            visible_range: 4,
            drag_sensitivity: 40.0,
        }
    }

    pub(crate) fn validate(self) -> ArchiveResult<Self> {
        if !self.base_gap.is_finite() || self.base_gap <= 0.0 {
            return Err(ArchiveError::InvalidData(
                "layout base gap must be finite and > 0".to_owned(),
            ));
        }
        if !self.compression.is_finite() || self.compression <= 0.0 || self.compression >= 1.0 {
            return Err(ArchiveError::InvalidData(
                "layout compression must be within (0, 1)".to_owned(),
            ));
        }
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(ArchiveError::InvalidData(
                "drag sensitivity must be finite and > 0".to_owned(),
            ));
        }
        if self.visible_range == 0 {
            return Err(ArchiveError::InvalidData(
                "visible range must be >= 1".to_owned(),
            ));
        }
        let scalars = [
            self.focused_scale,
            self.side_scale_base,
            self.scale_falloff,
            self.min_scale,
            self.opacity_base,
            self.opacity_falloff,
            self.min_opacity,
            self.tilt_per_offset,
            self.focused_lift,
            self.side_drop,
        ];
        if scalars.iter().any(|v| !v.is_finite()) {
            return Err(ArchiveError::InvalidData(
                "layout scalars must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self::full()
    }
}

/// Visual descriptor for one card slot. Purely presentational; the host
/// feeds these into whatever animation layer it uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_order: i32,
    pub tilt: f64,
}

/// One projected slot: `offset` is `slot index - floating index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedCard {
    pub index: usize,
    pub offset: f64,
    pub style: CardStyle,
}

/// Pure projection from a continuous carousel position to per-card visuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionModel {
    profile: LayoutProfile,
}

impl PositionModel {
    pub fn new(profile: LayoutProfile) -> ArchiveResult<Self> {
        Ok(Self {
            profile: profile.validate()?,
        })
    }

    #[must_use]
    pub fn profile(&self) -> LayoutProfile {
        self.profile
    }

    /// Horizontal displacement for a card `abs_offset` slots from focus.
    ///
    /// Closed form of the geometric gap series: at integer offsets it equals
    /// `gap + gap*c + gap*c^2 + ...`, and it interpolates smoothly between.
    #[must_use]
    pub fn displacement(&self, abs_offset: f64) -> f64 {
        let c = self.profile.compression;
        self.profile.base_gap * (1.0 - c.powf(abs_offset)) / (1.0 - c)
    }

    #[must_use]
    pub fn style_for_offset(&self, offset: f64) -> CardStyle {
        let p = self.profile;
        let abs = offset.abs();
        // Focus weight fades out over the first slot either side.
        let focus = (1.0 - abs).clamp(0.0, 1.0);

        let x = if offset >= 0.0 {
            self.displacement(abs)
        } else {
            -self.displacement(abs)
        };

        let side_scale = (p.side_scale_base - abs * p.scale_falloff).max(p.min_scale);
        let scale = side_scale + (p.focused_scale - side_scale) * focus;

        let side_opacity = (p.opacity_base - abs * p.opacity_falloff).max(p.min_opacity);
        let opacity = side_opacity + (1.0 - side_opacity) * focus;

        let y = p.focused_lift * focus + p.side_drop * abs * (1.0 - focus);

        CardStyle {
            x,
            y,
            scale,
            opacity,
            z_order: 20 - abs.round() as i32,
            tilt: offset * p.tilt_per_offset,
        }
    }

    /// Projects the window of slots around `current_index` for a carousel of
    /// `len` slots. Offsets are measured from `floating_index`, so cards
    /// glide while the floating value converges.
    #[must_use]
    pub fn project_window(
        &self,
        floating_index: f64,
        current_index: usize,
        len: usize,
    ) -> SmallVec<[ProjectedCard; 16]> {
        let mut cards = SmallVec::new();
        if len == 0 {
            return cards;
        }
        let start = current_index.saturating_sub(self.profile.visible_range);
        let end = (current_index + self.profile.visible_range).min(len - 1);
        for index in start..=end {
            let offset = index as f64 - floating_index;
            cards.push(ProjectedCard {
                index,
                offset,
                style: self.style_for_offset(offset),
            });
        }
        cards
    }
}

impl Default for PositionModel {
    fn default() -> Self {
        Self {
            profile: LayoutProfile::full(),
        }
    }
}
