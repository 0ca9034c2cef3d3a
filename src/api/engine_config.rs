use serde::{Deserialize, Serialize};

use crate::carousel::{CarouselTuning, LayoutProfile, TickConfig};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load archive setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchiveEngineConfig {
    /// Compact docked presentation instead of the full-page one.
    #[serde(default)]
    pub minimized: bool,
    /// Year to select at startup when no route parameter decides it.
    #[serde(default)]
    pub initial_year: Option<i32>,
    #[serde(default)]
    pub tuning: CarouselTuning,
    #[serde(default)]
    pub tick: TickConfig,
    /// Explicit layout override; when absent, `minimized` picks the profile.
    #[serde(default)]
    pub layout: Option<LayoutProfile>,
}

impl ArchiveEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn minimized(mut self) -> Self {
        self.minimized = true;
        self
    }

    #[must_use]
    pub fn with_initial_year(mut self, year: i32) -> Self {
        self.initial_year = Some(year);
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: CarouselTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_tick_config(mut self, tick: TickConfig) -> Self {
        self.tick = tick;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutProfile) -> Self {
        self.layout = Some(layout);
        self
    }

    /// The effective layout profile for this configuration.
    #[must_use]
    pub fn layout_profile(&self) -> LayoutProfile {
        self.layout.unwrap_or_else(|| {
            if self.minimized {
                LayoutProfile::minimized()
            } else {
                LayoutProfile::full()
            }
        })
    }
}

impl Default for ArchiveEngineConfig {
    fn default() -> Self {
        Self {
            minimized: false,
            initial_year: None,
            tuning: CarouselTuning::default(),
            tick: TickConfig::default(),
            layout: None,
        }
    }
}
