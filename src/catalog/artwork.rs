use serde::{Deserialize, Serialize};

/// Canvas proportions used by hosts to pick a card footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Portrait,
    Landscape,
    Square,
}

/// One catalog entry. Loaded once from the bundled dataset and never mutated.
///
/// `year` is `None` for undated works; those are excluded from every
/// timeline view but still reachable by id, location, or theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
    #[serde(default)]
    pub circa: bool,
    pub medium: String,
    pub dimensions: String,
    pub location: String,
    #[serde(default)]
    pub collection: String,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub display_color: String,
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub hero_for_location: Option<String>,
    #[serde(default)]
    pub hero_for_theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub hero_artwork_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub hero_artwork_id: String,
}

/// Narrated audio attached to one artwork within a tour chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSegment {
    pub artwork_id: String,
    pub audio_path: String,
    pub duration_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourChapter {
    pub id: String,
    pub title: String,
    pub description: String,
    pub artwork_ids: Vec<String>,
    #[serde(default)]
    pub audio_segments: Vec<AudioSegment>,
}
