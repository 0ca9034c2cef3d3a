use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::artwork::{Artwork, Location, Theme, TourChapter};
use crate::error::{ArchiveError, ArchiveResult};

/// Serializable shape of the bundled dataset file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArchiveDataset {
    #[serde(default)]
    pub artworks: Vec<Artwork>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub chapters: Vec<TourChapter>,
}

/// Read-only catalog built once at startup.
///
/// Id lookups are index-backed; building the indices doubles as the
/// uniqueness check, which is the only fallible step in this crate's
/// data path.
#[derive(Debug, Clone)]
pub struct Catalog {
    artworks: Vec<Artwork>,
    locations: Vec<Location>,
    themes: Vec<Theme>,
    chapters: Vec<TourChapter>,
    artwork_ids: HashMap<String, usize>,
    location_ids: HashMap<String, usize>,
    theme_ids: HashMap<String, usize>,
    chapter_ids: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(dataset: ArchiveDataset) -> ArchiveResult<Self> {
        let artwork_ids = index_ids("artwork", dataset.artworks.iter().map(|a| a.id.as_str()))?;
        let location_ids = index_ids("location", dataset.locations.iter().map(|l| l.id.as_str()))?;
        let theme_ids = index_ids("theme", dataset.themes.iter().map(|t| t.id.as_str()))?;
        let chapter_ids = index_ids("chapter", dataset.chapters.iter().map(|c| c.id.as_str()))?;

        Ok(Self {
            artworks: dataset.artworks,
            locations: dataset.locations,
            themes: dataset.themes,
            chapters: dataset.chapters,
            artwork_ids,
            location_ids,
            theme_ids,
            chapter_ids,
        })
    }

    pub fn from_json(raw: &str) -> ArchiveResult<Self> {
        let dataset: ArchiveDataset = serde_json::from_str(raw)
            .map_err(|err| ArchiveError::InvalidData(format!("dataset parse failed: {err}")))?;
        Self::new(dataset)
    }

    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    #[must_use]
    pub fn chapters(&self) -> &[TourChapter] {
        &self.chapters
    }

    #[must_use]
    pub fn artwork(&self, id: &str) -> Option<&Artwork> {
        self.artwork_ids.get(id).map(|&i| &self.artworks[i])
    }

    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.location_ids.get(id).map(|&i| &self.locations[i])
    }

    #[must_use]
    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.theme_ids.get(id).map(|&i| &self.themes[i])
    }

    #[must_use]
    pub fn chapter(&self, id: &str) -> Option<&TourChapter> {
        self.chapter_ids.get(id).map(|&i| &self.chapters[i])
    }

    /// Uniformly-random artwork, used by the `r` shortcut.
    #[must_use]
    pub fn random_artwork(&self) -> Option<&Artwork> {
        if self.artworks.is_empty() {
            return None;
        }
        let pick = rand::rng().random_range(0..self.artworks.len());
        Some(&self.artworks[pick])
    }
}

fn index_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> ArchiveResult<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_owned(), position).is_some() {
            return Err(ArchiveError::DuplicateId {
                kind,
                id: id.to_owned(),
            });
        }
    }
    Ok(index)
}
