use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::routing::Route;

/// Results shown for an empty query (the page shortcuts).
const EMPTY_QUERY_LIMIT: usize = 6;
/// Ranked-result cutoff for a non-empty query.
const QUERY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    Page,
    Location,
    Theme,
    Artwork,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub kind: SearchKind,
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub route: Route,
}

/// Flat search index over pages, locations, themes, and artworks, built
/// once from the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let mut entries = Vec::new();

        let pages: [(&str, &str, Route); 8] = [
            ("home", "Home", Route::Home),
            ("gallery", "Gallery", Route::Gallery),
            ("timeline", "Timeline", Route::Timeline { year: None }),
            ("locations", "Locations", Route::Locations { location: None }),
            ("themes", "Themes", Route::Themes { theme: None }),
            ("tour", "Guided Tour", Route::Tour { chapter: None }),
            ("favorites", "Favorites", Route::Favorites),
            ("about", "About", Route::About),
        ];
        for (id, title, route) in pages {
            entries.push(SearchEntry {
                kind: SearchKind::Page,
                id: id.to_owned(),
                title: title.to_owned(),
                subtitle: None,
                route,
            });
        }

        for location in catalog.locations() {
            entries.push(SearchEntry {
                kind: SearchKind::Location,
                id: location.id.clone(),
                title: location.name.clone(),
                subtitle: location.description.clone(),
                route: Route::Locations {
                    location: Some(location.id.clone()),
                },
            });
        }

        for theme in catalog.themes() {
            entries.push(SearchEntry {
                kind: SearchKind::Theme,
                id: theme.id.clone(),
                title: theme.name.clone(),
                subtitle: theme.description.clone(),
                route: Route::Themes {
                    theme: Some(theme.id.clone()),
                },
            });
        }

        for artwork in catalog.artworks() {
            let dated = artwork
                .year
                .map_or_else(|| "Undated".to_owned(), |year| year.to_string());
            entries.push(SearchEntry {
                kind: SearchKind::Artwork,
                id: artwork.id.clone(),
                title: artwork.title.clone(),
                subtitle: Some(format!("{dated} · {}", artwork.medium)),
                route: Route::Artwork {
                    artwork: artwork.id.clone(),
                },
            });
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Ranked lookup. An empty query surfaces the page shortcuts; anything
    /// else scores titles first, subtitles last, with a small boost keeping
    /// pages above same-score catalog hits.
    #[must_use]
    pub fn query(&self, query: &str) -> Vec<&SearchEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self
                .entries
                .iter()
                .filter(|entry| entry.kind == SearchKind::Page)
                .take(EMPTY_QUERY_LIMIT)
                .collect();
        }

        let mut scored: Vec<(u32, &SearchEntry)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = score_entry(entry, &needle);
                (score > 0).then_some((score, entry))
            })
            .collect();
        // Stable sort keeps index order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(QUERY_LIMIT)
            .map(|(_, entry)| entry)
            .collect()
    }
}

fn score_entry(entry: &SearchEntry, needle: &str) -> u32 {
    let title = entry.title.to_lowercase();
    let subtitle = entry
        .subtitle
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    let mut score = if title == needle {
        100
    } else if title.starts_with(needle) {
        50
    } else if title.contains(needle) {
        25
    } else if title
        .split_whitespace()
        .any(|word| word.starts_with(needle))
    {
        15
    } else if subtitle.contains(needle) {
        10
    } else {
        0
    };

    if score > 0 && entry.kind == SearchKind::Page {
        score += 5;
    }
    score
}

/// Open/closed state of the search overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOverlay {
    open: bool,
}

impl SearchOverlay {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}
