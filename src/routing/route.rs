use serde::{Deserialize, Serialize};

/// Client-side route surface. Parsing is total: anything unrecognized maps
/// to `NotFound`, and a malformed year parameter degrades to the plain
/// timeline rather than an error (the page falls back to its default
/// selection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Gallery,
    Timeline { year: Option<i32> },
    Locations { location: Option<String> },
    Themes { theme: Option<String> },
    Tour { chapter: Option<String> },
    Artwork { artwork: String },
    Curated { era: String },
    Favorites,
    Compare,
    About,
    NotFound { path: String },
}

impl Route {
    #[must_use]
    pub fn parse(path: &str) -> Self {
        // Query string and fragment never affect route identity.
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["gallery"] => Self::Gallery,
            ["timeline"] => Self::Timeline { year: None },
            ["timeline", year] => Self::Timeline {
                year: year.parse().ok(),
            },
            ["locations"] => Self::Locations { location: None },
            ["locations", id] => Self::Locations {
                location: Some((*id).to_owned()),
            },
            ["themes"] => Self::Themes { theme: None },
            ["themes", id] => Self::Themes {
                theme: Some((*id).to_owned()),
            },
            ["tour"] => Self::Tour { chapter: None },
            ["tour", id] => Self::Tour {
                chapter: Some((*id).to_owned()),
            },
            ["artwork", id] => Self::Artwork {
                artwork: (*id).to_owned(),
            },
            ["curated", id] => Self::Curated {
                era: (*id).to_owned(),
            },
            ["favorites"] => Self::Favorites,
            ["compare"] => Self::Compare,
            ["about"] => Self::About,
            _ => Self::NotFound {
                path: bare.to_owned(),
            },
        }
    }

    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Gallery => "/gallery".to_owned(),
            Self::Timeline { year: None } => "/timeline".to_owned(),
            Self::Timeline { year: Some(year) } => format!("/timeline/{year}"),
            Self::Locations { location: None } => "/locations".to_owned(),
            Self::Locations {
                location: Some(id),
            } => format!("/locations/{id}"),
            Self::Themes { theme: None } => "/themes".to_owned(),
            Self::Themes { theme: Some(id) } => format!("/themes/{id}"),
            Self::Tour { chapter: None } => "/tour".to_owned(),
            Self::Tour { chapter: Some(id) } => format!("/tour/{id}"),
            Self::Artwork { artwork } => format!("/artwork/{artwork}"),
            Self::Curated { era } => format!("/curated/{era}"),
            Self::Favorites => "/favorites".to_owned(),
            Self::Compare => "/compare".to_owned(),
            Self::About => "/about".to_owned(),
            Self::NotFound { path } => path.clone(),
        }
    }
}
