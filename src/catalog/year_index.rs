use indexmap::IndexMap;

use crate::catalog::artwork::Artwork;

/// Decade bucket: `decade` is the canonical start year (1970, 1980, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeGroup {
    pub decade: i32,
    pub years: Vec<i32>,
}

/// Canonical decade for a year, floor division so negative years group correctly.
#[must_use]
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Derived year/decade view over the catalog.
///
/// Built once per mount from the artwork list. Undated works are excluded
/// from every output, so year buckets are non-empty by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearIndex {
    by_year: IndexMap<i32, Vec<Artwork>>,
    years: Vec<i32>,
    decades: Vec<DecadeGroup>,
}

impl YearIndex {
    pub fn from_artworks(artworks: &[Artwork]) -> Self {
        let mut by_year: IndexMap<i32, Vec<Artwork>> = IndexMap::new();
        for artwork in artworks {
            if let Some(year) = artwork.year {
                by_year.entry(year).or_default().push(artwork.clone());
            }
        }
        by_year.sort_keys();

        let years: Vec<i32> = by_year.keys().copied().collect();

        let mut decade_years: IndexMap<i32, Vec<i32>> = IndexMap::new();
        for &year in &years {
            decade_years.entry(decade_of(year)).or_default().push(year);
        }
        let decades = decade_years
            .into_iter()
            .map(|(decade, years)| DecadeGroup { decade, years })
            .collect();

        Self {
            by_year,
            years,
            decades,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Distinct years, ascending.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Decade groups, ascending, each with its member years ascending.
    #[must_use]
    pub fn decades(&self) -> &[DecadeGroup] {
        &self.decades
    }

    /// Artworks for one year in catalog order; empty when the year is absent.
    #[must_use]
    pub fn artworks_for_year(&self, year: i32) -> &[Artwork] {
        self.by_year.get(&year).map_or(&[], Vec::as_slice)
    }

    /// The artwork standing in for a year bucket: first featured entry,
    /// else the first encountered. Deterministic for a fixed dataset.
    #[must_use]
    pub fn representative(&self, year: i32) -> Option<&Artwork> {
        let bucket = self.by_year.get(&year)?;
        bucket.iter().find(|a| a.featured).or_else(|| bucket.first())
    }

    #[must_use]
    pub fn index_of_year(&self, year: i32) -> Option<usize> {
        self.years.binary_search(&year).ok()
    }

    #[must_use]
    pub fn year_at(&self, index: usize) -> Option<i32> {
        self.years.get(index).copied()
    }

    /// Closest present year to `year`; ties resolve to the earlier year.
    #[must_use]
    pub fn nearest_year(&self, year: i32) -> Option<i32> {
        self.years.iter().copied().fold(None, |best, candidate| match best {
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

    /// First (earliest) year belonging to `decade`, when present.
    #[must_use]
    pub fn first_year_of_decade(&self, decade: i32) -> Option<i32> {
        self.decades
            .iter()
            .find(|group| group.decade == decade)
            .and_then(|group| group.years.first().copied())
    }
}
