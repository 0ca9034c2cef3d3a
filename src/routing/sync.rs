use crate::catalog::YearIndex;
use crate::routing::Route;

/// One-directional-at-a-time bridge between navigation state and the host
/// router.
///
/// Pushes initiated here are remembered, so when the host echoes the route
/// change back the adapter can tell its own push apart from an external
/// navigation (back/forward button) and avoid a feedback loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteSync {
    pending_push: Option<Route>,
}

impl RouteSync {
    /// Initial carousel index for a freshly mounted timeline route.
    ///
    /// A present, on-catalog year wins; an off-catalog year resolves to the
    /// nearest present one; an absent or unparseable parameter falls back
    /// to the middle year. `None` only when the catalog has no years.
    #[must_use]
    pub fn initial_timeline_index(route: &Route, index: &YearIndex) -> Option<usize> {
        if index.is_empty() {
            return None;
        }

        if let Route::Timeline { year: Some(year) } = route {
            let resolved = index
                .index_of_year(*year)
                .or_else(|| index.nearest_year(*year).and_then(|y| index.index_of_year(y)));
            if let Some(position) = resolved {
                return Some(position);
            }
        }

        Some(index.len() / 2)
    }

    /// Explicit "open this year" action: returns the route the host should
    /// push, and marks it as self-initiated.
    pub fn open_year(&mut self, year: i32) -> Route {
        let route = Route::Timeline { year: Some(year) };
        self.pending_push = Some(route.clone());
        route
    }

    /// Explicit "open this artwork" action.
    pub fn open_artwork(&mut self, artwork_id: &str) -> Route {
        let route = Route::Artwork {
            artwork: artwork_id.to_owned(),
        };
        self.pending_push = Some(route.clone());
        route
    }

    /// Host notification that the route changed. Returns `true` when the
    /// change came from outside (navigation state must be re-derived),
    /// `false` when it is the echo of this adapter's own push.
    pub fn route_changed(&mut self, route: &Route) -> bool {
        if self.pending_push.as_ref() == Some(route) {
            self.pending_push = None;
            return false;
        }
        self.pending_push = None;
        true
    }
}
