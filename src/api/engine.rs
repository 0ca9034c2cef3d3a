use smallvec::SmallVec;

use crate::api::engine_config::ArchiveEngineConfig;
use crate::carousel::{
    CardStyle, NavigationController, PositionModel, TickEmitter,
};
use crate::catalog::{Artwork, Catalog, YearIndex, decade_of};
use crate::error::ArchiveResult;
use crate::interaction::PointerMode;
use crate::routing::{Route, RouteSync};
use crate::shortcuts::{KeyEvent, ShortcutAction, ShortcutMap};
use crate::stores::{
    FavoritesStore, SearchEntry, SearchIndex, SearchOverlay, SessionFlags, StorageBackend,
    ThemeStore,
};

/// One carousel slot ready for the host to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselCard {
    pub index: usize,
    pub year: i32,
    pub offset: f64,
    pub focused: bool,
    pub style: CardStyle,
}

/// Facade wiring the catalog, year index, navigation state machine, tick
/// emission, route sync, and the persisted viewer stores behind one type.
///
/// `P` persists across sessions (favorites, theme); `S` is session-scoped
/// (intro and hint flags). Each store gets its own backend instance, per
/// the dependency-injection design: no ambient globals.
pub struct ArchiveEngine<P: StorageBackend, S: StorageBackend> {
    catalog: Catalog,
    year_index: YearIndex,
    position: PositionModel,
    nav: NavigationController,
    ticks: TickEmitter,
    tick_listener: Option<Box<dyn FnMut(i32)>>,
    route_sync: RouteSync,
    favorites: FavoritesStore<P>,
    theme: ThemeStore<P>,
    session: SessionFlags<S>,
    search: SearchIndex,
    search_overlay: SearchOverlay,
    shortcuts: ShortcutMap,
    config: ArchiveEngineConfig,
}

impl<P: StorageBackend, S: StorageBackend> ArchiveEngine<P, S> {
    pub fn new(
        catalog: Catalog,
        config: ArchiveEngineConfig,
        favorites_storage: P,
        theme_storage: P,
        session_storage: S,
    ) -> ArchiveResult<Self> {
        let year_index = YearIndex::from_artworks(catalog.artworks());
        let layout = config.layout_profile();
        let position = PositionModel::new(layout)?;

        let seed_route = Route::Timeline {
            year: config.initial_year,
        };
        let initial_index =
            RouteSync::initial_timeline_index(&seed_route, &year_index).unwrap_or(0);
        let nav = NavigationController::new(
            &year_index,
            initial_index,
            layout.drag_sensitivity,
            config.tuning,
        )?;

        let search = SearchIndex::build(&catalog);

        // Prime the cue detector with the starting year so the very first
        // navigation change is audible.
        let mut ticks = TickEmitter::new(config.tick);
        if let Some(year) = nav.current_year() {
            ticks.observe(year, 0);
        }

        Ok(Self {
            catalog,
            year_index,
            position,
            nav,
            ticks,
            tick_listener: None,
            route_sync: RouteSync::default(),
            favorites: FavoritesStore::load(favorites_storage),
            theme: ThemeStore::load(theme_storage),
            session: SessionFlags::load(session_storage),
            search,
            search_overlay: SearchOverlay::default(),
            shortcuts: ShortcutMap::default(),
            config,
        })
    }

    // --- accessors -------------------------------------------------------

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn year_index(&self) -> &YearIndex {
        &self.year_index
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    #[must_use]
    pub fn position_model(&self) -> &PositionModel {
        &self.position
    }

    #[must_use]
    pub fn config(&self) -> ArchiveEngineConfig {
        self.config
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.nav.current_index()
    }

    #[must_use]
    pub fn current_year(&self) -> Option<i32> {
        self.nav.current_year()
    }

    #[must_use]
    pub fn current_decade(&self) -> Option<i32> {
        self.nav.current_year().map(decade_of)
    }

    #[must_use]
    pub fn floating_index(&self) -> f64 {
        self.nav.floating_index()
    }

    /// Representative artwork for the selected year.
    #[must_use]
    pub fn current_artwork(&self) -> Option<&Artwork> {
        self.year_index.representative(self.nav.current_year()?)
    }

    /// The projected card window around the current selection.
    #[must_use]
    pub fn visible_cards(&self) -> SmallVec<[CarouselCard; 16]> {
        let Some(current) = self.nav.current_index() else {
            return SmallVec::new();
        };
        self.position
            .project_window(self.nav.floating_index(), current, self.nav.len())
            .into_iter()
            .filter_map(|projected| {
                let year = self.year_index.year_at(projected.index)?;
                Some(CarouselCard {
                    index: projected.index,
                    year,
                    offset: projected.offset,
                    focused: projected.index == current,
                    style: projected.style,
                })
            })
            .collect()
    }

    // --- navigation ------------------------------------------------------

    pub fn go_to_index(&mut self, index: i64, animated: bool, now_ms: u64) {
        self.nav.go_to_index(index, animated);
        self.observe_tick(now_ms);
    }

    pub fn go_to_year(&mut self, year: i32, animated: bool, now_ms: u64) {
        self.nav.go_to_year(year, animated);
        self.observe_tick(now_ms);
    }

    pub fn step(&mut self, direction: i32, now_ms: u64) {
        self.nav.step(direction);
        self.observe_tick(now_ms);
    }

    pub fn go_to_decade(&mut self, decade: i32, now_ms: u64) -> bool {
        let landed = self.nav.go_to_decade(decade);
        self.observe_tick(now_ms);
        landed
    }

    /// Decade jump relative to the current selection.
    pub fn step_decade(&mut self, direction: i32, now_ms: u64) -> bool {
        let Some(current) = self.current_decade() else {
            return false;
        };
        let decades = self.year_index.decades();
        let Some(position) = decades.iter().position(|group| group.decade == current) else {
            return false;
        };
        let next = position as i64 + i64::from(direction);
        if next < 0 || next >= decades.len() as i64 {
            return false;
        }
        let target = decades[next as usize].decade;
        self.go_to_decade(target, now_ms)
    }

    pub fn wheel(&mut self, delta: f64, now_ms: u64) -> bool {
        let stepped = self.nav.ingest_wheel(delta, now_ms);
        self.observe_tick(now_ms);
        stepped
    }

    pub fn drag_begin(&mut self) {
        self.nav.begin_drag();
    }

    pub fn drag_move(&mut self, delta_px: f64, now_ms: u64) {
        self.nav.ingest_drag_delta(delta_px);
        self.observe_tick(now_ms);
    }

    pub fn drag_end(&mut self, now_ms: u64) {
        self.nav.end_drag(now_ms);
    }

    pub fn scrubber_begin(&mut self) {
        self.nav.begin_scrubber();
    }

    pub fn scrubber_move(&mut self, fraction: f64, now_ms: u64) {
        self.nav.ingest_scrubber_fraction(fraction);
        self.observe_tick(now_ms);
    }

    pub fn scrubber_end(&mut self, now_ms: u64) {
        self.nav.end_scrubber();
        self.observe_tick(now_ms);
    }

    #[must_use]
    pub fn pointer_mode(&self) -> PointerMode {
        self.nav.pointer_mode()
    }

    /// Advances animation one frame. Returns `true` while a repaint is
    /// still needed.
    pub fn advance(&mut self, dt_seconds: f64, now_ms: u64) -> bool {
        let animating = self.nav.advance(dt_seconds);
        self.observe_tick(now_ms);
        animating
    }

    /// Card click: the focused card opens its year (route push); any other
    /// card just navigates the carousel. Clicks that actually end a drag
    /// gesture are swallowed.
    pub fn click_card(&mut self, index: usize, now_ms: u64) -> Option<Route> {
        if self.nav.is_click_suppressed(now_ms) {
            return None;
        }
        let current = self.nav.current_index()?;
        if index == current {
            let year = self.nav.current_year()?;
            return Some(self.route_sync.open_year(year));
        }
        self.go_to_index(index as i64, true, now_ms);
        None
    }

    // --- route sync ------------------------------------------------------

    /// Explicit open of the selected year; returns the route to push.
    pub fn open_current_year(&mut self) -> Option<Route> {
        let year = self.nav.current_year()?;
        Some(self.route_sync.open_year(year))
    }

    /// Explicit open of an artwork detail; returns the route to push.
    pub fn open_artwork(&mut self, artwork_id: &str) -> Route {
        self.route_sync.open_artwork(artwork_id)
    }

    /// Host notification of a route change. Self-initiated pushes are
    /// ignored; external changes (back/forward) re-derive the selection.
    /// Returns `true` when the change was external.
    pub fn route_changed(&mut self, route: &Route) -> bool {
        if !self.route_sync.route_changed(route) {
            return false;
        }
        if matches!(route, Route::Timeline { .. }) {
            if let Some(index) = RouteSync::initial_timeline_index(route, &self.year_index) {
                self.nav.go_to_index(index as i64, false);
                // Re-prime silently: back navigation is not a carousel advance.
                self.ticks.reset();
                if let Some(year) = self.nav.current_year() {
                    self.ticks.observe(year, 0);
                }
            }
        }
        true
    }

    /// Route for the `r` shortcut; `None` on an empty catalog.
    #[must_use]
    pub fn random_artwork_route(&self) -> Option<Route> {
        self.catalog.random_artwork().map(|artwork| Route::Artwork {
            artwork: artwork.id.clone(),
        })
    }

    // --- ticks -----------------------------------------------------------

    /// Installs the cue callback fired once per rate-limited year change.
    pub fn set_tick_listener(&mut self, listener: Box<dyn FnMut(i32)>) {
        self.tick_listener = Some(listener);
    }

    fn observe_tick(&mut self, now_ms: u64) {
        let Some(year) = self.nav.current_year() else {
            return;
        };
        if self.ticks.observe(year, now_ms) {
            if let Some(listener) = self.tick_listener.as_mut() {
                listener(year);
            }
        }
    }

    // --- shortcuts and overlays ------------------------------------------

    /// Feeds one key event through the shortcut map, applies the effects
    /// the engine owns (stepping, overlays), and returns the action so the
    /// host can handle navigation and rendering.
    pub fn key_event(&mut self, event: KeyEvent<'_>, now_ms: u64) -> Option<ShortcutAction> {
        let action = self.shortcuts.handle(event, now_ms)?;
        match &action {
            ShortcutAction::ShowHelp => self.shortcuts.set_help_open(true),
            ShortcutAction::CloseOverlay => {
                if self.search_overlay.is_open() {
                    self.search_overlay.close();
                } else {
                    self.shortcuts.set_help_open(false);
                }
            }
            ShortcutAction::ToggleSearch => {
                self.search_overlay.toggle();
            }
            ShortcutAction::StepForward => self.step(1, now_ms),
            ShortcutAction::StepBack => self.step(-1, now_ms),
            ShortcutAction::PrevDecade => {
                self.step_decade(-1, now_ms);
            }
            ShortcutAction::NextDecade => {
                self.step_decade(1, now_ms);
            }
            ShortcutAction::RandomArtwork | ShortcutAction::Navigate(_) => {}
        }
        Some(action)
    }

    #[must_use]
    pub fn is_help_open(&self) -> bool {
        self.shortcuts.is_help_open()
    }

    #[must_use]
    pub fn search_overlay(&self) -> SearchOverlay {
        self.search_overlay
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&SearchEntry> {
        self.search.query(query)
    }

    // --- stores ----------------------------------------------------------

    #[must_use]
    pub fn favorites(&self) -> &FavoritesStore<P> {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore<P> {
        &mut self.favorites
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeStore<P> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeStore<P> {
        &mut self.theme
    }

    #[must_use]
    pub fn session(&self) -> &SessionFlags<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionFlags<S> {
        &mut self.session
    }
}
