//! Global keyboard shortcut sequencing.
//!
//! The host feeds raw key events; this module turns them into discrete
//! actions, including the two-key `g`-prefixed navigation sequences with
//! their one-second window. Events originating from focused text inputs are
//! ignored wholesale.

use crate::routing::Route;

/// A `g`-prefix must be followed within this window.
pub const SEQUENCE_WINDOW_MS: u64 = 1000;

/// One raw key event as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent<'a> {
    /// Toolkit key name: `"a"`, `"?"`, `"Escape"`, `"ArrowRight"`, ...
    pub key: &'a str,
    pub ctrl_or_meta: bool,
    pub alt: bool,
    /// True when a text input owns focus; shortcuts must not fire.
    pub in_text_input: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutAction {
    ShowHelp,
    CloseOverlay,
    RandomArtwork,
    ToggleSearch,
    Navigate(Route),
    StepForward,
    StepBack,
    PrevDecade,
    NextDecade,
}

/// Key-sequence state machine for the global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortcutMap {
    pending_go_at_ms: Option<u64>,
    help_open: bool,
}

impl ShortcutMap {
    /// The help overlay suppresses everything except Escape while open.
    pub fn set_help_open(&mut self, open: bool) {
        self.help_open = open;
        if open {
            self.pending_go_at_ms = None;
        }
    }

    #[must_use]
    pub fn is_help_open(&self) -> bool {
        self.help_open
    }

    pub fn handle(&mut self, event: KeyEvent<'_>, now_ms: u64) -> Option<ShortcutAction> {
        if event.in_text_input {
            return None;
        }

        if event.key == "Escape" {
            self.pending_go_at_ms = None;
            return Some(ShortcutAction::CloseOverlay);
        }

        if event.ctrl_or_meta {
            if event.key.eq_ignore_ascii_case("k") {
                return Some(ShortcutAction::ToggleSearch);
            }
            return None;
        }

        if self.help_open || event.alt {
            return None;
        }

        // Second key of a pending `g` sequence, if the window is still open.
        if let Some(started) = self.pending_go_at_ms.take() {
            if now_ms.saturating_sub(started) <= SEQUENCE_WINDOW_MS {
                return match event.key.to_ascii_lowercase().as_str() {
                    "h" => Some(ShortcutAction::Navigate(Route::Home)),
                    "g" => Some(ShortcutAction::Navigate(Route::Gallery)),
                    "t" => Some(ShortcutAction::Navigate(Route::Timeline { year: None })),
                    "l" => Some(ShortcutAction::Navigate(Route::Locations {
                        location: None,
                    })),
                    "m" => Some(ShortcutAction::Navigate(Route::Themes { theme: None })),
                    "o" => Some(ShortcutAction::Navigate(Route::Tour { chapter: None })),
                    _ => None,
                };
            }
            // Window expired; fall through and treat this as a fresh key.
        }

        match event.key {
            "?" => Some(ShortcutAction::ShowHelp),
            "ArrowRight" => Some(ShortcutAction::StepForward),
            "ArrowLeft" => Some(ShortcutAction::StepBack),
            "ArrowUp" | "PageUp" => Some(ShortcutAction::PrevDecade),
            "ArrowDown" | "PageDown" => Some(ShortcutAction::NextDecade),
            key if key.eq_ignore_ascii_case("r") => Some(ShortcutAction::RandomArtwork),
            key if key.eq_ignore_ascii_case("g") => {
                self.pending_go_at_ms = Some(now_ms);
                None
            }
            _ => None,
        }
    }
}
