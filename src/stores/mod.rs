pub mod favorites;
pub mod search;
pub mod session;
pub mod storage;
pub mod theme;

pub use favorites::{FAVORITES_STORAGE_KEY, FavoritesStore};
pub use search::{SearchEntry, SearchIndex, SearchKind, SearchOverlay};
pub use session::{FAVORITES_HINT_KEY, INTRO_COMPLETE_KEY, SessionFlags};
pub use storage::{MemoryStorage, StorageBackend};
pub use theme::{THEME_STORAGE_KEY, ThemeMode, ThemeStore};
