//! atelier-rs: navigation engine for a digital art archive.
//!
//! This crate owns the non-visual half of an archive browser: catalog
//! indexing, the year/decade carousel state machine, card projection math,
//! route synchronization, and persisted viewer state. Rendering, audio
//! synthesis, and the host event loop stay on the application side.

pub mod api;
pub mod carousel;
pub mod catalog;
pub mod error;
pub mod interaction;
pub mod routing;
pub mod shortcuts;
pub mod stores;
pub mod telemetry;

pub use api::{ArchiveEngine, ArchiveEngineConfig};
pub use error::{ArchiveError, ArchiveResult};
