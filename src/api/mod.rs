pub mod engine;
pub mod engine_config;

pub use engine::{ArchiveEngine, CarouselCard};
pub use engine_config::ArchiveEngineConfig;
