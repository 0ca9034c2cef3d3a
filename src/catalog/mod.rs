pub mod artwork;
pub mod dataset;
pub mod year_index;

pub use artwork::{Artwork, AspectRatio, AudioSegment, Location, Theme, TourChapter};
pub use dataset::{ArchiveDataset, Catalog};
pub use year_index::{DecadeGroup, YearIndex, decade_of};
