pub mod motion;
pub mod navigation;
pub mod position;
pub mod tick;

pub use motion::{ApproachConfig, FloatingIndex};
pub use navigation::{CarouselTuning, NavigationController};
pub use position::{CardStyle, LayoutProfile, PositionModel, ProjectedCard};
pub use tick::{TickConfig, TickEmitter};
