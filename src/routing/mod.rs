pub mod route;
pub mod sync;

pub use route::Route;
pub use sync::RouteSync;
