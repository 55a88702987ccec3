mod location;
mod marker;
mod region;
mod route;
mod timeline;
mod venue;

pub use location::{Coordinates, Location};
pub use marker::Marker;
pub use region::{Region, RegionStyle};
pub use route::{Route, RouteCollection};
pub use timeline::TimelineStop;
pub use venue::Venue;
