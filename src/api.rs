use async_trait::async_trait;

use crate::entities::{Coordinates, RouteCollection};
use crate::error::Error;

/// Where the route data document comes from.
#[async_trait]
pub trait RouteSource {
    async fn fetch_routes(&self) -> Result<RouteCollection, Error>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub center: Coordinates,
    pub zoom: f64,
    pub zoom_control: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "© OpenStreetMap".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolylineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub smooth_factor: f64,
}

impl PolylineStyle {
    pub fn with_color(color: &str) -> Self {
        Self {
            color: color.into(),
            weight: 4,
            opacity: 0.7,
            smooth_factor: 1.0,
        }
    }
}

/// South-west and north-east corners of an area to fit the view to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

/// Operations this crate needs from an embeddable map library. Every call
/// addresses a map by the id of the page element hosting it.
pub trait MapCanvas {
    fn create_map(&mut self, element_id: &str, options: &MapOptions);
    fn add_tile_layer(&mut self, element_id: &str, layer: &TileLayer);
    fn add_polyline(&mut self, element_id: &str, path: &[Coordinates], style: &PolylineStyle);
    fn add_marker(&mut self, element_id: &str, at: Coordinates, title: &str, popup: &str);
    fn fit_bounds(&mut self, element_id: &str, bounds: Bounds);
}
