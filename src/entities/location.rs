use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(latitude, longitude)` pair in decimal degrees, stored in route data as
/// a two-element array `[lat, lon]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

// geo-types orders axes as x = longitude, y = latitude.
impl From<Coordinates> for geo_types::Coord<f64> {
    fn from(c: Coordinates) -> Self {
        geo_types::Coord { x: c.lng, y: c.lat }
    }
}

impl From<geo_types::Coord<f64>> for Coordinates {
    fn from(c: geo_types::Coord<f64>) -> Self {
        Self { lat: c.y, lng: c.x }
    }
}

/// `"<lat>,<lon>"` with the shortest round-trip float text, so `42.0`
/// renders as `42` and `-0.0` as `0`.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", unsigned_zero(self.lat), unsigned_zero(self.lng))
    }
}

fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl From<Coordinates> for String {
    fn from(c: Coordinates) -> Self {
        c.to_string()
    }
}

/// Named anchor point shown in a card's map placeholder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// `42.4650°N, 2.4450°W` style label; four decimals, hemisphere letters.
    pub fn label(&self) -> String {
        format!(
            "{:.4}°{}, {:.4}°{}",
            self.lat.abs(),
            if self.lat >= 0.0 { 'N' } else { 'S' },
            self.lon.abs(),
            if self.lon >= 0.0 { 'E' } else { 'W' },
        )
    }
}

#[test]
fn coordinates_display_uses_shortest_float_text() {
    assert_eq!(Coordinates::new(42.0, -2.0).to_string(), "42,-2");
    assert_eq!(Coordinates::new(42.1, -2.1).to_string(), "42.1,-2.1");

    let s: String = Coordinates::new(41.38879, 2.15899).into();
    assert_eq!(s, "41.38879,2.15899");
}

#[test]
fn coordinates_read_from_json_pairs() {
    let c: Coordinates = serde_json::from_str("[42.465, -2.445]").unwrap();
    assert_eq!(c, Coordinates::new(42.465, -2.445));
    assert_eq!(serde_json::to_string(&c).unwrap(), "[42.465,-2.445]");
}

#[test]
fn coordinates_map_to_geo_axes() {
    let c: geo_types::Coord<f64> = Coordinates::new(10.0, 20.0).into();
    assert_eq!(c.x, 20.0);
    assert_eq!(c.y, 10.0);
    assert_eq!(Coordinates::from(c), Coordinates::new(10.0, 20.0));
}

#[test]
fn location_label_picks_hemispheres() {
    let logrono = Location {
        name: "Logroño".into(),
        lat: 42.46503,
        lon: -2.44498,
    };
    assert_eq!(logrono.label(), "42.4650°N, 2.4450°W");

    let sydney = Location {
        name: "Sydney".into(),
        lat: -33.8688,
        lon: 151.2093,
    };
    assert_eq!(sydney.label(), "33.8688°S, 151.2093°E");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(Coordinates::new(-0.0, 1.5).to_string(), "0,1.5");
    assert_eq!(Coordinates::new(51.5, -0.0).to_string(), "51.5,0");
    assert_eq!(Coordinates::new(-0.5, -0.1).to_string(), "-0.5,-0.1");
}
