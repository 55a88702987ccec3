use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Location, Marker, RegionStyle, TimelineStop, Venue};

/// Top-level shape of the route data document: `{"routes": [...]}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouteCollection {
    pub routes: Vec<Route>,
}

/// One walking-tour route as stored in the route data document.
///
/// Two generations of the format coexist: newer records carry a `timeline`
/// whose stops hold coordinates, older ones a bare `route` coordinate list
/// (and optionally `markers`). Both are optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineStop>>,
    #[serde(default, rename = "route", skip_serializing_if = "Option::is_none")]
    pub legacy_route: Option<Vec<Coordinates>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<Marker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wineries: Option<Vec<Venue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Venue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_badges: Option<Vec<String>>,
}

impl Route {
    /// Bare route with only the required display fields set.
    pub fn new(number: u32, title: &str, region: &str) -> Self {
        Self {
            number,
            title: title.into(),
            region: region.into(),
            distance: String::new(),
            duration: String::new(),
            difficulty: String::new(),
            description: None,
            highlights: None,
            location: None,
            timeline: None,
            legacy_route: None,
            markers: None,
            wineries: None,
            restaurants: None,
            center: None,
            zoom: None,
            special_badges: None,
        }
    }

    /// Id of the page element that hosts this route's map.
    pub fn map_element_id(&self) -> String {
        format!("map{}", self.number)
    }

    pub fn region_style(&self) -> RegionStyle {
        RegionStyle::for_tag(&self.region)
    }
}

#[test]
fn parses_timeline_format() {
    let json = r#"{
        "number": 3,
        "title": "Haro Station Quarter",
        "region": "rioja",
        "distance": "4.2 km",
        "duration": "5 hours",
        "difficulty": "Easy",
        "specialBadges": ["Historic"],
        "zoom": 15,
        "timeline": [
            {"time": "10:00", "activity": "Start", "place": "Haro station", "coords": [42.5781, -2.8469]},
            {"time": "10:30", "activity": "Walk"}
        ]
    }"#;

    let route: Route = serde_json::from_str(json).unwrap();
    assert_eq!(route.number, 3);
    assert_eq!(route.zoom, Some(15.0));
    assert_eq!(route.special_badges, Some(vec!["Historic".to_string()]));
    assert_eq!(route.timeline.as_ref().map(Vec::len), Some(2));
    assert_eq!(route.legacy_route, None);
    assert_eq!(route.map_element_id(), "map3");
}

#[test]
fn parses_legacy_format() {
    let json = r#"{
        "number": 7,
        "title": "Sitges Seafront",
        "region": "penedes",
        "route": [[41.2351, 1.8117], [41.2370, 1.8050]],
        "center": [41.236, 1.809],
        "markers": [{"coords": [41.2351, 1.8117], "title": "Start", "popup": "Start here"}]
    }"#;

    let route: Route = serde_json::from_str(json).unwrap();
    assert_eq!(route.timeline, None);
    assert_eq!(
        route.legacy_route,
        Some(vec![
            Coordinates::new(41.2351, 1.8117),
            Coordinates::new(41.2370, 1.8050)
        ])
    );
    assert_eq!(route.center, Some(Coordinates::new(41.236, 1.809)));
    assert_eq!(route.markers.as_ref().map(Vec::len), Some(1));
    assert_eq!(route.distance, "");
}
