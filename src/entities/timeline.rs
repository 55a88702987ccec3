use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// One scheduled stop of a route's timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineStop {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coordinates>,
}

impl TimelineStop {
    pub fn popup(&self, place: &str) -> String {
        format!("<b>{}</b><br>{}: {}", place, self.time, self.activity)
    }
}

#[test]
fn stop_without_coords_parses() {
    let stop: TimelineStop =
        serde_json::from_str(r#"{"time": "10:00", "activity": "Coffee in the plaza"}"#).unwrap();
    assert_eq!(stop.place, None);
    assert_eq!(stop.coords, None);
}

#[test]
fn popup_names_place_and_schedule() {
    let stop = TimelineStop {
        time: "11:30".into(),
        activity: "Tasting".into(),
        place: Some("Bodegas Franco-Españolas".into()),
        coords: Some(crate::entities::Coordinates::new(42.47, -2.44)),
    };
    assert_eq!(
        stop.popup("Bodegas Franco-Españolas"),
        "<b>Bodegas Franco-Españolas</b><br>11:30: Tasting"
    );
}
