use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// Map marker from the older route-data format, used only when a route has
/// no timeline. Markers without coordinates are not drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coordinates>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub popup: String,
}
