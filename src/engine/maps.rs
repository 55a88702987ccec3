use geo_types::{Coord, LineString, Rect};

use crate::{
    api::{Bounds, MapCanvas, MapOptions, PolylineStyle, TileLayer},
    engine::path::normalized_path,
    entities::Route,
    page::Page,
};

#[cfg(test)]
use crate::entities::Coordinates;

pub const DEFAULT_ZOOM: f64 = 14.0;

/// Bounding rectangle of a polyline, `None` for an empty one.
pub fn bounds_of(line: &LineString<f64>) -> Option<Bounds> {
    let mut coords = line.coords();
    let first = *coords.next()?;

    let rect = coords.fold(Rect::new(first, first), |rect, c| {
        Rect::new(
            Coord {
                x: rect.min().x.min(c.x),
                y: rect.min().y.min(c.y),
            },
            Coord {
                x: rect.max().x.max(c.x),
                y: rect.max().y.max(c.y),
            },
        )
    });

    Some(Bounds {
        south_west: rect.min().into(),
        north_east: rect.max().into(),
    })
}

/// Draws one route's map. Returns `false` when the route was skipped, either
/// because its map element is missing or because it has no coordinates.
#[tracing::instrument(skip_all, fields(route = route.number))]
pub fn draw_route_map<C: MapCanvas>(route: &Route, page: &Page, canvas: &mut C) -> bool {
    let element_id = route.map_element_id();
    if !page.has_element(&element_id) {
        return false;
    }

    let path = normalized_path(route);
    let first = match path.first() {
        Some(first) => *first,
        None => {
            tracing::warn!("no coordinates for route {}", route.number);
            return false;
        }
    };

    canvas.create_map(
        &element_id,
        &MapOptions {
            center: route.center.unwrap_or(first),
            zoom: route.zoom.filter(|z| *z != 0.0).unwrap_or(DEFAULT_ZOOM),
            zoom_control: false,
        },
    );
    canvas.add_tile_layer(&element_id, &TileLayer::default());

    let style = PolylineStyle::with_color(route.region_style().line_color);
    canvas.add_polyline(&element_id, &path, &style);

    if let Some(timeline) = &route.timeline {
        for stop in timeline {
            if let (Some(coords), Some(place)) = (stop.coords, &stop.place) {
                canvas.add_marker(&element_id, coords, place, &stop.popup(place));
            }
        }
    } else if let Some(markers) = &route.markers {
        for marker in markers {
            if let Some(coords) = marker.coords {
                canvas.add_marker(&element_id, coords, &marker.title, &marker.popup);
            }
        }
    }

    let line: LineString<f64> = path.iter().copied().map(Coord::from).collect();
    if let Some(bounds) = bounds_of(&line) {
        canvas.fit_bounds(&element_id, bounds);
    }

    true
}

#[cfg(test)]
#[derive(Debug, Default)]
struct RecordingCanvas {
    calls: Vec<String>,
    maps: Vec<(String, MapOptions)>,
    lines: Vec<(Vec<Coordinates>, PolylineStyle)>,
    markers: Vec<(Coordinates, String, String)>,
    bounds: Vec<Bounds>,
}

#[cfg(test)]
impl MapCanvas for RecordingCanvas {
    fn create_map(&mut self, element_id: &str, options: &MapOptions) {
        self.calls.push(format!("create_map {}", element_id));
        self.maps.push((element_id.into(), options.clone()));
    }

    fn add_tile_layer(&mut self, element_id: &str, _layer: &TileLayer) {
        self.calls.push(format!("add_tile_layer {}", element_id));
    }

    fn add_polyline(&mut self, element_id: &str, path: &[Coordinates], style: &PolylineStyle) {
        self.calls.push(format!("add_polyline {}", element_id));
        self.lines.push((path.to_vec(), style.clone()));
    }

    fn add_marker(&mut self, element_id: &str, at: Coordinates, title: &str, popup: &str) {
        self.calls.push(format!("add_marker {}", element_id));
        self.markers.push((at, title.into(), popup.into()));
    }

    fn fit_bounds(&mut self, element_id: &str, bounds: Bounds) {
        self.calls.push(format!("fit_bounds {}", element_id));
        self.bounds.push(bounds);
    }
}

#[cfg(test)]
fn page_with(route: &Route) -> Page {
    let mut page = Page::new("test");
    page.append_card(route.map_element_id(), String::new());
    page
}

#[test]
fn timeline_route_draws_line_markers_and_bounds() {
    use crate::entities::TimelineStop;

    let mut route = Route::new(1, "Haro", "rioja");
    route.timeline = Some(vec![
        TimelineStop {
            time: "10:00".into(),
            activity: "Start".into(),
            place: Some("Station".into()),
            coords: Some(Coordinates::new(42.578, -2.847)),
        },
        TimelineStop {
            time: "11:00".into(),
            activity: "Walk".into(),
            place: None,
            coords: Some(Coordinates::new(42.580, -2.860)),
        },
        TimelineStop {
            time: "12:00".into(),
            activity: "Tasting".into(),
            place: Some("López de Heredia".into()),
            coords: Some(Coordinates::new(42.571, -2.851)),
        },
    ]);

    let mut canvas = RecordingCanvas::default();
    assert!(draw_route_map(&route, &page_with(&route), &mut canvas));

    assert_eq!(
        canvas.calls,
        vec![
            "create_map map1",
            "add_tile_layer map1",
            "add_polyline map1",
            "add_marker map1",
            "add_marker map1",
            "fit_bounds map1",
        ]
    );

    let (_, options) = &canvas.maps[0];
    assert_eq!(options.center, Coordinates::new(42.578, -2.847));
    assert_eq!(options.zoom, DEFAULT_ZOOM);
    assert!(!options.zoom_control);

    let (line, style) = &canvas.lines[0];
    assert_eq!(line.len(), 3);
    assert_eq!(style.color, "#667eea");

    assert_eq!(
        canvas.markers[1],
        (
            Coordinates::new(42.571, -2.851),
            "López de Heredia".to_string(),
            "<b>López de Heredia</b><br>12:00: Tasting".to_string()
        )
    );

    assert_eq!(
        canvas.bounds[0],
        Bounds {
            south_west: Coordinates::new(42.571, -2.860),
            north_east: Coordinates::new(42.580, -2.847),
        }
    );
}

#[test]
fn legacy_route_uses_hints_and_old_markers() {
    use crate::entities::Marker;

    let mut route = Route::new(2, "Sitges", "penedes");
    route.legacy_route = Some(vec![
        Coordinates::new(41.235, 1.811),
        Coordinates::new(41.237, 1.805),
    ]);
    route.center = Some(Coordinates::new(41.236, 1.808));
    route.zoom = Some(16.0);
    route.markers = Some(vec![
        Marker {
            coords: Some(Coordinates::new(41.235, 1.811)),
            title: "Start".into(),
            popup: "Start here".into(),
        },
        Marker {
            coords: None,
            title: "Somewhere".into(),
            popup: "Unplaced".into(),
        },
    ]);

    let mut canvas = RecordingCanvas::default();
    assert!(draw_route_map(&route, &page_with(&route), &mut canvas));

    let (_, options) = &canvas.maps[0];
    assert_eq!(options.center, Coordinates::new(41.236, 1.808));
    assert_eq!(options.zoom, 16.0);
    assert_eq!(canvas.lines[0].1.color, "#f1c40f");
    assert_eq!(
        canvas.markers,
        vec![(
            Coordinates::new(41.235, 1.811),
            "Start".to_string(),
            "Start here".to_string()
        )]
    );
}

#[test]
fn skips_missing_element_and_empty_path() {
    let mut route = Route::new(3, "Nowhere", "tarragona");

    let mut canvas = RecordingCanvas::default();
    assert!(!draw_route_map(&route, &page_with(&route), &mut canvas));
    assert!(canvas.calls.is_empty());

    route.legacy_route = Some(vec![Coordinates::new(41.1, 1.2)]);
    assert!(!draw_route_map(&route, &Page::new("test"), &mut canvas));
    assert!(canvas.calls.is_empty());
}

#[test]
fn bounds_of_empty_line_is_none() {
    assert_eq!(bounds_of(&LineString::new(vec![])), None);
}

#[test]
fn fractional_zoom_passes_through_and_zero_means_default() {
    let mut route = Route::new(4, "Ezcaray", "rioja");
    route.legacy_route = Some(vec![Coordinates::new(42.325, -3.013)]);

    route.zoom = Some(13.5);
    let mut canvas = RecordingCanvas::default();
    assert!(draw_route_map(&route, &page_with(&route), &mut canvas));
    assert_eq!(canvas.maps[0].1.zoom, 13.5);

    route.zoom = Some(0.0);
    let mut canvas = RecordingCanvas::default();
    assert!(draw_route_map(&route, &page_with(&route), &mut canvas));
    assert_eq!(canvas.maps[0].1.zoom, DEFAULT_ZOOM);
}
