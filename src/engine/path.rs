use crate::entities::{Coordinates, Route};

/// Ordered walkable path of a route.
///
/// Timeline stops with coordinates win; stops without one are skipped. Only
/// when no stop has coordinates does the legacy `route` list apply, verbatim.
/// The two sources are never merged.
pub fn normalized_path(route: &Route) -> Vec<Coordinates> {
    let from_timeline: Vec<Coordinates> = route
        .timeline
        .iter()
        .flatten()
        .filter_map(|stop| stop.coords)
        .collect();

    if !from_timeline.is_empty() {
        return from_timeline;
    }

    route.legacy_route.clone().unwrap_or_default()
}

#[cfg(test)]
fn stop(coords: Option<[f64; 2]>) -> crate::entities::TimelineStop {
    crate::entities::TimelineStop {
        time: "09:00".into(),
        activity: "Walk".into(),
        place: None,
        coords: coords.map(Coordinates::from),
    }
}

#[test]
fn timeline_coords_in_order_skipping_missing() {
    let mut route = Route::new(1, "Logroño old town", "rioja");
    route.timeline = Some(vec![
        stop(Some([42.46, -2.44])),
        stop(None),
        stop(Some([42.47, -2.45])),
        stop(Some([42.46, -2.44])),
    ]);
    route.legacy_route = Some(vec![Coordinates::new(0.0, 0.0)]);

    assert_eq!(
        normalized_path(&route),
        vec![
            Coordinates::new(42.46, -2.44),
            Coordinates::new(42.47, -2.45),
            Coordinates::new(42.46, -2.44),
        ]
    );
}

#[test]
fn legacy_route_used_when_timeline_has_no_coords() {
    let legacy = vec![
        Coordinates::new(41.11, 1.25),
        Coordinates::new(41.12, 1.26),
    ];

    let mut route = Route::new(2, "Tarragona walls", "tarragona");
    route.timeline = Some(vec![stop(None), stop(None)]);
    route.legacy_route = Some(legacy.clone());
    assert_eq!(normalized_path(&route), legacy);

    route.timeline = None;
    assert_eq!(normalized_path(&route), legacy);

    route.timeline = Some(vec![]);
    assert_eq!(normalized_path(&route), legacy);
}

#[test]
fn no_sources_yields_empty_path() {
    let mut route = Route::new(3, "Nowhere", "rioja");
    assert!(normalized_path(&route).is_empty());

    route.timeline = Some(vec![stop(None)]);
    assert!(normalized_path(&route).is_empty());
}
