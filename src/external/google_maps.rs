use crate::entities::Coordinates;

pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Google accepts 25 points per directions link; origin and destination take
/// two of them.
pub const MAX_WAYPOINTS: usize = 23;

/// Builds a walking-directions deep link for a normalized route path.
///
/// A path whose first and last points are exactly equal is treated as a
/// loop: the destination is set back to the origin. Interior points become
/// waypoints, truncated to [`MAX_WAYPOINTS`]. The `|` separator between
/// waypoints is left unescaped. `route_number` is only used for diagnostics.
#[tracing::instrument(skip(path), fields(points = path.len()))]
pub fn directions_url(path: &[Coordinates], route_number: u32) -> String {
    let mut url = format!("{}&travelmode=walking", DIRECTIONS_BASE_URL);

    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return url,
    };

    let is_circular = first == last;
    let destination = if is_circular && path.len() > 1 {
        first
    } else {
        last
    };

    url.push_str(&format!("&origin={}", first));
    url.push_str(&format!("&destination={}", destination));

    let interior: &[Coordinates] = if path.len() > 2 {
        &path[1..path.len() - 1]
    } else {
        &[]
    };

    if interior.len() > MAX_WAYPOINTS {
        tracing::warn!(
            "route {} has more than {} waypoints, truncating",
            route_number,
            MAX_WAYPOINTS
        );
    }

    let waypoints: Vec<String> = interior
        .iter()
        .take(MAX_WAYPOINTS)
        .map(ToString::to_string)
        .collect();

    if !waypoints.is_empty() {
        url.push_str(&format!("&waypoints={}", waypoints.join("|")));
    }

    tracing::debug!("route {} directions url: {}", route_number, url);

    url
}

#[cfg(test)]
fn path(points: &[[f64; 2]]) -> Vec<Coordinates> {
    points.iter().copied().map(Coordinates::from).collect()
}

#[cfg(test)]
fn query_value<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    url.split('&')
        .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
}

#[cfg(test)]
#[derive(Clone, Default)]
struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
fn warnings_while<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (out, logs)
}

#[test]
fn empty_path_only_sets_travel_mode() {
    assert_eq!(
        directions_url(&[], 1),
        "https://www.google.com/maps/dir/?api=1&travelmode=walking"
    );
}

#[test]
fn three_point_path() {
    let url = directions_url(&path(&[[42.0, -2.0], [42.1, -2.1], [42.2, -2.2]]), 1);
    assert_eq!(
        url,
        "https://www.google.com/maps/dir/?api=1&travelmode=walking\
         &origin=42,-2&destination=42.2,-2.2&waypoints=42.1,-2.1"
    );
}

#[test]
fn circular_path_returns_to_origin() {
    let url = directions_url(&path(&[[10.0, 20.0], [11.0, 21.0], [10.0, 20.0]]), 2);
    assert_eq!(query_value(&url, "origin"), Some("10,20"));
    assert_eq!(query_value(&url, "destination"), Some("10,20"));
    assert_eq!(query_value(&url, "waypoints"), Some("11,21"));
}

#[test]
fn single_point_is_origin_and_destination() {
    let url = directions_url(&path(&[[41.5, 2.5]]), 3);
    assert_eq!(query_value(&url, "origin"), Some("41.5,2.5"));
    assert_eq!(query_value(&url, "destination"), Some("41.5,2.5"));
    assert_eq!(query_value(&url, "waypoints"), None);
}

#[test]
fn two_points_have_no_waypoints() {
    let url = directions_url(&path(&[[41.5, 2.5], [41.6, 2.6]]), 4);
    assert_eq!(query_value(&url, "destination"), Some("41.6,2.6"));
    assert_eq!(query_value(&url, "waypoints"), None);

    let url = directions_url(&path(&[[41.5, 2.5], [41.5, 2.5]]), 4);
    assert_eq!(query_value(&url, "destination"), Some("41.5,2.5"));
    assert_eq!(query_value(&url, "waypoints"), None);
}

#[test]
fn interior_points_truncated_to_limit() {
    let points: Vec<[f64; 2]> = (0..26).map(|i| [40.0 + i as f64, 1.0]).collect();
    let url = directions_url(&path(&points), 5);

    let waypoints: Vec<&str> = query_value(&url, "waypoints").unwrap().split('|').collect();
    assert_eq!(waypoints.len(), MAX_WAYPOINTS);
    assert_eq!(waypoints.first(), Some(&"41,1"));
    assert_eq!(waypoints.last(), Some(&"63,1"));
    assert_eq!(query_value(&url, "destination"), Some("65,1"));
}

#[test]
fn parameters_follow_fixed_order() {
    let url = directions_url(&path(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]), 6);
    let keys: Vec<&str> = url
        .split('&')
        .skip(1)
        .filter_map(|pair| pair.split('=').next())
        .collect();
    assert_eq!(keys, vec!["travelmode", "origin", "destination", "waypoints"]);
}

#[test]
fn truncation_is_logged_with_route_number() {
    let points: Vec<[f64; 2]> = (0..26).map(|i| [40.0 + i as f64, 1.0]).collect();
    let (_, logs) = warnings_while(|| directions_url(&path(&points), 17));
    assert!(logs.contains("WARN"));
    assert!(logs.contains("route 17 has more than 23 waypoints, truncating"));

    let points: Vec<[f64; 2]> = (0..25).map(|i| [40.0 + i as f64, 1.0]).collect();
    let (url, logs) = warnings_while(|| directions_url(&path(&points), 18));
    assert_eq!(query_value(&url, "waypoints").unwrap().split('|').count(), MAX_WAYPOINTS);
    assert!(!logs.contains("truncating"));
}
