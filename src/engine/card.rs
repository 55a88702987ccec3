use crate::{
    engine::path::normalized_path,
    entities::{Route, TimelineStop, Venue},
    external::google_maps::directions_url,
};

/// Renders the card element for one route. Text fields are inserted as-is;
/// route data may carry inline markup.
#[tracing::instrument(skip_all, fields(route = route.number))]
pub fn render_card(route: &Route) -> String {
    let region = route.region_style();

    let mut badges = vec![
        format!(
            r#"<span class="badge" style="background: {}; font-weight: 600;">{}</span>"#,
            region.badge_style, region.name
        ),
        badge(&route.distance),
        badge(&route.duration),
        badge(&route.difficulty),
    ];
    badges.extend(route.special_badges.iter().flatten().map(|b| badge(b)));

    let placeholder = match &route.location {
        Some(location) => format!(
            r#"
            <div class="map-placeholder">
                <div>📍 {}</div>
                <div style="font-size: 0.85em; margin-top: 8px;">{}</div>
            </div>"#,
            location.name,
            location.label()
        ),
        None => String::new(),
    };

    let url = directions_url(&normalized_path(route), route.number);

    let mut details = String::new();
    if let Some(timeline) = &route.timeline {
        details.push_str(&timeline_section(timeline));
    }
    if let Some(highlights) = &route.highlights {
        details.push_str(&text_section("Route Highlights", highlights));
    }
    if let Some(wineries) = &route.wineries {
        details.push_str(&venue_section("Wineries", wineries));
    }
    if let Some(restaurants) = &route.restaurants {
        details.push_str(&venue_section("Hidden Restaurants", restaurants));
    }
    if let Some(description) = &route.description {
        details.push_str(&text_section("Optimal Schedule", description));
    }

    format!(
        r#"<div class="route-card">
    <div class="route-header">
        <div>
            <span class="route-number">{number}</span>
            <span class="route-title">{title}</span>
        </div>
        <div class="route-badges">
            {badges}
        </div>
    </div>

    <div class="map-container" id="{map_id}">{placeholder}
    </div>

    <div class="map-actions">
        <a href="{url}" target="_blank" class="directions-button">
            <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                <path d="M12 2L4.5 20.29l.71.71L12 18l6.79 3 .71-.71z"/>
            </svg>
            Get Walking Directions
        </a>
    </div>

    <div class="route-details">{details}
    </div>
</div>"#,
        number = route.number,
        title = route.title,
        badges = badges.join("\n            "),
        map_id = route.map_element_id(),
        placeholder = placeholder,
        url = url,
        details = details,
    )
}

fn badge(text: &str) -> String {
    format!(r#"<span class="badge">{}</span>"#, text)
}

fn timeline_section(timeline: &[TimelineStop]) -> String {
    let mut items = String::new();
    for stop in timeline {
        items.push_str(&format!(
            r#"
                <div class="timeline-item">
                    <span class="timeline-time">{}</span>
                    <span class="timeline-activity">{}</span>
                </div>"#,
            stop.time, stop.activity
        ));
    }

    format!(
        r#"
        <div class="detail-section">
            <h4>Optimal Schedule</h4>
            <div class="timeline">{}
            </div>
        </div>"#,
        items
    )
}

fn text_section(heading: &str, body: &str) -> String {
    format!(
        r#"
        <div class="detail-section">
            <h4>{}</h4>
            <p>{}</p>
        </div>"#,
        heading, body
    )
}

fn venue_section(heading: &str, venues: &[Venue]) -> String {
    let mut items = String::new();
    for venue in venues {
        items.push_str(&format!(
            r#"
                <div class="winery-item">
                    <div class="winery-name">{}</div>
                    <div class="winery-details">
                        {}
                        <br><a href="{}" class="winery-phone">{}</a>
                    </div>
                </div>"#,
            venue.name,
            venue.details,
            venue.tel_href(),
            venue.phone
        ));
    }

    format!(
        r#"
        <div class="detail-section">
            <h4>{}</h4>
            <div class="winery-list">{}
            </div>
        </div>"#,
        heading, items
    )
}

#[cfg(test)]
fn sample_route() -> Route {
    use crate::entities::{Coordinates, Location};

    let mut route = Route::new(4, "Cambrils Harbour Loop", "costa-brava");
    route.distance = "6 km".into();
    route.duration = "Half day".into();
    route.difficulty = "Easy".into();
    route.special_badges = Some(vec!["Seafood".into(), "Sunset".into()]);
    route.location = Some(Location {
        name: "Cambrils".into(),
        lat: 41.0669,
        lon: 1.0598,
    });
    route.timeline = Some(vec![
        TimelineStop {
            time: "12:00".into(),
            activity: "Start at the port".into(),
            place: Some("Port de Cambrils".into()),
            coords: Some(Coordinates::new(41.0669, 1.0598)),
        },
        TimelineStop {
            time: "13:30".into(),
            activity: "Lunch".into(),
            place: None,
            coords: Some(Coordinates::new(41.07, 1.06)),
        },
    ]);
    route.restaurants = Some(vec![Venue {
        name: "Can Bosch".into(),
        details: "Rambla Jaume I".into(),
        phone: "+34 977 360 019".into(),
    }]);
    route
}

#[test]
fn card_has_header_badges_and_map_element() {
    let html = render_card(&sample_route());

    assert!(html.contains(r#"<span class="route-number">4</span>"#));
    assert!(html.contains(r#"<span class="route-title">Cambrils Harbour Loop</span>"#));
    assert!(html.contains(
        r#"style="background: rgba(46, 204, 113, 0.1); color: #2ecc71; font-weight: 600;">Costa Brava</span>"#
    ));
    assert!(html.contains(r#"<span class="badge">6 km</span>"#));
    assert!(html.contains(r#"<span class="badge">Sunset</span>"#));
    assert!(html.contains(r#"id="map4""#));
    assert!(html.contains("📍 Cambrils"));
    assert!(html.contains("41.0669°N, 1.0598°E"));
}

#[test]
fn card_links_directions_and_phones() {
    let html = render_card(&sample_route());

    assert!(html.contains(
        r#"href="https://www.google.com/maps/dir/?api=1&travelmode=walking&origin=41.0669,1.0598&destination=41.07,1.06""#
    ));
    assert!(html.contains(r#"<a href="tel:+34 977 360 019" class="winery-phone">+34 977 360 019</a>"#));
    assert!(html.contains("<h4>Hidden Restaurants</h4>"));
    assert!(html.contains(r#"<span class="timeline-activity">Start at the port</span>"#));
}

#[test]
fn absent_fields_omit_their_sections() {
    let html = render_card(&Route::new(9, "Bare route", "somewhere"));

    assert!(html.contains(r#">somewhere</span>"#));
    assert!(!html.contains("detail-section"));
    assert!(!html.contains("map-placeholder"));
    assert!(html.contains(
        r#"href="https://www.google.com/maps/dir/?api=1&travelmode=walking""#
    ));
}
