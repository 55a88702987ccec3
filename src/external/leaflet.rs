use crate::{
    api::{Bounds, MapCanvas, MapOptions, PolylineStyle, TileLayer},
    entities::Coordinates,
};

/// [`MapCanvas`] that writes Leaflet calls for the page's script block.
#[derive(Debug, Default)]
pub struct LeafletScript {
    statements: Vec<String>,
}

impl LeafletScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }
}

fn js_string(s: &str) -> String {
    // A JSON string literal is a valid JS string literal.
    serde_json::Value::from(s).to_string()
}

fn js_point(c: Coordinates) -> String {
    format!("[{}, {}]", c.lat, c.lng)
}

fn map_var(element_id: &str) -> String {
    format!("map_{}", element_id)
}

fn line_var(element_id: &str) -> String {
    format!("line_{}", element_id)
}

impl MapCanvas for LeafletScript {
    fn create_map(&mut self, element_id: &str, options: &MapOptions) {
        self.statements.push(format!(
            "document.getElementById({id}).innerHTML = '';",
            id = js_string(element_id)
        ));
        self.statements.push(format!(
            "var {var} = L.map({id}, {{ center: {center}, zoom: {zoom}, zoomControl: {zc} }});",
            var = map_var(element_id),
            id = js_string(element_id),
            center = js_point(options.center),
            zoom = options.zoom,
            zc = options.zoom_control,
        ));
    }

    fn add_tile_layer(&mut self, element_id: &str, layer: &TileLayer) {
        self.statements.push(format!(
            "L.tileLayer({url}, {{ attribution: {attr} }}).addTo({var});",
            url = js_string(&layer.url_template),
            attr = js_string(&layer.attribution),
            var = map_var(element_id),
        ));
    }

    fn add_polyline(&mut self, element_id: &str, path: &[Coordinates], style: &PolylineStyle) {
        let points: Vec<String> = path.iter().copied().map(js_point).collect();
        self.statements.push(format!(
            "var {line} = L.polyline([{points}], {{ color: {color}, weight: {weight}, opacity: {opacity}, smoothFactor: {smooth} }}).addTo({var});",
            line = line_var(element_id),
            points = points.join(", "),
            color = js_string(&style.color),
            weight = style.weight,
            opacity = style.opacity,
            smooth = style.smooth_factor,
            var = map_var(element_id),
        ));
    }

    fn add_marker(&mut self, element_id: &str, at: Coordinates, title: &str, popup: &str) {
        self.statements.push(format!(
            "L.marker({at}, {{ title: {title} }}).addTo({var}).bindPopup({popup});",
            at = js_point(at),
            title = js_string(title),
            var = map_var(element_id),
            popup = js_string(popup),
        ));
    }

    fn fit_bounds(&mut self, element_id: &str, bounds: Bounds) {
        self.statements.push(format!(
            "{var}.fitBounds([{sw}, {ne}]);",
            var = map_var(element_id),
            sw = js_point(bounds.south_west),
            ne = js_point(bounds.north_east),
        ));
    }
}

#[test]
fn emits_map_setup_calls() {
    let mut canvas = LeafletScript::new();
    canvas.create_map(
        "map2",
        &MapOptions {
            center: Coordinates::new(42.5, -2.5),
            zoom: 14.0,
            zoom_control: false,
        },
    );
    canvas.add_tile_layer("map2", &TileLayer::default());

    assert_eq!(
        canvas.statements(),
        &[
            r#"document.getElementById("map2").innerHTML = '';"#.to_string(),
            r#"var map_map2 = L.map("map2", { center: [42.5, -2.5], zoom: 14, zoomControl: false });"#
                .to_string(),
            r#"L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", { attribution: "© OpenStreetMap" }).addTo(map_map2);"#
                .to_string(),
        ]
    );
}

#[test]
fn quotes_popup_markup() {
    let mut canvas = LeafletScript::new();
    canvas.add_marker(
        "map1",
        Coordinates::new(41.0, 1.0),
        "Bodega \"El Pozo\"",
        "<b>Bodega</b><br>10:00: Tasting",
    );

    assert_eq!(
        canvas.into_statements(),
        vec![
            r#"L.marker([41, 1], { title: "Bodega \"El Pozo\"" }).addTo(map_map1).bindPopup("<b>Bodega</b><br>10:00: Tasting");"#
                .to_string()
        ]
    );
}

#[test]
fn polyline_and_bounds_use_lat_lng_pairs() {
    let mut canvas = LeafletScript::new();
    canvas.add_polyline(
        "map3",
        &[Coordinates::new(41.1, 1.2), Coordinates::new(41.2, 1.3)],
        &PolylineStyle::with_color("#3498db"),
    );
    canvas.fit_bounds(
        "map3",
        Bounds {
            south_west: Coordinates::new(41.1, 1.2),
            north_east: Coordinates::new(41.2, 1.3),
        },
    );

    assert_eq!(
        canvas.statements()[0],
        r##"var line_map3 = L.polyline([[41.1, 1.2], [41.2, 1.3]], { color: "#3498db", weight: 4, opacity: 0.7, smoothFactor: 1 }).addTo(map_map3);"##
    );
    assert_eq!(canvas.statements()[1], "map_map3.fitBounds([[41.1, 1.2], [41.2, 1.3]]);");
}
