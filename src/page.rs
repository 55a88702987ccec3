//! In-memory document the cards and maps are rendered into, serialized to a
//! single HTML file at the end of a run.

pub const CONTAINER_ID: &str = "routes-container";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

#[derive(Clone, Debug, PartialEq)]
struct CardElement {
    map_element_id: String,
    html: String,
}

#[derive(Clone, Debug, Default)]
pub struct Page {
    title: String,
    cards: Vec<CardElement>,
    script: Vec<String>,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Appends a card to the routes container. `map_element_id` is the id of
    /// the map element inside `html`.
    pub fn append_card(&mut self, map_element_id: String, html: String) {
        self.cards.push(CardElement {
            map_element_id,
            html,
        });
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn has_element(&self, id: &str) -> bool {
        id == CONTAINER_ID || self.cards.iter().any(|c| c.map_element_id == id)
    }

    pub fn append_script(&mut self, statements: impl IntoIterator<Item = String>) {
        self.script.extend(statements);
    }

    pub fn to_html(&self) -> String {
        let uses_maps = !self.script.is_empty();

        let mut head = format!(
            "<meta charset=\"utf-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n    <title>{}</title>",
            self.title
        );
        if uses_maps {
            head.push_str(&format!(
                "\n    <link rel=\"stylesheet\" href=\"{}\">\n    <script src=\"{}\"></script>",
                LEAFLET_CSS, LEAFLET_JS
            ));
        }

        let cards: Vec<&str> = self.cards.iter().map(|c| c.html.as_str()).collect();

        let script = if uses_maps {
            format!(
                "\n<script>\n{}\n</script>",
                self.script.join("\n")
            )
        } else {
            String::new()
        };

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    {head}\n</head>\n<body>\n<div id=\"{container}\">\n{cards}\n</div>{script}\n</body>\n</html>\n",
            head = head,
            container = CONTAINER_ID,
            cards = cards.join("\n"),
            script = script,
        )
    }
}

#[test]
fn empty_page_is_bare_container() {
    let html = Page::new("Wine Walks").to_html();

    assert!(html.contains(r#"<div id="routes-container">"#));
    assert!(html.contains("<title>Wine Walks</title>"));
    assert!(!html.contains("leaflet"));
    assert!(!html.contains("<script>"));
}

#[test]
fn cards_register_their_map_elements() {
    let mut page = Page::new("Wine Walks");
    page.append_card("map1".into(), r#"<div class="route-card" id="map1"></div>"#.into());

    assert_eq!(page.card_count(), 1);
    assert!(page.has_element("map1"));
    assert!(page.has_element(CONTAINER_ID));
    assert!(!page.has_element("map2"));
}

#[test]
fn script_pulls_in_leaflet() {
    let mut page = Page::new("Wine Walks");
    page.append_script(vec!["var x = 1;".to_string()]);

    let html = page.to_html();
    assert!(html.contains(LEAFLET_JS));
    assert!(html.contains("<script>\nvar x = 1;\n</script>"));
}
