mod card;
mod maps;
mod path;

pub use card::render_card;
pub use maps::{bounds_of, draw_route_map, DEFAULT_ZOOM};
pub use path::normalized_path;

use crate::{
    api::{MapCanvas, RouteSource},
    entities::Route,
    error::Error,
    external::leaflet::LeafletScript,
    page::Page,
};

pub const PAGE_TITLE: &str = "Wine Country Walking Routes";

/// Routes loaded for one run, handed explicitly to the card renderer and the
/// map initializer.
#[derive(Clone, Debug)]
pub struct RenderContext {
    routes: Vec<Route>,
}

impl RenderContext {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    #[tracing::instrument(name = "RenderContext::load", skip_all)]
    pub async fn load(source: &dyn RouteSource) -> Result<Self, Error> {
        let collection = source.fetch_routes().await?;
        tracing::info!("loaded {} routes", collection.routes.len());

        Ok(Self::new(collection.routes))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Appends one card per route to the page's routes container.
    #[tracing::instrument(skip_all)]
    pub fn render_cards(&self, page: &mut Page) {
        for route in &self.routes {
            page.append_card(route.map_element_id(), render_card(route));
        }
    }

    /// Draws a map for every route whose map element is on the page and
    /// returns how many were drawn.
    #[tracing::instrument(skip_all)]
    pub fn initialize_maps<C: MapCanvas>(&self, page: &Page, canvas: &mut C) -> usize {
        tracing::info!("initializing maps");

        self.routes
            .iter()
            .filter(|route| draw_route_map(route, page, canvas))
            .count()
    }
}

/// Full run: load the routes, render the cards, then draw the maps when
/// `maps_enabled`. A failed load is logged and leaves the page empty.
#[tracing::instrument(skip(source))]
pub async fn build_page(source: &dyn RouteSource, maps_enabled: bool) -> Page {
    let mut page = Page::new(PAGE_TITLE);

    let context = match RenderContext::load(source).await {
        Ok(context) => context,
        Err(err) => {
            tracing::error!("error loading routes data: {}", err);
            return page;
        }
    };

    context.render_cards(&mut page);

    if maps_enabled {
        let mut canvas = LeafletScript::new();
        let drawn = context.initialize_maps(&page, &mut canvas);
        tracing::info!("drew {} of {} maps", drawn, context.routes().len());
        page.append_script(canvas.into_statements());
    }

    page
}

#[cfg(test)]
struct StaticSource(Result<crate::entities::RouteCollection, i32>);

#[cfg(test)]
#[async_trait::async_trait]
impl RouteSource for StaticSource {
    async fn fetch_routes(&self) -> Result<crate::entities::RouteCollection, Error> {
        match &self.0 {
            Ok(collection) => Ok(collection.clone()),
            Err(code) => Err(Error {
                code: *code,
                message: "fetch failed".into(),
            }),
        }
    }
}

#[cfg(test)]
fn two_routes() -> crate::entities::RouteCollection {
    use crate::entities::Coordinates;

    let mut walled = Route::new(1, "Laguardia walls", "rioja");
    walled.legacy_route = Some(vec![
        Coordinates::new(42.553, -2.585),
        Coordinates::new(42.555, -2.583),
        Coordinates::new(42.553, -2.585),
    ]);

    let empty = Route::new(2, "Unmapped", "penedes");

    crate::entities::RouteCollection {
        routes: vec![walled, empty],
    }
}

#[test]
fn build_page_renders_cards_and_maps() {
    use tokio_test::block_on;

    let page = block_on(build_page(&StaticSource(Ok(two_routes())), true));
    assert_eq!(page.card_count(), 2);

    let html = page.to_html();
    assert!(html.contains(r#"id="map1""#));
    assert!(html.contains(r#"id="map2""#));
    assert!(html.contains(r#"var map_map1 = L.map("map1""#));
    assert!(!html.contains("map_map2"));
    assert!(html.contains("&origin=42.553,-2.585&destination=42.553,-2.585&waypoints=42.555,-2.583"));
}

#[test]
fn build_page_without_maps_has_no_script() {
    use tokio_test::block_on;

    let page = block_on(build_page(&StaticSource(Ok(two_routes())), false));
    assert_eq!(page.card_count(), 2);
    assert!(!page.to_html().contains("L.map"));
}

#[test]
fn failed_load_leaves_page_empty() {
    use tokio_test::block_on;

    let page = block_on(build_page(&StaticSource(Err(4)), true));
    assert_eq!(page.card_count(), 0);
    assert!(!page.to_html().contains("route-card"));
}

#[test]
fn context_steps_run_independently() {
    let context = RenderContext::new(two_routes().routes);

    let mut canvas = LeafletScript::new();
    assert_eq!(context.initialize_maps(&Page::new("empty"), &mut canvas), 0);
    assert!(canvas.statements().is_empty());

    let mut page = Page::new("cards");
    context.render_cards(&mut page);
    assert_eq!(context.initialize_maps(&page, &mut canvas), 1);
}

#[test]
fn one_loose_record_keeps_every_card() {
    use crate::entities::{Coordinates, TimelineStop};
    use tokio_test::block_on;

    let mut collection = two_routes();
    collection.routes[0].zoom = Some(13.5);

    let mut loose = Route::new(3, "", "");
    loose.timeline = Some(vec![TimelineStop {
        time: String::new(),
        activity: String::new(),
        place: None,
        coords: Some(Coordinates::new(41.1, 1.2)),
    }]);
    collection.routes.push(loose);

    let page = block_on(build_page(&StaticSource(Ok(collection)), true));
    assert_eq!(page.card_count(), 3);

    let html = page.to_html();
    assert!(html.contains("zoom: 13.5"));
    assert!(html.contains(r#"var map_map3 = L.map("map3""#));
}
