use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    api::RouteSource,
    entities::RouteCollection,
    error::{invalid_input_error, upstream_error, Error},
};

pub type DynSource = Box<dyn RouteSource + Send + Sync>;

/// Route document served over HTTP(S).
#[derive(Debug)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RouteSource for HttpSource {
    #[tracing::instrument(name = "HttpSource::fetch_routes", skip(self), fields(url = %self.url))]
    async fn fetch_routes(&self) -> Result<RouteCollection, Error> {
        let res = self.client.get(&self.url).send().await?;

        let status_code = res.status().as_u16();
        if status_code != 200 {
            return Err(upstream_error(status_code));
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Route document on the local filesystem.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RouteSource for FileSource {
    #[tracing::instrument(name = "FileSource::fetch_routes", skip(self), fields(path = %self.path.display()))]
    async fn fetch_routes(&self) -> Result<RouteCollection, Error> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Picks a source for `location`: `http://` and `https://` are fetched,
/// anything else is read as a file path.
pub fn source_for(location: &str) -> Result<DynSource, Error> {
    let location = location.trim();
    if location.is_empty() {
        return Err(invalid_input_error());
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

#[cfg(test)]
fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("vinewalk-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_source_reads_route_document() {
    use tokio_test::block_on;

    let path = scratch_file(
        "routes.json",
        r#"{"routes": [{"number": 1, "title": "Laguardia walls", "region": "rioja"}]}"#,
    );

    let collection = block_on(FileSource::new(&path).fetch_routes()).unwrap();
    assert_eq!(collection.routes.len(), 1);
    assert_eq!(collection.routes[0].title, "Laguardia walls");

    std::fs::remove_file(path).unwrap();
}

#[test]
fn file_source_reports_missing_file_and_bad_json() {
    use tokio_test::block_on;

    let missing = std::env::temp_dir().join("vinewalk-definitely-missing.json");
    let err = block_on(FileSource::new(missing).fetch_routes()).unwrap_err();
    assert_eq!(err.code, 2);

    let path = scratch_file("broken.json", r#"{"routes": [ "#);
    let err = block_on(FileSource::new(&path).fetch_routes()).unwrap_err();
    assert_eq!(err.code, 103);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn source_for_rejects_blank_location() {
    assert_eq!(source_for("  ").err().map(|e| e.code), Some(101));
    assert!(source_for("routes-data.json").is_ok());
    assert!(source_for("https://example.com/routes-data.json").is_ok());
}

#[test]
fn sample_route_data_loads() {
    use crate::engine::normalized_path;
    use tokio_test::block_on;

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/routes-data.json");
    let collection = block_on(FileSource::new(path).fetch_routes()).unwrap();

    let numbers: Vec<u32> = collection.routes.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    // timeline stop without coords is skipped
    assert_eq!(normalized_path(&collection.routes[0]).len(), 4);
    assert_eq!(normalized_path(&collection.routes[2]).len(), 5);
}

#[test]
fn loose_records_still_load() {
    use tokio_test::block_on;

    let path = scratch_file(
        "loose.json",
        r#"{"routes": [
            {"number": 1, "title": "Ezcaray loop", "region": "rioja", "zoom": 13.5,
             "route": [[42.325, -3.013], [42.330, -3.020]]},
            {"number": 2,
             "timeline": [{"time": "10:00", "coords": [41.1, 1.2]}, {"activity": "Lunch"}],
             "markers": [{"title": "No position"}]}
        ]}"#,
    );

    let collection = block_on(FileSource::new(&path).fetch_routes()).unwrap();
    std::fs::remove_file(path).unwrap();

    assert_eq!(collection.routes.len(), 2);
    assert_eq!(collection.routes[0].zoom, Some(13.5));

    let loose = &collection.routes[1];
    assert_eq!(loose.title, "");
    assert_eq!(loose.region, "");
    let timeline = loose.timeline.as_ref().unwrap();
    assert_eq!(timeline[0].activity, "");
    assert_eq!(timeline[1].time, "");
    assert_eq!(loose.markers.as_ref().unwrap()[0].coords, None);
}
