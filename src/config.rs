use std::env;

use crate::error::{invalid_config_error, Error};

pub const ROUTES_VAR: &str = "VINEWALK_ROUTES";
pub const OUTPUT_VAR: &str = "VINEWALK_OUTPUT";
pub const MAPS_VAR: &str = "VINEWALK_MAPS";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// File path or `http(s)://` URL of the route data document.
    pub routes: String,
    /// Where the rendered page is written.
    pub output: String,
    /// Whether interactive maps are drawn. Hosts that cannot run the map
    /// library turn this off instead of the page sniffing its environment.
    pub maps_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routes: "routes-data.json".into(),
            output: "index.html".into(),
            maps_enabled: true,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment, after loading a
    /// `.env` file if one is present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let maps_enabled = match lookup(MAPS_VAR) {
            Some(value) => parse_flag(MAPS_VAR, &value)?,
            None => defaults.maps_enabled,
        };

        Ok(Self {
            routes: lookup(ROUTES_VAR).unwrap_or(defaults.routes),
            output: lookup(OUTPUT_VAR).unwrap_or(defaults.output),
            maps_enabled,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid_config_error(key, value)),
    }
}

#[test]
fn defaults_when_unset() {
    let config = Config::from_lookup(|_| None).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.maps_enabled);
}

#[test]
fn reads_overrides() {
    let config = Config::from_lookup(|key| match key {
        ROUTES_VAR => Some("https://example.com/routes-data.json".into()),
        OUTPUT_VAR => Some("public/index.html".into()),
        MAPS_VAR => Some("OFF".into()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.routes, "https://example.com/routes-data.json");
    assert_eq!(config.output, "public/index.html");
    assert!(!config.maps_enabled);
}

#[test]
fn rejects_unknown_flag_value() {
    let err = Config::from_lookup(|key| (key == MAPS_VAR).then(|| "sometimes".to_string()))
        .unwrap_err();
    assert_eq!(err.code, 102);
}
