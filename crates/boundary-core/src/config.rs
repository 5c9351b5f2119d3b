// crates/boundary-core/src/config.rs

//! # Map configuration
//!
//! Everything the host hands over when it creates the map component: the
//! initial view, the startup district set and an optional geocode string to
//! load right after the map exists. Documents use the same camelCase keys as
//! the component inputs, so a JSON config file and a JS options object share
//! one shape:
//!
//! ```json
//! {
//!   "zoom": 9.9,
//!   "zoomRange": { "min": 9.9, "max": 10.9 },
//!   "location": { "lon": 101.32107, "lat": 6.750956 },
//!   "boundaryGeocodes": "610604;610607",
//!   "boundaryOptions": { "fillColor": "#00ff00" },
//!   "districts": [{ "geocode": "94__", "fillColor": "#ff0000" }]
//! }
//! ```

use crate::error::Result;
use crate::geocode::Geocode;
use crate::options::BoundaryOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ZOOM: f64 = 9.9;
pub const DEFAULT_ZOOM_MIN: f64 = 9.9;
pub const DEFAULT_ZOOM_MAX: f64 = 10.9;
pub const DEFAULT_LON: f64 = 101.321070;
pub const DEFAULT_LAT: f64 = 6.750956;
pub const DEFAULT_ARIA_LABEL: &str = "Interactive map";

/// The map always starts from the configured view; restoring the previous
/// session's view is never requested from the engine.
pub const RESTORE_LAST_VIEW: bool = false;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lon: f64,
    pub lat: f64,
}

impl Default for LatLon {
    fn default() -> Self {
        Self {
            lon: DEFAULT_LON,
            lat: DEFAULT_LAT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_ZOOM_MIN,
            max: DEFAULT_ZOOM_MAX,
        }
    }
}

/// Initial view handed to [`MapEngine::create_map`](crate::traits::MapEngine::create_map).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapView {
    pub zoom: f64,
    pub zoom_range: ZoomRange,
    pub location: LatLon,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            zoom_range: ZoomRange::default(),
            location: LatLon::default(),
        }
    }
}

/// One entry of the startup district set: a geocode highlighted in a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictColor {
    pub geocode: Geocode,
    pub fill_color: String,
}

impl DistrictColor {
    pub fn new(geocode: impl Into<Geocode>, fill_color: impl Into<String>) -> Self {
        Self {
            geocode: geocode.into(),
            fill_color: fill_color.into(),
        }
    }
}

/// The district set highlighted when no other set is configured.
pub fn default_districts() -> Vec<DistrictColor> {
    vec![DistrictColor::new("94__", "#ff0000")]
}

/// Complete component configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    #[serde(flatten)]
    pub view: MapView,
    /// Accessible name of the map container.
    pub aria_label: String,
    /// Geocode(s) loaded once right after the map is constructed,
    /// e.g. `"10__"` or `"610604;610607"`.
    pub boundary_geocodes: Option<Geocode>,
    pub boundary_options: BoundaryOptions,
    /// Startup district set, materialized before `boundary_geocodes`.
    pub districts: Vec<DistrictColor>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            view: MapView::default(),
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
            boundary_geocodes: None,
            boundary_options: BoundaryOptions::default(),
            districts: default_districts(),
        }
    }
}

impl MapConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: MapConfig = serde_json::from_str(s)?;
        Ok(cfg.normalized())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_boundary(mut self, geocodes: impl Into<Geocode>, options: BoundaryOptions) -> Self {
        self.boundary_geocodes = Some(geocodes.into());
        self.boundary_options = options;
        self
    }

    pub fn with_districts(mut self, districts: Vec<DistrictColor>) -> Self {
        self.districts = districts;
        self
    }

    /// Applies the rules that hold regardless of where the document came
    /// from: an empty `boundaryGeocodes` string means "nothing to load".
    pub fn normalized(mut self) -> Self {
        if self
            .boundary_geocodes
            .as_ref()
            .is_some_and(|g| g.as_str().trim().is_empty())
        {
            self.boundary_geocodes = None;
        }
        self
    }
}
