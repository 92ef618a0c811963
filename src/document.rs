//! Configuration document
//!
//! The user-authored input to registration: a list of provider
//! dictionaries and a list of map entries.
//!
//! ```text
//! {
//!   "providers": [ { "name": "osm", "type": "static", "layers": ["roads"] } ],
//!   "maps": [
//!     { "name": "streets", "srid": 3857,
//!       "layers": [ { "provider_layer": "osm.roads", "min_zoom": 4,
//!                     "default_tags": { "class": "road" } } ] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dict::{Dict, Value};
use crate::error::Result;

/// A complete configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// Raw provider configurations; each needs at least `name` and `type`
    #[serde(default)]
    pub providers: Vec<Dict>,

    #[serde(default)]
    pub maps: Vec<MapConfig>,
}

impl Document {
    pub fn new(providers: Vec<Dict>, maps: Vec<MapConfig>) -> Self {
        Self { providers, maps }
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), bytes = contents.len(), "loaded configuration document");
        Self::from_json_str(&contents)
    }
}

/// One map entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    pub name: String,

    /// Unset means the default SRID
    #[serde(default)]
    pub srid: Option<u32>,

    #[serde(default)]
    pub attribution: Option<String>,

    /// `[min_lon, min_lat, max_lon, max_lat]`
    #[serde(default)]
    pub bounds: Option<[f64; 4]>,

    /// `[lon, lat, zoom]`
    #[serde(default)]
    pub center: Option<[f64; 3]>,

    /// Tile buffer in pixels
    #[serde(default)]
    pub tile_buffer: Option<u32>,

    /// Layers in draw order
    #[serde(default)]
    pub layers: Vec<MapLayerConfig>,
}

impl MapConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn with_layer(mut self, layer: MapLayerConfig) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn with_bounds(mut self, bounds: [f64; 4]) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_center(mut self, center: [f64; 3]) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_tile_buffer(mut self, tile_buffer: u32) -> Self {
        self.tile_buffer = Some(tile_buffer);
        self
    }
}

/// One layer entry inside a map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapLayerConfig {
    /// `provider.layer` reference
    pub provider_layer: String,

    /// Layer name served to clients; defaults to the provider-side name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub min_zoom: Option<u8>,

    #[serde(default)]
    pub max_zoom: Option<u8>,

    /// Kept as a raw value: anything but a mapping is rejected during
    /// resolution rather than while parsing.
    #[serde(default)]
    pub default_tags: Option<Value>,

    #[serde(default)]
    pub dont_simplify: bool,

    #[serde(default)]
    pub dont_clip: bool,

    #[serde(default)]
    pub dont_clean: bool,
}

impl MapLayerConfig {
    pub fn new(provider_layer: impl Into<String>) -> Self {
        Self {
            provider_layer: provider_layer.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_zoom(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = Some(min_zoom);
        self.max_zoom = Some(max_zoom);
        self
    }

    pub fn with_default_tags(mut self, tags: impl Into<Value>) -> Self {
        self.default_tags = Some(tags.into());
        self
    }
}
