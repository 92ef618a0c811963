//! Resolved catalog types
//!
//! `Atlas`, `Map` and `Layer` are only ever constructed by map resolution,
//! so every layer they hold is known to resolve against its provider.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::dict::Dict;
use crate::error::{AtlasError, Result};
use crate::map::SEPARATOR;
use crate::projection::Projection;

/// A fully dereferenced map layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub(crate) name: String,
    pub(crate) provider: String,
    pub(crate) provider_layer: String,
    pub(crate) min_zoom: u8,
    pub(crate) max_zoom: u8,
    pub(crate) default_tags: Dict,
    pub(crate) dont_simplify: bool,
    pub(crate) dont_clip: bool,
    pub(crate) dont_clean: bool,
}

impl Layer {
    /// Name served to clients
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the provider serving this layer
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Layer name on the provider side
    pub fn provider_layer(&self) -> &str {
        &self.provider_layer
    }

    /// The `provider.layer` reference this layer was declared with
    pub fn reference(&self) -> String {
        format!("{}{}{}", self.provider, SEPARATOR, self.provider_layer)
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn zoom_range(&self) -> RangeInclusive<u8> {
        self.min_zoom..=self.max_zoom
    }

    pub fn covers_zoom(&self, zoom: u8) -> bool {
        self.zoom_range().contains(&zoom)
    }

    /// Provider tags merged with the map's overrides
    pub fn default_tags(&self) -> &Dict {
        &self.default_tags
    }

    pub fn dont_simplify(&self) -> bool {
        self.dont_simplify
    }

    pub fn dont_clip(&self) -> bool {
        self.dont_clip
    }

    pub fn dont_clean(&self) -> bool {
        self.dont_clean
    }
}

/// A resolved, servable map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Map {
    pub(crate) name: String,
    pub(crate) projection: Projection,
    pub(crate) attribution: Option<String>,
    pub(crate) bounds: [f64; 4],
    pub(crate) center: [f64; 3],
    pub(crate) tile_buffer: u32,
    pub(crate) layers: Vec<Layer>,
}

impl Map {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective SRID (explicit or defaulted)
    pub fn srid(&self) -> u32 {
        self.projection.srid()
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    /// `[min_lon, min_lat, max_lon, max_lat]`
    pub fn bounds(&self) -> [f64; 4] {
        self.bounds
    }

    /// `[lon, lat, zoom]`
    pub fn center(&self) -> [f64; 3] {
        self.center
    }

    pub fn tile_buffer(&self) -> u32 {
        self.tile_buffer
    }

    /// Layers in draw order
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layers whose zoom range covers `zoom`, in draw order
    pub fn layers_at_zoom(&self, zoom: u8) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(move |layer| layer.covers_zoom(zoom))
    }
}

/// The published runtime catalog
///
/// Immutable once built; a new registration pass produces a new `Atlas`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Atlas {
    /// Maps in configuration order
    maps: Vec<Map>,

    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Atlas {
    /// Catalog with no maps
    pub fn empty() -> Self {
        Self::default()
    }

    /// Callers guarantee map names are unique (see `AtlasBuilder`)
    pub(crate) fn from_maps(maps: Vec<Map>) -> Self {
        let index = maps
            .iter()
            .enumerate()
            .map(|(i, map)| (map.name.clone(), i))
            .collect();
        Self { maps, index }
    }

    /// Look up a map by name
    pub fn map(&self, name: &str) -> Option<&Map> {
        self.index.get(name).map(|&i| &self.maps[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Maps in configuration order
    pub fn maps(&self) -> impl Iterator<Item = &Map> {
        self.maps.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.iter().map(|map| map.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// CRC32 of the catalog's canonical encoding
    ///
    /// Two atlases with the same observable content share a fingerprint.
    pub fn fingerprint(&self) -> Result<u32> {
        let encoded = bincode::serialize(&self.maps)
            .map_err(|e| AtlasError::Serialization(e.to_string()))?;
        Ok(crc32fast::hash(&encoded))
    }
}

impl PartialEq for Atlas {
    fn eq(&self, other: &Self) -> bool {
        self.maps == other.maps
    }
}
