//! Map Resolver
//!
//! Resolves a `MapConfig` against a built `ProviderSet`.

use crate::atlas::{Layer, Map};
use crate::config::Config;
use crate::document::{MapConfig, MapLayerConfig};
use crate::error::{AtlasError, Result};
use crate::projection::{self, Projection};
use crate::provider::ProviderSet;

use super::reference::ProviderLayerRef;
use super::tags::{merge_default_tags, validate_default_tags};

/// Web mercator world extent, `[min_lon, min_lat, max_lon, max_lat]`
pub const WORLD_BOUNDS: [f64; 4] = [-180.0, -85.0511, 180.0, 85.0511];

/// Resolves map entries against a provider set
///
/// Only ever reads the provider set, so a single resolver can be reused
/// for every map of a registration pass.
#[derive(Debug, Clone, Copy)]
pub struct MapResolver<'a> {
    providers: &'a ProviderSet,
    config: &'a Config,
}

impl<'a> MapResolver<'a> {
    pub fn new(providers: &'a ProviderSet, config: &'a Config) -> Self {
        Self { providers, config }
    }

    /// Resolve one map
    ///
    /// Steps:
    /// 1. Effective SRID (validated if given, default otherwise)
    /// 2. Each layer in declaration order; the first failing layer fails
    ///    the whole map
    /// 3. Map-level defaults (bounds, center, tile buffer)
    pub fn resolve(&self, map: &MapConfig) -> Result<Map> {
        // Step 1: Projection
        let projection = match map.srid {
            Some(code) => projection::validate_srid(code)?,
            None => Projection::default(),
        };

        // Step 2: Layers
        let mut layers: Vec<Layer> = Vec::with_capacity(map.layers.len());
        for layer_config in &map.layers {
            let layer = self.resolve_layer(&map.name, layer_config)?;

            let conflict = layers.iter().any(|existing| {
                existing.name == layer.name
                    && existing.min_zoom <= layer.max_zoom
                    && layer.min_zoom <= existing.max_zoom
            });
            if conflict {
                return Err(AtlasError::LayerNameConflict {
                    map: map.name.clone(),
                    layer: layer.name,
                });
            }

            layers.push(layer);
        }

        // Step 3: Map-level defaults
        let bounds = map.bounds.unwrap_or(WORLD_BOUNDS);
        let center = map.center.unwrap_or([
            (bounds[0] + bounds[2]) / 2.0,
            (bounds[1] + bounds[3]) / 2.0,
            1.0,
        ]);

        tracing::debug!(
            map = %map.name,
            srid = projection.srid(),
            layers = layers.len(),
            "resolved map"
        );

        Ok(Map {
            name: map.name.clone(),
            projection,
            attribution: map.attribution.clone(),
            bounds,
            center,
            tile_buffer: map.tile_buffer.unwrap_or(self.config.tile_buffer),
            layers,
        })
    }

    fn resolve_layer(&self, map_name: &str, layer: &MapLayerConfig) -> Result<Layer> {
        let reference = &layer.provider_layer;

        // a. Reference syntax
        let parsed = ProviderLayerRef::parse(reference, map_name)?;

        // b. Provider
        let provider = self
            .providers
            .get(&parsed.provider)
            .ok_or_else(|| AtlasError::ProviderNotFound {
                provider: parsed.provider.clone(),
            })?;

        // c. Provider layer
        let info = provider
            .layer(&parsed.layer)
            .ok_or_else(|| AtlasError::ProviderLayerNotRegistered {
                map: map_name.to_string(),
                provider_layer: reference.clone(),
                provider: parsed.provider.clone(),
            })?;

        // d + e. Default tags
        let overrides = validate_default_tags(layer.default_tags.as_ref(), reference)?;
        let default_tags = merge_default_tags(&info.default_tags, overrides);

        // f. Zoom range
        let min_zoom = layer.min_zoom.unwrap_or(0);
        let max_zoom = layer.max_zoom.unwrap_or(self.config.max_zoom);
        if min_zoom > max_zoom || max_zoom > self.config.max_zoom {
            return Err(AtlasError::InvalidZoomRange {
                map: map_name.to_string(),
                provider_layer: reference.clone(),
                min_zoom,
                max_zoom,
            });
        }

        // g. Served name
        let name = layer.name.clone().unwrap_or_else(|| info.name.clone());

        Ok(Layer {
            name,
            provider: parsed.provider,
            provider_layer: parsed.layer,
            min_zoom,
            max_zoom,
            default_tags,
            dont_simplify: layer.dont_simplify,
            dont_clip: layer.dont_clip,
            dont_clean: layer.dont_clean,
        })
    }
}
