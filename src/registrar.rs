//! Registrar Module
//!
//! Drives a full registration pass over a configuration document.
//!
//! ## Responsibilities
//! - Build the provider set (always stops at the first provider error)
//! - Resolve every map against it and accumulate the Atlas
//! - Apply the configured error policy across maps
//! - Never hand back a partially built Atlas

use std::collections::HashSet;

use crate::atlas::{Atlas, AtlasBuilder};
use crate::config::{Config, ErrorPolicy};
use crate::document::{Document, MapConfig};
use crate::dict::Dict;
use crate::error::{AtlasError, Result};
use crate::map::MapResolver;
use crate::provider::{ProviderRegistry, ProviderSet};

/// Registration driver
///
/// Holds no state between passes; running it twice over the same document
/// yields two equal, independent Atlases.
#[derive(Debug, Clone)]
pub struct Registrar {
    config: Config,
    registry: ProviderRegistry,
}

impl Registrar {
    /// Create a registrar using the built-in provider types
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, ProviderRegistry::with_builtins())
    }

    /// Create a registrar with a caller-supplied provider registry
    pub fn with_registry(config: Config, registry: ProviderRegistry) -> Self {
        Self { config, registry }
    }

    /// Build the provider set
    pub fn register_providers(&self, providers: &[Dict]) -> Result<ProviderSet> {
        let set = self.registry.build(providers)?;
        tracing::debug!(providers = set.len(), "provider set built");
        Ok(set)
    }

    /// Resolve every map and build the Atlas, following the error policy
    ///
    /// - `FailFast`: the first failing map's error
    /// - `CollectAll`: `AtlasError::Registration` with every map error, in
    ///   configuration order
    pub fn register_maps(&self, providers: &ProviderSet, maps: &[MapConfig]) -> Result<Atlas> {
        match self.config.error_policy {
            ErrorPolicy::FailFast => self.register_maps_fail_fast(providers, maps),
            ErrorPolicy::CollectAll => self
                .register_maps_collect(providers, maps)
                .map_err(AtlasError::Registration),
        }
    }

    /// Register a whole document: providers first, then maps
    pub fn register(&self, document: &Document) -> Result<Atlas> {
        tracing::info!(
            providers = document.providers.len(),
            maps = document.maps.len(),
            "registration pass started"
        );

        let providers = self.register_providers(&document.providers)?;
        let atlas = self.register_maps(&providers, &document.maps)?;

        tracing::info!(maps = atlas.len(), "registration pass finished");
        Ok(atlas)
    }

    /// Every error in the document, regardless of the error policy
    ///
    /// Empty when the document registers cleanly. A provider error is
    /// reported alone since maps cannot be checked without the provider set.
    pub fn validate(&self, document: &Document) -> Vec<AtlasError> {
        let providers = match self.register_providers(&document.providers) {
            Ok(providers) => providers,
            Err(e) => return vec![e],
        };

        match self.register_maps_collect(&providers, &document.maps) {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    // =========================================================================
    // Policies
    // =========================================================================

    fn register_maps_fail_fast(&self, providers: &ProviderSet, maps: &[MapConfig]) -> Result<Atlas> {
        let resolver = MapResolver::new(providers, &self.config);
        let mut builder = AtlasBuilder::new();

        for map in maps {
            if builder.contains(&map.name) {
                return Err(AtlasError::DuplicateMapName {
                    name: map.name.clone(),
                });
            }

            let resolved = resolver.resolve(map).map_err(|e| {
                tracing::debug!(map = %map.name, "map failed to resolve: {}", e);
                e
            })?;
            builder.insert(resolved)?;
        }

        Ok(builder.build())
    }

    fn register_maps_collect(
        &self,
        providers: &ProviderSet,
        maps: &[MapConfig],
    ) -> std::result::Result<Atlas, Vec<AtlasError>> {
        let resolver = MapResolver::new(providers, &self.config);
        let mut builder = AtlasBuilder::new();
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        for map in maps {
            // A failed map still claims its name
            if !seen.insert(map.name.as_str()) {
                errors.push(AtlasError::DuplicateMapName {
                    name: map.name.clone(),
                });
                continue;
            }

            let outcome = resolver
                .resolve(map)
                .and_then(|resolved| builder.insert(resolved));

            if let Err(e) = outcome {
                tracing::debug!(map = %map.name, "map failed to resolve: {}", e);
                errors.push(e);
            }
        }

        if errors.is_empty() {
            Ok(builder.build())
        } else {
            Err(errors)
        }
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
