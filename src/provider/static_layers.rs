//! Static provider
//!
//! A provider whose layer list is declared entirely in configuration:
//!
//! ```text
//! { "name": "osm", "type": "static",
//!   "layers": [ "water",
//!               { "name": "roads", "default_tags": { "class": "road" } } ] }
//! ```

use std::collections::HashSet;

use crate::dict::{Dict, DictError, Value};

use super::types::{LayerInfo, Provider, ProviderError};

/// Provider serving a fixed, configured set of layers
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    layers: Vec<LayerInfo>,
}

impl StaticProvider {
    pub const TYPE: &'static str = "static";

    const LAYERS_KEY: &'static str = "layers";

    /// Create a provider from already-validated layers.
    ///
    /// Fails if two layers share a name.
    pub fn new(layers: Vec<LayerInfo>) -> Result<Self, ProviderError> {
        let mut seen = HashSet::new();
        for layer in &layers {
            if !seen.insert(layer.name.as_str()) {
                return Err(ProviderError::DuplicateLayer(layer.name.clone()));
            }
        }
        Ok(Self { layers })
    }

    /// Parse the `layers` key of a provider configuration
    pub fn from_config(config: &Dict) -> Result<Self, ProviderError> {
        let entries = config
            .array_opt(Self::LAYERS_KEY)?
            .ok_or_else(|| DictError::Missing {
                key: Self::LAYERS_KEY.to_string(),
            })?;

        let layers = entries
            .iter()
            .map(Self::parse_layer)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(layers)
    }

    /// Init function for the provider registry
    pub fn init(config: &Dict) -> Result<Box<dyn Provider>, ProviderError> {
        Ok(Box::new(Self::from_config(config)?))
    }

    fn parse_layer(entry: &Value) -> Result<LayerInfo, ProviderError> {
        match entry {
            Value::String(name) if !name.is_empty() => Ok(LayerInfo::new(name.as_str())),
            Value::String(_) => Err(DictError::Empty {
                key: "layers[].name".to_string(),
            }
            .into()),
            Value::Map(layer) => {
                let name = layer.non_empty_string("name")?;
                let default_tags = layer.dict_opt("default_tags")?.cloned().unwrap_or_default();
                Ok(LayerInfo::new(name).with_default_tags(default_tags))
            }
            other => Err(ProviderError::Invalid(format!(
                "layer entries should be a string or a mapping, found {}",
                other.kind()
            ))),
        }
    }
}

impl Provider for StaticProvider {
    fn provider_type(&self) -> &str {
        Self::TYPE
    }

    fn layers(&self) -> Vec<LayerInfo> {
        self.layers.clone()
    }

    fn layer(&self, name: &str) -> Option<LayerInfo> {
        self.layers.iter().find(|layer| layer.name == name).cloned()
    }
}
