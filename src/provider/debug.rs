//! Debug provider
//!
//! Serves the two synthetic layers used to check tile boundaries while
//! setting up a map.

use crate::dict::Dict;

use super::types::{LayerInfo, Provider, ProviderError};

/// Provider serving tile outline and tile center layers
#[derive(Debug, Clone, Default)]
pub struct DebugProvider;

impl DebugProvider {
    pub const TYPE: &'static str = "debug";

    pub const LAYER_TILE_OUTLINE: &'static str = "debug-tile-outline";
    pub const LAYER_TILE_CENTER: &'static str = "debug-tile-center";

    pub fn new() -> Self {
        Self
    }

    /// Init function for the provider registry. The debug provider takes no
    /// options beyond `name` and `type`.
    pub fn init(_config: &Dict) -> Result<Box<dyn Provider>, ProviderError> {
        Ok(Box::new(Self::new()))
    }
}

impl Provider for DebugProvider {
    fn provider_type(&self) -> &str {
        Self::TYPE
    }

    fn layers(&self) -> Vec<LayerInfo> {
        vec![
            LayerInfo::new(Self::LAYER_TILE_OUTLINE),
            LayerInfo::new(Self::LAYER_TILE_CENTER),
        ]
    }

    fn layer(&self, name: &str) -> Option<LayerInfo> {
        match name {
            Self::LAYER_TILE_OUTLINE | Self::LAYER_TILE_CENTER => Some(LayerInfo::new(name)),
            _ => None,
        }
    }
}
