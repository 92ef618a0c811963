//! Provider types and traits

use std::fmt;

use thiserror::Error;

use crate::dict::{Dict, DictError};

/// Errors a provider raises while validating its own configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Config(#[from] DictError),

    #[error("layer ({0}) is declared more than once")]
    DuplicateLayer(String),

    #[error("{0}")]
    Invalid(String),
}

/// A layer a provider can serve
#[derive(Debug, Clone, PartialEq)]
pub struct LayerInfo {
    /// Provider-side layer name
    pub name: String,

    /// Tags attached to every feature of the layer unless a map overrides them
    pub default_tags: Dict,
}

impl LayerInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_tags: Dict::new(),
        }
    }

    pub fn with_default_tags(mut self, tags: Dict) -> Self {
        self.default_tags = tags;
        self
    }
}

/// Trait for configured data providers.
///
/// Implementors are built once from configuration and never mutated, so
/// they must be shareable across threads.
pub trait Provider: Send + Sync + fmt::Debug {
    /// The type tag this provider was registered under.
    fn provider_type(&self) -> &str;

    /// Every layer this provider serves, in declaration order.
    fn layers(&self) -> Vec<LayerInfo>;

    /// Looks up one layer by its provider-side name.
    fn layer(&self, name: &str) -> Option<LayerInfo> {
        self.layers().into_iter().find(|layer| layer.name == name)
    }
}
