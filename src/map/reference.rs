//! Provider layer references
//!
//! Parses the compact `provider.layer` syntax used inside map layer entries.

use std::fmt;

use crate::error::{AtlasError, Result};

/// Separator between the provider and layer parts of a reference
pub const SEPARATOR: char = '.';

/// A parsed `provider.layer` reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderLayerRef {
    pub provider: String,
    pub layer: String,
}

impl ProviderLayerRef {
    /// Parse `reference`, declared in map `map_name`
    ///
    /// The reference must contain exactly one separator with a non-empty
    /// part on each side. Anything else is a syntax error, even if a
    /// provider happens to carry the malformed name.
    pub fn parse(reference: &str, map_name: &str) -> Result<Self> {
        let invalid = || AtlasError::ProviderLayerInvalid {
            reference: reference.to_string(),
            map: map_name.to_string(),
        };

        let (provider, layer) = reference.split_once(SEPARATOR).ok_or_else(invalid)?;
        if provider.is_empty() || layer.is_empty() || layer.contains(SEPARATOR) {
            return Err(invalid());
        }

        Ok(Self {
            provider: provider.to_string(),
            layer: layer.to_string(),
        })
    }
}

impl fmt::Display for ProviderLayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.provider, SEPARATOR, self.layer)
    }
}
