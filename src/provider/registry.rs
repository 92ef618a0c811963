//! Provider registry and provider set
//!
//! The registry maps type tags to init functions; building it over the
//! provider configuration yields the name-indexed `ProviderSet` that map
//! resolution reads from.

use std::collections::HashMap;
use std::fmt;

use crate::dict::Dict;
use crate::error::{AtlasError, Result};

use super::debug::DebugProvider;
use super::static_layers::StaticProvider;
use super::types::{Provider, ProviderError};

/// Constructs a provider from its configuration dictionary
pub type ProviderInitFn = fn(&Dict) -> std::result::Result<Box<dyn Provider>, ProviderError>;

/// Type tag → init function table
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    inits: HashMap<String, ProviderInitFn>,
}

impl ProviderRegistry {
    // =========================================================================
    // Configuration Keys
    // =========================================================================
    pub const NAME_KEY: &'static str = "name";
    pub const TYPE_KEY: &'static str = "type";

    /// Create an empty registry (no provider types known)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in `debug` and `static` types
    pub fn with_builtins() -> Self {
        let mut inits: HashMap<String, ProviderInitFn> = HashMap::new();
        inits.insert(DebugProvider::TYPE.to_string(), DebugProvider::init);
        inits.insert(StaticProvider::TYPE.to_string(), StaticProvider::init);
        Self { inits }
    }

    /// Register a provider type
    ///
    /// Fails if the type tag is already taken.
    pub fn register(&mut self, provider_type: impl Into<String>, init: ProviderInitFn) -> Result<()> {
        let provider_type = provider_type.into();
        if self.inits.contains_key(&provider_type) {
            return Err(AtlasError::DuplicateProviderType { provider_type });
        }
        self.inits.insert(provider_type, init);
        Ok(())
    }

    pub fn is_registered(&self, provider_type: &str) -> bool {
        self.inits.contains_key(provider_type)
    }

    /// Registered type tags, sorted
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.inits.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Build every configured provider
    ///
    /// Stops at the first failure:
    /// 1. `name` must be a non-empty string, `type` a string
    /// 2. `name` must not repeat an earlier provider's name
    /// 3. `type` must be registered
    /// 4. The type's init function must accept the configuration
    pub fn build(&self, configs: &[Dict]) -> Result<ProviderSet> {
        let mut set = ProviderSet::default();

        for (position, config) in configs.iter().enumerate() {
            let name = config
                .non_empty_string(Self::NAME_KEY)
                .map_err(|source| AtlasError::ProviderConfigInvalid { position, source })?;
            let provider_type = config
                .string(Self::TYPE_KEY)
                .map_err(|source| AtlasError::ProviderConfigInvalid { position, source })?;

            if set.contains(name) {
                return Err(AtlasError::DuplicateProviderName {
                    name: name.to_string(),
                });
            }

            let init = self
                .inits
                .get(provider_type)
                .ok_or_else(|| AtlasError::UnknownProviderType {
                    name: name.to_string(),
                    provider_type: provider_type.to_string(),
                })?;

            let provider = init(config).map_err(|source| AtlasError::ProviderInit {
                name: name.to_string(),
                source,
            })?;

            tracing::debug!(provider = name, provider_type, "registered provider");
            set.insert(name.to_string(), provider);
        }

        Ok(set)
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("types", &self.types())
            .finish()
    }
}

/// Name-indexed set of built providers
///
/// Immutable once returned from [`ProviderRegistry::build`].
#[derive(Debug, Default)]
pub struct ProviderSet {
    providers: HashMap<String, Box<dyn Provider>>,

    /// Provider names in configuration order
    order: Vec<String>,
}

impl ProviderSet {
    fn insert(&mut self, name: String, provider: Box<dyn Provider>) {
        self.order.push(name.clone());
        self.providers.insert(name, provider);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Provider> {
        self.providers.get(name).map(|p| p.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Provider names in configuration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
