//! Error types for tileatlas
//!
//! Provides a unified error type for all registration operations. Every
//! variant names the entity (map, provider or provider layer) that caused it.

use thiserror::Error;

use crate::dict::DictError;
use crate::provider::ProviderError;

/// Result type alias using AtlasError
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Unified error type for tileatlas operations
#[derive(Debug, Error)]
pub enum AtlasError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Document Errors
    // -------------------------------------------------------------------------
    #[error("Configuration document error: {0}")]
    Document(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Provider Errors
    // -------------------------------------------------------------------------
    #[error("provider #{position} has an invalid configuration: {source}")]
    ProviderConfigInvalid {
        position: usize,
        #[source]
        source: DictError,
    },

    #[error("provider name ({name}) is duplicated")]
    DuplicateProviderName { name: String },

    #[error("provider ({name}) has unknown type ({provider_type})")]
    UnknownProviderType { name: String, provider_type: String },

    #[error("provider type ({provider_type}) is already registered")]
    DuplicateProviderType { provider_type: String },

    #[error("provider ({name}) failed to initialize: {source}")]
    ProviderInit {
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error("provider ({provider}) not defined")]
    ProviderNotFound { provider: String },

    // -------------------------------------------------------------------------
    // Map Errors
    // -------------------------------------------------------------------------
    #[error("invalid provider layer ({reference}) for map ({map})")]
    ProviderLayerInvalid { reference: String, map: String },

    #[error("map ({map}) provider_layer ({provider_layer}) is not registered with provider ({provider})")]
    ProviderLayerNotRegistered {
        map: String,
        provider_layer: String,
        provider: String,
    },

    #[error("default_tags for provider_layer ({provider_layer}) should be a mapping")]
    DefaultTagsInvalid { provider_layer: String },

    #[error("map ({map}) provider_layer ({provider_layer}) has an invalid zoom range ({min_zoom}..={max_zoom})")]
    InvalidZoomRange {
        map: String,
        provider_layer: String,
        min_zoom: u8,
        max_zoom: u8,
    },

    #[error("map ({map}) has layers named ({layer}) with overlapping zoom ranges")]
    LayerNameConflict { map: String, layer: String },

    #[error("map name ({name}) is duplicated")]
    DuplicateMapName { name: String },

    // -------------------------------------------------------------------------
    // Projection Errors
    // -------------------------------------------------------------------------
    #[error("tile projection ({code}) not supported")]
    UnsupportedTileProjection { code: u32 },

    // -------------------------------------------------------------------------
    // Registration Errors
    // -------------------------------------------------------------------------
    #[error("{} map(s) failed to register: {}", .0.len(), join_errors(.0))]
    Registration(Vec<AtlasError>),
}

impl AtlasError {
    /// The individual errors behind this error.
    ///
    /// A collected registration failure yields each map error; any other
    /// error yields itself.
    pub fn errors(&self) -> Vec<&AtlasError> {
        match self {
            AtlasError::Registration(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}

fn join_errors(errors: &[AtlasError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
