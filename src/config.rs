//! Configuration for tileatlas
//!
//! Engine-level settings with sensible defaults. These are not part of the
//! user-authored document; they govern how a document is registered.

/// Highest zoom level a layer may be served at
pub const MAX_ZOOM: u8 = 22;

/// Default tile buffer in pixels
pub const DEFAULT_TILE_BUFFER: u32 = 64;

/// Main configuration for a registration pass
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Error Handling
    // -------------------------------------------------------------------------
    /// What to do when a map fails to resolve
    pub error_policy: ErrorPolicy,

    // -------------------------------------------------------------------------
    // Layer Defaults
    // -------------------------------------------------------------------------
    /// Upper zoom bound; also the default `max_zoom` of layers that set none
    pub max_zoom: u8,

    // -------------------------------------------------------------------------
    // Map Defaults
    // -------------------------------------------------------------------------
    /// Tile buffer (pixels) for maps that set none
    pub tile_buffer: u32,
}

/// Registration error policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first map that fails (startup strictness)
    #[default]
    FailFast,

    /// Resolve every map and report all failures together
    CollectAll,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::FailFast,
            max_zoom: MAX_ZOOM,
            tile_buffer: DEFAULT_TILE_BUFFER,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the registration error policy
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.error_policy = policy;
        self
    }

    /// Set the highest zoom level (capped at [`MAX_ZOOM`])
    pub fn max_zoom(mut self, zoom: u8) -> Self {
        self.config.max_zoom = zoom.min(MAX_ZOOM);
        self
    }

    /// Set the default tile buffer (in pixels)
    pub fn tile_buffer(mut self, pixels: u32) -> Self {
        self.config.tile_buffer = pixels;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
