//! Projection validation
//!
//! Gatekeeps which spatial reference identifiers a map may be served in.
//! No coordinate transformation happens here.

use std::fmt;

use serde::Serialize;

use crate::error::{AtlasError, Result};

/// EPSG code of web mercator
pub const WEB_MERCATOR: u32 = 3857;

/// EPSG code of WGS84 geographic coordinates
pub const WGS84: u32 = 4326;

/// SRID assigned to maps that do not name one
pub const DEFAULT_SRID: u32 = WEB_MERCATOR;

/// Every SRID a map may be served in
pub const SUPPORTED_SRIDS: [u32; 2] = [WEB_MERCATOR, WGS84];

/// A supported tile projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Projection {
    #[default]
    WebMercator,
    Wgs84,
}

impl Projection {
    pub fn from_srid(code: u32) -> Option<Self> {
        match code {
            WEB_MERCATOR => Some(Projection::WebMercator),
            WGS84 => Some(Projection::Wgs84),
            _ => None,
        }
    }

    pub fn srid(self) -> u32 {
        match self {
            Projection::WebMercator => WEB_MERCATOR,
            Projection::Wgs84 => WGS84,
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.srid())
    }
}

/// Check that `code` is a supported SRID
pub fn validate_srid(code: u32) -> Result<Projection> {
    Projection::from_srid(code).ok_or(AtlasError::UnsupportedTileProjection { code })
}
