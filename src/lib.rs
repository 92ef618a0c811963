//! # tileatlas
//!
//! Registration and validation engine for a tile server:
//! - Builds named, typed providers from raw configuration
//! - Resolves map definitions (`provider.layer` references, default tags,
//!   zoom ranges, projections) against those providers
//! - Produces an immutable catalog of resolved maps (the Atlas)
//! - Publishes the catalog through an atomically swappable handle
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Configuration Document                       │
//! │            (providers: [Dict], maps: [MapConfig])            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Registrar                               │
//! │          (error policy: fail fast / collect all)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Provider   │◄─────────│    Map      │
//!   │  Registry   │  lookup  │  Resolver   │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Atlas     │
//!                           │  (ArcSwap)  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod dict;
pub mod document;
pub mod provider;
pub mod projection;
pub mod map;
pub mod atlas;
pub mod registrar;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AtlasError, Result};
pub use config::{Config, ErrorPolicy};
pub use atlas::{Atlas, AtlasHandle};
pub use document::Document;
pub use registrar::Registrar;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tileatlas
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
