//! Provider Module
//!
//! Builds named, typed data sources from raw configuration.
//!
//! ## Responsibilities
//! - Map a provider `type` tag to the code that initializes it
//! - Enforce unique provider names across the configuration
//! - Answer the one question map resolution asks of a provider:
//!   "do you serve layer L, and what are its default tags?"
//!
//! ## Built-in Types
//! - `debug`  - serves `debug-tile-outline` and `debug-tile-center`
//! - `static` - serves the layers listed in its own configuration
//!
//! Provider construction performs no backend I/O.

mod debug;
mod registry;
mod static_layers;
mod types;

pub use debug::DebugProvider;
pub use registry::{ProviderInitFn, ProviderRegistry, ProviderSet};
pub use static_layers::StaticProvider;
pub use types::{LayerInfo, Provider, ProviderError};
