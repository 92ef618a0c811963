//! Map Module
//!
//! Turns one map entry of the configuration document into a resolved map.
//!
//! ## Responsibilities
//! - Parse `provider.layer` references
//! - Validate and merge per-layer default tags
//! - Resolve every layer against the provider set, in declaration order
//! - Assign and validate the map's SRID
//!
//! ## Resolution Order (per map)
//! ```text
//! srid ──► for each layer:
//!            reference ─► provider ─► provider layer ─► tags ─► zooms ─► name
//!          ──► resolved Map (or the first error; never a partial map)
//! ```

mod reference;
mod resolver;
mod tags;

pub use reference::{ProviderLayerRef, SEPARATOR};
pub use resolver::{MapResolver, WORLD_BOUNDS};
pub use tags::{merge_default_tags, validate_default_tags};
