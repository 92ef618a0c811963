//! Atlas Module
//!
//! The immutable runtime catalog of resolved maps and the handle it is
//! published through.
//!
//! ## Lifecycle
//! ```text
//!  MapResolver ──► AtlasBuilder (private) ──build()──► Atlas
//!                                                       │
//!                                  AtlasHandle::publish │ (atomic swap)
//!                                                       ▼
//!                                      readers: AtlasHandle::load()
//! ```

mod builder;
mod catalog;
mod handle;

pub use builder::AtlasBuilder;
pub use catalog::{Atlas, Layer, Map};
pub use handle::AtlasHandle;
