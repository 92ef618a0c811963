//! Atlas publication
//!
//! Holds the currently published Atlas behind an atomically swappable
//! pointer.
//!
//! ## Concurrency Model
//!
//! - **Readers** (`load`): lock-free, pin an `Arc<Atlas>` that stays valid
//!   for as long as they hold it, even across a swap
//! - **Publishers** (`publish`): single atomic pointer replacement
//! - **Reloads** (`reload`): serialized by `reload_lock`, so two reloads
//!   never race to publish

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::error::Result;

use super::catalog::Atlas;

/// Shared handle to the published Atlas
#[derive(Debug)]
pub struct AtlasHandle {
    current: ArcSwap<Atlas>,

    /// Number of successful publications after the initial Atlas
    generation: AtomicU64,

    /// Serializes reloads
    reload_lock: Mutex<()>,
}

impl AtlasHandle {
    /// Publish `atlas` as the initial catalog
    pub fn new(atlas: Atlas) -> Self {
        Self {
            current: ArcSwap::from_pointee(atlas),
            generation: AtomicU64::new(0),
            reload_lock: Mutex::new(()),
        }
    }

    /// The currently published Atlas
    pub fn load(&self) -> Arc<Atlas> {
        self.current.load_full()
    }

    /// Replace the published Atlas, returning the previous one
    pub fn publish(&self, atlas: Atlas) -> Arc<Atlas> {
        let maps = atlas.len();
        let previous = self.current.swap(Arc::new(atlas));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(generation, maps, "published atlas");
        previous
    }

    /// Run a registration pass and publish its result
    ///
    /// On failure the previously published Atlas stays in place and the
    /// error is returned.
    pub fn reload<F>(&self, register: F) -> Result<Arc<Atlas>>
    where
        F: FnOnce() -> Result<Atlas>,
    {
        let _reload_guard = self.reload_lock.lock();

        match register() {
            Ok(atlas) => {
                self.publish(atlas);
                Ok(self.load())
            }
            Err(e) => {
                tracing::warn!(
                    generation = self.generation(),
                    "reload failed, keeping published atlas: {}",
                    e
                );
                Err(e)
            }
        }
    }

    /// Number of publications since the handle was created
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl Default for AtlasHandle {
    fn default() -> Self {
        Self::new(Atlas::empty())
    }
}
