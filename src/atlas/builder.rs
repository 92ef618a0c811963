//! Atlas Builder
//!
//! Private accumulator for resolved maps. Nothing it holds is visible to
//! readers until `build` hands back the finished `Atlas`.

use std::collections::HashSet;

use crate::error::{AtlasError, Result};

use super::catalog::{Atlas, Map};

/// Accumulates resolved maps into an Atlas
#[derive(Debug, Default)]
pub struct AtlasBuilder {
    maps: Vec<Map>,
    names: HashSet<String>,
}

impl AtlasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolved map
    ///
    /// Rejects a map whose name was already added; the builder is left
    /// unchanged in that case.
    pub fn insert(&mut self, map: Map) -> Result<()> {
        if !self.names.insert(map.name.clone()) {
            return Err(AtlasError::DuplicateMapName { name: map.name });
        }
        self.maps.push(map);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Finish construction
    pub fn build(self) -> Atlas {
        Atlas::from_maps(self.maps)
    }
}
