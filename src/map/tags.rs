//! Default tag validation and merging

use crate::dict::{Dict, Value};
use crate::error::{AtlasError, Result};

/// Check the shape of a layer's `default_tags` value
///
/// Absent or `null` yields `None`. A mapping yields itself. Any other shape
/// is rejected with the layer's reference for diagnostics.
pub fn validate_default_tags<'a>(
    value: Option<&'a Value>,
    provider_layer: &str,
) -> Result<Option<&'a Dict>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Map(tags)) => Ok(Some(tags)),
        Some(_) => Err(AtlasError::DefaultTagsInvalid {
            provider_layer: provider_layer.to_string(),
        }),
    }
}

/// Merge map-level overrides over a provider layer's intrinsic tags.
/// Overrides win on key collision.
pub fn merge_default_tags(intrinsic: &Dict, overrides: Option<&Dict>) -> Dict {
    let mut merged = intrinsic.clone();
    if let Some(overrides) = overrides {
        merged.extend_from(overrides);
    }
    merged
}
