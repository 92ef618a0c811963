//! Dict Module
//!
//! Dynamic, type-erased configuration values.
//!
//! ## Responsibilities
//! - Represent raw provider and layer configuration without a fixed schema
//! - Expose fallible, shape-checked accessors (a wrong shape is an error,
//!   never a panic)
//! - Deserialize from configuration documents
//!
//! ## Value Shapes
//! ```text
//! Value ─┬─ Null
//!        ├─ Bool(bool)
//!        ├─ Int(i64)
//!        ├─ Float(f64)
//!        ├─ String(String)
//!        ├─ Array(Vec<Value>)
//!        └─ Map(Dict)          Dict = ordered String → Value
//! ```

mod value;

pub use value::{Dict, Value};

use thiserror::Error;

/// Errors raised by shape-checked accessors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    #[error("missing required key ({key})")]
    Missing { key: String },

    #[error("key ({key}) should be {expected}, found {found}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("key ({key}) must not be empty")]
    Empty { key: String },
}
