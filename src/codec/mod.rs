//! Syntax-driven endpoint URI codec.
//!
//! `decompose` turns a concrete URI into field values using the component's
//! syntax template (or its override strategy), `compose` goes the other way,
//! and `normalize` folds a route element's URI into its parameter map.

pub mod decompose;
pub mod normalize;
pub mod strategy;

use indexmap::IndexMap;

/// Field name to raw value, in template order.
pub type ExtractedFields = IndexMap<String, String>;

pub use decompose::{compose, decompose, path_parameter_value};
pub use normalize::{RESERVED_URI_PREFIXES, RouteElement, normalize};
pub use strategy::ExtractionStrategy;
