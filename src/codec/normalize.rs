use crate::catalog::Registry;
use crate::codec::decompose;
use crate::syntax::split_tokens;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// URI prefixes that reference another definition literally and are never
/// folded into parameters.
pub const RESERVED_URI_PREFIXES: &[&str] = &["kamelet:"];

/// The endpoint part of a route step: a URI plus its parameter map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteElement {
    pub uri: String,
    #[serde(default)]
    pub parameters: IndexMap<String, String>,
}

impl RouteElement {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            parameters: IndexMap::new(),
        }
    }
}

/// Move the path fields of `element.uri` into `element.parameters` and
/// leave only the component name in the URI.
///
/// Extracted values overwrite parameters of the same name. Elements whose
/// URI is already bare, uses a reserved prefix, or decomposes to nothing
/// (unknown component, no path fields, a shape the strategy rejects) are left
/// untouched so no URI text is dropped. Returns whether the element changed;
/// running it again on the result is a no-op.
pub fn normalize(registry: &Registry, element: &mut RouteElement) -> bool {
    let tokens = split_tokens(&element.uri);
    if tokens.len() <= 1 {
        return false;
    }
    if RESERVED_URI_PREFIXES
        .iter()
        .any(|prefix| element.uri.starts_with(prefix))
    {
        return false;
    }

    let fields = decompose(registry, &element.uri);
    if fields.is_empty() {
        debug!(uri = %element.uri, "nothing extracted; leaving element as written");
        return false;
    }
    element.parameters.extend(fields);
    element.uri = tokens[0].clone();
    true
}
