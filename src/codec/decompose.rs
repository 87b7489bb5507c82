use crate::catalog::Registry;
use crate::codec::ExtractedFields;
use crate::component_name_from_uri;
use tracing::debug;

/// Split `uri` into field values for its component.
///
/// Never fails: an unknown component, or one without path fields, yields an
/// empty mapping. A URI that is only the component name is treated as the
/// template with every slot empty, so each field is still reported.
pub fn decompose(registry: &Registry, uri: &str) -> ExtractedFields {
    let name = component_name_from_uri(uri);
    let Some(entry) = registry.resolve(name) else {
        debug!(component = name, "unknown component; nothing to decompose");
        return ExtractedFields::new();
    };

    let template = entry.template();
    let expanded;
    let target = if uri == name {
        expanded = format!("{name}{}", template.separators().concat());
        expanded.as_str()
    } else {
        uri
    };
    entry.strategy().extract(template, target)
}

/// Value of a single path field of `uri`, if the component declares it.
pub fn path_parameter_value(registry: &Registry, uri: &str, field: &str) -> Option<String> {
    decompose(registry, uri).shift_remove(field)
}

/// Rebuild a URI for `component` from field values.
///
/// Returns `None` for unknown components.
pub fn compose(registry: &Registry, component: &str, fields: &ExtractedFields) -> Option<String> {
    let entry = registry.resolve(component)?;
    Some(entry.strategy().compose(entry.template(), fields))
}
