//! Endpoint URI codec for integration-route component catalogs.
//!
//! Endpoint URIs such as `timer:tick` or `netty:tcp://localhost:5150` are
//! decomposed into named path fields using each component's declared syntax
//! template, so an editor can show one form field per value. The crate also
//! orders a component's properties for display.

pub mod catalog;
pub mod codec;
pub mod config;
pub mod properties;
pub mod syntax;

pub use catalog::{
    CatalogEntry, Component, ComponentHeader, ComponentValidator, PropertyDescriptor,
    PropertyKind, Registry, RegistryBuilder, SharedRegistry, SupportType, SupportedComponent,
    load_component_from_path,
};
pub use codec::{
    ExtractedFields, ExtractionStrategy, RouteElement, compose, decompose, normalize,
    path_parameter_value,
};
pub use config::{CatalogOptions, resolve_catalog_dir};
pub use properties::{EndpointRole, prioritize};
pub use syntax::{SyntaxTemplate, split_tokens};

/// The component name of `uri`: everything before the first separator
/// character, or the whole string when there is none.
pub fn component_name_from_uri(uri: &str) -> &str {
    uri.find([':', '/', '#'])
        .map(|index| &uri[..index])
        .unwrap_or(uri)
}
