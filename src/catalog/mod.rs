//! Component catalog wiring.
//!
//! This module wraps component documents in the catalog's JSON distribution
//! format (one file per component plus an optional supported list) so the
//! codec can look up a validated, immutable snapshot. Callers use `Registry`
//! for lookups and `SharedRegistry` when the catalog is reloaded at runtime.

pub mod model;
pub mod registry;
pub mod schema;

pub use model::{
    Component, ComponentHeader, PropertyDescriptor, PropertyKind, SupportedComponent,
    load_component_from_path,
};
pub use registry::{
    CatalogEntry, Registry, RegistryBuilder, SUPPORTED_COMPONENTS_FILE, SharedRegistry,
    SupportType,
};
pub use schema::ComponentValidator;
