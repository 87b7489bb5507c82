//! Component catalog documents.
//!
//! Types mirror the catalog's JSON distribution format: a `component` header
//! plus a `properties` object keyed by property name, in declaration order.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// How a property is expressed on an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Encoded positionally in the URI body.
    Path,
    /// Encoded as a named option.
    Parameter,
    #[serde(other)]
    Other,
}

impl PropertyKind {
    pub fn is_path(&self) -> bool {
        matches!(self, PropertyKind::Path)
    }
}

/// One endpoint property of a component, as declared in its catalog document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Filled from the key of the enclosing `properties` object.
    #[serde(default)]
    pub name: String,
    pub kind: PropertyKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default, rename = "type")]
    pub value_type: Option<String>,
    #[serde(default)]
    pub java_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub secret: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Declared default, kept even when it is `false`, `0` or `""`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

/// The `component` header of a catalog document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHeader {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub syntax: String,
    #[serde(default)]
    pub alternative_syntax: Option<String>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub support_level: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub consumer_only: bool,
    #[serde(default)]
    pub producer_only: bool,
}

/// One catalog entry: header plus endpoint properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ComponentDocument")]
pub struct Component {
    pub component: ComponentHeader,
    pub properties: IndexMap<String, PropertyDescriptor>,
}

#[derive(Deserialize)]
struct ComponentDocument {
    component: ComponentHeader,
    #[serde(default)]
    properties: IndexMap<String, PropertyDescriptor>,
}

impl From<ComponentDocument> for Component {
    fn from(doc: ComponentDocument) -> Self {
        let mut properties = doc.properties;
        for (name, property) in properties.iter_mut() {
            property.name = name.clone();
        }
        Self {
            component: doc.component,
            properties,
        }
    }
}

impl Component {
    pub fn name(&self) -> &str {
        &self.component.name
    }

    pub fn syntax(&self) -> &str {
        &self.component.syntax
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parsing component document")
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("parsing component document")
    }
}

/// An entry of the supported-components list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedComponent {
    pub name: String,
    #[serde(default)]
    pub level: String,
}

impl SupportedComponent {
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).context("parsing supported component list")
    }
}

/// Read a single component document from disk.
pub fn load_component_from_path(path: &Path) -> Result<Component> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading component document {}", path.display()))?;
    Component::from_json(&data).with_context(|| format!("loading {}", path.display()))
}
