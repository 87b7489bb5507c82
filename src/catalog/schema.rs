//! JSON Schema gate for component documents.
//!
//! Catalog files come from outside the crate, so each document is checked
//! against the bundled schema before it is deserialized. Failures list every
//! schema error at once instead of stopping at the first serde complaint.

use crate::catalog::Component;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;

const COMPONENT_SCHEMA: &str = include_str!("../../schema/component.schema.json");

/// Compiled schema for component catalog documents.
pub struct ComponentValidator {
    compiled: JSONSchema,
}

impl ComponentValidator {
    /// Compile the bundled component schema.
    pub fn new() -> Result<Self> {
        let schema: Value =
            serde_json::from_str(COMPONENT_SCHEMA).context("parsing bundled component schema")?;
        let compiled = JSONSchema::compile(&schema)
            .map_err(|err| anyhow!("compiling bundled component schema: {err}"))?;
        Ok(Self { compiled })
    }

    /// Validate a raw document, reporting every violation under `origin`.
    pub fn validate(&self, document: &Value, origin: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(document) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("component document {origin} failed schema validation:\n{details}");
        }
        Ok(())
    }

    /// Validate and deserialize a component document.
    pub fn parse(&self, document: Value, origin: &str) -> Result<Component> {
        self.validate(&document, origin)?;
        Component::from_value(document).with_context(|| format!("loading {origin}"))
    }

    /// Read, validate and deserialize a component document from disk.
    pub fn load(&self, path: &Path) -> Result<Component> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading component document {}", path.display()))?;
        let document: Value = serde_json::from_str(&data)
            .with_context(|| format!("parsing component document {}", path.display()))?;
        self.parse(document, &path.display().to_string())
    }
}
