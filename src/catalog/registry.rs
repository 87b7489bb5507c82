//! Immutable component registry.
//!
//! A `RegistryBuilder` collects component documents and the supported list;
//! `build` parses every syntax template once, picks each component's
//! extraction strategy, and freezes the result. Reloading means building a
//! new registry and swapping it into a [`SharedRegistry`].

use crate::catalog::{Component, ComponentValidator, SupportedComponent};
use crate::codec::ExtractionStrategy;
use crate::config::CatalogOptions;
use crate::syntax::SyntaxTemplate;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// File name of the supported-components list inside a catalog directory.
pub const SUPPORTED_COMPONENTS_FILE: &str = "supported-components.json";

/// Whether a component appears in the supported list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SupportType {
    Supported,
    Community,
}

impl SupportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportType::Supported => "Supported",
            SupportType::Community => "Community",
        }
    }
}

/// A component with its parsed template and chosen strategy.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    component: Component,
    template: SyntaxTemplate,
    strategy: ExtractionStrategy,
    support_type: SupportType,
    support_level: Option<String>,
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        self.component.name()
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn template(&self) -> &SyntaxTemplate {
        &self.template
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        self.strategy
    }

    pub fn support_type(&self) -> SupportType {
        self.support_type
    }

    /// Level from the supported list, falling back to the document's own.
    pub fn support_level(&self) -> Option<&str> {
        self.support_level.as_deref()
    }
}

/// Collects component documents and the supported list, then freezes them
/// into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    components: Vec<Component>,
    supported: Vec<SupportedComponent>,
    supported_only: bool,
    strict_templates: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &CatalogOptions) -> Self {
        Self::default()
            .supported_only(options.supported_only)
            .strict_templates(options.strict_templates)
    }

    /// Hide components missing from the supported list.
    pub fn supported_only(mut self, enabled: bool) -> Self {
        self.supported_only = enabled;
        self
    }

    /// Fail `build` on malformed templates instead of logging them.
    pub fn strict_templates(mut self, enabled: bool) -> Self {
        self.strict_templates = enabled;
        self
    }

    /// Add a component unless one with the same name is already present.
    pub fn save_component(&mut self, component: Component) -> &mut Self {
        if self.components.iter().all(|c| c.name() != component.name()) {
            self.components.push(component);
        } else {
            debug!(component = component.name(), "component already saved; keeping first");
        }
        self
    }

    /// Append components in order, optionally dropping what was saved before.
    pub fn save_components<I>(&mut self, components: I, clean: bool) -> &mut Self
    where
        I: IntoIterator<Item = Component>,
    {
        if clean {
            self.components.clear();
        }
        self.components.extend(components);
        self
    }

    /// Replace the supported list.
    pub fn save_supported_components(&mut self, supported: Vec<SupportedComponent>) -> &mut Self {
        self.supported = supported;
        self
    }

    pub fn build(self) -> Result<Registry> {
        let supported: BTreeMap<String, SupportedComponent> = self
            .supported
            .into_iter()
            .map(|sc| (sc.name.clone(), sc))
            .collect();

        let mut entries = BTreeMap::new();
        for component in self.components {
            let name = component.name().to_string();
            if name.trim().is_empty() {
                bail!("encountered component with no name");
            }
            if entries.contains_key(&name) {
                // Bulk saves may repeat a name; the first one wins.
                continue;
            }
            let template = SyntaxTemplate::parse(component.syntax());
            let strategy = ExtractionStrategy::for_component(&name);
            if strategy == ExtractionStrategy::Default {
                if let Err(err) = template.validate() {
                    if self.strict_templates {
                        return Err(err).with_context(|| format!("component {name}"));
                    }
                    warn!(component = %name, "{err:#}; URI slicing may be unreliable");
                }
            } else {
                debug!(component = %name, strategy = strategy.as_str(), "using override strategy");
            }

            let (support_type, support_level) = match supported.get(&name) {
                Some(sc) => (SupportType::Supported, Some(sc.level.clone())),
                None => (
                    SupportType::Community,
                    component.component.support_level.clone(),
                ),
            };
            entries.insert(
                name,
                CatalogEntry {
                    component,
                    template,
                    strategy,
                    support_type,
                    support_level,
                },
            );
        }

        info!(
            components = entries.len(),
            supported = supported.len(),
            supported_only = self.supported_only,
            "component registry built"
        );
        Ok(Registry {
            entries,
            supported,
            supported_only: self.supported_only,
        })
    }
}

/// Frozen view of the component catalog keyed by component name.
#[derive(Debug, Default)]
pub struct Registry {
    entries: BTreeMap<String, CatalogEntry>,
    supported: BTreeMap<String, SupportedComponent>,
    supported_only: bool,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Load every component document in `dir`.
    ///
    /// Files are read in name order; `supported-components.json` is read as
    /// the supported list instead of a component.
    pub fn load_dir(dir: &Path, options: &CatalogOptions) -> Result<Self> {
        let validator = ComponentValidator::new()?;
        let mut builder = RegistryBuilder::with_options(options);

        for path in catalog_files(dir)? {
            if path.file_name().is_some_and(|n| n == SUPPORTED_COMPONENTS_FILE) {
                let data = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let supported = SupportedComponent::list_from_json(&data)
                    .with_context(|| format!("loading {}", path.display()))?;
                builder.save_supported_components(supported);
                continue;
            }
            builder.save_component(validator.load(&path)?);
        }

        builder
            .build()
            .with_context(|| format!("building registry from {}", dir.display()))
    }

    /// Resolve a component by name, honoring the supported-only filter.
    ///
    /// Returns `None` instead of erroring; an unknown name is an ordinary
    /// outcome for the codec.
    pub fn resolve(&self, name: &str) -> Option<&CatalogEntry> {
        let entry = self.entries.get(name)?;
        self.is_visible(name).then_some(entry)
    }

    /// Visible components in name order.
    pub fn components(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(|(name, _)| self.is_visible(name))
            .map(|(_, entry)| entry)
    }

    pub fn supported_components(&self) -> impl Iterator<Item = &SupportedComponent> {
        self.supported.values()
    }

    pub fn is_supported_only(&self) -> bool {
        self.supported_only
    }

    pub fn len(&self) -> usize {
        self.components().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Component title for the connector named by `uri`, or the connector
    /// name itself when the component is unknown or untitled.
    pub fn title_from_uri(&self, uri: &str) -> String {
        let name = crate::component_name_from_uri(uri);
        self.resolve(name)
            .map(|entry| entry.component().component.title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or(name)
            .to_string()
    }

    /// Component description for the connector named by `uri`, with the same
    /// fallback as [`Registry::title_from_uri`].
    pub fn description_from_uri(&self, uri: &str) -> String {
        let name = crate::component_name_from_uri(uri);
        self.resolve(name)
            .map(|entry| entry.component().component.description.as_str())
            .filter(|description| !description.is_empty())
            .unwrap_or(name)
            .to_string()
    }

    fn is_visible(&self, name: &str) -> bool {
        !self.supported_only || self.supported.contains_key(name)
    }
}

fn catalog_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("reading catalog directory {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("listing {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Cloneable handle to the current registry snapshot.
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry {
    current: Arc<RwLock<Arc<Registry>>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// The registry in effect now. Holders keep it across later swaps.
    pub fn snapshot(&self) -> Arc<Registry> {
        let guard = self.current.read().unwrap_or_else(|err| err.into_inner());
        Arc::clone(&guard)
    }

    /// Publish a freshly built registry and return the one it replaced.
    pub fn replace(&self, registry: Registry) -> Arc<Registry> {
        let mut guard = self.current.write().unwrap_or_else(|err| err.into_inner());
        std::mem::replace(&mut *guard, Arc::new(registry))
    }
}
