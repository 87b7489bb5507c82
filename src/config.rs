//! Catalog configuration.
//!
//! Options come from the environment so embedding hosts and the inspector
//! binary agree on where the catalog lives and how strictly it is loaded.
//! Explicit values (CLI flags, builder calls) always win over the environment.

use anyhow::{Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CATALOG_DIR: &str = "ENDPOINT_CATALOG_DIR";
pub const ENV_SUPPORTED_ONLY: &str = "ENDPOINT_CATALOG_SUPPORTED_ONLY";
pub const ENV_STRICT_TEMPLATES: &str = "ENDPOINT_CATALOG_STRICT_TEMPLATES";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Only expose components named in the supported list.
    pub supported_only: bool,
    /// Reject components whose syntax template cannot be sliced reliably.
    pub strict_templates: bool,
}

impl CatalogOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build options from an arbitrary variable source. Unset or unparsable
    /// flags fall back to `false`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).and_then(|raw| parse_flag(&raw)).unwrap_or(false);
        Self {
            supported_only: flag(ENV_SUPPORTED_ONLY),
            strict_templates: flag(ENV_STRICT_TEMPLATES),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Locate the catalog directory.
///
/// Order: the explicit path, `ENDPOINT_CATALOG_DIR`, then the hint baked in
/// at build time via `ENDPOINT_CATALOG_HINT`. The environment and the hint
/// are skipped when they hold no component documents.
pub fn resolve_catalog_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_catalog_dir_with(
        explicit,
        env::var(ENV_CATALOG_DIR).ok(),
        option_env!("ENDPOINT_CATALOG_HINT"),
    )
}

fn resolve_catalog_dir_with(
    explicit: Option<&Path>,
    from_env: Option<String>,
    hint: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_dir() {
            return Ok(path.to_path_buf());
        }
        bail!("catalog directory {} does not exist", path.display());
    }

    let candidates = from_env
        .into_iter()
        .chain(hint.map(str::to_string))
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from);
    for candidate in candidates {
        if holds_component_documents(&candidate) {
            return Ok(candidate);
        }
    }

    bail!(
        "Unable to locate a component catalog. Pass --catalog or set {ENV_CATALOG_DIR} to a directory of component JSON files."
    )
}

// Fallback directories only count when they hold at least one `*.json` file.
fn holds_component_documents(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| {
            entries.any(|entry| {
                entry.is_ok_and(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
            })
        })
        .unwrap_or(false)
}
