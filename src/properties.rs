//! Display ordering for a component's endpoint properties.
//!
//! The editor shows path fields first, then what a user must fill in, then
//! the common options for the endpoint's role, then the rest worth showing.
//! Options that only apply to the opposite role are left out.

use crate::catalog::{PropertyDescriptor, Registry};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
    Consumer,
    Producer,
}

impl EndpointRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointRole::Consumer => "consumer",
            EndpointRole::Producer => "producer",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            EndpointRole::Consumer => EndpointRole::Producer,
            EndpointRole::Producer => EndpointRole::Consumer,
        }
    }
}

impl TryFrom<&str> for EndpointRole {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "consumer" => Ok(EndpointRole::Consumer),
            "producer" => Ok(EndpointRole::Producer),
            other => bail!("Unknown endpoint role: {other}"),
        }
    }
}

type Tier = fn(&PropertyDescriptor, EndpointRole) -> bool;

const TIERS: [Tier; 6] = [
    path_fields,
    required_options,
    unlabeled_options,
    common_role_options,
    formatting_options,
    scheduling_and_security_options,
];

fn path_fields(p: &PropertyDescriptor, _: EndpointRole) -> bool {
    p.kind.is_path()
}

fn required_options(p: &PropertyDescriptor, _: EndpointRole) -> bool {
    !p.kind.is_path() && p.required
}

fn unlabeled_options(p: &PropertyDescriptor, _: EndpointRole) -> bool {
    !p.kind.is_path() && !p.required && p.label.is_empty()
}

fn common_role_options(p: &PropertyDescriptor, role: EndpointRole) -> bool {
    !p.kind.is_path()
        && !p.required
        && !p.label.contains(role.opposite().as_str())
        && !p.label.contains("advanced")
}

fn formatting_options(p: &PropertyDescriptor, _: EndpointRole) -> bool {
    !p.required && p.label == "formatting"
}

fn scheduling_and_security_options(p: &PropertyDescriptor, role: EndpointRole) -> bool {
    !p.kind.is_path()
        && !p.label.contains(role.opposite().as_str())
        && ["scheduler", "security", "advanced"]
            .iter()
            .any(|group| p.label.contains(group))
}

/// Properties of `component` in editor display order for `role`.
///
/// Deprecated properties are dropped and each name appears once, at the rank
/// of its first qualifying tier. Unknown components yield an empty list.
pub fn prioritize(
    registry: &Registry,
    component: &str,
    role: EndpointRole,
) -> Vec<PropertyDescriptor> {
    let Some(entry) = registry.resolve(component) else {
        return Vec::new();
    };
    let candidates: Vec<&PropertyDescriptor> = entry
        .component()
        .properties
        .values()
        .filter(|p| !p.deprecated)
        .collect();

    let mut selected = BTreeSet::new();
    let mut ordered = Vec::new();
    for tier in TIERS {
        for property in candidates.iter().copied().filter(|p| tier(p, role)) {
            if selected.insert(property.name.as_str()) {
                ordered.push(property.clone());
            }
        }
    }
    ordered
}
