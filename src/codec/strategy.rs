//! Extraction strategies.
//!
//! Most components are sliced positionally against their syntax template. A
//! few publish a template that does not describe the URIs people actually
//! write; those get a hand-maintained strategy, chosen once per component
//! when the registry is built.

use crate::codec::ExtractedFields;
use crate::syntax::SyntaxTemplate;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionStrategy {
    /// Positional slicing against the component's syntax template.
    Default,
    /// `salesforce:operationName[:topicName]`, told apart by segment count.
    SalesforceStyle,
    /// `cxf:bean:beanId` or `cxf://address`.
    CxfStyle,
    /// `jt400:userID:password@systemName/objectPath.type` with interchangeable
    /// `.`, `/`, `@` and `:` separators.
    Jt400Style,
}

const SALESFORCE: &str = "salesforce";
const CXF: &str = "cxf";
const JT400: &str = "jt400";

const JT400_FIELDS: [&str; 5] = ["userID", "password", "systemName", "objectPath", "type"];

impl ExtractionStrategy {
    pub fn for_component(name: &str) -> Self {
        match name {
            SALESFORCE => ExtractionStrategy::SalesforceStyle,
            CXF => ExtractionStrategy::CxfStyle,
            JT400 => ExtractionStrategy::Jt400Style,
            _ => ExtractionStrategy::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::Default => "default",
            ExtractionStrategy::SalesforceStyle => "salesforce-style",
            ExtractionStrategy::CxfStyle => "cxf-style",
            ExtractionStrategy::Jt400Style => "jt400-style",
        }
    }

    /// Slice `uri` into field values. `uri` has already been expanded to the
    /// template's bare form when it was just the connector name.
    pub fn extract(&self, template: &SyntaxTemplate, uri: &str) -> ExtractedFields {
        match self {
            ExtractionStrategy::Default => extract_positional(template, uri),
            ExtractionStrategy::SalesforceStyle => extract_salesforce(uri),
            ExtractionStrategy::CxfStyle => extract_cxf(uri),
            ExtractionStrategy::Jt400Style => extract_jt400(uri),
        }
    }

    /// Rebuild a URI from field values; the inverse of [`Self::extract`].
    pub fn compose(&self, template: &SyntaxTemplate, fields: &ExtractedFields) -> String {
        let value = |name: &str| fields.get(name).map(String::as_str).unwrap_or_default();
        let connector = template.connector();
        match self {
            ExtractionStrategy::Default => compose_positional(template, fields),
            ExtractionStrategy::SalesforceStyle => match value("topicName") {
                "" => format!("{connector}:{}", value("operationName")),
                topic => format!("{connector}:{}:{topic}", value("operationName")),
            },
            ExtractionStrategy::CxfStyle => match value("beanId") {
                "" => format!("{connector}:{}", value("address")),
                bean => format!("{connector}:{bean}"),
            },
            ExtractionStrategy::Jt400Style => format!(
                "{connector}:{}:{}@{}/{}.{}",
                value("userID"),
                value("password"),
                value("systemName"),
                value("objectPath"),
                value("type"),
            ),
        }
    }
}

fn extract_positional(template: &SyntaxTemplate, uri: &str) -> ExtractedFields {
    let separators = template.separators();
    let mut fields = ExtractedFields::new();
    let mut rest = uri;

    for (index, name) in template.fields().iter().enumerate() {
        let leading = separators[index].as_str();
        let Some(found) = rest.find(leading) else {
            // Nothing left to slice: the remaining fields are absent.
            fields.insert(name.clone(), String::new());
            rest = "";
            continue;
        };
        let start = found + leading.len();
        let end = match separators.get(index + 1) {
            Some(trailing) => rest[start..]
                .find(trailing.as_str())
                .map(|offset| start + offset)
                .unwrap_or(rest.len()),
            None => rest.len(),
        };
        fields.insert(name.clone(), rest[start..end].to_string());
        rest = &rest[end..];
    }
    fields
}

fn compose_positional(template: &SyntaxTemplate, fields: &ExtractedFields) -> String {
    let names = template.fields();
    let mut uri = template.connector().to_string();
    let Some(last) = names
        .iter()
        .rposition(|name| fields.get(name).is_some_and(|value| !value.is_empty()))
    else {
        return uri;
    };
    for (name, separator) in names.iter().zip(template.separators()).take(last + 1) {
        uri.push_str(separator);
        if let Some(value) = fields.get(name) {
            uri.push_str(value);
        }
    }
    uri
}

fn extract_salesforce(uri: &str) -> ExtractedFields {
    let parts: Vec<&str> = uri.split(':').collect();
    let mut fields = ExtractedFields::new();
    match parts.as_slice() {
        [_, operation] => {
            fields.insert("operationName".to_string(), operation.to_string());
            fields.insert("topicName".to_string(), String::new());
        }
        [_, operation, topic] => {
            fields.insert("operationName".to_string(), operation.to_string());
            fields.insert("topicName".to_string(), topic.to_string());
        }
        _ => {}
    }
    fields
}

fn extract_cxf(uri: &str) -> ExtractedFields {
    let parts: Vec<&str> = uri.split(':').collect();
    let mut fields = ExtractedFields::new();
    match parts.as_slice() {
        [_, "bean", bean_id] if !bean_id.is_empty() => {
            fields.insert("beanId".to_string(), format!("bean:{bean_id}"));
        }
        [_, address] if address.starts_with("//") => {
            fields.insert("address".to_string(), address.to_string());
        }
        _ => {}
    }
    fields
}

fn extract_jt400(uri: &str) -> ExtractedFields {
    let normalized = uri.replace(['.', '/', '@'], ":");
    let parts: Vec<&str> = normalized.split(':').collect();
    JT400_FIELDS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let value = parts.get(index + 1).copied().unwrap_or_default();
            (name.to_string(), value.to_string())
        })
        .collect()
}
