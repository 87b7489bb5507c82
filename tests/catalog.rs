// Catalog directory loading, schema guard rails and supported-only filtering.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use endpoint_codec::{
    CatalogOptions, ExtractionStrategy, Registry, SupportType, load_component_from_path,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

use common::{all_documents, jms_document, timer_document, try_registry, write_catalog};

#[test]
fn fixture_registry_builds_strictly() -> Result<()> {
    let registry = try_registry()?;
    assert_eq!(registry.len(), all_documents().len());
    assert_eq!(
        registry.resolve("salesforce").map(|e| e.strategy()),
        Some(ExtractionStrategy::SalesforceStyle)
    );
    assert_eq!(
        registry.resolve("timer").map(|e| e.strategy()),
        Some(ExtractionStrategy::Default)
    );
    Ok(())
}

#[test]
fn load_dir_reads_components_in_name_order() -> Result<()> {
    let dir = TempDir::new()?;
    write_catalog(dir.path(), &all_documents(), None)?;
    fs::write(dir.path().join("README.txt"), "not a component")?;

    let registry = Registry::load_dir(dir.path(), &CatalogOptions::default())?;
    let names: Vec<_> = registry.components().map(|e| e.name().to_string()).collect();
    let mut expected = names.clone();
    expected.sort();
    assert_eq!(names, expected);
    assert_eq!(names.len(), all_documents().len());

    let timer = registry.resolve("timer").expect("timer loaded");
    assert_eq!(timer.template().fields(), ["timerName"]);
    assert_eq!(timer.support_type(), SupportType::Community);
    assert_eq!(timer.support_level(), Some("Stable"));
    Ok(())
}

#[test]
fn supported_list_marks_and_filters_components() -> Result<()> {
    let dir = TempDir::new()?;
    write_catalog(
        dir.path(),
        &[timer_document(), jms_document()],
        Some(json!([{"name": "jms", "level": "Preview"}])),
    )?;

    let all = Registry::load_dir(dir.path(), &CatalogOptions::default())?;
    let jms = all.resolve("jms").expect("jms loaded");
    assert_eq!(jms.support_type(), SupportType::Supported);
    assert_eq!(jms.support_level(), Some("Preview"));
    assert!(all.resolve("timer").is_some());
    assert!(!all.is_supported_only());
    let listed: Vec<_> = all.supported_components().map(|sc| sc.name.as_str()).collect();
    assert_eq!(listed, ["jms"]);

    let options = CatalogOptions {
        supported_only: true,
        ..CatalogOptions::default()
    };
    let supported = Registry::load_dir(dir.path(), &options)?;
    assert!(supported.resolve("timer").is_none());
    assert!(supported.resolve("jms").is_some());
    assert_eq!(supported.len(), 1);
    assert!(endpoint_codec::decompose(&supported, "timer:tick").is_empty());
    Ok(())
}

#[test]
fn schema_violations_name_the_file() -> Result<()> {
    let dir = TempDir::new()?;
    write_catalog(dir.path(), &[timer_document()], None)?;
    fs::write(
        dir.path().join("broken.json"),
        serde_json::to_vec(&json!({"component": {"name": "broken"}}))?,
    )?;

    let err = Registry::load_dir(dir.path(), &CatalogOptions::default())
        .expect_err("document without syntax is rejected");
    let message = format!("{err:#}");
    assert!(message.contains("broken.json"), "{message}");
    Ok(())
}

#[test]
fn strict_templates_reject_unsliceable_syntax() -> Result<()> {
    let dir = TempDir::new()?;
    write_catalog(
        dir.path(),
        &[json!({"component": {"name": "odd", "syntax": "odd:a::b"}})],
        None,
    )?;

    let lenient = Registry::load_dir(dir.path(), &CatalogOptions::default())?;
    assert!(lenient.resolve("odd").is_some());

    let strict = CatalogOptions {
        strict_templates: true,
        ..CatalogOptions::default()
    };
    let err = Registry::load_dir(dir.path(), &strict).expect_err("strict load fails");
    assert!(format!("{err:#}").contains("odd"));
    Ok(())
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent");
    assert!(Registry::load_dir(&missing, &CatalogOptions::default()).is_err());
}

#[test]
fn single_document_loads_from_path() -> Result<()> {
    let dir = TempDir::new()?;
    write_catalog(dir.path(), &[jms_document()], None)?;
    let component = load_component_from_path(&dir.path().join("jms.json"))?;
    assert_eq!(component.name(), "jms");
    assert_eq!(component.syntax(), "jms:destinationType:destinationName");
    assert!(load_component_from_path(&dir.path().join("missing.json")).is_err());
    Ok(())
}
