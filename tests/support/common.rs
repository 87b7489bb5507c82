#![allow(dead_code)]

use anyhow::{Context, Result};
use endpoint_codec::catalog::SUPPORTED_COMPONENTS_FILE;
use endpoint_codec::{Component, Registry};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

pub fn timer_document() -> Value {
    json!({
        "component": {
            "kind": "component",
            "name": "timer",
            "title": "Timer",
            "description": "Generate messages in specified intervals.",
            "syntax": "timer:timerName",
            "supportLevel": "Stable",
            "consumerOnly": true
        },
        "properties": {
            "timerName": {"kind": "path", "displayName": "Timer Name", "label": "", "required": true, "type": "string"},
            "period": {"kind": "parameter", "label": "consumer", "type": "duration", "defaultValue": "1000"},
            "bridgeErrorHandler": {"kind": "parameter", "label": "consumer,advanced", "type": "boolean"}
        }
    })
}

pub fn jms_document() -> Value {
    json!({
        "component": {
            "name": "jms",
            "title": "JMS",
            "syntax": "jms:destinationType:destinationName"
        },
        "properties": {
            "destinationType": {"kind": "path", "enum": ["queue", "topic", "temp-queue", "temp-topic"], "defaultValue": "queue"},
            "destinationName": {"kind": "path", "required": true}
        }
    })
}

pub fn netty_document() -> Value {
    json!({
        "component": {"name": "netty", "title": "Netty", "syntax": "netty:protocol://host:port"},
        "properties": {
            "protocol": {"kind": "path", "required": true},
            "host": {"kind": "path", "required": true},
            "port": {"kind": "path", "required": true}
        }
    })
}

pub fn http_document() -> Value {
    json!({
        "component": {"name": "http", "title": "HTTP", "syntax": "http://httpUri"},
        "properties": {"httpUri": {"kind": "path", "required": true}}
    })
}

pub fn salesforce_document() -> Value {
    json!({
        "component": {"name": "salesforce", "title": "Salesforce", "syntax": "salesforce:operationName:topicName"},
        "properties": {
            "operationName": {"kind": "path"},
            "topicName": {"kind": "path"}
        }
    })
}

pub fn cxf_document() -> Value {
    json!({
        "component": {"name": "cxf", "title": "SOAP", "syntax": "cxf:beanId:address"},
        "properties": {
            "beanId": {"kind": "path"},
            "address": {"kind": "path"}
        }
    })
}

pub fn jt400_document() -> Value {
    json!({
        "component": {
            "name": "jt400",
            "title": "JT400",
            "syntax": "jt400:userID:password@systemName/QSYS.LIB/objectPath.type"
        },
        "properties": {
            "userID": {"kind": "path", "required": true},
            "password": {"kind": "path", "required": true, "secret": true},
            "systemName": {"kind": "path", "required": true},
            "objectPath": {"kind": "path", "required": true},
            "type": {"kind": "path", "required": true}
        }
    })
}

pub fn kamelet_document() -> Value {
    json!({
        "component": {"name": "kamelet", "title": "Kamelet", "syntax": "kamelet:templateId/routeId"},
        "properties": {
            "templateId": {"kind": "path", "required": true},
            "routeId": {"kind": "path"}
        }
    })
}

pub fn direct_document() -> Value {
    json!({
        "component": {"name": "direct", "title": "Direct", "syntax": "direct"},
        "properties": {
            "timeout": {"kind": "parameter", "label": "producer", "type": "duration"}
        }
    })
}

pub fn kafka_document() -> Value {
    json!({
        "component": {"name": "kafka", "title": "Kafka", "syntax": "kafka:topic"},
        "properties": {
            "topic": {"kind": "path", "label": "common", "required": true},
            "brokers": {"kind": "parameter", "label": "common"},
            "groupId": {"kind": "parameter", "label": "consumer"},
            "autoOffsetReset": {"kind": "parameter", "label": "consumer", "enum": ["latest", "earliest", "none"]},
            "partitioner": {"kind": "parameter", "label": "producer"},
            "bridgeErrorHandler": {"kind": "parameter", "label": "consumer,advanced"},
            "lazyStartProducer": {"kind": "parameter", "label": "producer,advanced"},
            "sslKeyPassword": {"kind": "parameter", "label": "common,security", "secret": true},
            "schedulerProperties": {"kind": "parameter", "label": "consumer,scheduler"},
            "oldOption": {"kind": "parameter", "label": "common", "deprecated": true},
            "requiredOption": {"kind": "parameter", "label": "producer", "required": true},
            "blank": {"kind": "parameter"},
            "format": {"kind": "parameter", "label": "formatting"},
            "synchronous": {"kind": "parameter", "label": "advanced"}
        }
    })
}

pub fn all_documents() -> Vec<Value> {
    vec![
        timer_document(),
        jms_document(),
        netty_document(),
        http_document(),
        salesforce_document(),
        cxf_document(),
        jt400_document(),
        kamelet_document(),
        direct_document(),
        kafka_document(),
    ]
}

pub fn registry() -> Registry {
    try_registry().expect("fixture registry builds")
}

pub fn try_registry() -> Result<Registry> {
    let mut builder = Registry::builder().strict_templates(true);
    for document in all_documents() {
        builder.save_component(Component::from_value(document)?);
    }
    builder.build()
}

// Writes each document as `<name>.json` plus an optional supported list.
pub fn write_catalog(dir: &Path, documents: &[Value], supported: Option<Value>) -> Result<()> {
    for document in documents {
        let name = document
            .pointer("/component/name")
            .and_then(Value::as_str)
            .unwrap_or("unnamed");
        let path = dir.join(format!("{name}.json"));
        fs::write(&path, serde_json::to_vec_pretty(document)?)
            .with_context(|| format!("writing fixture {}", path.display()))?;
    }
    if let Some(list) = supported {
        fs::write(
            dir.join(SUPPORTED_COMPONENTS_FILE),
            serde_json::to_vec_pretty(&list)?,
        )?;
    }
    Ok(())
}
