//! Inspect how endpoint URIs decompose against a component catalog.
//!
//! Usage:
//!   endpoint-inspect syntax 'netty:protocol://host:port'
//!   endpoint-inspect --catalog catalog/ decompose 'timer:tick'
//!   endpoint-inspect --catalog catalog/ compose jms destinationType=queue destinationName=orders
//!   endpoint-inspect --catalog catalog/ normalize --file element.json
//!   endpoint-inspect --catalog catalog/ properties kafka --role consumer
//!   endpoint-inspect --catalog catalog/ components

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use endpoint_codec::{
    CatalogOptions, EndpointRole, ExtractedFields, Registry, RouteElement, SyntaxTemplate,
    compose, decompose, normalize, prioritize, resolve_catalog_dir,
};
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "endpoint-inspect")]
#[command(about = "Decompose, compose and normalize endpoint URIs against a component catalog")]
struct Cli {
    /// Catalog directory of component JSON files (defaults to ENDPOINT_CATALOG_DIR).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Only expose components named in supported-components.json.
    #[arg(long, global = true)]
    supported_only: bool,
    /// Reject components whose syntax template cannot be sliced reliably.
    #[arg(long, global = true)]
    strict_templates: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the tokens and separators of a syntax template.
    Syntax { template: String },
    /// Split a URI into its path fields.
    Decompose { uri: String },
    /// Build a URI from FIELD=VALUE pairs.
    Compose {
        component: String,
        #[arg(value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Fold a route element's URI into its parameters (reads stdin without --file).
    Normalize {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List a component's properties in display order.
    Properties {
        component: String,
        #[arg(long, value_parser = ["consumer", "producer"], default_value = "consumer")]
        role: String,
    },
    /// List the catalog's components.
    Components,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut options = CatalogOptions::from_env();
    options.supported_only |= cli.supported_only;
    options.strict_templates |= cli.strict_templates;
    let catalog = cli.catalog;

    match cli.command {
        Command::Syntax { template } => print_json(&SyntaxTemplate::parse(&template)),
        Command::Decompose { uri } => {
            let registry = load_registry(catalog, &options)?;
            print_json(&decompose(&registry, &uri))
        }
        Command::Compose { component, fields } => {
            let registry = load_registry(catalog, &options)?;
            let fields: ExtractedFields = fields.into_iter().collect();
            let uri = compose(&registry, &component, &fields)
                .ok_or_else(|| anyhow!("unknown component '{component}'"))?;
            println!("{uri}");
            Ok(())
        }
        Command::Normalize { file } => {
            let registry = load_registry(catalog, &options)?;
            let mut element: RouteElement =
                serde_json::from_str(&read_input(file)?).context("parsing route element")?;
            normalize(&registry, &mut element);
            print_json(&element)
        }
        Command::Properties { component, role } => {
            let registry = load_registry(catalog, &options)?;
            if registry.resolve(&component).is_none() {
                bail!("unknown component '{component}'");
            }
            let role = EndpointRole::try_from(role.as_str())?;
            print_json(&prioritize(&registry, &component, role))
        }
        Command::Components => {
            let registry = load_registry(catalog, &options)?;
            let listing: Vec<_> = registry
                .components()
                .map(|entry| {
                    json!({
                        "name": entry.name(),
                        "title": entry.component().component.title,
                        "syntax": entry.template().raw(),
                        "strategy": entry.strategy(),
                        "supportType": entry.support_type().as_str(),
                        "supportLevel": entry.support_level(),
                    })
                })
                .collect();
            print_json(&listing)
        }
    }
}

fn load_registry(catalog: Option<PathBuf>, options: &CatalogOptions) -> Result<Registry> {
    let dir = resolve_catalog_dir(catalog.as_deref())?;
    Registry::load_dir(&dir, options)
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for route element JSON")?;
    }
    Ok(buf)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("rendering JSON output")?;
    println!("{rendered}");
    Ok(())
}
