//! schemagen CLI - render templates from live database schema metadata

use schemagen_cli::cli;
use schemagen_cli::input::{self, TemplateSource};
use schemagen_cli::logging;
use schemagen_cli::mapping;
use schemagen_cli::metadata::{self, ConnectionDescriptor};
use schemagen_cli::output;

use anyhow::{Context, Result};
use clap::Parser;
use schemagen_core::{Bindings, ParsedTemplate, SchemaModel, TypeMapping};
use std::io::Write;
use std::process::ExitCode;
use tracing::{info, warn};

use cli::Args;

/// Connection, query or template failure.
const EXIT_FAILURE: u8 = 1;
/// Configuration error (unreadable template, bad mapping file).
const EXIT_CONFIG_ERROR: u8 = 66;

/// Everything read from the local filesystem before touching the database.
struct Inputs {
    template: Option<TemplateSource>,
    mapping: TypeMapping,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    let inputs = match load_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("schemagen: error: {e:#}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match run(&args, inputs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("schemagen: error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn load_inputs(args: &Args) -> Result<Inputs> {
    let template = if args.dump_schema {
        if args.template.is_some() {
            warn!("--dump-schema given, template will not be rendered");
        }
        None
    } else {
        let path = args
            .template
            .as_deref()
            .context("a template file is required unless --dump-schema is given")?;
        Some(input::read_template(path)?)
    };

    let mapping = mapping::load_type_mapping(args.mapping.as_deref())?;
    if !mapping.is_empty() {
        info!(entries = mapping.len(), "loaded type mapping");
    }

    Ok(Inputs { template, mapping })
}

fn run(args: &Args, inputs: Inputs) -> Result<()> {
    // Parse before connecting so syntax errors never reach the database.
    let template = inputs
        .template
        .as_ref()
        .map(|source| ParsedTemplate::parse(&source.name, &source.content))
        .transpose()?;

    let mut descriptor = ConnectionDescriptor::parse(&args.url)?;
    if let Some(schema) = &args.schema {
        descriptor = descriptor.with_schema(schema.as_str());
    }

    let model = metadata::fetch_schema(&descriptor)?;

    match template {
        Some(template) => render(&template, model, inputs.mapping, args),
        None => dump_schema(&model, args),
    }
}

fn render(
    template: &ParsedTemplate<'_>,
    model: SchemaModel,
    mapping: TypeMapping,
    args: &Args,
) -> Result<()> {
    let bindings = Bindings::new(model, mapping);

    output::emit(args.output.as_deref(), |out| {
        let bytes = template.render_to_write(&bindings, out)?;
        info!(template = template.name(), bytes, "rendered");
        Ok(())
    })
}

fn dump_schema(model: &SchemaModel, args: &Args) -> Result<()> {
    let json = output::format_schema_json(model, args.compact)
        .context("Failed to serialize schema")?;

    output::emit(args.output.as_deref(), |out| {
        writeln!(out, "{json}")?;
        Ok(())
    })
}
