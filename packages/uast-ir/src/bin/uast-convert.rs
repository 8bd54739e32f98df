//! UAST conversion CLI
//!
//! # Usage
//!
//! ```bash
//! # CST JSON in, pretty UAST JSON out
//! cargo run --bin uast-convert -- tests/fixtures/example.json --language go --pretty
//!
//! # Parse source directly and print the indented outline with locations
//! cargo run --bin uast-convert -- src/lib.rs --source-language rust --format text --locations
//!
//! # Custom mapping rules and tighter fan-out
//! cargo run --bin uast-convert -- cst.json --map impl_item=Class --threshold 20 --max-concurrent 4
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=uast_ir=debug` to see fan-out decisions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uast_ir::config::parse_mapping_rule;
use uast_ir::{
    load_cst, parse_source, ConverterConfig, CstNode, JsonFormat, LanguageId, LlmFormat,
    LlmProcessor, NodeKind, SimpleTextFormat, TreeTextFormat, Uast, UastConverter,
};

#[derive(Parser)]
#[command(name = "uast-convert")]
#[command(about = "Convert tree-sitter CSTs into a Universal AST", long_about = None)]
struct Cli {
    /// CST JSON file, or a source file with --source-language
    input: PathBuf,

    /// Language recorded on the UAST (defaults to the source language or file extension)
    #[arg(short, long)]
    language: Option<String>,

    /// Parse INPUT as source code with the given grammar
    #[arg(short, long, value_parser = parse_language)]
    source_language: Option<LanguageId>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Include node locations in text output
    #[arg(long)]
    locations: bool,

    /// Child count above which a node converts its children in parallel
    #[arg(long)]
    threshold: Option<usize>,

    /// Worker limit for parallel conversion
    #[arg(long)]
    max_concurrent: Option<usize>,

    /// Extra mapping rule, e.g. impl_item=Class (repeatable)
    #[arg(long = "map", value_name = "RAW=KIND", value_parser = parse_map)]
    mappings: Vec<(String, NodeKind)>,

    /// Metadata entry, e.g. version=1.0 (repeatable)
    #[arg(long = "meta", value_name = "KEY=VALUE", value_parser = parse_meta)]
    metadata: Vec<(String, String)>,

    /// YAML converter config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Container JSON
    Json,
    /// Indented outline
    Text,
    /// Box-drawing tree
    Tree,
    /// Prioritized sections for prompts
    Llm,
}

fn parse_language(s: &str) -> std::result::Result<LanguageId, String> {
    s.parse().map_err(|e: uast_ir::UastError| e.to_string())
}

fn parse_map(s: &str) -> std::result::Result<(String, NodeKind), String> {
    parse_mapping_rule(s).map_err(|e| e.to_string())
}

fn parse_meta(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("metadata '{s}' must look like key=value"))?;
    if key.trim().is_empty() {
        return Err(format!("metadata '{s}' has an empty key"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let converter = build_converter(&cli)?;
    let cst = read_input(&cli)?;
    let language = resolve_language(&cli);

    let uast = converter
        .convert(&cst, &language)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    if let Some(name) = cli.input.file_name() {
        uast.add_metadata("filename", name.to_string_lossy());
    }
    for (key, value) in &cli.metadata {
        uast.add_metadata(key.as_str(), value.as_str());
    }

    let rendered = render(&cli, &uast)?;
    write_output(cli.output.as_deref(), &rendered)?;

    info!(
        nodes = uast.node_count(),
        ids = converter.issued_ids(),
        "done"
    );
    Ok(())
}

fn build_converter(cli: &Cli) -> Result<UastConverter> {
    let mut config = match &cli.config {
        Some(path) => ConverterConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConverterConfig::default(),
    };

    if let Some(threshold) = cli.threshold {
        config.parallel_threshold = threshold;
    }
    if let Some(max_concurrent) = cli.max_concurrent {
        config.max_concurrent = max_concurrent;
    }
    config.mappings.extend(cli.mappings.iter().cloned());

    UastConverter::from_config(&config).context("Invalid converter configuration")
}

fn read_input(cli: &Cli) -> Result<CstNode> {
    match cli.source_language {
        Some(language) => {
            let source = fs::read_to_string(&cli.input)
                .with_context(|| format!("Failed to read {}", cli.input.display()))?;
            parse_source(language, &source)
                .with_context(|| format!("Failed to parse {} as {}", cli.input.display(), language))
        }
        None => load_cst(&cli.input)
            .with_context(|| format!("Failed to load CST from {}", cli.input.display())),
    }
}

fn resolve_language(cli: &Cli) -> String {
    if let Some(language) = &cli.language {
        return language.clone();
    }
    cli.source_language
        .or_else(|| {
            cli.input
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(LanguageId::from_extension)
        })
        .map(|language| language.name().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn render(cli: &Cli, uast: &Uast) -> Result<String> {
    let rendered = match cli.format {
        OutputFormat::Json => JsonFormat { pretty: cli.pretty }.format(uast)?,
        OutputFormat::Text => SimpleTextFormat {
            include_locations: cli.locations,
        }
        .format(uast)?,
        OutputFormat::Tree => TreeTextFormat.format(uast)?,
        OutputFormat::Llm => {
            let mut processor = LlmProcessor::new();
            processor.clear_format();
            processor.set_include_locations(cli.locations);
            processor.process(uast)?
        }
    };
    Ok(rendered)
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
