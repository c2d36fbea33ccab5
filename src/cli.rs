use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info, warn, LevelFilter};
use std::path::PathBuf;

/// Struct Graph - Draw the containment graph of Go structs starting from a root type
#[derive(Parser, Debug)]
#[command(name = "struct-graph")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Name of the root struct to start the graph from
    #[arg(value_name = "ROOT_TYPE")]
    pub root_type: String,

    /// Directory containing the Go source files (not searched recursively)
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Output debug logging
    #[arg(long = "debug")]
    pub debug: bool,

    /// Show builtin types such as string and int
    #[arg(short = 'b', long = "builtin")]
    pub builtin: bool,

    /// Show member labels on edges
    #[arg(
        short = 'l',
        long = "label",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub label: bool,

    /// Output format: dot (Graphviz document) or json (optional extra: structured edge list)
    #[arg(short = 'f', long = "format", value_enum, default_value = "dot")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz DOT document
    Dot,
    /// Optional extra: JSON edge list instead of a graph document
    Json,
}

/// Level to force on the logger, if any.
///
/// `--debug` always wins. Otherwise a non-empty `RUST_LOG` is left in charge, and
/// without it the logger defaults to warnings.
pub fn log_level(debug: bool, rust_log: Option<&str>) -> Option<LevelFilter> {
    if debug {
        Some(LevelFilter::Debug)
    } else if rust_log.is_some_and(|v| !v.trim().is_empty()) {
        None
    } else {
        Some(LevelFilter::Warn)
    }
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if args.root_type.trim().is_empty() {
        anyhow::bail!("argument missing. requires top struct name");
    }

    info!("Target directory: {}", args.directory.display());
    info!("Root type: {}", args.root_type);
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Build the document for `args` without writing it anywhere
pub fn generate(args: &CliArgs) -> Result<String> {
    use crate::graph_emitter::GraphEmitter;
    use crate::serializer::{render_dot, serialize_json};
    use crate::type_catalog::CatalogBuilder;

    // Step 1: Scan the directory into a type catalog
    info!("Scanning {}...", args.directory.display());
    let build = CatalogBuilder::new(args.builtin).build(&args.directory)?;

    info!(
        "Found {} struct types in {} files",
        build.catalog.len(),
        build.files_scanned
    );
    if !build.warnings.is_empty() {
        debug!("{} files or entries skipped", build.warnings.len());
    }

    if !build.catalog.contains(&args.root_type) {
        warn!("Root type {} not found in {}", args.root_type, args.directory.display());
    }

    // Step 2: Walk the catalog from the root type
    let emitter = GraphEmitter::new(&build.catalog).with_labels(args.label);
    let edges = emitter.edges(&args.root_type);
    info!("Emitted {} edges from {}", edges.len(), args.root_type);

    // Step 3: Serialize to the requested format
    let content = match args.output_format {
        OutputFormat::Dot => render_dot(&emitter.format_edges(&edges)),
        OutputFormat::Json => serialize_json(&edges)?,
    };

    Ok(content)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::serializer::write_to_file;

    let content = generate(&args)?;

    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)
            .with_context(|| format!("Failed to write to file: {}", output_path.display()))?;
    } else {
        println!("{}", content);
    }

    Ok(())
}
