//! Struct Graph - Command-line tool for drawing Go struct containment graphs.
//!
//! Scans the `.go` files of one directory for struct declarations and prints a Graphviz
//! document of every struct reachable from a root type.
//!
//! # Usage
//!
//! ```bash
//! struct-graph [OPTIONS] <ROOT_TYPE>
//! ```
//!
//! # Examples
//!
//! Render the graph for `Server` in the current directory:
//! ```bash
//! struct-graph Server | dot -Tsvg > server.svg
//! ```
//!
//! Include builtin types and drop the edge labels:
//! ```bash
//! struct-graph -d ./pkg/model -b --label false Config
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use struct_graph::cli;

fn main() -> Result<()> {
    // Parse first so the debug flag can pick the log level
    let parsed = cli::CliArgs::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = cli::log_level(parsed.debug, rust_log.as_deref()) {
        builder.filter_level(level);
    }
    builder.init();

    let args = cli::parse_args_from_parsed(parsed)?;

    cli::run(args)?;

    info!("Graph generation completed successfully");

    Ok(())
}
