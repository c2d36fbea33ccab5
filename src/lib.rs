//! Struct Graph - Containment graphs of Go structs, rendered for Graphviz.
//!
//! The library reads the `.go` files of a single directory, recognizes struct
//! declarations line by line, and walks the resulting table from a root type to
//! produce directed edges ("`A` contains or embeds `B`").
//!
//! Recognition is textual on purpose: a struct opens with `type Name struct {`, its
//! members are `Name Type` or `Name *Type` style lines or bare embedded types, and a
//! line starting with `}` closes it. Nothing is compiled or type-checked.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Lists the `.go` files of the target directory
//! 2. [`parser`] - Classifies single lines as struct headers or members
//! 3. [`type_catalog`] - Builds the type name to members table
//! 4. [`graph_emitter`] - Walks the table depth-first into edges
//! 5. [`serializer`] - Renders edges as a DOT document or JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use struct_graph::{
//!     graph_emitter::GraphEmitter,
//!     serializer::render_dot,
//!     type_catalog::CatalogBuilder,
//! };
//! use std::path::Path;
//!
//! let build = CatalogBuilder::new(false).build(Path::new("./pkg/model")).unwrap();
//! let edges = GraphEmitter::new(&build.catalog).generate_edges("Server");
//! println!("{}", render_dot(&edges));
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod scanner;
pub mod parser;
pub mod type_catalog;
pub mod graph_emitter;
pub mod serializer;
pub mod error;
