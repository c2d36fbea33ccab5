//! Serialization module for turning walked edges into output documents.
//!
//! The DOT document is a fixed preamble, the edge statements, and a closing brace.
//! The JSON form is the structured edge list. Either can be written to a file or
//! returned as a string.

use crate::error::Result;
use crate::graph_emitter::Edge;
use log::debug;
use std::fs;
use std::path::Path;

/// Opening of every DOT document: left-to-right layout and a shared font.
pub const DOT_HEADER: &str = "
digraph G {
\trankdir = \"LR\";
\tgraph [fontname = \"Inconsolata\"];
\tnode [fontname = \"Inconsolata\"];
\tedge [fontname = \"Inconsolata\"];
";

/// Closing of every DOT document.
pub const DOT_FOOTER: &str = "\n}\n";

/// Wraps DOT edge statements into a complete `digraph` document.
///
/// # Example
///
/// ```
/// use struct_graph::serializer::render_dot;
///
/// let doc = render_dot("\t\"A\"->\"B\";\n");
/// assert!(doc.contains("digraph G {"));
/// assert!(doc.trim_end().ends_with('}'));
/// ```
pub fn render_dot(edge_text: &str) -> String {
    let mut doc = String::with_capacity(DOT_HEADER.len() + edge_text.len() + DOT_FOOTER.len());
    doc.push_str(DOT_HEADER);
    doc.push_str(edge_text);
    doc.push_str(DOT_FOOTER);
    doc
}

/// Serializes walked edges to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(edges: &[Edge]) -> Result<String> {
    debug!("Serializing {} edges to JSON", edges.len());
    Ok(serde_json::to_string_pretty(edges)?)
}

/// Writes content to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
