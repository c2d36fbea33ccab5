//! Depth-first walk of a [`TypeCatalog`] that turns member slots into graph edges.
//!
//! Visited state is tracked per member slot, identified by the owning type and the
//! member's index. Each slot yields at most one edge, so the walk terminates on
//! self-referencing and mutually-referencing structs alike. Two members pointing at
//! the same type are different slots and each produce their own edge.

use crate::type_catalog::{Member, TypeCatalog};
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// A directed "contains/embeds" relationship between two types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// The member slot that produced this edge
    pub member: Member,
}

impl Edge {
    /// Formats the edge as one DOT statement, terminated by a newline.
    pub fn to_dot(&self, with_label: bool) -> String {
        let mut statement = format!("\t\"{}\"->\"{}\"", self.from, self.to);
        if with_label {
            statement.push_str(&format!(" [label = \"{}\"]", self.member.label()));
        }
        statement.push_str(";\n");
        statement
    }
}

/// One traversal run over a catalog.
///
/// The visited set lives here, not in the catalog. Walking again with the same
/// `Traversal` skips every slot it already emitted; a new `Traversal` starts over.
pub struct Traversal<'a> {
    catalog: &'a TypeCatalog,
    visited: HashSet<(&'a str, usize)>,
}

impl<'a> Traversal<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self {
            catalog,
            visited: HashSet::new(),
        }
    }

    /// Walks from `start` in depth-first pre-order and returns the newly emitted edges.
    ///
    /// An unknown `start`, or an unknown member type along the way, contributes nothing.
    pub fn walk(&mut self, start: &str) -> Vec<Edge> {
        let catalog: &'a TypeCatalog = self.catalog;
        let mut edges = Vec::new();

        let Some((root, _)) = catalog.entry(start) else {
            debug!("Start type {} not found in catalog", start);
            return edges;
        };

        // Each frame is a type being expanded and the next member index to look at.
        let mut stack: Vec<(&'a str, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (type_name, next) = *frame;
            let members = catalog.get(type_name).unwrap_or_default();

            let pending = (next..members.len())
                .find(|&index| !self.visited.contains(&(type_name, index)));

            let Some(index) = pending else {
                stack.pop();
                continue;
            };

            frame.1 = index + 1;
            self.visited.insert((type_name, index));

            let member = &members[index];
            edges.push(Edge {
                from: type_name.to_string(),
                to: member.type_name.clone(),
                member: member.clone(),
            });

            if catalog.contains(&member.type_name) {
                stack.push((member.type_name.as_str(), 0));
            }
        }

        debug!("Walk from {} emitted {} edges", start, edges.len());
        edges
    }

    /// Number of member slots consumed so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Generates edges reachable from a root type.
///
/// # Example
///
/// ```
/// use struct_graph::graph_emitter::GraphEmitter;
/// use struct_graph::type_catalog::{CatalogBuilder, TypeCatalog};
///
/// let mut catalog = TypeCatalog::new();
/// CatalogBuilder::new(false).scan_source("type Node struct {\n\tNext *Node\n}\n", &mut catalog);
///
/// let text = GraphEmitter::new(&catalog).generate_edges("Node");
/// assert_eq!(text, "\t\"Node\"->\"Node\" [label = \"Next *Node\"];\n");
/// ```
pub struct GraphEmitter<'a> {
    catalog: &'a TypeCatalog,
    with_labels: bool,
}

impl<'a> GraphEmitter<'a> {
    /// Creates an emitter with labels enabled.
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self {
            catalog,
            with_labels: true,
        }
    }

    pub fn with_labels(mut self, with_labels: bool) -> Self {
        self.with_labels = with_labels;
        self
    }

    /// Edges reachable from `start`, using a fresh traversal.
    pub fn edges(&self, start: &str) -> Vec<Edge> {
        Traversal::new(self.catalog).walk(start)
    }

    /// DOT edge statements reachable from `start`, one per line.
    pub fn generate_edges(&self, start: &str) -> String {
        self.format_edges(&self.edges(start))
    }

    /// Formats already-collected edges using this emitter's label setting.
    pub fn format_edges(&self, edges: &[Edge]) -> String {
        edges.iter().map(|edge| edge.to_dot(self.with_labels)).collect()
    }
}
