//! Edge-list loading for SNAP and DIMACS style graph files.
//!
//! The two formats are handled by one loader because real benchmark inputs
//! mix their conventions freely:
//! - blank lines are ignored,
//! - lines starting with `#` (SNAP) or `c` (DIMACS) are comments,
//! - lines starting with `p` (DIMACS problem declaration) are ignored;
//!   the graph size is inferred from the edges themselves,
//! - `e u v` is a DIMACS edge,
//! - any other line with two whitespace-separated integers is an edge.
//!
//! Vertex labels need not be contiguous or zero-based; every distinct label
//! is remapped to a dense `[0, n)` range in sorted label order before the
//! [`Graph`] is built. Self-loops are dropped.

use crate::graph::Graph;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Errors
// ============================================================================

/// Errors encountered while loading an edge-list file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read.
    Io(String),
    /// The input contained no parsable edges.
    NoEdges,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "cannot read graph file: {msg}"),
            LoadError::NoEdges => write!(f, "no valid edges found in input"),
        }
    }
}

impl std::error::Error for LoadError {}

// ============================================================================
// Loading
// ============================================================================

/// Loads a graph from an edge-list file.
///
/// # Errors
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::NoEdges`] if it contains no parsable edges.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io(e.to_string()))?;
    parse_edge_list(&text)
}

/// Parses an edge-list from text. See the module docs for the accepted
/// conventions.
///
/// # Errors
/// Returns [`LoadError::NoEdges`] if no line yields a valid edge.
pub fn parse_edge_list(text: &str) -> Result<Graph, LoadError> {
    let mut labels: BTreeSet<u64> = BTreeSet::new();
    let mut edges: Vec<(u64, u64)> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let first = line.as_bytes()[0];
        if first == b'#' || first == b'c' || first == b'p' {
            continue;
        }

        let body = if first == b'e' { &line[1..] } else { line };
        let mut fields = body.split_whitespace();
        let (Some(a), Some(b)) = (fields.next(), fields.next()) else {
            continue;
        };
        // Lines that do not parse as an integer pair are skipped, matching
        // how the stream-extraction loaders behave on malformed rows.
        let (Ok(u), Ok(v)) = (a.parse::<u64>(), b.parse::<u64>()) else {
            continue;
        };

        labels.insert(u);
        labels.insert(v);
        edges.push((u, v));
    }

    if labels.is_empty() {
        return Err(LoadError::NoEdges);
    }

    // Dense remapping in sorted label order, so the same file always yields
    // the same vertex numbering.
    let index_of: hashbrown::HashMap<u64, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, &label)| (label, i))
        .collect();

    let mut g = Graph::new(labels.len());
    for (u, v) in edges {
        if u == v {
            continue;
        }
        // Both endpoints are in the label map, so the IDs are in range.
        let _ = g.add_edge(index_of[&u], index_of[&v]);
    }

    if g.num_edges() == 0 {
        return Err(LoadError::NoEdges);
    }

    Ok(g)
}

// ============================================================================
// Tests
// ============================================================================
