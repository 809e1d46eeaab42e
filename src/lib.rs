//! # maxclique
//!
//! Exact and heuristic solvers for the maximum clique problem on undirected
//! graphs, with a benchmarking harness for comparing them on real edge-list
//! datasets.
//!
//! This crate provides:
//! - A [`graph::Graph`] with O(1) adjacency queries backed by a dual
//!   representation (hash sets + dense bit matrix), degeneracy computation,
//!   and the `is_clique` validation oracle every caller uses.
//! - Five exact branch-and-bound engines in [`exact`], from the plain
//!   Bron-Kerbosch baseline to a fixed-width bitset search, all guaranteed
//!   to return a clique of the true maximum size.
//! - Heuristic solvers in [`heuristic`] (greedy, simulated annealing,
//!   randomized local search) with no exactness guarantee.
//! - SNAP/DIMACS edge-list loading in [`load`] and a timing/validation
//!   harness in [`bench`].
//!
//! ## Quick Start
//!
//! ```
//! use maxclique::graph::Graph;
//! use maxclique::exact::tomita;
//!
//! let mut g = Graph::new(4);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(0, 2).unwrap();
//! g.add_edge(2, 3).unwrap();
//!
//! let clique = tomita::find_maximum_clique(&g);
//! assert_eq!(clique, vec![0, 1, 2]);
//! assert!(g.is_clique(&clique));
//! ```
//!
//! ## Loading a Benchmark Graph
//!
//! ```
//! use maxclique::load::parse_edge_list;
//! use maxclique::exact::bitset;
//!
//! // SNAP-style edge list; labels are remapped to a dense range.
//! let g = parse_edge_list("# toy graph\n10 20\n20 30\n10 30\n").unwrap();
//! assert_eq!(bitset::find_maximum_clique(&g).unwrap().len(), 3);
//! ```
//!
//! ## Design Notes
//!
//! - The `Graph` is read-only to every solver; each engine builds its own
//!   working representation (hash sets or bitsets) per invocation.
//! - Every search is single-threaded and owns exactly one incumbent per
//!   invocation; only the randomized local-search heuristic parallelizes,
//!   and only across fully independent restarts.
//! - All tie-breaks resolve by lowest vertex ID, so identical inputs give
//!   identical results across runs.
//! - The bitset engine caps graphs at [`exact::bitset::MAX_VERTICES`]
//!   vertices and reports a capacity error beyond that.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)] // Vertex names u, v, w mirror the literature
#![allow(clippy::missing_panics_doc)] // Panics are documented where they are contracts

pub mod bench;
pub mod exact;
pub mod graph;
pub mod heuristic;
pub mod load;

/// Re-export of the commonly used types and entry points.
pub mod prelude {
    pub use crate::bench::{run_all, run_one, AlgorithmKind, BenchError, BenchResult};
    pub use crate::exact::{bitset, bron_kerbosch, degeneracy, ostergard, tomita, SolveError};
    pub use crate::graph::{Graph, GraphError};
    pub use crate::heuristic::annealing::AnnealingConfig;
    pub use crate::heuristic::local_search::LocalSearchConfig;
    pub use crate::load::{load_edge_list, parse_edge_list, LoadError};
}
