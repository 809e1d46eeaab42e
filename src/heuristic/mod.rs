//! Heuristic clique solvers: fast, no exactness guarantee.
//!
//! Each solver returns a vertex set it claims is a clique; callers are
//! expected to confirm the claim with [`Graph::is_clique`](crate::graph::Graph::is_clique)
//! before trusting it, exactly as they do for the exact engines. The greedy
//! construction doubles as the incumbent seed for the exact searches.

pub mod annealing;
pub mod greedy;
pub mod local_search;
