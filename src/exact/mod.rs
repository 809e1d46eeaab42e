//! Exact branch-and-bound maximum-clique search engines.
//!
//! Five engines share one contract: take a [`Graph`] by reference, return a
//! vertex set that is a true maximum clique (not merely maximal). Each engine
//! owns a single incumbent per invocation, updated only when a strictly
//! larger valid clique is found, and each builds its own working sets from
//! the graph's adjacency queries:
//!
//! - [`bron_kerbosch`]: plain recursion over (R, P, X), the correctness
//!   baseline.
//! - [`tomita`]: pivot selection plus a greedy-coloring upper bound and a
//!   greedy heuristic seed.
//! - [`degeneracy`]: the pivoted search driven by a degeneracy ordering.
//! - [`ostergard`]: ordered-vector branch and bound with coloring bounds.
//! - [`bitset`]: the pivoted search over fixed-width bitsets, bounded to
//!   [`bitset::MAX_VERTICES`] vertices.
//!
//! All tie-breaks (pivot choice, branch order, peeling order) resolve by
//! lowest vertex ID so runs are reproducible.

pub mod bitset;
pub mod bron_kerbosch;
pub mod degeneracy;
pub mod ostergard;
pub mod tomita;

use crate::graph::Graph;
use hashbrown::HashSet;
use std::fmt;

// ============================================================================
// Errors
// ============================================================================

/// Errors an exact engine can report before any search work begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The graph has more vertices than the bitset engine's fixed width.
    CapacityExceeded {
        /// Vertex count of the offending graph.
        vertices: usize,
        /// The engine's fixed capacity.
        limit: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::CapacityExceeded { vertices, limit } => write!(
                f,
                "graph has {vertices} vertices, exceeding the bitset capacity of {limit}"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

// ============================================================================
// Shared set helpers
// ============================================================================

/// Computes `set ∩ N(v)`, walking whichever side is smaller.
pub(crate) fn intersect_neighbors(set: &HashSet<usize>, v: usize, g: &Graph) -> HashSet<usize> {
    let nbrs = g.neighbors(v);
    if set.len() <= nbrs.len() {
        set.iter().copied().filter(|u| nbrs.contains(u)).collect()
    } else {
        nbrs.iter().copied().filter(|u| set.contains(u)).collect()
    }
}

/// Returns the set's members sorted ascending. Hash-set iteration order is
/// not stable, so every branch loop iterates one of these snapshots instead.
pub(crate) fn sorted_snapshot(set: &HashSet<usize>) -> Vec<usize> {
    let mut snapshot: Vec<usize> = set.iter().copied().collect();
    snapshot.sort_unstable();
    snapshot
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    /// Runs all five engines and asserts their results are valid cliques of
    /// identical size; returns that size.
    fn all_engines_agree(g: &Graph) -> usize {
        let results = [
            ("bron_kerbosch", bron_kerbosch::find_maximum_clique(g)),
            ("tomita", tomita::find_maximum_clique(g)),
            ("degeneracy", degeneracy::find_maximum_clique(g)),
            ("ostergard", ostergard::find_maximum_clique(g)),
            ("bitset", bitset::find_maximum_clique(g).unwrap()),
        ];
        let reference = results[0].1.len();
        for (name, clique) in &results {
            assert!(g.is_clique(clique), "{name} returned a non-clique");
            assert_eq!(clique.len(), reference, "{name} disagrees on clique size");
        }
        reference
    }

    /// Exhaustive subset enumeration; the reference oracle for small graphs.
    fn brute_force_max_clique(g: &Graph) -> usize {
        let n = g.num_vertices();
        assert!(n <= 20, "brute force is exponential");
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let size = mask.count_ones() as usize;
            if size <= best {
                continue;
            }
            let vertices: Vec<usize> = (0..n).filter(|&v| mask & (1 << v) != 0).collect();
            if g.is_clique(&vertices) {
                best = size;
            }
        }
        best
    }

    fn random_graph(n: usize, p: f64, rng: &mut XorShiftRng) -> Graph {
        let mut g = Graph::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.random_bool(p) {
                    g.add_edge(u, v).unwrap();
                }
            }
        }
        g
    }

    #[test]
    fn engines_match_brute_force_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0x5EED);
        for &p in &[0.2, 0.5, 0.8] {
            for _ in 0..8 {
                let g = random_graph(12, p, &mut rng);
                let expected = brute_force_max_clique(&g);
                assert_eq!(all_engines_agree(&g), expected, "p={p}");
            }
        }
    }

    #[test]
    fn engines_agree_on_larger_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0xFACE);
        for _ in 0..3 {
            let g = random_graph(60, 0.3, &mut rng);
            all_engines_agree(&g);
        }
    }

    #[test]
    fn empty_graph_yields_empty_clique_everywhere() {
        let g = Graph::new(0);
        assert!(bron_kerbosch::find_maximum_clique(&g).is_empty());
        assert!(tomita::find_maximum_clique(&g).is_empty());
        assert!(degeneracy::find_maximum_clique(&g).is_empty());
        assert!(ostergard::find_maximum_clique(&g).is_empty());
        assert!(bitset::find_maximum_clique(&g).unwrap().is_empty());
    }

    #[test]
    fn single_edge_with_isolated_vertex() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        let results = [
            bron_kerbosch::find_maximum_clique(&g),
            tomita::find_maximum_clique(&g),
            degeneracy::find_maximum_clique(&g),
            ostergard::find_maximum_clique(&g),
            bitset::find_maximum_clique(&g).unwrap(),
        ];
        for clique in &results {
            assert_eq!(clique.len(), 2);
            assert!(!clique.contains(&2), "isolated vertex in clique");
        }
    }

    #[test]
    fn complete_graphs_yield_full_vertex_set() {
        for n in [5, 10, 50] {
            let g = Graph::complete(n);
            assert_eq!(all_engines_agree(&g), n, "K_{n}");
        }
    }

    #[test]
    fn two_disjoint_triangles() {
        let mut g = Graph::new(6);
        for (u, v) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)] {
            g.add_edge(u, v).unwrap();
        }
        assert_eq!(all_engines_agree(&g), 3);
    }

    #[test]
    fn solve_error_formats_capacity() {
        let err = SolveError::CapacityExceeded {
            vertices: 2000,
            limit: 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("2000"));
        assert!(msg.contains("1024"));
    }
}
