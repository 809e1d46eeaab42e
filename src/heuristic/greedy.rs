//! Greedy clique construction.
//!
//! Walks the vertices in descending-degree order (lowest ID on ties) and
//! keeps every vertex adjacent to the whole clique built so far. O(V² + E),
//! always maximal, rarely maximum.

use crate::graph::Graph;
use std::cmp::Reverse;

/// Greedily constructs a maximal clique. Deterministic for a given graph.
pub fn find_clique(g: &Graph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..g.num_vertices()).collect();
    order.sort_unstable_by_key(|&v| (Reverse(g.degree(v)), v));

    let mut clique: Vec<usize> = Vec::new();
    for v in order {
        if clique.iter().all(|&u| g.has_edge(u, v)) {
            clique.push(v);
        }
    }
    clique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_always_a_clique() {
        let mut g = Graph::new(6);
        for (u, v) in [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5)] {
            g.add_edge(u, v).unwrap();
        }
        let clique = find_clique(&g);
        assert!(g.is_clique(&clique));
        assert!(!clique.is_empty());
    }

    #[test]
    fn complete_graph_yields_every_vertex() {
        let g = Graph::complete(8);
        assert_eq!(find_clique(&g).len(), 8);
    }

    #[test]
    fn empty_graph_yields_empty_clique() {
        assert!(find_clique(&Graph::new(0)).is_empty());
    }

    #[test]
    fn greedy_clique_is_maximal() {
        let mut g = Graph::new(5);
        for (u, v) in [(0, 1), (0, 2), (1, 2), (3, 4)] {
            g.add_edge(u, v).unwrap();
        }
        let clique = find_clique(&g);
        // No vertex outside the clique extends it.
        for v in 0..5 {
            if !clique.contains(&v) {
                assert!(!clique.iter().all(|&u| g.has_edge(u, v)));
            }
        }
    }
}
