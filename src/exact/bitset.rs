//! Bitset-accelerated pivoted search (BBMC-style).
//!
//! Logically identical to the pivoted engine in [`tomita`](crate::exact::tomita):
//! same pivot rule, same coloring bound, same greedy seed, and it must return
//! a clique of the same size on any graph it accepts. The difference is purely
//! representational: R, P, and X are fixed-width bit vectors and every
//! `P ∩ N(v)` / cardinality query is a word-wise AND plus popcount instead of
//! a hash-set walk, which is the dominant cost of the other engines at V²
//! scale. The width is fixed at [`MAX_VERTICES`]; larger graphs are rejected
//! up front with a capacity error rather than discovered mid-search.

use crate::exact::SolveError;
use crate::graph::Graph;
use fixedbitset::FixedBitSet;

/// Fixed width of the search bit vectors. Graphs with more vertices than
/// this are rejected before any search work begins.
pub const MAX_VERTICES: usize = 1024;

/// Finds a maximum clique using fixed-width bitset search.
///
/// Returns the vertices sorted ascending.
///
/// # Errors
/// Returns [`SolveError::CapacityExceeded`] if the graph has more than
/// [`MAX_VERTICES`] vertices.
pub fn find_maximum_clique(g: &Graph) -> Result<Vec<usize>, SolveError> {
    let n = g.num_vertices();
    if n > MAX_VERTICES {
        return Err(SolveError::CapacityExceeded {
            vertices: n,
            limit: MAX_VERTICES,
        });
    }

    // Neighbor rows are materialized once at full width; the search never
    // touches the Graph again.
    let mut neighbors = vec![FixedBitSet::with_capacity(MAX_VERTICES); n];
    for v in 0..n {
        for &u in g.neighbors(v) {
            neighbors[v].insert(u);
        }
    }

    let mut search = Search {
        neighbors,
        stack: Vec::with_capacity(n),
        best: crate::heuristic::greedy::find_clique(g),
    };

    let mut p = FixedBitSet::with_capacity(MAX_VERTICES);
    p.insert_range(..n);
    let x = FixedBitSet::with_capacity(MAX_VERTICES);
    search.expand(&p, &x);

    let mut best = search.best;
    best.sort_unstable();
    Ok(best)
}

struct Search {
    neighbors: Vec<FixedBitSet>,
    /// The current clique R, kept as a plain stack of vertex IDs.
    stack: Vec<usize>,
    best: Vec<usize>,
}

impl Search {
    fn expand(&mut self, p: &FixedBitSet, x: &FixedBitSet) {
        if self.stack.len() + p.count_ones(..) <= self.best.len() {
            return;
        }

        if p.is_clear() && x.is_clear() {
            if self.stack.len() > self.best.len() {
                self.best = self.stack.clone();
            }
            return;
        }

        if self.stack.len() + self.color_bound(p) <= self.best.len() {
            return;
        }

        let pivot = self.choose_pivot(p, x);
        let mut candidates = p.clone();
        candidates.difference_with(&self.neighbors[pivot]);

        let mut p = p.clone();
        let mut x = x.clone();
        // `ones()` yields ascending vertex IDs: the same deterministic branch
        // order as the hash-set engines.
        for v in candidates.ones().collect::<Vec<usize>>() {
            if self.stack.len() + 1 + p.count_ones(..) <= self.best.len() {
                break;
            }

            let mut child_p = p.clone();
            child_p.intersect_with(&self.neighbors[v]);
            let mut child_x = x.clone();
            child_x.intersect_with(&self.neighbors[v]);

            self.stack.push(v);
            self.expand(&child_p, &child_x);
            self.stack.pop();

            p.set(v, false);
            x.insert(v);
        }
    }

    /// Same pivot rule as the hash-set engine: maximize `|P ∩ N(u)|` over
    /// P ∪ X, lowest ID on ties, via word-wise intersection counts.
    fn choose_pivot(&self, p: &FixedBitSet, x: &FixedBitSet) -> usize {
        let mut best_vertex = usize::MAX;
        let mut best_count = 0usize;
        for v in p.ones().chain(x.ones()) {
            let count = p.intersection_count(&self.neighbors[v]);
            if best_vertex == usize::MAX
                || count > best_count
                || (count == best_count && v < best_vertex)
            {
                best_vertex = v;
                best_count = count;
            }
        }
        best_vertex
    }

    /// Greedy coloring over bitsets: each pass peels one independent set off
    /// the remaining candidates, so the pass count is the color count.
    fn color_bound(&self, p: &FixedBitSet) -> usize {
        let mut remaining = p.clone();
        let mut colors = 0;
        while !remaining.is_clear() {
            colors += 1;
            let mut available = remaining.clone();
            while let Some(v) = available.ones().next() {
                remaining.set(v, false);
                available.set(v, false);
                available.difference_with(&self.neighbors[v]);
            }
        }
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn matches_hash_set_pivoted_search_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0xB17);
        for _ in 0..10 {
            let mut g = Graph::new(16);
            for u in 0..16 {
                for v in (u + 1)..16 {
                    if rng.random_bool(0.5) {
                        g.add_edge(u, v).unwrap();
                    }
                }
            }
            let bitset = find_maximum_clique(&g).unwrap();
            let hashed = crate::exact::tomita::find_maximum_clique(&g);
            assert!(g.is_clique(&bitset));
            assert_eq!(bitset.len(), hashed.len());
        }
    }

    #[test]
    fn accepts_a_graph_exactly_at_capacity() {
        let mut g = Graph::new(MAX_VERTICES);
        for (u, v) in [(0, 1), (1, 2), (0, 2)] {
            g.add_edge(u, v).unwrap();
        }
        let clique = find_maximum_clique(&g).unwrap();
        assert_eq!(clique, vec![0, 1, 2]);
    }

    #[test]
    fn rejects_a_graph_one_past_capacity() {
        let mut g = Graph::new(MAX_VERTICES + 1);
        g.add_edge(0, 1).unwrap();
        let err = find_maximum_clique(&g).unwrap_err();
        assert_eq!(
            err,
            SolveError::CapacityExceeded {
                vertices: MAX_VERTICES + 1,
                limit: MAX_VERTICES,
            }
        );
    }

    #[test]
    fn complete_graph_at_moderate_size() {
        let g = Graph::complete(40);
        assert_eq!(find_maximum_clique(&g).unwrap().len(), 40);
    }

    #[test]
    fn empty_graph_yields_empty_clique() {
        let g = Graph::new(0);
        assert!(find_maximum_clique(&g).unwrap().is_empty());
    }
}
