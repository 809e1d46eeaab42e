//! Pivoted Bron-Kerbosch search in the style of Tomita et al.
//!
//! This is the canonical pivoted engine: it carries every optimization that
//! accumulated across the iterations of this algorithm family, consolidated
//! into one place:
//! - pivot selection over P ∪ X maximizing `|P ∩ N(pivot)|`, so the branch
//!   loop shrinks to `P \ N(pivot)` without losing any maximal clique,
//! - a greedy-coloring upper bound on P, which dominates the plain
//!   `|R| + |P|` bound,
//! - an incumbent seeded with the greedy heuristic clique, so early branches
//!   prune against a realistic lower bound.
//!
//! The [`degeneracy`](crate::exact::degeneracy) driver reuses [`PivotSearch`]
//! for its inner recursion.

use crate::exact::{intersect_neighbors, sorted_snapshot};
use crate::graph::Graph;
use hashbrown::HashSet;

/// Finds a maximum clique with pivoted recursion, coloring bounds, and a
/// greedy seed. Returns the vertices sorted ascending.
pub fn find_maximum_clique(g: &Graph) -> Vec<usize> {
    let mut search = PivotSearch::new(g);
    search.seed_greedy();
    let mut r = Vec::new();
    let mut p: HashSet<usize> = (0..g.num_vertices()).collect();
    let mut x = HashSet::new();
    search.expand(&mut r, &mut p, &mut x);
    search.into_best()
}

/// The pivoted branch-and-bound state: one incumbent per invocation.
pub(crate) struct PivotSearch<'g> {
    g: &'g Graph,
    best: Vec<usize>,
}

impl<'g> PivotSearch<'g> {
    pub(crate) fn new(g: &'g Graph) -> Self {
        Self {
            g,
            best: Vec::new(),
        }
    }

    /// Seeds the incumbent with the greedy heuristic clique. Purely a lower
    /// bound for pruning; it never affects which maximum is found.
    pub(crate) fn seed_greedy(&mut self) {
        let seed = crate::heuristic::greedy::find_clique(self.g);
        debug_assert!(self.g.is_clique(&seed));
        self.best = seed;
    }

    pub(crate) fn best_len(&self) -> usize {
        self.best.len()
    }

    /// Consumes the search, returning the incumbent sorted ascending.
    pub(crate) fn into_best(mut self) -> Vec<usize> {
        self.best.sort_unstable();
        self.best
    }

    pub(crate) fn expand(
        &mut self,
        r: &mut Vec<usize>,
        p: &mut HashSet<usize>,
        x: &mut HashSet<usize>,
    ) {
        if r.len() + p.len() <= self.best.len() {
            return;
        }

        if p.is_empty() && x.is_empty() {
            if r.len() > self.best.len() {
                self.best = r.clone();
            }
            return;
        }

        // Chromatic bound: P cannot contribute more vertices than the number
        // of colors a greedy coloring of P needs.
        if r.len() + color_bound(p, self.g) <= self.best.len() {
            return;
        }

        let pivot = self.choose_pivot(p, x);

        // Branch only on P \ N(pivot): any skipped vertex is reachable
        // through the pivot's own branch.
        let mut candidates: Vec<usize> = {
            let pivot_nbrs = self.g.neighbors(pivot);
            p.iter().copied().filter(|u| !pivot_nbrs.contains(u)).collect()
        };
        candidates.sort_unstable();

        for v in candidates {
            if r.len() + 1 + p.len() <= self.best.len() {
                break;
            }

            let mut child_p = intersect_neighbors(p, v, self.g);
            let mut child_x = intersect_neighbors(x, v, self.g);
            r.push(v);
            self.expand(r, &mut child_p, &mut child_x);
            r.pop();

            p.remove(&v);
            x.insert(v);
        }
    }

    /// Picks the vertex in P ∪ X maximizing `|P ∩ N(u)|`, lowest ID on ties.
    fn choose_pivot(&self, p: &HashSet<usize>, x: &HashSet<usize>) -> usize {
        let mut best_vertex = usize::MAX;
        let mut best_count = 0usize;
        for &u in p.iter().chain(x.iter()) {
            let count = intersect_neighbors(p, u, self.g).len();
            if best_vertex == usize::MAX
                || count > best_count
                || (count == best_count && u < best_vertex)
            {
                best_vertex = u;
                best_count = count;
            }
        }
        best_vertex
    }
}

/// Greedy coloring of the candidate set: assigns each vertex the first color
/// class containing none of its neighbors. The class count upper-bounds the
/// clique size achievable within `p`.
pub(crate) fn color_bound(p: &HashSet<usize>, g: &Graph) -> usize {
    let mut classes: Vec<Vec<usize>> = Vec::new();
    for v in sorted_snapshot(p) {
        let slot = classes
            .iter_mut()
            .find(|class| class.iter().all(|&u| !g.has_edge(u, v)));
        match slot {
            Some(class) => class.push(v),
            None => classes.push(vec![v]),
        }
    }
    classes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn matches_plain_bron_kerbosch_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0x70A17A);
        for _ in 0..10 {
            let mut g = Graph::new(14);
            for u in 0..14 {
                for v in (u + 1)..14 {
                    if rng.random_bool(0.5) {
                        g.add_edge(u, v).unwrap();
                    }
                }
            }
            let pivoted = find_maximum_clique(&g);
            let plain = crate::exact::bron_kerbosch::find_maximum_clique(&g);
            assert!(g.is_clique(&pivoted));
            assert_eq!(pivoted.len(), plain.len());
        }
    }

    #[test]
    fn color_bound_is_tight_on_cliques_and_independent_sets() {
        let complete = Graph::complete(6);
        let all: HashSet<usize> = (0..6).collect();
        assert_eq!(color_bound(&all, &complete), 6);

        let edgeless = Graph::new(6);
        assert_eq!(color_bound(&all, &edgeless), 1);
    }

    #[test]
    fn seeded_incumbent_survives_when_greedy_is_optimal() {
        // Greedy already finds the maximum here; the search must still
        // return a full-size clique, not an empty improvement.
        let g = Graph::complete(5);
        assert_eq!(find_maximum_clique(&g), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn star_graph_has_clique_number_two() {
        let mut g = Graph::new(6);
        for v in 1..6 {
            g.add_edge(0, v).unwrap();
        }
        let clique = find_maximum_clique(&g);
        assert_eq!(clique.len(), 2);
        assert!(clique.contains(&0));
    }
}
