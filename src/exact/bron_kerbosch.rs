//! Plain Bron-Kerbosch maximum-clique search, no pivoting.
//!
//! The correctness baseline for the pivoted variants: every candidate in P
//! is branched on, giving the worst-case 3^(n/3) behavior. The only pruning
//! is the trivial `|R| + |P|` upper bound against the incumbent.

use crate::exact::{intersect_neighbors, sorted_snapshot};
use crate::graph::Graph;
use hashbrown::HashSet;

/// Finds a maximum clique by plain Bron-Kerbosch recursion over (R, P, X).
///
/// Returns the vertices of one maximum clique, sorted ascending.
pub fn find_maximum_clique(g: &Graph) -> Vec<usize> {
    let mut search = Search {
        g,
        best: Vec::new(),
    };
    let mut r = Vec::new();
    let mut p: HashSet<usize> = (0..g.num_vertices()).collect();
    let mut x = HashSet::new();
    search.expand(&mut r, &mut p, &mut x);
    search.best.sort_unstable();
    search.best
}

struct Search<'g> {
    g: &'g Graph,
    best: Vec<usize>,
}

impl Search<'_> {
    fn expand(&mut self, r: &mut Vec<usize>, p: &mut HashSet<usize>, x: &mut HashSet<usize>) {
        // Even taking all of P cannot beat the incumbent.
        if r.len() + p.len() <= self.best.len() {
            return;
        }

        // A maximal clique is emitted only when P and X are both empty;
        // P alone being empty means this clique was already reported from a
        // different branch ordering.
        if p.is_empty() && x.is_empty() {
            if r.len() > self.best.len() {
                self.best = r.clone();
            }
            return;
        }

        // Iterate a snapshot: P is mutated as siblings complete.
        for v in sorted_snapshot(p) {
            if r.len() + 1 + p.len() <= self.best.len() {
                break;
            }

            let mut child_p = intersect_neighbors(p, v, self.g);
            let mut child_x = intersect_neighbors(x, v, self.g);
            r.push(v);
            self.expand(r, &mut child_p, &mut child_x);
            r.pop();

            // v leaves candidate status for its siblings.
            p.remove(&v);
            x.insert(v);
        }
    }
}
