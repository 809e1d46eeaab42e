//! Coloring-bound branch and bound in the style of Östergård's cliquer.
//!
//! No P/X bookkeeping: the state is an ordered `current` clique and an
//! ordered `candidates` vector, popped from the high-degree end. The
//! incumbent is updated eagerly at every call entry rather than only at
//! leaves, and each branch re-validates its child candidates against the
//! whole of `current` instead of intersecting incrementally. That costs
//! O(k · |candidates|) per branch but keeps the bookkeeping trivially
//! correct.

use crate::graph::Graph;
use std::cmp::Reverse;

/// Finds a maximum clique by coloring-bound branch and bound over ordered
/// candidate vectors. Returns the vertices sorted ascending.
pub fn find_maximum_clique(g: &Graph) -> Vec<usize> {
    let mut candidates: Vec<usize> = (0..g.num_vertices()).collect();
    // Popped from the back, so sort ascending by degree: the highest-degree
    // vertex (lowest ID on ties) is branched on first.
    candidates.sort_unstable_by_key(|&v| (g.degree(v), Reverse(v)));

    let mut search = Search {
        g,
        best: Vec::new(),
    };
    search.branch(&mut Vec::new(), candidates);
    search.best.sort_unstable();
    search.best
}

struct Search<'g> {
    g: &'g Graph,
    best: Vec<usize>,
}

impl Search<'_> {
    fn branch(&mut self, current: &mut Vec<usize>, mut candidates: Vec<usize>) {
        // Eager incumbent update: improvement is recorded at every call, not
        // only when the candidate set has emptied.
        if current.len() > self.best.len() {
            self.best = current.clone();
        }

        if candidates.is_empty() {
            return;
        }

        if current.len() + self.color_bound(&candidates) <= self.best.len() {
            return;
        }

        while let Some(v) = candidates.pop() {
            if current.len() + candidates.len() + 1 <= self.best.len() {
                break;
            }

            // Full re-validation: a child candidate must be adjacent to v and
            // to every vertex already in the clique.
            let child: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&u| {
                    self.g.has_edge(v, u) && current.iter().all(|&w| self.g.has_edge(u, w))
                })
                .collect();

            current.push(v);
            self.branch(current, child);
            current.pop();
        }
    }

    /// Greedy sequential coloring of the candidate vector in its branch
    /// order; the color count bounds the clique size reachable from here.
    fn color_bound(&self, candidates: &[usize]) -> usize {
        let mut colors = vec![0usize; candidates.len()];
        let mut num_colors = 0;
        for i in 0..candidates.len() {
            let mut used = vec![false; num_colors + 1];
            for j in 0..i {
                if self.g.has_edge(candidates[i], candidates[j]) {
                    used[colors[j]] = true;
                }
            }
            let mut color = 0;
            while used[color] {
                color += 1;
            }
            colors[i] = color;
            num_colors = num_colors.max(color + 1);
        }
        num_colors
    }
}
