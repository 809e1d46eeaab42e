//! Randomized multi-restart local search.
//!
//! Each restart builds a clique greedily from a shuffled vertex order and
//! then improves it: extend directly while possible, otherwise drop a random
//! member and greedily refill. Restart 0 starts from the deterministic greedy
//! clique instead. Restarts are independent, so they run as parallel rayon
//! tasks with per-restart seeded RNGs; their results are collected back in
//! restart order and scanned sequentially, so a fixed seed determines not
//! just the returned size but the returned clique.

use crate::graph::Graph;
use crate::heuristic::greedy;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Randomized local-search parameters.
#[derive(Clone, Debug)]
pub struct LocalSearchConfig {
    /// Number of restarts, including the greedy-seeded one.
    pub restarts: usize,
    /// Improvement-iteration cap per restart.
    pub max_swaps: usize,
    /// Deterministic base seed; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            restarts: 10,
            max_swaps: 1000,
            seed: None,
        }
    }
}

/// Runs multi-restart local search and returns the largest clique found.
pub fn find_clique(g: &Graph, cfg: &LocalSearchConfig) -> Vec<usize> {
    let base_seed = cfg.seed.unwrap_or_else(rand::random);

    let mut rng = SmallRng::seed_from_u64(base_seed);
    let mut best = improve(g, greedy::find_clique(g), &mut rng, cfg.max_swaps);

    // Collect in restart order, then pick sequentially: the earliest restart
    // wins ties, so the returned clique does not depend on which rayon task
    // finishes first.
    let restarts: Vec<Vec<usize>> = (1..cfg.restarts)
        .into_par_iter()
        .map(|restart| {
            let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(restart as u64));
            let initial = random_initial_clique(g, &mut rng);
            improve(g, initial, &mut rng, cfg.max_swaps)
        })
        .collect();

    for candidate in restarts {
        if candidate.len() > best.len() {
            best = candidate;
        }
    }
    best
}

/// Greedy clique over a uniformly shuffled vertex order.
fn random_initial_clique(g: &Graph, rng: &mut SmallRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..g.num_vertices()).collect();
    order.shuffle(rng);

    let mut clique: Vec<usize> = Vec::new();
    for v in order {
        if clique.iter().all(|&u| g.has_edge(u, v)) {
            clique.push(v);
        }
    }
    clique
}

/// Local search: extend while possible, otherwise try a random drop-and-refill
/// swap, keeping the best clique seen.
fn improve(g: &Graph, mut current: Vec<usize>, rng: &mut SmallRng, max_swaps: usize) -> Vec<usize> {
    let n = g.num_vertices();
    let mut best = current.clone();
    let mut improved = true;
    let mut iterations = 0;

    while improved && iterations < max_swaps {
        improved = false;
        iterations += 1;

        // Direct extension first; lowest extending vertex keeps this
        // deterministic given the same current clique.
        let extension = (0..n)
            .find(|v| !current.contains(v) && current.iter().all(|&u| g.has_edge(u, *v)));
        if let Some(v) = extension {
            current.push(v);
            improved = true;
            if current.len() > best.len() {
                best = current.clone();
            }
            continue;
        }

        if current.is_empty() {
            continue;
        }

        // Swap: drop a random member, then greedily add everything still
        // compatible. Accepted only on strict improvement.
        let removed = current.remove(rng.random_range(0..current.len()));
        let mut rebuilt = current.clone();
        for v in 0..n {
            if v == removed || rebuilt.contains(&v) {
                continue;
            }
            if rebuilt.iter().all(|&u| g.has_edge(u, v)) {
                rebuilt.push(v);
            }
        }

        if rebuilt.len() > current.len() + 1 {
            current = rebuilt;
            improved = true;
            if current.len() > best.len() {
                best = current.clone();
            }
        } else {
            // Revert the drop.
            current.push(removed);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> LocalSearchConfig {
        LocalSearchConfig {
            restarts: 4,
            max_swaps: 200,
            seed: Some(seed),
        }
    }

    #[test]
    fn output_is_always_a_valid_clique() {
        let mut g = Graph::new(12);
        for u in 0..12 {
            for v in (u + 1)..12 {
                if (u * v) % 4 != 1 {
                    g.add_edge(u, v).unwrap();
                }
            }
        }
        let clique = find_clique(&g, &seeded(3));
        assert!(g.is_clique(&clique));
    }

    #[test]
    fn never_worse_than_greedy() {
        let mut g = Graph::new(9);
        for (u, v) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (6, 7)] {
            g.add_edge(u, v).unwrap();
        }
        let clique = find_clique(&g, &seeded(5));
        assert!(clique.len() >= greedy::find_clique(&g).len());
    }

    #[test]
    fn finds_the_planted_clique_in_a_sparse_graph() {
        // K4 on 0..4 plus a chain; local search reliably recovers the K4.
        let mut g = Graph::new(10);
        for u in 0..4 {
            for v in (u + 1)..4 {
                g.add_edge(u, v).unwrap();
            }
        }
        for v in 4..10 {
            g.add_edge(v - 1, v).unwrap();
        }
        assert_eq!(find_clique(&g, &seeded(9)).len(), 4);
    }

    #[test]
    fn empty_graph_yields_empty_clique() {
        assert!(find_clique(&Graph::new(0), &seeded(1)).is_empty());
    }

    #[test]
    fn same_seed_returns_the_same_clique() {
        // Two disjoint maximum triangles: distinct restarts can land on
        // either one, so vertex identity (not just size) must be stable.
        let mut g = Graph::new(8);
        for (u, v) in [(0, 1), (1, 2), (0, 2), (4, 5), (5, 6), (4, 6), (3, 7)] {
            g.add_edge(u, v).unwrap();
        }
        let cfg = LocalSearchConfig {
            restarts: 8,
            max_swaps: 100,
            seed: Some(21),
        };
        let first = find_clique(&g, &cfg);
        for _ in 0..5 {
            assert_eq!(find_clique(&g, &cfg), first);
        }
    }
}
