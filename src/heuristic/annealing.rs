//! Simulated annealing over clique moves.
//!
//! Starts from the greedy clique and walks the space of valid cliques with
//! three move kinds: remove a random member, add an extending vertex, or
//! swap one member for another. Larger cliques are always accepted, smaller
//! ones with probability `exp(-ΔE / T)` under a geometrically cooling
//! temperature, equal-sized ones with probability ½.

use crate::graph::Graph;
use crate::heuristic::greedy;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulated annealing parameters.
#[derive(Clone, Debug)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub initial_temp: f64,
    /// Geometric cooling factor applied once per iteration.
    pub cooling_rate: f64,
    /// Number of iterations.
    pub max_iterations: u64,
    /// Deterministic seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temp: 100.0,
            cooling_rate: 0.995,
            max_iterations: 100_000,
            seed: None,
        }
    }
}

/// Runs simulated annealing and returns the best clique seen.
pub fn find_clique(g: &Graph, cfg: &AnnealingConfig) -> Vec<usize> {
    let mut rng = match cfg.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut current = greedy::find_clique(g);
    let mut best = current.clone();
    let mut temperature = cfg.initial_temp;

    for _ in 0..cfg.max_iterations {
        let neighbor = propose_move(g, &current, &mut rng);

        // The moves preserve clique-ness by construction; the oracle check
        // stays as the acceptance gate regardless.
        if !g.is_clique(&neighbor) {
            continue;
        }

        let delta_e = current.len() as i64 - neighbor.len() as i64;
        let accept = if delta_e < 0 {
            true
        } else if delta_e > 0 && temperature > 0.0 {
            rng.random_bool((-delta_e as f64 / temperature).exp().min(1.0))
        } else {
            rng.random_bool(0.5)
        };

        if accept {
            current = neighbor;
            if current.len() > best.len() {
                best = current.clone();
            }
        }

        temperature *= cfg.cooling_rate;
    }

    best
}

/// Produces one candidate move from `current`.
fn propose_move(g: &Graph, current: &[usize], rng: &mut SmallRng) -> Vec<usize> {
    let mut neighbor = current.to_vec();
    match rng.random_range(0..3u8) {
        0 if !neighbor.is_empty() => {
            let idx = rng.random_range(0..neighbor.len());
            neighbor.remove(idx);
        }
        1 => {
            if let Some(v) = pick_extension(g, &neighbor, rng) {
                neighbor.push(v);
            }
        }
        2 if !neighbor.is_empty() => {
            let idx = rng.random_range(0..neighbor.len());
            neighbor.remove(idx);
            if let Some(v) = pick_extension(g, &neighbor, rng) {
                neighbor.push(v);
            }
        }
        _ => {}
    }
    neighbor
}

/// Picks a random vertex outside `clique` that is adjacent to all of it.
fn pick_extension(g: &Graph, clique: &[usize], rng: &mut SmallRng) -> Option<usize> {
    let candidates: Vec<usize> = (0..g.num_vertices())
        .filter(|v| !clique.contains(v) && clique.iter().all(|&u| g.has_edge(u, *v)))
        .collect();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}
