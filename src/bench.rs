//! Benchmark runner: times each solver on a loaded graph, validates its
//! output against the clique oracle, and collects comparable rows.
//!
//! A solver returning a non-clique is recorded as a failed entry (it marks a
//! solver bug), and a capacity error from the bitset engine fails only that
//! entry; the run continues with the remaining algorithms either way.

use crate::exact::{bitset, bron_kerbosch, degeneracy, ostergard, tomita, SolveError};
use crate::graph::Graph;
use crate::heuristic::annealing::{self, AnnealingConfig};
use crate::heuristic::greedy;
use crate::heuristic::local_search::{self, LocalSearchConfig};
use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

// ============================================================================
// Algorithm selection
// ============================================================================

/// Every solver the harness can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// Greedy construction (heuristic).
    Greedy,
    /// Randomized multi-restart local search (heuristic).
    LocalSearch,
    /// Simulated annealing (heuristic).
    Annealing,
    /// Plain Bron-Kerbosch (exact).
    BronKerbosch,
    /// Pivoted Bron-Kerbosch with coloring bound (exact).
    Tomita,
    /// Degeneracy-ordered pivoted search (exact).
    Degeneracy,
    /// Coloring-bound branch and bound (exact).
    Ostergard,
    /// Fixed-width bitset pivoted search (exact).
    Bitset,
}

impl AlgorithmKind {
    /// All algorithms in default benchmark order: heuristics first, then the
    /// exact engines from slowest baseline to fastest.
    pub const ALL: [AlgorithmKind; 8] = [
        AlgorithmKind::Greedy,
        AlgorithmKind::LocalSearch,
        AlgorithmKind::Annealing,
        AlgorithmKind::BronKerbosch,
        AlgorithmKind::Tomita,
        AlgorithmKind::Degeneracy,
        AlgorithmKind::Ostergard,
        AlgorithmKind::Bitset,
    ];

    /// The CSV/CLI name of this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Greedy => "greedy",
            AlgorithmKind::LocalSearch => "local-search",
            AlgorithmKind::Annealing => "annealing",
            AlgorithmKind::BronKerbosch => "bron-kerbosch",
            AlgorithmKind::Tomita => "tomita",
            AlgorithmKind::Degeneracy => "degeneracy",
            AlgorithmKind::Ostergard => "ostergard",
            AlgorithmKind::Bitset => "bitset",
        }
    }

    /// Parses a CLI name; the inverse of [`AlgorithmKind::name`].
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Whether this solver guarantees a true maximum clique.
    pub fn is_exact(self) -> bool {
        !matches!(
            self,
            AlgorithmKind::Greedy | AlgorithmKind::LocalSearch | AlgorithmKind::Annealing
        )
    }

    fn run(self, g: &Graph, seed: u64) -> Result<Vec<usize>, SolveError> {
        Ok(match self {
            AlgorithmKind::Greedy => greedy::find_clique(g),
            AlgorithmKind::LocalSearch => {
                let cfg = LocalSearchConfig {
                    seed: Some(seed),
                    ..LocalSearchConfig::default()
                };
                local_search::find_clique(g, &cfg)
            }
            AlgorithmKind::Annealing => {
                let cfg = AnnealingConfig {
                    seed: Some(seed),
                    ..AnnealingConfig::default()
                };
                annealing::find_clique(g, &cfg)
            }
            AlgorithmKind::BronKerbosch => bron_kerbosch::find_maximum_clique(g),
            AlgorithmKind::Tomita => tomita::find_maximum_clique(g),
            AlgorithmKind::Degeneracy => degeneracy::find_maximum_clique(g),
            AlgorithmKind::Ostergard => ostergard::find_maximum_clique(g),
            AlgorithmKind::Bitset => bitset::find_maximum_clique(g)?,
        })
    }
}

// ============================================================================
// Running and reporting
// ============================================================================

/// Why a benchmark entry failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// The solver returned a vertex set that failed the clique oracle; this
    /// marks a solver bug, not a degraded result.
    InvalidClique,
    /// The solver rejected the graph before any search work began.
    Solve(SolveError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidClique => write!(f, "solver returned a non-clique"),
            BenchError::Solve(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for BenchError {}

/// One timed, validated solver run.
#[derive(Clone, Debug)]
pub struct BenchResult {
    /// Which solver ran.
    pub algorithm: AlgorithmKind,
    /// Size of the returned clique (0 on error).
    pub clique_size: usize,
    /// The clique itself, sorted ascending (empty on error).
    pub clique: Vec<usize>,
    /// Wall-clock time of the solver call.
    pub elapsed: Duration,
    /// Whether the output passed the `is_clique` oracle.
    pub valid: bool,
    /// What went wrong, if the run failed.
    pub error: Option<BenchError>,
}

impl BenchResult {
    /// A run succeeded iff it produced a validated clique.
    pub fn succeeded(&self) -> bool {
        self.valid && self.error.is_none()
    }
}

/// Times one solver on `g` and validates its output.
pub fn run_one(g: &Graph, algorithm: AlgorithmKind, seed: u64) -> BenchResult {
    let start = Instant::now();
    match algorithm.run(g, seed) {
        Ok(mut clique) => {
            let elapsed = start.elapsed();
            clique.sort_unstable();
            let valid = g.is_clique(&clique);
            let error = if valid {
                None
            } else {
                Some(BenchError::InvalidClique)
            };
            BenchResult {
                algorithm,
                clique_size: clique.len(),
                clique,
                elapsed,
                valid,
                error,
            }
        }
        Err(e) => BenchResult {
            algorithm,
            clique_size: 0,
            clique: Vec::new(),
            elapsed: start.elapsed(),
            valid: false,
            error: Some(BenchError::Solve(e)),
        },
    }
}

/// Runs each requested algorithm in turn.
pub fn run_all(g: &Graph, algorithms: &[AlgorithmKind], seed: u64) -> Vec<BenchResult> {
    algorithms.iter().map(|&a| run_one(g, a, seed)).collect()
}

/// Writes the CSV header row. Call once per output file, then append one
/// [`write_csv_rows`] block per dataset.
///
/// # Errors
/// Propagates writer errors.
pub fn write_csv_header<W: Write>(mut w: W) -> io::Result<()> {
    writeln!(
        w,
        "dataset,vertices,edges,density,degeneracy,algorithm,clique_size,time_s,valid"
    )
}

/// Appends the results as CSV rows, one per algorithm, prefixed by the graph
/// statistics so rows from different datasets concatenate into one table
/// under a single [`write_csv_header`].
///
/// # Errors
/// Propagates writer errors.
pub fn write_csv_rows<W: Write>(
    mut w: W,
    dataset: &str,
    g: &Graph,
    degeneracy: usize,
    results: &[BenchResult],
) -> io::Result<()> {
    for r in results {
        writeln!(
            w,
            "{dataset},{},{},{:.6},{degeneracy},{},{},{:.6},{}",
            g.num_vertices(),
            g.num_edges(),
            g.density(),
            r.algorithm.name(),
            r.clique_size,
            r.elapsed.as_secs_f64(),
            r.valid,
        )?;
    }
    Ok(())
}

/// Writes a complete single-dataset CSV: the header plus one row block.
///
/// # Errors
/// Propagates writer errors.
pub fn write_csv<W: Write>(
    mut w: W,
    dataset: &str,
    g: &Graph,
    degeneracy: usize,
    results: &[BenchResult],
) -> io::Result<()> {
    write_csv_header(&mut w)?;
    write_csv_rows(w, dataset, g, degeneracy, results)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for a in AlgorithmKind::ALL {
            assert_eq!(AlgorithmKind::parse(a.name()), Some(a));
        }
        assert_eq!(AlgorithmKind::parse("nonsense"), None);
    }

    #[test]
    fn all_algorithms_validate_on_a_small_graph() {
        let mut g = Graph::new(7);
        for (u, v) in [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (0, 3), (1, 3)] {
            g.add_edge(u, v).unwrap();
        }
        let results = run_all(&g, &AlgorithmKind::ALL, 42);
        assert_eq!(results.len(), 8);
        for r in &results {
            assert!(r.succeeded(), "{} failed: {:?}", r.algorithm.name(), r.error);
            assert!(g.is_clique(&r.clique));
        }
        // Exact engines agree on {0, 1, 2, 3}.
        for r in results.iter().filter(|r| r.algorithm.is_exact()) {
            assert_eq!(r.clique_size, 4, "{}", r.algorithm.name());
        }
    }

    #[test]
    fn capacity_error_fails_the_entry_not_the_run() {
        let mut g = Graph::new(crate::exact::bitset::MAX_VERTICES + 1);
        g.add_edge(0, 1).unwrap();
        let results = run_all(&g, &[AlgorithmKind::Greedy, AlgorithmKind::Bitset], 1);
        assert!(results[0].succeeded());
        assert!(!results[1].succeeded());
        assert!(matches!(
            results[1].error,
            Some(BenchError::Solve(SolveError::CapacityExceeded { .. }))
        ));
    }

    #[test]
    fn bench_error_variants_format_distinctly() {
        assert_eq!(
            BenchError::InvalidClique.to_string(),
            "solver returned a non-clique"
        );
        let solve = BenchError::Solve(SolveError::CapacityExceeded {
            vertices: 2000,
            limit: 1024,
        });
        assert!(solve.to_string().contains("capacity"));
        assert_ne!(solve, BenchError::InvalidClique);
    }

    #[test]
    fn csv_output_has_header_and_one_row_per_result() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        let results = run_all(&g, &[AlgorithmKind::Greedy, AlgorithmKind::Tomita], 7);
        let mut out = Vec::new();
        write_csv(&mut out, "toy", &g, g.degeneracy(), &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("dataset,vertices"));
        assert!(lines[1].starts_with("toy,3,1,"));
        assert!(lines[1].contains(",greedy,"));
        assert!(lines[2].contains(",tomita,2,"));
    }

    #[test]
    fn csv_rows_from_two_datasets_share_one_header() {
        let mut first = Graph::new(3);
        first.add_edge(0, 1).unwrap();
        let second = Graph::complete(4);
        let algorithms = [AlgorithmKind::Greedy];

        let mut out = Vec::new();
        write_csv_header(&mut out).unwrap();
        for (name, g) in [("first", &first), ("second", &second)] {
            let results = run_all(g, &algorithms, 1);
            write_csv_rows(&mut out, name, g, g.degeneracy(), &results).unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("dataset,vertices"));
        assert!(lines[1].starts_with("first,3,1,"));
        assert!(lines[2].starts_with("second,4,6,"));
    }
}
