//! Undirected graph representation shared by every clique solver.
//!
//! The graph keeps a dual representation:
//! - adjacency sets (`HashSet<usize>` per vertex) for O(degree) neighbor iteration,
//! - a dense symmetric bit matrix (`FixedBitSet` row per vertex) for O(1) edge tests.
//!
//! Both views are updated together by [`Graph::add_edge`] and always agree.

use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use std::fmt;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by `Graph` mutators when the caller violates the contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex ID outside `[0, n)` was passed to a mutator.
    VertexOutOfRange {
        /// The offending vertex ID.
        vertex: usize,
        /// The graph order `n`.
        order: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange { vertex, order } => {
                write!(f, "vertex {vertex} out of range for graph of order {order}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

// ============================================================================
// Graph
// ============================================================================

/// An undirected graph over dense vertex IDs `0..n`.
///
/// The vertex count is fixed at construction; edges may only be inserted
/// (during loading), after which every solver treats the graph as read-only.
/// Self-loops are silently ignored and re-inserting an edge never changes
/// the edge count.
#[derive(Clone, Debug)]
pub struct Graph {
    n: usize,
    m: usize,
    adj: Vec<HashSet<usize>>,
    matrix: Vec<FixedBitSet>,
}

impl Graph {
    /// Creates an edgeless graph with `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            m: 0,
            adj: vec![HashSet::new(); n],
            matrix: vec![FixedBitSet::with_capacity(n); n],
        }
    }

    /// Creates the complete graph `K_n`.
    pub fn complete(n: usize) -> Self {
        let mut g = Self::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                // Vertices are in range by construction.
                let _ = g.add_edge(u, v);
            }
        }
        g
    }

    /// Inserts the undirected edge `(u, v)`.
    ///
    /// Self-loops (`u == v`) are silently ignored. Inserting an edge that is
    /// already present leaves the edge count unchanged.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is outside
    /// `[0, n)`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        for vertex in [u, v] {
            if vertex >= self.n {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    order: self.n,
                });
            }
        }
        if u == v {
            return Ok(());
        }
        if !self.matrix[u].contains(v) {
            self.adj[u].insert(v);
            self.adj[v].insert(u);
            self.matrix[u].insert(v);
            self.matrix[v].insert(u);
            self.m += 1;
        }
        Ok(())
    }

    /// Returns whether the edge `(u, v)` exists, in O(1).
    ///
    /// Out-of-range IDs return `false` rather than panicking; this is the one
    /// uniform policy applied at every call site.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        if u >= self.n || v >= self.n {
            return false;
        }
        self.matrix[u].contains(v)
    }

    /// Returns the neighbor set of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range; passing an invalid ID here is a
    /// programming error, not a recoverable condition.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &HashSet<usize> {
        &self.adj[v]
    }

    /// Returns the neighbor bitset row of `v` from the dense matrix.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn neighbor_row(&self, v: usize) -> &FixedBitSet {
        &self.matrix[v]
    }

    /// Returns the degree of vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Returns the number of distinct undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.m
    }

    /// Returns the edge density `2m / (n(n-1))`, or `0` when `n <= 1`.
    pub fn density(&self) -> f64 {
        if self.n <= 1 {
            return 0.0;
        }
        (2.0 * self.m as f64) / (self.n as f64 * (self.n as f64 - 1.0))
    }

    /// Returns the vertices in degeneracy order: repeatedly remove the
    /// minimum-degree vertex, lowest ID first on ties.
    ///
    /// Uses an unoptimized linear scan per removal step, so the cost is
    /// O(V²); deterministic, which is what reproducible benchmarking needs.
    pub fn degeneracy_ordering(&self) -> Vec<usize> {
        self.peel().0
    }

    /// Returns the graph degeneracy: the maximum degree observed at removal
    /// time over the peeling sequence of [`Graph::degeneracy_ordering`].
    pub fn degeneracy(&self) -> usize {
        self.peel().1
    }

    /// Peels vertices by minimum degree, returning the removal order and the
    /// maximum removal-time degree.
    fn peel(&self) -> (Vec<usize>, usize) {
        let mut ordering = Vec::with_capacity(self.n);
        let mut degrees: Vec<usize> = (0..self.n).map(|v| self.adj[v].len()).collect();
        let mut removed = vec![false; self.n];
        let mut degeneracy = 0;

        for _ in 0..self.n {
            let mut min_vertex = usize::MAX;
            let mut min_degree = usize::MAX;
            for v in 0..self.n {
                if !removed[v] && degrees[v] < min_degree {
                    min_degree = degrees[v];
                    min_vertex = v;
                }
            }
            degeneracy = degeneracy.max(min_degree);
            ordering.push(min_vertex);
            removed[min_vertex] = true;
            for &u in &self.adj[min_vertex] {
                if !removed[u] {
                    degrees[u] -= 1;
                }
            }
        }

        (ordering, degeneracy)
    }

    /// Returns `true` iff the given vertices are pairwise adjacent.
    ///
    /// O(k²) pairwise `has_edge` checks. This is the single acceptance oracle
    /// for every solver's output: a solver returning a vertex set that fails
    /// this check has a bug, not a degraded result. Duplicate or out-of-range
    /// vertices fail the check.
    pub fn is_clique(&self, vertices: &[usize]) -> bool {
        for (i, &u) in vertices.iter().enumerate() {
            if u >= self.n {
                return false;
            }
            for &v in &vertices[i + 1..] {
                if !self.has_edge(u, v) {
                    return false;
                }
            }
        }
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
