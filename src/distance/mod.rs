//! Graph edit distance between two multigraphs.
//!
//! - [ged::graph_edit_distance] is exact, exponential in the number of vertices.
//! - [gedapprox::graph_edit_distance_approx] compares sorted degree sequences, O(V^2).

pub mod ged;
pub mod gedapprox;

pub use ged::graph_edit_distance;
pub use gedapprox::graph_edit_distance_approx;

use crate::multigraph::Multigraph;

/// choice of edit distance algorithm
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DistanceMode {
    /// search over all vertex correspondences
    Exact,
    /// degree sequence comparison
    Approximate,
}

/// dispatch to the algorithm corresponding to mode
pub fn edit_distance(graph1: &Multigraph, graph2: &Multigraph, mode: DistanceMode) -> u64 {
    match mode {
        DistanceMode::Exact => graph_edit_distance(graph1, graph2),
        DistanceMode::Approximate => graph_edit_distance_approx(graph1, graph2),
    }
}
