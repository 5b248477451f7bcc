//! Maximal common submultigraph of two multigraphs.
//!
//! The result is a [Correspondence]: two selections of same length, vertex selection1\[k\] of the first graph
//! being matched to vertex selection2\[k\] of the second graph.
//!
//! - [maximal_common_submultigraph] : exact search over pairs of subsets of same size, isomorphism tested by
//!   exact edit distance, with a fallback on minimal degree sequences for partial matches.
//! - [maximal_common_submultigraph_approx] : greedy matching driven by the approximate edit distance.
//! - [maximal_common_submultigraph_approx_improved] : the greedy matching restarted from every pair of vertices.

pub mod exact;
pub mod greedy;

pub use exact::maximal_common_submultigraph;
pub use greedy::{
    maximal_common_submultigraph_approx, maximal_common_submultigraph_approx_from,
    maximal_common_submultigraph_approx_improved,
};

use crate::multigraph::{InvalidGraphError, Multigraph};

/// matching between vertices of two multigraphs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Correspondence {
    /// vertices of first graph
    pub selection1: Vec<usize>,
    /// vertices of second graph, same length as selection1
    pub selection2: Vec<usize>,
}

impl Correspondence {
    /// selections are built in parallel by the solvers, panics if lengths differ.
    pub(crate) fn new(selection1: Vec<usize>, selection2: Vec<usize>) -> Self {
        assert_eq!(selection1.len(), selection2.len());
        Correspondence { selection1, selection2 }
    }
    /// number of matched pairs
    pub fn len(&self) -> usize {
        self.selection1.len()
    }
    ///
    pub fn is_empty(&self) -> bool {
        self.selection1.is_empty()
    }
    /// matched pairs (vertex of graph1, vertex of graph2)
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.selection1.iter().copied().zip(self.selection2.iter().copied())
    }
} // end of impl Correspondence

/// choice of common submultigraph algorithm
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommonMode {
    Exact,
    Approximate,
    ApproximateImproved,
}

/// dispatch to the algorithm corresponding to mode.
/// Only the exact algorithm can fail, on graphs too large for bitmask enumeration.
pub fn find_common(graph1: &Multigraph, graph2: &Multigraph, mode: CommonMode) -> Result<Correspondence, InvalidGraphError> {
    match mode {
        CommonMode::Exact => maximal_common_submultigraph(graph1, graph2),
        CommonMode::Approximate => Ok(maximal_common_submultigraph_approx(graph1, graph2)),
        CommonMode::ApproximateImproved => Ok(maximal_common_submultigraph_approx_improved(graph1, graph2)),
    }
}

//=======================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::array;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn correspondence_pairs() {
        log_init_test();
        //
        let correspondence = Correspondence::new(vec![2, 0], vec![1, 3]);
        assert_eq!(correspondence.len(), 2);
        assert_eq!(correspondence.pairs().collect::<Vec<_>>(), vec![(2, 1), (0, 3)]);
        assert!(Correspondence::default().is_empty());
    }

    #[test]
    #[should_panic]
    fn correspondence_lengths_differ() {
        log_init_test();
        //
        let _ = Correspondence::new(vec![0, 1], vec![0]);
    }

    #[test]
    fn dispatch_modes() {
        log_init_test();
        //
        let graph = Multigraph::new(array![[0, 1, 1], [1, 0, 1], [1, 1, 0]]).unwrap();
        for mode in [CommonMode::Exact, CommonMode::Approximate, CommonMode::ApproximateImproved] {
            let res = find_common(&graph, &graph, mode).unwrap();
            assert_eq!(res.len(), 3);
        }
    }
} // end of mod tests
