//! describes a complete submultigraph

use std::cmp::Ordering;
use std::fmt;

use crate::multigraph::Multigraph;

/// Describes a complete multigraph alpha K_n.
/// n < 2 means no clique was found.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompleteMultigraph {
    /// minimal multiplicity between two vertices of the clique
    pub alpha: u32,
    /// number of vertices
    pub n: usize,
}

impl CompleteMultigraph {
    pub fn new(alpha: u32, n: usize) -> Self {
        CompleteMultigraph { alpha, n }
    }
    ///
    pub fn is_degenerate(&self) -> bool {
        self.n < 2
    }
} // end of impl CompleteMultigraph

/// a bigger clique wins, among cliques of same size the denser wins
impl Ord for CompleteMultigraph {
    fn cmp(&self, other: &Self) -> Ordering {
        self.n.cmp(&other.n).then(self.alpha.cmp(&other.alpha))
    }
}

impl PartialOrd for CompleteMultigraph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CompleteMultigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K{}", self.alpha, self.n)
    }
}

/// A clique and the vertices realizing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliqueResult {
    pub clique: CompleteMultigraph,
    /// vertices in increasing order for exact algorithms, in order of insertion for the greedy one
    pub selection: Vec<usize>,
}

impl CliqueResult {
    pub fn new(clique: CompleteMultigraph, selection: Vec<usize>) -> Self {
        CliqueResult { clique, selection }
    }
    ///
    pub fn get_clique(&self) -> &CompleteMultigraph {
        &self.clique
    }
    ///
    pub fn get_selection(&self) -> &[usize] {
        &self.selection
    }
    /// replaces self if candidate is strictly better, returns true if replaced
    pub(crate) fn update(&mut self, candidate: CompleteMultigraph, selection: &[usize]) -> bool {
        if candidate > self.clique {
            self.clique = candidate;
            self.selection.clear();
            self.selection.extend_from_slice(selection);
            return true;
        }
        false
    }
} // end of impl CliqueResult

/// true if every pair of distinct vertices of selection is joined by at least one edge.
/// Stops at first missing edge.
pub fn is_complete(graph: &Multigraph, selection: &[usize]) -> bool {
    for i in 0..selection.len() {
        for j in (i + 1)..selection.len() {
            if graph.multiplicity(selection[i], selection[j]) == 0 {
                return false;
            }
        }
    }
    true
}

/// minimal multiplicity among pairs of selection, 0 if selection has less than 2 vertices
pub fn min_multiplicity(graph: &Multigraph, selection: &[usize]) -> u32 {
    let mut alpha = u32::MAX;
    for i in 0..selection.len() {
        for j in (i + 1)..selection.len() {
            alpha = alpha.min(graph.multiplicity(selection[i], selection[j]));
        }
    }
    if selection.len() < 2 {
        0
    } else {
        alpha
    }
}

/// descriptor of selection if it is complete with at least 2 vertices
pub(crate) fn describe(graph: &Multigraph, selection: &[usize]) -> Option<CompleteMultigraph> {
    if selection.len() < 2 || !is_complete(graph, selection) {
        return None;
    }
    Some(CompleteMultigraph::new(min_multiplicity(graph, selection), selection.len()))
}

//=======================================================================================

// end of mod tests
