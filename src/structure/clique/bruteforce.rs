//! exact maximal clique, enumerating every subset of at least 2 vertices.

use std::time::SystemTime;

use cpu_time::ProcessTime;

use super::complete::{describe, CliqueResult};
use crate::multigraph::Multigraph;
use crate::tools::enumerate::enumerate_selections;

/// Returns the maximal complete submultigraph and its vertices. Time complexity O(2^V * V^2).
/// Among cliques of same descriptor the first one in enumeration order is kept.
/// Graphs with less than 2 vertices or without edge give the degenerate result 0K0.
pub fn maximal_clique(graph: &Multigraph) -> CliqueResult {
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let mut best = CliqueResult::default();
    let selections = enumerate_selections(0, graph.nb_vertices(), 2);
    log::debug!("maximal_clique nb selections to examine : {}", selections.len());
    for selection in &selections {
        if let Some(candidate) = describe(graph, selection) {
            if best.update(candidate, selection) {
                log::trace!("maximal_clique new best {} : {:?}", candidate, selection);
            }
        }
    }
    //
    log::debug!(
        "maximal_clique got {}, sys time(ms) {:?} cpu time(ms) {:?}",
        best.clique,
        sys_start.elapsed().map(|t| t.as_millis()).unwrap_or(0),
        cpu_start.elapsed().as_millis()
    );
    best
} // end of maximal_clique

//=======================================================================================

// end of mod tests
