//! exact maximal clique by descending bitmask enumeration.
//!
//! Subsets are visited from mask 2^V - 1 down to 1. A mask is decoded only if its cardinality
//! is at least 2 and at least the size of the best clique found so far, and the completeness
//! check stops at the first missing edge.

use std::time::SystemTime;

use cpu_time::ProcessTime;

use super::complete::{is_complete, min_multiplicity, CliqueResult, CompleteMultigraph};
use crate::multigraph::{InvalidGraphError, Multigraph};
use crate::tools::enumerate::MaskSelections;

/// Same descriptor as [maximal_clique](super::maximal_clique), returned with the vertices realizing it.
/// Worst case O(2^V * V^2). Fails if the graph has more than
/// [MAX_BITMASK_VERTICES](crate::multigraph::MAX_BITMASK_VERTICES) vertices.
pub fn maximal_clique_optimized(graph: &Multigraph) -> Result<CliqueResult, InvalidGraphError> {
    graph.check_bitmask_size()?;
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let mut best = CliqueResult::default();
    let mut masks = MaskSelections::new(0, graph.nb_vertices());
    let mut nb_checked: u64 = 0;
    while let Some(mask) = masks.next_mask() {
        let nb_selected = mask.count_ones() as usize;
        if nb_selected < 2 || nb_selected < best.clique.n {
            continue;
        }
        let selection = masks.decode(mask);
        nb_checked += 1;
        if !is_complete(graph, selection) {
            continue;
        }
        let candidate = CompleteMultigraph::new(min_multiplicity(graph, selection), nb_selected);
        if best.update(candidate, selection) {
            log::trace!("maximal_clique_optimized new best {} : {:?}", candidate, selection);
        }
    }
    //
    log::debug!(
        "maximal_clique_optimized got {}, nb subsets checked : {}, sys time(ms) {:?} cpu time(ms) {:?}",
        best.clique,
        nb_checked,
        sys_start.elapsed().map(|t| t.as_millis()).unwrap_or(0),
        cpu_start.elapsed().as_millis()
    );
    Ok(best)
} // end of maximal_clique_optimized

//=======================================================================================

// end of mod tests
