//! greedy approximation of the maximal common submultigraph.
//!
//! Two parallel selections are grown one pair of vertices at a time. At each step, every pair (i, j)
//! of vertices not yet selected in their respective graph is tried: i and j are appended to the selections
//! and the approximate edit distance between the two induced submultigraphs is computed.
//! The pair with smallest distance is committed if this distance does not exceed the current one
//! (an equal distance is accepted as the selections grow). Among pairs of equal distance the first one
//! in index order wins. One step is O(V1 V2 V^2), there are at most min(V1, V2) steps.

use indexmap::IndexSet;

use super::Correspondence;
use crate::distance::graph_edit_distance_approx;
use crate::multigraph::{InvalidGraphError, Multigraph};

/// result of a greedy run: the correspondence and the approximate distance between the matched submultigraphs.
#[derive(Clone, Debug, Default)]
struct GreedyMatch {
    correspondence: Correspondence,
    /// None if nothing was matched
    distance: Option<u64>,
}

// grows selections starting from seed pair if any.
fn greedy_match(graph1: &Multigraph, graph2: &Multigraph, seed: Option<(usize, usize)>) -> GreedyMatch {
    let nb_vertices1 = graph1.nb_vertices();
    let nb_vertices2 = graph2.nb_vertices();
    let max_steps = nb_vertices1.min(nb_vertices2);
    //
    let mut selected1 = IndexSet::<usize>::with_capacity(max_steps);
    let mut selected2 = IndexSet::<usize>::with_capacity(max_steps);
    let mut current_distance: Option<u64> = None;
    if let Some((start1, start2)) = seed {
        selected1.insert(start1);
        selected2.insert(start2);
        current_distance = Some(graph_edit_distance_approx(&graph1.induced(&[start1]), &graph2.induced(&[start2])));
    }
    //
    while selected1.len() < max_steps {
        let selection1: Vec<usize> = selected1.iter().copied().collect();
        let selection2: Vec<usize> = selected2.iter().copied().collect();
        let mut best_pair: Option<(usize, usize, u64)> = None;
        for i in 0..nb_vertices1 {
            if selected1.contains(&i) {
                continue;
            }
            let sub1 = graph1.induced_with(&selection1, i);
            for j in 0..nb_vertices2 {
                if selected2.contains(&j) {
                    continue;
                }
                let sub2 = graph2.induced_with(&selection2, j);
                let distance = graph_edit_distance_approx(&sub1, &sub2);
                let acceptable = current_distance.map_or(true, |current| distance <= current);
                if acceptable && best_pair.map_or(true, |(_, _, best)| distance < best) {
                    best_pair = Some((i, j, distance));
                }
            }
        }
        match best_pair {
            Some((i, j, distance)) => {
                log::trace!("greedy_match adding pair ({}, {}), distance {}", i, j, distance);
                selected1.insert(i);
                selected2.insert(j);
                current_distance = Some(distance);
            }
            None => {
                break;
            }
        }
    } // end while
    //
    let correspondence = Correspondence::new(selected1.into_iter().collect(), selected2.into_iter().collect());
    GreedyMatch { correspondence, distance: current_distance }
} // end of greedy_match

/// Greedy matching starting from empty selections. Roughly O(V^5).
pub fn maximal_common_submultigraph_approx(graph1: &Multigraph, graph2: &Multigraph) -> Correspondence {
    let res = greedy_match(graph1, graph2, None);
    log::debug!(
        "maximal_common_submultigraph_approx matched {} pairs, approximate distance {:?}",
        res.correspondence.len(),
        res.distance
    );
    res.correspondence
}

/// Greedy matching seeded with the pair (start1, start2).
pub fn maximal_common_submultigraph_approx_from(
    graph1: &Multigraph,
    graph2: &Multigraph,
    start1: usize,
    start2: usize,
) -> Result<Correspondence, InvalidGraphError> {
    graph1.check_vertex(start1)?;
    graph2.check_vertex(start2)?;
    Ok(greedy_match(graph1, graph2, Some((start1, start2))).correspondence)
}

/// Greedy matching restarted from every pair of starting vertices, V1 * V2 runs.
/// Keeps the largest correspondence, ties broken by smallest approximate distance then by first starting pair.
pub fn maximal_common_submultigraph_approx_improved(graph1: &Multigraph, graph2: &Multigraph) -> Correspondence {
    let mut best: Option<GreedyMatch> = None;
    for start1 in 0..graph1.nb_vertices() {
        for start2 in 0..graph2.nb_vertices() {
            let candidate = greedy_match(graph1, graph2, Some((start1, start2)));
            let better = match &best {
                None => true,
                Some(current) => {
                    let (len, current_len) = (candidate.correspondence.len(), current.correspondence.len());
                    len > current_len || (len == current_len && candidate.distance < current.distance)
                }
            };
            if better {
                log::trace!(
                    "improved search start ({}, {}) : {} pairs, distance {:?}",
                    start1,
                    start2,
                    candidate.correspondence.len(),
                    candidate.distance
                );
                best = Some(candidate);
            }
        }
    }
    let best = best.unwrap_or_default();
    log::debug!(
        "maximal_common_submultigraph_approx_improved matched {} pairs, approximate distance {:?}",
        best.correspondence.len(),
        best.distance
    );
    best.correspondence
} // end of maximal_common_submultigraph_approx_improved

//=======================================================================================

// end of mod tests
