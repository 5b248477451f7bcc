//! exact maximal common submultigraph
//!
//! For each size k from min(|V1|, |V2|) down to 1, every pair (S1, S2) of subsets of size k is examined.
//! If the induced submultigraphs are isomorphic (exact edit distance 0) the pair is ranked by the
//! [GraphSize] of the submultigraph. Otherwise the minimal degree sequence fallback is used:
//! with d1, d2 the sorted degree sequences of the two submultigraphs, the pair is ranked as
//! (k, sum of min(d1\[i\], d2\[i\])), and discarded if one of these minima is 0.
//! The search stops at the first size level that produced a match, as smaller subsets cannot rank higher.

use std::time::SystemTime;

use cpu_time::ProcessTime;

use super::Correspondence;
use crate::distance::graph_edit_distance;
use crate::multigraph::{InvalidGraphError, Multigraph};
use crate::tools::degrees::degree_sequence;
use crate::tools::enumerate::{decode_mask, SizedMasks};
use crate::tools::size::{size, GraphSize};

/// rank of a partial match by minimal degree sequence, None if some vertex would be unmatched.
fn minimal_degree_size(sub1: &Multigraph, sub2: &Multigraph) -> Option<GraphSize> {
    let degrees1 = degree_sequence(sub1);
    let degrees2 = degree_sequence(sub2);
    let mut nb_edges: u64 = 0;
    for (d1, d2) in degrees1.iter().zip(degrees2.iter()) {
        let common = d1.get_degree().min(d2.get_degree());
        if common == 0 {
            return None;
        }
        nb_edges += common;
    }
    Some(GraphSize::new(degrees1.len(), nb_edges))
} // end of minimal_degree_size

/// rank of the match between two induced submultigraphs of same size
fn match_size(sub1: &Multigraph, sub2: &Multigraph) -> Option<GraphSize> {
    if graph_edit_distance(sub1, sub2) == 0 {
        Some(size(sub1))
    } else {
        minimal_degree_size(sub1, sub2)
    }
}

/// Exact maximal common submultigraph. Exponential: O(2^V1 + 2^V2) subsets, pairs of subsets of same size,
/// exact edit distance on each pair. Only usable on small graphs.
/// Fails if a graph has more than [MAX_BITMASK_VERTICES](crate::multigraph::MAX_BITMASK_VERTICES) vertices.
/// If a graph is empty, the correspondence is empty.
pub fn maximal_common_submultigraph(graph1: &Multigraph, graph2: &Multigraph) -> Result<Correspondence, InvalidGraphError> {
    graph1.check_bitmask_size()?;
    graph2.check_bitmask_size()?;
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let nb_vertices1 = graph1.nb_vertices();
    let nb_vertices2 = graph2.nb_vertices();
    let min_nb_vertices = nb_vertices1.min(nb_vertices2);
    //
    let mut best_size = GraphSize::default();
    let mut best = Correspondence::default();
    let mut selection1 = Vec::<usize>::with_capacity(min_nb_vertices);
    let mut selection2 = Vec::<usize>::with_capacity(min_nb_vertices);
    //
    for k in (1..=min_nb_vertices).rev() {
        if best_size.nb_vertices > k {
            break;
        }
        log::debug!("maximal_common_submultigraph examining size {}", k);
        // submultigraphs of graph2 are reused for every subset of graph1
        let subs2: Vec<(u64, Multigraph)> = SizedMasks::new(nb_vertices2, k)
            .map(|mask| {
                decode_mask(mask, 0, &mut selection2);
                (mask, graph2.induced(&selection2))
            })
            .collect();
        for mask1 in SizedMasks::new(nb_vertices1, k) {
            decode_mask(mask1, 0, &mut selection1);
            let sub1 = graph1.induced(&selection1);
            for (mask2, sub2) in subs2.iter() {
                if let Some(candidate) = match_size(&sub1, sub2) {
                    if candidate > best_size {
                        decode_mask(*mask2, 0, &mut selection2);
                        log::trace!("new best {} : {:?} {:?}", candidate, selection1, selection2);
                        best_size = candidate;
                        best = Correspondence::new(selection1.clone(), selection2.clone());
                    }
                }
            }
        }
    } // end of loop on sizes
    //
    log::info!(
        "maximal_common_submultigraph got {} pairs, rank {}, sys time(s) {:.2e} cpu time(s) {:.2e}",
        best.len(),
        best_size,
        sys_start.elapsed().map(|t| t.as_secs_f64()).unwrap_or(0.),
        cpu_start.elapsed().as_secs_f64()
    );
    Ok(best)
} // end of maximal_common_submultigraph

//=======================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::array;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn identical_graphs() {
        log_init_test();
        //
        let graph = Multigraph::new(array![[0, 1, 0, 2], [1, 0, 3, 0], [0, 3, 0, 1], [2, 0, 1, 0]]).unwrap();
        assert_eq!(graph_edit_distance(&graph, &graph), 0);
        let res = maximal_common_submultigraph(&graph, &graph).unwrap();
        assert_eq!(res.selection1, vec![0, 1, 2, 3]);
        assert_eq!(res.selection2, vec![0, 1, 2, 3]);
    }

    #[test]
    fn isomorphic_subgraph_found() {
        log_init_test();
        // graph2 contains the 2K3 of graph1 on vertices {1,2,3}, and an isolated vertex 0
        let graph1 = Multigraph::new(array![[0, 2, 2], [2, 0, 2], [2, 2, 0]]).unwrap();
        let graph2 = Multigraph::new(array![[0, 0, 0, 0], [0, 0, 2, 2], [0, 2, 0, 2], [0, 2, 2, 0]]).unwrap();
        let res = maximal_common_submultigraph(&graph1, &graph2).unwrap();
        assert_eq!(res.len(), 3);
        assert_eq!(res.selection2, vec![1, 2, 3]);
        let sub1 = graph1.induced(&res.selection1);
        let sub2 = graph2.induced(&res.selection2);
        assert_eq!(graph_edit_distance(&sub1, &sub2), 0);
    }

    #[test]
    fn disjoint_structures() {
        log_init_test();
        //
        let graph1 = Multigraph::new(array![
            [0, 1, 0, 0, 1],
            [1, 0, 1, 0, 0],
            [0, 1, 0, 1, 0],
            [0, 0, 1, 0, 1],
            [1, 0, 0, 1, 0]
        ])
        .unwrap();
        let graph2 = Multigraph::new(array![[0, 5, 5], [5, 0, 5], [5, 5, 0]]).unwrap();
        assert!(graph_edit_distance(&graph1, &graph2) >= 2);
        let res = maximal_common_submultigraph(&graph1, &graph2).unwrap();
        assert_eq!(res.selection1.len(), res.selection2.len());
        assert!(res.len() <= 3);
    }

    #[test]
    fn minimal_degree_fallback() {
        log_init_test();
        // no common edge multiplicity, but every vertex has an edge on both sides
        let graph1 = Multigraph::new(array![[0, 1], [1, 0]]).unwrap();
        let graph2 = Multigraph::new(array![[0, 3], [3, 0]]).unwrap();
        let res = maximal_common_submultigraph(&graph1, &graph2).unwrap();
        assert_eq!(res.len(), 2);
        assert_eq!(minimal_degree_size(&graph1, &graph2), Some(GraphSize::new(2, 2)));
        // an isolated vertex disqualifies the pair
        let isolated = Multigraph::with_vertices(2);
        assert_eq!(minimal_degree_size(&graph1, &isolated), None);
    }

    #[test]
    fn empty_graph() {
        log_init_test();
        //
        let graph = Multigraph::new(array![[0, 1], [1, 0]]).unwrap();
        let res = maximal_common_submultigraph(&Multigraph::empty(), &graph).unwrap();
        assert!(res.is_empty());
        let res = maximal_common_submultigraph(&Multigraph::empty(), &Multigraph::empty()).unwrap();
        assert_eq!(res, Correspondence::default());
    }

    #[test]
    fn large_graph_small_pattern() {
        log_init_test();
        //
        // 40 vertices, 2^40 subsets: only subsets of the size of the smaller graph are enumerated
        let mut graph1 = Multigraph::with_vertices(40);
        graph1.add_edges(0, 1, 2);
        graph1.add_edges(1, 2, 2);
        graph1.add_edges(0, 2, 2);
        let graph2 = Multigraph::new(array![[0, 2, 2], [2, 0, 2], [2, 2, 0]]).unwrap();
        let res = maximal_common_submultigraph(&graph1, &graph2).unwrap();
        assert_eq!(res.selection1, vec![0, 1, 2]);
        assert_eq!(res.selection2, vec![0, 1, 2]);
    }
} // end of mod tests
