//! polynomial approximation of graph edit distance based on degree sequences.

use crate::multigraph::Multigraph;
use crate::tools::degrees::degree_sequence;

#[cfg_attr(doc, katexit::katexit)]
/// Approximate graph edit distance. O(V^2) for degree computation, O(V) for the comparison.
///
/// With $d_1, d_2$ the degree sequences sorted in decreasing order, the shorter one padded with zeros:
/// $$ ||V_1| - |V_2|| + \sum_{i} |d_1(i) - d_2(i)| $$
/// Vertex identity is discarded, only the degree multisets are compared, so two non isomorphic graphs
/// can be at distance 0. A graph is always at distance 0 from itself.
pub fn graph_edit_distance_approx(graph1: &Multigraph, graph2: &Multigraph) -> u64 {
    let degrees1 = degree_sequence(graph1);
    let degrees2 = degree_sequence(graph2);
    let max_nb_vertices = degrees1.len().max(degrees2.len());
    //
    let mut distance = degrees1.len().abs_diff(degrees2.len()) as u64;
    for i in 0..max_nb_vertices {
        let d1 = degrees1.get(i).map_or(0, |d| d.get_degree());
        let d2 = degrees2.get(i).map_or(0, |d| d.get_degree());
        distance += d1.abs_diff(d2);
    }
    distance
} // end of graph_edit_distance_approx

//=======================================================================================

// end of mod tests
