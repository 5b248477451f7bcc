//! exact graph edit distance by exhaustive search of vertex correspondences

use crate::multigraph::Multigraph;
use crate::tools::enumerate::Permutations;

#[cfg_attr(doc, katexit::katexit)]
/// Exact graph edit distance. Time complexity $O(V^2 \cdot V!)$ with $V = \max(|V_1|, |V_2|)$.
///
/// graph1 is edited into graph2. With $n = \max(|V_1|, |V_2|)$, the smaller graph is padded with isolated vertices
/// and for each permutation $\sigma$ of $\lbrace 0..n-1 \rbrace$ applied to vertices of graph1 we compute
/// $$ c(\sigma) = \sum_{i < j} | m_1(\sigma(i), \sigma(j)) - m_2(i,j) | $$
/// The distance is $ ||V_1| - |V_2|| + \min_{\sigma} c(\sigma)$. It is 0 for two empty graphs.
pub fn graph_edit_distance(graph1: &Multigraph, graph2: &Multigraph) -> u64 {
    let nb_vertices1 = graph1.nb_vertices();
    let nb_vertices2 = graph2.nb_vertices();
    let max_nb_vertices = nb_vertices1.max(nb_vertices2);
    // cost of adding/removing vertices
    let vertex_cost = nb_vertices1.abs_diff(nb_vertices2) as u64;
    //
    let mut min_edge_cost = u64::MAX;
    let mut permutations = Permutations::new(max_nb_vertices);
    while let Some(perm) = permutations.next_permutation() {
        let mut edge_cost: u64 = 0;
        for i in 0..max_nb_vertices {
            for j in (i + 1)..max_nb_vertices {
                let m1 = graph1.multiplicity_or_zero(perm[i], perm[j]);
                let m2 = graph2.multiplicity_or_zero(i, j);
                edge_cost += m1.abs_diff(m2) as u64;
            }
            // no need to finish this permutation
            if edge_cost >= min_edge_cost {
                break;
            }
        }
        if edge_cost < min_edge_cost {
            min_edge_cost = edge_cost;
            if min_edge_cost == 0 {
                break;
            }
        }
    }
    // the loop runs at least once, even for empty graphs
    vertex_cost + min_edge_cost
} // end of graph_edit_distance

//=======================================================================================

// end of mod tests
