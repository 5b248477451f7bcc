//! greedy approximation of the maximal clique

use super::complete::{describe, CliqueResult};
use crate::multigraph::Multigraph;

/// grows a clique from vertex: scans other vertices in index order and adds any vertex
/// joined to all vertices already in the clique. O(V^2)
pub fn grow_clique_from(graph: &Multigraph, vertex: usize) -> Vec<usize> {
    let n = graph.nb_vertices();
    let mut clique = Vec::<usize>::with_capacity(n);
    clique.push(vertex);
    for i in 0..n {
        if i == vertex {
            continue;
        }
        if clique.iter().all(|&v| graph.multiplicity(i, v) > 0) {
            clique.push(i);
        }
    }
    clique
} // end of grow_clique_from

/// Best greedy clique over all starting vertices, compared as [CompleteMultigraph](super::CompleteMultigraph). O(V^3)
/// Not guaranteed to be maximal. A single vertex is not reported as a clique,
/// so graphs without edges give the degenerate result 0K0.
pub fn maximal_clique_approx(graph: &Multigraph) -> CliqueResult {
    let mut best = CliqueResult::default();
    for vertex in 0..graph.nb_vertices() {
        let clique = grow_clique_from(graph, vertex);
        if let Some(candidate) = describe(graph, &clique) {
            if best.update(candidate, &clique) {
                log::trace!("maximal_clique_approx start {} new best {}", vertex, candidate);
            }
        }
    }
    log::debug!("maximal_clique_approx got {} : {:?}", best.clique, best.selection);
    best
} // end of maximal_clique_approx

//=======================================================================================

#[cfg(test)]
mod tests {

    use super::super::bruteforce::maximal_clique;
    use super::super::complete::{is_complete, min_multiplicity, CompleteMultigraph};
    use super::*;
    use crate::io::generator::{generate_multigraph, GeneratorParams};
    use ndarray::array;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn greedy_2k3() {
        log_init_test();
        //
        let graph = Multigraph::new(array![[0, 2, 2], [2, 0, 2], [2, 2, 0]]).unwrap();
        let res = maximal_clique_approx(&graph);
        assert_eq!(res.clique, CompleteMultigraph::new(2, 3));
        //
        assert!(maximal_clique_approx(&Multigraph::empty()).clique.is_degenerate());
        assert!(maximal_clique_approx(&Multigraph::with_vertices(3)).clique.is_degenerate());
    }

    #[test]
    fn greedy_growth_in_index_order() {
        log_init_test();
        // from 0, vertex 1 is taken first and blocks the triangle {0,2,3}
        let graph = Multigraph::new(array![[0, 1, 1, 1], [1, 0, 0, 0], [1, 0, 0, 1], [1, 0, 1, 0]]).unwrap();
        assert_eq!(grow_clique_from(&graph, 0), vec![0, 1]);
        assert_eq!(grow_clique_from(&graph, 2), vec![2, 0, 3]);
        // best over all starts finds the triangle
        let res = maximal_clique_approx(&graph);
        assert_eq!(res.clique, CompleteMultigraph::new(1, 3));
    }

    #[test]
    fn greedy_is_valid_and_bounded() {
        log_init_test();
        //
        for seed in 100..130u64 {
            let nb_vertices = 3 + (seed % 6) as usize;
            let graph = generate_multigraph(&GeneratorParams::new(nb_vertices, 4 * nb_vertices, Some(seed)));
            let approx = maximal_clique_approx(&graph);
            let exact = maximal_clique(&graph);
            assert!(approx.clique <= exact.clique);
            if !approx.clique.is_degenerate() {
                assert!(is_complete(&graph, &approx.selection));
                assert_eq!(min_multiplicity(&graph, &approx.selection), approx.clique.alpha);
            }
        }
    }
} // end of mod tests
