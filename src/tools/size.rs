//! size of a multigraph.
//!
//! A size is the 2-uple (|V|, |E|). The number of vertices takes the advantage in comparison,
//! the number of edges breaks ties.

use std::cmp::Ordering;
use std::fmt;

use crate::multigraph::Multigraph;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GraphSize {
    pub nb_vertices: usize,
    pub nb_edges: u64,
}

impl GraphSize {
    pub fn new(nb_vertices: usize, nb_edges: u64) -> Self {
        GraphSize { nb_vertices, nb_edges }
    }
    ///
    pub fn get_nb_vertices(&self) -> usize {
        self.nb_vertices
    }
    ///
    pub fn get_nb_edges(&self) -> u64 {
        self.nb_edges
    }
} // end of impl GraphSize

impl Ord for GraphSize {
    fn cmp(&self, other: &Self) -> Ordering {
        self.nb_vertices
            .cmp(&other.nb_vertices)
            .then(self.nb_edges.cmp(&other.nb_edges))
    }
}

impl PartialOrd for GraphSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GraphSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(|V| = {}, |E| = {})", self.nb_vertices, self.nb_edges)
    }
}

/// Sums the upper triangle, diagonal included once. O(V^2)
pub fn size(graph: &Multigraph) -> GraphSize {
    let n = graph.nb_vertices();
    let mut nb_edges: u64 = 0;
    for i in 0..n {
        for j in i..n {
            nb_edges += graph.multiplicity(i, j) as u64;
        }
    }
    GraphSize::new(n, nb_edges)
} // end of size

/// Greater means more vertices, or as many vertices and more edges.
pub fn compare_size(size1: &GraphSize, size2: &GraphSize) -> Ordering {
    size1.cmp(size2)
}

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::array;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn size_and_order() {
        log_init_test();
        //
        let graph = Multigraph::new(array![[0, 2, 1], [2, 0, 0], [1, 0, 0]]).unwrap();
        let s = size(&graph);
        assert_eq!(s, GraphSize::new(3, 3));
        assert_eq!(compare_size(&s, &s), Ordering::Equal);
        // vertices dominate edges
        assert_eq!(compare_size(&GraphSize::new(4, 0), &GraphSize::new(3, 100)), Ordering::Greater);
        assert_eq!(compare_size(&GraphSize::new(3, 2), &GraphSize::new(3, 5)), Ordering::Less);
        //
        assert_eq!(size(&Multigraph::empty()), GraphSize::new(0, 0));
    } // end of size_and_order

    #[test]
    fn order_is_lexicographic() {
        log_init_test();
        //
        let mut sizes = Vec::<GraphSize>::new();
        for v in 0..4 {
            for e in 0..4 {
                sizes.push(GraphSize::new(v, e));
            }
        }
        for a in &sizes {
            for b in &sizes {
                let expected = (a.nb_vertices, a.nb_edges).cmp(&(b.nb_vertices, b.nb_edges));
                assert_eq!(compare_size(a, b), expected);
                assert_eq!(compare_size(b, a), expected.reverse());
            }
        }
    }
} // end of mod tests
