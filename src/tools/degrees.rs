//! compute degrees of a multigraph from its adjacency matrix

use crate::multigraph::Multigraph;

/// a vertex and its degree (row sum of multiplicities)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Degree {
    pub vertex: usize,
    pub degree: u64,
}

impl Degree {
    fn new(vertex: usize, degree: u64) -> Self {
        Degree { vertex, degree }
    }
    /// get vertex
    pub fn get_vertex(&self) -> usize {
        self.vertex
    }
    /// get degree
    pub fn get_degree(&self) -> u64 {
        self.degree
    }
} // end of impl Degree

/// returns the degrees sorted in decreasing order. O(V^2)
/// The sort is stable, vertices of equal degree stay in index order.
pub fn degree_sequence(graph: &Multigraph) -> Vec<Degree> {
    let mut degrees: Vec<Degree> = graph
        .matrix()
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| Degree::new(i, row.iter().map(|m| *m as u64).sum()))
        .collect();
    degrees.sort_by(|a, b| b.degree.cmp(&a.degree));
    degrees
} // end of degree_sequence

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::array;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn sorted_and_stable() {
        log_init_test();
        //
        let graph = Multigraph::new(array![[0, 1, 0, 0], [1, 0, 3, 0], [0, 3, 0, 1], [0, 0, 1, 0]]).unwrap();
        let degrees = degree_sequence(&graph);
        let got: Vec<(usize, u64)> = degrees.iter().map(|d| (d.get_vertex(), d.get_degree())).collect();
        // 0 and 3 have same degree, 0 comes first
        assert_eq!(got, vec![(1, 4), (2, 4), (0, 1), (3, 1)]);
        assert!(degree_sequence(&Multigraph::empty()).is_empty());
    }
} // end of mod tests
