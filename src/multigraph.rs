//! mini implementation of an undirected multigraph as a dense adjacency matrix.
//!
//! Entry (i,j) is the number of parallel edges between vertex i and vertex j.
//! The matrix is square and symmetric, the diagonal is conventionally 0.
//! Algorithms never modify a [Multigraph], they extract fresh induced submultigraphs.

use ndarray::{Array2, Axis};
use thiserror::Error;

/// maximum number of vertices for algorithms enumerating subsets as bitmasks in a u64
pub const MAX_BITMASK_VERTICES: usize = 63;

/// Describes why a matrix cannot be used as a multigraph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGraphError {
    #[error("row {row} has {len} entries, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
    #[error("matrix is not square, shape ({nb_rows}, {nb_cols})")]
    NotSquare { nb_rows: usize, nb_cols: usize },
    #[error("negative multiplicity {value} at ({row}, {col})")]
    Negative { row: usize, col: usize, value: i64 },
    #[error("multiplicity {value} at ({row}, {col}) too large")]
    Overflow { row: usize, col: usize, value: i64 },
    #[error("matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },
    #[error("{nb_vertices} vertices, at most {max} supported by this algorithm")]
    TooManyVertices { nb_vertices: usize, max: usize },
    #[error("vertex {vertex} out of range, graph has {nb_vertices} vertices")]
    VertexOutOfRange { vertex: usize, nb_vertices: usize },
}

/// An undirected multigraph without labels, given by its multiplicity matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multigraph {
    matrix: Array2<u32>,
}

impl Multigraph {
    /// checks the matrix is square and symmetric
    pub fn new(matrix: Array2<u32>) -> Result<Self, InvalidGraphError> {
        let (nb_rows, nb_cols) = matrix.dim();
        if nb_rows != nb_cols {
            return Err(InvalidGraphError::NotSquare { nb_rows, nb_cols });
        }
        for i in 0..nb_rows {
            for j in (i + 1)..nb_cols {
                if matrix[[i, j]] != matrix[[j, i]] {
                    return Err(InvalidGraphError::Asymmetric { row: i, col: j });
                }
            }
        }
        Ok(Multigraph { matrix })
    } // end of new

    /// builds from rows as read from a file. Rows must have the same length as the number of rows,
    /// entries must be non negative.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, InvalidGraphError> {
        let n = rows.len();
        let mut matrix = Array2::<u32>::zeros((n, n));
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(InvalidGraphError::Ragged { row: i, len: row.len(), expected: n });
            }
            for (j, &value) in row.iter().enumerate() {
                if value < 0 {
                    return Err(InvalidGraphError::Negative { row: i, col: j, value });
                }
                matrix[[i, j]] = u32::try_from(value)
                    .map_err(|_| InvalidGraphError::Overflow { row: i, col: j, value })?;
            }
        }
        Multigraph::new(matrix)
    } // end of from_rows

    /// the multigraph with no vertex
    pub fn empty() -> Self {
        Multigraph { matrix: Array2::<u32>::zeros((0, 0)) }
    }

    /// a multigraph with n vertices and no edge
    pub fn with_vertices(n: usize) -> Self {
        Multigraph { matrix: Array2::<u32>::zeros((n, n)) }
    }

    ///
    pub fn nb_vertices(&self) -> usize {
        self.matrix.nrows()
    }

    /// number of parallel edges between i and j
    pub fn multiplicity(&self, i: usize, j: usize) -> u32 {
        self.matrix[[i, j]]
    }

    /// multiplicity, or 0 if one of the vertices is outside the graph
    pub(crate) fn multiplicity_or_zero(&self, i: usize, j: usize) -> u32 {
        let n = self.nb_vertices();
        if i < n && j < n {
            self.matrix[[i, j]]
        } else {
            0
        }
    }

    /// get the adjacency matrix
    pub fn matrix(&self) -> &Array2<u32> {
        &self.matrix
    }

    /// adds `count` edges between i and j, keeping symmetry. Used by generators.
    pub(crate) fn add_edges(&mut self, i: usize, j: usize, count: u32) {
        self.matrix[[i, j]] += count;
        if i != j {
            self.matrix[[j, i]] += count;
        } else {
            // a self loop is seen from both ends
            self.matrix[[i, i]] += count;
        }
    }

    /// returns the submultigraph induced by selection, vertex k of the result is selection\[k\].
    /// Indexes must be distinct and in range.
    pub fn induced(&self, selection: &[usize]) -> Multigraph {
        let matrix = self.matrix.select(Axis(0), selection).select(Axis(1), selection);
        Multigraph { matrix }
    }

    /// induced submultigraph on selection with vertex `extra` appended as last vertex
    pub fn induced_with(&self, selection: &[usize], extra: usize) -> Multigraph {
        let mut vertices = Vec::<usize>::with_capacity(selection.len() + 1);
        vertices.extend_from_slice(selection);
        vertices.push(extra);
        self.induced(&vertices)
    }

    /// check vertex is a vertex of the graph
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), InvalidGraphError> {
        let nb_vertices = self.nb_vertices();
        if vertex >= nb_vertices {
            return Err(InvalidGraphError::VertexOutOfRange { vertex, nb_vertices });
        }
        Ok(())
    }

    /// check bitmask enumeration is possible on this graph
    pub(crate) fn check_bitmask_size(&self) -> Result<(), InvalidGraphError> {
        let nb_vertices = self.nb_vertices();
        if nb_vertices > MAX_BITMASK_VERTICES {
            return Err(InvalidGraphError::TooManyVertices { nb_vertices, max: MAX_BITMASK_VERTICES });
        }
        Ok(())
    }
} // end of impl Multigraph

impl Default for Multigraph {
    fn default() -> Self {
        Multigraph::empty()
    }
}

impl TryFrom<Array2<u32>> for Multigraph {
    type Error = InvalidGraphError;

    fn try_from(matrix: Array2<u32>) -> Result<Self, Self::Error> {
        Multigraph::new(matrix)
    }
}

//==========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::array;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn reject_malformed() {
        log_init_test();
        //
        let res = Multigraph::from_rows(vec![vec![0, 1], vec![1]]);
        assert_eq!(res, Err(InvalidGraphError::Ragged { row: 1, len: 1, expected: 2 }));
        let res = Multigraph::from_rows(vec![vec![0, -1], vec![-1, 0]]);
        assert!(matches!(res, Err(InvalidGraphError::Negative { row: 0, col: 1, value: -1 })));
        let res = Multigraph::from_rows(vec![vec![0, 2], vec![1, 0]]);
        assert_eq!(res, Err(InvalidGraphError::Asymmetric { row: 0, col: 1 }));
        let res = Multigraph::new(Array2::<u32>::zeros((2, 3)));
        assert_eq!(res, Err(InvalidGraphError::NotSquare { nb_rows: 2, nb_cols: 3 }));
    } // end of reject_malformed

    #[test]
    fn induced_submultigraph() {
        log_init_test();
        //
        let graph = Multigraph::new(array![[0, 1, 2, 3], [1, 0, 4, 5], [2, 4, 0, 6], [3, 5, 6, 0]]).unwrap();
        let sub = graph.induced(&[3, 1]);
        assert_eq!(sub.nb_vertices(), 2);
        assert_eq!(sub.matrix(), &array![[0, 5], [5, 0]]);
        let sub = graph.induced_with(&[0, 2], 3);
        assert_eq!(sub.matrix(), &array![[0, 2, 3], [2, 0, 6], [3, 6, 0]]);
        assert_eq!(graph.multiplicity_or_zero(1, 7), 0);
        // the parent is untouched
        assert_eq!(graph.multiplicity(2, 3), 6);
        assert_eq!(graph.induced(&[]).nb_vertices(), 0);
    } // end of induced_submultigraph

    #[test]
    fn add_edges_symmetric() {
        log_init_test();
        //
        let mut graph = Multigraph::with_vertices(3);
        graph.add_edges(0, 2, 2);
        graph.add_edges(1, 1, 1);
        assert_eq!(graph.multiplicity(2, 0), 2);
        assert_eq!(graph.multiplicity(1, 1), 2);
        assert!(Multigraph::new(graph.matrix().clone()).is_ok());
    }
} // end of mod tests
