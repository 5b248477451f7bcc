//! Matrix primitives and combinatorial enumerators shared by all solvers.

/// size of a multigraph and its lexicographic ordering
pub mod size;

/// degree sequences
pub mod degrees;

/// subsets and permutations of vertices
pub mod enumerate;
