//! This module is devoted to substructures of multigraphs.
//!
//! Algorithms implemented are:
//!
//! - for one multigraph: maximal clique, i.e largest complete submultigraph $\alpha K_{n}$.
//!   Exact search over all subsets (plain and with pruning) and a greedy approximation.
//!
//! - for two multigraphs: maximal common submultigraph.
//!   Exact search over pairs of subsets of same size and a greedy approximation driven by the approximate edit distance.
//!

/// maximal complete submultigraph
pub mod clique;

/// maximal common submultigraph of two multigraphs
pub mod common;
