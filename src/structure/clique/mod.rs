//! Maximal clique of a multigraph.
//!
//! A complete multigraph $\alpha K_{n}$ has n vertices, every pair of vertices being joined by at least $\alpha$ edges,
//! $\alpha$ being the minimal multiplicity observed. Cliques are ranked by n then by $\alpha$, see [CompleteMultigraph].
//!
//! - [maximal_clique] : exact, enumerates all subsets of at least 2 vertices. $O(2^V V^2)$
//! - [maximal_clique_optimized] : exact, descending bitmask enumeration with pruning on current best size.
//! - [maximal_clique_approx] : greedy growth from each vertex. $O(V^3)$

/// complete multigraph descriptor and helpers
pub mod complete;
pub mod bruteforce;
pub mod optimized;
pub mod greedy;

pub use complete::{CliqueResult, CompleteMultigraph};
pub use bruteforce::maximal_clique;
pub use optimized::maximal_clique_optimized;
pub use greedy::maximal_clique_approx;

use crate::multigraph::{InvalidGraphError, Multigraph};

/// choice of clique algorithm
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CliqueMode {
    Bruteforce,
    BruteforceOptimized,
    Approximate,
}

/// dispatch to the algorithm corresponding to mode.
/// Only the optimized bruteforce can fail, on graphs too large for bitmask enumeration.
pub fn find_clique(graph: &Multigraph, mode: CliqueMode) -> Result<CliqueResult, InvalidGraphError> {
    match mode {
        CliqueMode::Bruteforce => Ok(maximal_clique(graph)),
        CliqueMode::BruteforceOptimized => maximal_clique_optimized(graph),
        CliqueMode::Approximate => Ok(maximal_clique_approx(graph)),
    }
}
