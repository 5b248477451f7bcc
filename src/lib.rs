//! lib target
//!
//! Exact and approximate algorithms to compare multigraphs given by their adjacency matrices:
//!  - size of a multigraph and its ordering, see [tools::size]
//!  - graph edit distance, see [distance]
//!  - maximal clique (complete submultigraph), see [structure::clique]
//!  - maximal common submultigraph of two multigraphs, see [structure::common]
//!
//! Exact solvers are exponential and only usable on small graphs, each has a polynomial approximation.

use env_logger::Builder;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref LOG: u64 = {
        let res = init_log();
        res
    };
}

// install a logger facility
fn init_log() -> u64 {
    Builder::from_default_env().init();
    log::info!("logger initialized from RUST_LOG");
    return 1;
}

/// initialize logger once, can be called many times.
pub fn init_logger() {
    lazy_static::initialize(&LOG);
}

pub mod multigraph;

pub mod tools;

pub mod distance;

pub mod structure;

pub mod io;

pub mod prelude;
