//! To ease access to most frequently items
//!

pub use crate::multigraph::{InvalidGraphError, Multigraph};

pub use crate::tools::degrees::{degree_sequence, Degree};
pub use crate::tools::size::{compare_size, size, GraphSize};

pub use crate::distance::{edit_distance, graph_edit_distance, graph_edit_distance_approx, DistanceMode};

pub use crate::structure::clique::{
    find_clique, maximal_clique, maximal_clique_approx, maximal_clique_optimized, CliqueMode, CliqueResult,
    CompleteMultigraph,
};
pub use crate::structure::common::{
    find_common, maximal_common_submultigraph, maximal_common_submultigraph_approx,
    maximal_common_submultigraph_approx_from, maximal_common_submultigraph_approx_improved, CommonMode,
    Correspondence,
};

pub use crate::io::generator::{generate_files, generate_multigraph, GeneratorParams};
pub use crate::io::matrix::{read_multigraph, write_multigraph};
pub use crate::io::render::render_selection;
