//! random multigraph generation

use std::path::PathBuf;

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::matrix::write_multigraph;
use crate::multigraph::Multigraph;

/// Parameters of random generation
#[derive(Copy, Clone, Debug)]
pub struct GeneratorParams {
    /// number of vertices
    pub nb_vertices: usize,
    /// number of edges drawn
    pub nb_edges: usize,
    /// seed of the random generator, if None seeded from entropy
    pub seed: Option<u64>,
} // end of GeneratorParams

impl GeneratorParams {
    pub fn new(nb_vertices: usize, nb_edges: usize, seed: Option<u64>) -> Self {
        GeneratorParams { nb_vertices, nb_edges, seed }
    }
    ///
    pub fn get_nb_vertices(&self) -> usize {
        self.nb_vertices
    }
    ///
    pub fn get_nb_edges(&self) -> usize {
        self.nb_edges
    }
    ///
    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }
} // end of impl GeneratorParams

/// Draws nb_edges times two vertices a and b uniformly and adds an edge between them.
/// If a == b the diagonal entry is incremented twice, self loops are kept. O(V^2 + E)
pub fn generate_multigraph(params: &GeneratorParams) -> Multigraph {
    let nb_vertices = params.get_nb_vertices();
    let mut graph = Multigraph::with_vertices(nb_vertices);
    if nb_vertices == 0 {
        if params.get_nb_edges() > 0 {
            log::warn!("generate_multigraph : no vertex, {} edges ignored", params.get_nb_edges());
        }
        return graph;
    }
    let mut rng = match params.get_seed() {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    let vertex_distribution = Uniform::<usize>::new(0, nb_vertices);
    for _ in 0..params.get_nb_edges() {
        let a = vertex_distribution.sample(&mut rng);
        let b = vertex_distribution.sample(&mut rng);
        graph.add_edges(a, b, 1);
    }
    graph
} // end of generate_multigraph

/// generates count multigraphs and dumps them in files prefix0.txt, prefix1.txt ...
/// A given seed is incremented for each file. Returns the paths written.
pub fn generate_files(prefix: &str, count: usize, params: &GeneratorParams) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::<PathBuf>::with_capacity(count);
    for i in 0..count {
        let file_params = GeneratorParams { seed: params.get_seed().map(|s| s.wrapping_add(i as u64)), ..*params };
        let graph = generate_multigraph(&file_params);
        let path = PathBuf::from(format!("{}{}.txt", prefix, i));
        write_multigraph(&path, &graph)?;
        log::debug!("generate_files wrote {:?}", path);
        paths.push(path);
    }
    log::info!("generate_files wrote {} files with prefix {}", paths.len(), prefix);
    Ok(paths)
} // end of generate_files

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::io::matrix::read_multigraph;
    use crate::tools::size::size;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn generated_edge_count() {
        log_init_test();
        //
        let params = GeneratorParams::new(6, 20, Some(7));
        let graph = generate_multigraph(&params);
        assert_eq!(graph.nb_vertices(), 6);
        // symmetric by construction, each draw adds 2 to the sum of the matrix entries
        assert!(Multigraph::new(graph.matrix().clone()).is_ok());
        let total: u64 = graph.matrix().iter().map(|m| *m as u64).sum();
        assert_eq!(total, 2 * 20);
        // a self loop adds 2 to the diagonal and counts twice in size
        let s = size(&graph);
        assert_eq!(s.nb_vertices, 6);
        assert!(s.nb_edges >= 20);
        // reproducible
        assert_eq!(generate_multigraph(&params), graph);
    }

    #[test]
    fn generate_empty() {
        log_init_test();
        //
        let graph = generate_multigraph(&GeneratorParams::new(0, 5, None));
        assert_eq!(graph.nb_vertices(), 0);
    }

    #[test]
    fn generate_and_reload_files() {
        log_init_test();
        //
        let prefix = std::env::temp_dir().join("mgraphcmp_gen_");
        let prefix = prefix.to_string_lossy().to_string();
        let params = GeneratorParams::new(4, 6, Some(11));
        let paths = generate_files(&prefix, 2, &params).unwrap();
        assert_eq!(paths.len(), 2);
        for (i, path) in paths.iter().enumerate() {
            let graph = read_multigraph(path).unwrap();
            let expected = generate_multigraph(&GeneratorParams::new(4, 6, Some(11 + i as u64)));
            assert_eq!(graph, expected);
            let _ = std::fs::remove_file(path);
        }
    }
} // end of mod tests
