//! an executable comparing multigraphs
//! example usage:
//! mgraphcmp generate "graph_" 3 8 20 --seed 17
//! mgraphcmp clique-exact graph_0.txt
//! mgraphcmp --time ged-exact graph_0.txt graph_1.txt
//! mgraphcmp mcs-approx-improved graph_0.txt graph_1.txt
//!
//! Files contain the number of vertices on first line, then the adjacency matrix.
//! Exact algorithms (clique-exact, clique-exact-optimized, ged-exact, mcs-exact) are exponential, use them on small graphs.

use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

use anyhow::anyhow;
use clap::{arg, Arg, ArgMatches, Command};
use cpu_time::ProcessTime;

use mgraphcmp::prelude::*;

// measures a closure, returns its result and elapsed system time
fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    let res = f();
    let sys_elapsed = sys_start.elapsed().unwrap_or_default();
    log::info!(
        "{} sys time(s) {:.2e} cpu time(s) {:.2e}",
        label,
        sys_elapsed.as_secs_f64(),
        cpu_start.elapsed().as_secs_f64()
    );
    (res, sys_elapsed)
}

fn parse_value<T: FromStr>(matches: &ArgMatches, name: &str) -> anyhow::Result<T> {
    match matches.value_of(name) {
        Some(str) => str.parse::<T>().map_err(|_| anyhow!("error parsing {} : {:?}", name, str)),
        None => Err(anyhow!("missing argument {}", name)),
    }
}

fn load(matches: &ArgMatches, name: &str) -> anyhow::Result<Multigraph> {
    let fname: String = parse_value(matches, name)?;
    read_multigraph(Path::new(&fname))
}

fn load_pair(matches: &ArgMatches) -> anyhow::Result<(Multigraph, Multigraph)> {
    Ok((load(matches, "file1")?, load(matches, "file2")?))
}

fn print_correspondence(graph1: &Multigraph, graph2: &Multigraph, correspondence: &Correspondence) {
    println!("Maximal common submultigraph: {} vertices", correspondence.len());
    println!("Selection from Graph 1: {:?}", correspondence.selection1);
    print!("{}", render_selection(graph1, &correspondence.selection1));
    println!();
    println!("Selection from Graph 2: {:?}", correspondence.selection2);
    print!("{}", render_selection(graph2, &correspondence.selection2));
    println!();
}

fn run_generate(matches: &ArgMatches) -> anyhow::Result<Duration> {
    let prefix: String = parse_value(matches, "prefix")?;
    let count: usize = parse_value(matches, "count")?;
    let nb_vertices: usize = parse_value(matches, "nb_vertices")?;
    let nb_edges: usize = parse_value(matches, "nb_edges")?;
    let seed = match matches.value_of("seed") {
        Some(_) => Some(parse_value::<u64>(matches, "seed")?),
        None => None,
    };
    if prefix.is_empty() || count == 0 || nb_vertices == 0 {
        return Err(anyhow!("prefix must not be empty, count and number of vertices must be positive"));
    }
    let params = GeneratorParams::new(nb_vertices, nb_edges, seed);
    let (res, elapsed) = timed("generate", || generate_files(&prefix, count, &params));
    for path in res? {
        println!("written {:?}", path);
    }
    Ok(elapsed)
} // end of run_generate

fn run_clique(matches: &ArgMatches, mode: CliqueMode) -> anyhow::Result<Duration> {
    let graph = load(matches, "file1")?;
    let (res, elapsed) = timed("maximal clique", || find_clique(&graph, mode));
    let res = res?;
    println!("Maximal clique: {}", res.clique);
    if !res.clique.is_degenerate() {
        print!("{}", render_selection(&graph, &res.selection));
    }
    Ok(elapsed)
}

fn run_distance(matches: &ArgMatches, mode: DistanceMode) -> anyhow::Result<Duration> {
    let (graph1, graph2) = load_pair(matches)?;
    let (distance, elapsed) = timed("graph edit distance", || edit_distance(&graph1, &graph2, mode));
    println!("Graph edit distance: {}", distance);
    Ok(elapsed)
}

fn run_common(matches: &ArgMatches, mode: CommonMode) -> anyhow::Result<Duration> {
    let (graph1, graph2) = load_pair(matches)?;
    let (res, elapsed) = timed("maximal common submultigraph", || find_common(&graph1, &graph2, mode));
    print_correspondence(&graph1, &graph2, &res?);
    Ok(elapsed)
}

fn run_size(matches: &ArgMatches) -> anyhow::Result<Duration> {
    let graph = load(matches, "file1")?;
    let (graph_size, elapsed) = timed("size", || size(&graph));
    println!("Size: {}", graph_size);
    Ok(elapsed)
}

fn one_file(name: &'static str, about: &'static str) -> Command<'static> {
    Command::new(name).about(about).arg_required_else_help(true).arg(arg!(<file1> "file of the multigraph"))
}

fn two_files(name: &'static str, about: &'static str) -> Command<'static> {
    Command::new(name)
        .about(about)
        .arg_required_else_help(true)
        .args(&[arg!(<file1> "file of first multigraph"), arg!(<file2> "file of second multigraph")])
}

pub fn main() {
    //
    mgraphcmp::init_logger();
    //
    let matches = Command::new("mgraphcmp")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("time")
            .short('t')
            .long("time")
            .global(true)
            .help("print time taken by the algorithm in milliseconds"))
        .subcommand(Command::new("generate")
            .about("generate random multigraphs in files prefix0.txt, prefix1.txt ...")
            .arg_required_else_help(true)
            .args(&[
                arg!(<prefix> "filename prefix"),
                arg!(<count> "number of graphs"),
                arg!(<nb_vertices> "number of vertices"),
                arg!(<nb_edges> "number of edges drawn"),
            ])
            .arg(Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .required(false)
                .help("seed of random generator")))
        .subcommand(one_file("size", "number of vertices and edges"))
        .subcommand(one_file("clique-exact", "maximal clique by bruteforce"))
        .subcommand(one_file("clique-exact-optimized", "maximal clique by optimized bruteforce"))
        .subcommand(one_file("clique-approx", "maximal clique, greedy approximation"))
        .subcommand(two_files("ged-exact", "exact graph edit distance"))
        .subcommand(two_files("ged-approx", "graph edit distance approximated by degree sequences"))
        .subcommand(two_files("mcs-exact", "exact maximal common submultigraph"))
        .subcommand(two_files("mcs-approx", "maximal common submultigraph, greedy approximation"))
        .subcommand(two_files("mcs-approx-improved", "greedy approximation restarted from every pair of vertices"))
    .get_matches();

    // decode args

    let mut print_time = matches.is_present("time");
    let res = match matches.subcommand() {
        Some((name, sub_m)) => {
            log::debug!("got subcommand {}", name);
            print_time = print_time || sub_m.is_present("time");
            match name {
                "generate" => run_generate(sub_m),
                "size" => run_size(sub_m),
                "clique-exact" => run_clique(sub_m, CliqueMode::Bruteforce),
                "clique-exact-optimized" => run_clique(sub_m, CliqueMode::BruteforceOptimized),
                "clique-approx" => run_clique(sub_m, CliqueMode::Approximate),
                "ged-exact" => run_distance(sub_m, DistanceMode::Exact),
                "ged-approx" => run_distance(sub_m, DistanceMode::Approximate),
                "mcs-exact" => run_common(sub_m, CommonMode::Exact),
                "mcs-approx" => run_common(sub_m, CommonMode::Approximate),
                "mcs-approx-improved" => run_common(sub_m, CommonMode::ApproximateImproved),
                _ => Err(anyhow!("unknown subcommand {}", name)),
            }
        }
        None => Err(anyhow!("expected a subcommand")),
    }; // end match subcommand

    match res {
        Ok(elapsed) => {
            if print_time {
                println!("Time taken: {}ms", elapsed.as_millis());
            }
        }
        Err(e) => {
            log::error!("error : {:?}", e);
            eprintln!("error : {:#}", e);
            std::process::exit(1);
        }
    }
} // end of main
