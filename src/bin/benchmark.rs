use std::env;
use std::time::{Duration, Instant};

use label_path::graph::generators::generate_random;
use label_path::graph::{DirectedGraph, Graph};
use label_path::{BruteForce, Dijkstra, PathFinder};
use log::info;
use rand::prelude::*;

/// Command line settings: `benchmark [nodes] [edge_factor] [queries] [seed]`
#[derive(Debug, Clone)]
struct BenchConfig {
    nodes: usize,
    edge_factor: f64,
    queries: usize,
    seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            nodes: 100_000,
            edge_factor: 2.0,
            queries: 100,
            seed: 7,
        }
    }
}

impl BenchConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::parse(&args)
    }

    // Unparsable values fall back to defaults; the graph always has at least one node
    fn parse(args: &[String]) -> Self {
        let defaults = Self::default();
        let arg = |i: usize| args.get(i).map(String::as_str);

        Self {
            nodes: arg(0)
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.nodes)
                .max(1),
            edge_factor: arg(1).and_then(|s| s.parse().ok()).unwrap_or(defaults.edge_factor),
            queries: arg(2).and_then(|s| s.parse().ok()).unwrap_or(defaults.queries),
            seed: arg(3).and_then(|s| s.parse().ok()).unwrap_or(defaults.seed),
        }
    }
}

// Time a batch of sequential queries and count how many found a path
fn time_queries<A>(algorithm: &A, graph: &DirectedGraph<usize, u64>, queries: &[(usize, usize)]) -> (Duration, usize)
where
    A: PathFinder<usize, u64, DirectedGraph<usize, u64>>,
{
    let start = Instant::now();
    let mut found = 0;
    for (source, target) in queries {
        if let Ok(Some(_)) = algorithm.find(graph, source, target) {
            found += 1;
        }
    }
    (start.elapsed(), found)
}

fn main() {
    env_logger::init();

    let config = BenchConfig::from_args();
    info!("Benchmark configuration: {:?}", config);

    println!("=====================================================");
    println!("Benchmark: Dijkstra point-to-point queries");
    println!("Nodes: {}, edge factor: {}", config.nodes, config.edge_factor);
    println!("=====================================================");

    let graph = generate_random(config.nodes, config.edge_factor, 100, config.seed);
    println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let queries: Vec<(usize, usize)> = (0..config.queries)
        .map(|_| (rng.gen_range(0..config.nodes), rng.gen_range(0..config.nodes)))
        .collect();

    let dijkstra = Dijkstra::new();
    let (elapsed, found) = time_queries(&dijkstra, &graph, &queries);
    println!(
        "{:<12} | {:>6} queries | {:>6} found | {:>10.2} ms",
        <Dijkstra as PathFinder<usize, u64, DirectedGraph<usize, u64>>>::name(&dijkstra),
        queries.len(),
        found,
        elapsed.as_secs_f64() * 1000.0
    );

    let start = Instant::now();
    let batch = dijkstra.find_batch(&graph, &queries);
    let parallel = start.elapsed();
    let parallel_found = batch.iter().filter(|r| matches!(r, Ok(Some(_)))).count();
    println!(
        "{:<12} | {:>6} queries | {:>6} found | {:>10.2} ms",
        "Parallel",
        queries.len(),
        parallel_found,
        parallel.as_secs_f64() * 1000.0
    );

    // Cross-check against exhaustive search on a tiny graph
    let small = generate_random(8, 2.0, 10, config.seed);
    let brute = BruteForce::new();
    let mut mismatches = 0;
    for source in 0..8 {
        for target in 0..8 {
            let fast = dijkstra.find(&small, &source, &target).ok().flatten().map(|p| p.cost);
            let slow = brute.find(&small, &source, &target).ok().flatten().map(|p| p.cost);
            if fast != slow {
                mismatches += 1;
            }
        }
    }
    println!("Brute force cross-check on 8 nodes: {} mismatches", mismatches);
}
