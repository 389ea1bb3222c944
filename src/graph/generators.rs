use crate::graph::DirectedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with `n` nodes labeled `0..n` and
/// roughly `edge_factor * n` edges with integer weights in `0..=max_weight`.
/// The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> DirectedGraph<usize, u64> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a width x height grid with 8-directional moves.
/// Cardinal moves cost 1.0 and diagonal moves 1.4; node `(x, y)` is labeled `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            graph.add_node(node);

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(node, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}
