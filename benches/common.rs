#![allow(dead_code)]

use fastrand::Rng;
use reticula::{
    core::marker::{EdgeType, Simple},
    graph::GraphCore,
};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Random edges of a graph on `0..n` nodes, each pair connected with
/// probability `p`.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(node_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: node_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn reticula_random<Ty: EdgeType>(
    node_count: usize,
    density: f32,
    rng: &mut Rng,
) -> GraphCore<usize, Ty, Simple> {
    let mut graph = GraphCore::with_capacity(node_count);
    graph.add_nodes_from(0..node_count);

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_weighted_edges_from([(u, v, rng.f64())], "weight");
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    node_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::graphmap::GraphMap<usize, f64, Ty> {
    let mut graph = petgraph::graphmap::GraphMap::with_capacity(node_count, 0);

    for n in 0..node_count {
        graph.add_node(n);
    }

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(u, v, rng.f64());
    }

    graph
}
