use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;

use crate::graphs::{edge::EdgeTriple, graph_factory::EdgeList};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    let template = " {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}";
    if let Ok(style) = ProgressStyle::with_template(template) {
        bar.set_style(style);
    }
    bar
}

/// Random connected graph on `number_of_vertices` vertices: a random spanning
/// tree plus `extra_edges` edges between random endpoints. Weights are drawn
/// from `0..=max_weight`. Extra edges may be self-loops or repeat an existing
/// pair. `extra_edges` is clamped so that the total edge count fits a `u32`.
pub fn random_connected_edge_list<R: Rng + ?Sized>(
    rng: &mut R,
    number_of_vertices: u32,
    extra_edges: u32,
    max_weight: u32,
) -> EdgeList {
    let mut order: Vec<u32> = (1..=number_of_vertices).collect();
    order.shuffle(rng);

    let tree_edges = number_of_vertices.saturating_sub(1);
    let extra_edges = extra_edges.min(u32::MAX - tree_edges);
    let number_of_edges = tree_edges + extra_edges;

    let mut edges = Vec::with_capacity(number_of_edges as usize);
    for index in 1..order.len() {
        let tail = order[rng.gen_range(0..index)];
        let head = order[index];
        edges.push(random_edge(rng, tail, head, max_weight));
    }
    if number_of_vertices > 0 {
        for _ in 0..extra_edges {
            let tail = rng.gen_range(1..=number_of_vertices);
            let head = rng.gen_range(1..=number_of_vertices);
            edges.push(random_edge(rng, tail, head, max_weight));
        }
    }
    edges.shuffle(rng);

    EdgeList {
        number_of_vertices,
        number_of_edges,
        edges,
    }
}

fn random_edge<R: Rng + ?Sized>(rng: &mut R, tail: u32, head: u32, max_weight: u32) -> EdgeTriple {
    EdgeTriple {
        tail: tail as i64,
        head: head as i64,
        weight: rng.gen_range(0..=max_weight) as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{undirected_graph::UndirectedGraph, Graph};

    #[test]
    fn random_edge_list_is_a_valid_graph() {
        let mut rng = StdRng::seed_from_u64(7);
        let edge_list = random_connected_edge_list(&mut rng, 20, 15, 9);
        assert_eq!(edge_list.edges.len(), 19 + 15);

        let graph = UndirectedGraph::from_edge_list(&edge_list).unwrap();
        assert_eq!(graph.number_of_vertices(), 20);
        assert!(graph.vertices().all(|vertex| graph.degree(vertex) > 0));
    }

    #[test]
    fn empty_graph_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let edge_list = random_connected_edge_list(&mut rng, 0, 5, 9);
        assert!(edge_list.edges.is_empty());
    }
}
