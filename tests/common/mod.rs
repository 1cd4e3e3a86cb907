#![allow(dead_code)]

use rand::{rngs::StdRng, SeedableRng};
use spanning_paths::{
    graphs::{edge::EdgeTriple, graph_factory::EdgeList, Distance},
    utility::random_connected_edge_list,
    UndirectedGraph,
};

pub fn graph(number_of_vertices: u32, edges: &[(i64, i64, i64)]) -> UndirectedGraph {
    let edges: Vec<_> = edges.iter().copied().map(EdgeTriple::from).collect();
    UndirectedGraph::from_edges(number_of_vertices, &edges).unwrap()
}

/// The five vertex graph used in the scenario tests.
pub fn scenario_edges() -> Vec<(i64, i64, i64)> {
    vec![(1, 2, 2), (1, 3, 3), (2, 3, 1), (2, 4, 4), (3, 4, 5), (4, 5, 1)]
}

/// Random connected edge lists, reproducible from `seed`.
pub fn random_edge_lists(seed: u64, count: usize, max_vertices: u32) -> Vec<EdgeList> {
    use rand::Rng;

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let number_of_vertices = rng.gen_range(1..=max_vertices);
            let extra_edges = rng.gen_range(0..=2 * number_of_vertices);
            random_connected_edge_list(&mut rng, number_of_vertices, extra_edges, 20)
        })
        .collect()
}

/// Weight of a minimum spanning forest, computed with Kruskal's algorithm.
pub fn kruskal_weight(edge_list: &EdgeList) -> Distance {
    let mut parents: Vec<usize> = (0..=edge_list.number_of_vertices as usize).collect();

    fn find(parents: &mut [usize], vertex: usize) -> usize {
        let mut root = vertex;
        while parents[root] != root {
            root = parents[root];
        }
        let mut current = vertex;
        while parents[current] != root {
            let next = parents[current];
            parents[current] = root;
            current = next;
        }
        root
    }

    let mut edges = edge_list.edges.clone();
    edges.sort_by_key(|edge| edge.weight);

    let mut weight = 0;
    for edge in edges {
        let tail = find(&mut parents, edge.tail as usize);
        let head = find(&mut parents, edge.head as usize);
        if tail != head {
            parents[tail] = head;
            weight += edge.weight as Distance;
        }
    }
    weight
}

/// Shortest distances from `source` by repeated relaxation of every edge in
/// both directions. Unreachable vertices keep `Distance::MAX`.
pub fn bellman_ford(edge_list: &EdgeList, source: u32) -> Vec<Distance> {
    let mut distances = vec![Distance::MAX; edge_list.number_of_vertices as usize + 1];
    distances[source as usize] = 0;

    for _ in 0..edge_list.number_of_vertices {
        let mut changed = false;
        for edge in &edge_list.edges {
            for (tail, head) in [(edge.tail, edge.head), (edge.head, edge.tail)] {
                let distance_tail = distances[tail as usize];
                if distance_tail == Distance::MAX {
                    continue;
                }
                let alternative = distance_tail + edge.weight as Distance;
                if alternative < distances[head as usize] {
                    distances[head as usize] = alternative;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    distances
}
