use ahash::{HashSet, HashSetExt};
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::{
    collections::search_tree::{serialize_sorted, Path, SearchTree},
    validate_source,
};
use crate::{
    error::Result,
    graphs::{Distance, Graph, VertexId},
    queue::IndexedMinHeap,
    utility::get_progressbar,
};

/// Shortest distances from `tree.source` to every vertex.
#[derive(Clone, Debug, Serialize)]
pub struct ShortestPathTree {
    pub tree: SearchTree,
    #[serde(serialize_with = "serialize_sorted")]
    pub unreachable: HashSet<VertexId>,
}

impl ShortestPathTree {
    pub fn distance(&self, target: VertexId) -> Option<Distance> {
        self.tree.distance(target)
    }

    pub fn path(&self, target: VertexId) -> Option<Path> {
        self.tree.path(target)
    }
}

/// Settles vertices in order of their distance from `source` until the heap
/// runs empty or `target` is settled. Edge weights are non-negative, so a
/// settled vertex never improves again.
fn dijkstra(graph: &dyn Graph, source: VertexId, target: Option<VertexId>) -> SearchTree {
    let number_of_vertices = graph.number_of_vertices();
    let mut tree = SearchTree::new(number_of_vertices, source);
    let mut settled = vec![false; number_of_vertices as usize + 1];
    let mut heap = IndexedMinHeap::with_capacity(number_of_vertices);

    heap.insert(source, &tree.distances);

    while let Some(tail) = heap.pop_min(&tree.distances) {
        settled[tail as usize] = true;
        if Some(tail) == target {
            break;
        }

        let distance_tail = tree.distances[tail as usize];

        for edge in graph.edges(tail) {
            let head = edge.head as usize;
            if settled[head] {
                continue;
            }
            let alternative_distance_head = distance_tail.saturating_add(edge.weight as Distance);
            if alternative_distance_head < tree.distances[head] {
                tree.distances[head] = alternative_distance_head;
                tree.predecessors[head] = tail;
                heap.insert_or_decrease(edge.head, &tree.distances);
            }
        }
    }

    tree
}

/// Single source shortest paths from `source` with Dijkstra's algorithm.
pub fn sssp_dijkstra(graph: &dyn Graph, source: VertexId) -> Result<ShortestPathTree> {
    validate_source(graph, source)?;

    let tree = dijkstra(graph, source, None);
    let mut unreachable = HashSet::new();
    unreachable.extend(tree.unreached());

    debug!(source, unreachable = unreachable.len(), "dijkstra finished");

    Ok(ShortestPathTree { tree, unreachable })
}

/// Shortest path between `source` and `target`, or `None` if `target` is not
/// reachable. Stops as soon as `target` is settled.
pub fn shortest_path(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Path>> {
    validate_source(graph, source)?;
    validate_source(graph, target)?;

    let tree = dijkstra(graph, source, Some(target));
    Ok(tree.path(target))
}

/// Runs one independent search per vertex in parallel. Every search owns its
/// heap and arrays, only the graph is shared. The result is ordered by source.
pub fn par_sssp_all_sources(graph: &dyn Graph) -> Vec<ShortestPathTree> {
    let number_of_vertices = graph.number_of_vertices();
    info!(number_of_vertices, "running dijkstra from every vertex");

    let progressbar = get_progressbar("all sources dijkstra", number_of_vertices as u64);
    (1..=number_of_vertices)
        .into_par_iter()
        .progress_with(progressbar)
        .map(|source| {
            let tree = dijkstra(graph, source, None);
            let mut unreachable = HashSet::new();
            unreachable.extend(tree.unreached());
            ShortestPathTree { tree, unreachable }
        })
        .collect()
}
