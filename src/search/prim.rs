use ahash::{HashSet, HashSetExt};
use serde::Serialize;
use tracing::debug;

use super::{
    collections::search_tree::{serialize_sorted, SearchTree},
    validate_source,
};
use crate::{
    error::Result,
    graphs::{edge::WeightedEdge, Distance, Graph, VertexId, Weight},
    queue::IndexedMinHeap,
};

/// Spanning tree of the component containing `tree.source`.
///
/// `tree.predecessors[v]` is the tree neighbor through which `v` joined and
/// `tree.distances[v]` the weight of that edge (0 for the source).
#[derive(Clone, Debug, Serialize)]
pub struct MinimumSpanningTree {
    pub tree: SearchTree,
    pub total_weight: Distance,
    #[serde(serialize_with = "serialize_sorted")]
    pub unreached: HashSet<VertexId>,
}

impl MinimumSpanningTree {
    /// The tree edges `parent -- v` ordered by `v`.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.tree.reached().filter_map(|vertex| {
            let parent = self.tree.predecessor(vertex)?;
            Some(WeightedEdge::new(
                parent,
                vertex,
                self.tree.distances[vertex as usize] as Weight,
            ))
        })
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges().count()
    }

    pub fn is_spanning(&self) -> bool {
        self.unreached.is_empty()
    }
}

/// Grows a minimum spanning tree from `source` with Prim's algorithm.
///
/// Vertices outside the component of `source` stay unreached; they are listed
/// in `unreached` and do not contribute to `total_weight`.
pub fn mst_prim(graph: &dyn Graph, source: VertexId) -> Result<MinimumSpanningTree> {
    validate_source(graph, source)?;

    let number_of_vertices = graph.number_of_vertices();
    let mut tree = SearchTree::new(number_of_vertices, source);
    let mut in_tree = vec![false; number_of_vertices as usize + 1];
    let mut heap = IndexedMinHeap::with_capacity(number_of_vertices);

    heap.insert(source, &tree.distances);

    while let Some(tail) = heap.pop_min(&tree.distances) {
        in_tree[tail as usize] = true;

        for edge in graph.edges(tail) {
            let head = edge.head as usize;
            let weight = edge.weight as Distance;
            if !in_tree[head] && weight < tree.distances[head] {
                tree.distances[head] = weight;
                tree.predecessors[head] = tail;
                heap.insert_or_decrease(edge.head, &tree.distances);
            }
        }
    }

    let total_weight: Distance = tree
        .reached()
        .filter(|&vertex| vertex != source)
        .map(|vertex| tree.distances[vertex as usize])
        .sum();
    let mut unreached = HashSet::new();
    unreached.extend(tree.unreached());

    debug!(
        source,
        total_weight,
        unreached = unreached.len(),
        "prim finished"
    );

    Ok(MinimumSpanningTree {
        tree,
        total_weight,
        unreached,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::GraphError,
        graphs::{edge::EdgeTriple, undirected_graph::UndirectedGraph},
    };

    fn graph(number_of_vertices: u32, edges: &[(i64, i64, i64)]) -> UndirectedGraph {
        let edges: Vec<_> = edges.iter().copied().map(EdgeTriple::from).collect();
        UndirectedGraph::from_edges(number_of_vertices, &edges).unwrap()
    }

    #[test]
    fn later_cheaper_edge_replaces_tentative_parent() {
        // 3 is first seen from 1 with weight 10, then from 2 with weight 1.
        let graph = graph(3, &[(1, 3, 10), (1, 2, 1), (2, 3, 1)]);
        let mst = mst_prim(&graph, 1).unwrap();

        assert_eq!(mst.total_weight, 2);
        assert_eq!(mst.tree.predecessors[3], 2);
        assert_eq!(
            mst.edges().collect::<Vec<_>>(),
            vec![WeightedEdge::new(1, 2, 1), WeightedEdge::new(2, 3, 1)]
        );
    }

    #[test]
    fn tree_vertices_are_never_reparented() {
        // Once 2 is in the tree the edge 3 -- 2 of weight 0 must not move it.
        let graph = graph(3, &[(1, 2, 5), (2, 3, 0), (1, 3, 9)]);
        let mst = mst_prim(&graph, 1).unwrap();

        assert_eq!(mst.tree.predecessors[2], 1);
        assert_eq!(mst.tree.predecessors[3], 2);
        assert_eq!(mst.total_weight, 5);
    }

    #[test]
    fn zero_weight_edges_are_used() {
        let graph = graph(2, &[(1, 2, 0)]);
        let mst = mst_prim(&graph, 2).unwrap();
        assert!(mst.is_spanning());
        assert_eq!(mst.number_of_edges(), 1);
        assert_eq!(mst.total_weight, 0);
    }

    #[test]
    fn invalid_source_is_rejected() {
        let graph = graph(2, &[(1, 2, 1)]);
        assert!(matches!(
            mst_prim(&graph, 0),
            Err(GraphError::InvalidSource { vertex: 0, .. })
        ));
        assert!(matches!(
            mst_prim(&graph, 3),
            Err(GraphError::InvalidSource {
                vertex: 3,
                number_of_vertices: 2
            })
        ));
    }
}
