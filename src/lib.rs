//! Minimum spanning trees (Prim) and single source shortest paths (Dijkstra)
//! on undirected, non-negatively weighted graphs, both driven by an indexed
//! binary min-heap with decrease-key.

pub mod error;
pub mod graphs;
pub mod queue;
pub mod search;
pub mod utility;

pub use error::{GraphError, Result};
pub use graphs::{
    edge::EdgeTriple,
    graph_factory::{load_graph, EdgeList, FileType},
    undirected_graph::UndirectedGraph,
    Graph,
};
pub use search::{
    dijkstra::{shortest_path, sssp_dijkstra, ShortestPathTree},
    prim::{mst_prim, MinimumSpanningTree},
};

/// Builds the graph described by `edges`, see
/// [`UndirectedGraph::from_edges`].
pub fn build_graph(number_of_vertices: u32, edges: &[EdgeTriple]) -> Result<UndirectedGraph> {
    UndirectedGraph::from_edges(number_of_vertices, edges)
}
