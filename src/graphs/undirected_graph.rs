use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    edge::{EdgeTriple, TaillessEdge, WeightedEdge},
    graph_factory::EdgeList,
    labels::VertexLabels,
    Graph, VertexId, Weight, MAX_VERTICES,
};
use crate::error::{GraphError, Result};

/// Undirected weighted graph stored as one adjacency list per vertex.
///
/// Every edge `(u, v, w)` is stored twice, as `(v, w)` in `adjacency[u]` and
/// as `(u, w)` in `adjacency[v]`; a self-loop is stored once. Neighbors keep
/// the order in which their edges were read. Slot 0 of `adjacency` is unused
/// so that vertex ids can index it directly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UndirectedGraph {
    number_of_edges: u32,
    adjacency: Vec<Vec<TaillessEdge>>,
}

impl UndirectedGraph {
    /// Builds the graph from an already parsed edge list.
    pub fn from_edge_list(edge_list: &EdgeList) -> Result<UndirectedGraph> {
        UndirectedGraph::from_edges(edge_list.number_of_vertices, &edge_list.edges)
    }

    /// Builds the graph, refusing any edge whose endpoints are outside
    /// `1..=number_of_vertices` or whose weight is negative, more than
    /// [`MAX_VERTICES`] vertices and more than `u32::MAX` edges.
    pub fn from_edges(number_of_vertices: u32, edges: &[EdgeTriple]) -> Result<UndirectedGraph> {
        if number_of_vertices > MAX_VERTICES {
            return Err(GraphError::TooLarge {
                what: "vertex count",
                count: number_of_vertices as u64,
                limit: MAX_VERTICES as u64,
            });
        }
        let number_of_edges = u32::try_from(edges.len()).map_err(|_| GraphError::TooLarge {
            what: "edge count",
            count: edges.len() as u64,
            limit: u32::MAX as u64,
        })?;

        let mut adjacency = vec![Vec::new(); number_of_vertices as usize + 1];

        for (index, triple) in edges.iter().enumerate() {
            let edge = validate_edge(number_of_vertices, index + 1, triple)?;
            adjacency[edge.tail as usize].push(edge.tailless());
            if edge.tail != edge.head {
                adjacency[edge.head as usize].push(edge.reversed().tailless());
            }
        }

        let graph = UndirectedGraph {
            number_of_edges,
            adjacency,
        };
        info!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges,
            "built undirected graph"
        );
        Ok(graph)
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }

    pub fn neighbors(&self, vertex: VertexId) -> &[TaillessEdge] {
        if vertex == 0 {
            return &[];
        }
        self.adjacency
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Renders the adjacency lists, one line per vertex:
    /// `adj[A] -> |B | 2| -> |C | 3| ->`.
    pub fn display(&self, labels: VertexLabels) -> String {
        let mut out = String::new();
        for vertex in self.vertices() {
            let _ = write!(out, "adj[{}] ->", labels.label(vertex));
            for edge in self.neighbors(vertex) {
                let _ = write!(out, " |{} | {}| ->", labels.label(edge.head), edge.weight);
            }
            out.push('\n');
        }
        out
    }
}

fn validate_edge(
    number_of_vertices: u32,
    position: usize,
    triple: &EdgeTriple,
) -> Result<WeightedEdge> {
    let invalid = |reason: String| GraphError::InvalidEdge {
        edge: position,
        tail: triple.tail,
        head: triple.head,
        weight: triple.weight,
        reason,
    };
    let in_range = |vertex: i64| (1..=number_of_vertices as i64).contains(&vertex);

    if !in_range(triple.tail) {
        return Err(invalid(format!(
            "tail {} is outside 1..={}",
            triple.tail, number_of_vertices
        )));
    }
    if !in_range(triple.head) {
        return Err(invalid(format!(
            "head {} is outside 1..={}",
            triple.head, number_of_vertices
        )));
    }
    if triple.weight < 0 {
        return Err(invalid("weight is negative".to_string()));
    }
    let weight = Weight::try_from(triple.weight)
        .map_err(|_| invalid(format!("weight exceeds {}", Weight::MAX)))?;

    Ok(WeightedEdge::new(
        triple.tail as VertexId,
        triple.head as VertexId,
        weight,
    ))
}

impl Graph for UndirectedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.adjacency.len().saturating_sub(1) as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.number_of_edges
    }

    fn edges(
        &self,
        tail: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // The iterator has to own `tail` as it would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.neighbors(tail).iter(),
            tail,
        })
    }
}
