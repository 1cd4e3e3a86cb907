use crate::{
    error::{GraphError, Result},
    graphs::{Graph, VertexId},
};

pub mod collections;
pub mod dijkstra;
pub mod prim;

/// Rejects sources outside `1..=V` before any search state is allocated.
pub fn validate_source(graph: &dyn Graph, source: VertexId) -> Result<()> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::InvalidSource {
            vertex: source,
            number_of_vertices: graph.number_of_vertices(),
        });
    }
    Ok(())
}
