use std::ops::RangeInclusive;

use edge::WeightedEdge;

pub mod edge;
pub mod graph_factory;
pub mod labels;
pub mod undirected_graph;

pub type VertexId = u32;
pub type Weight = u32;
pub type Distance = u64;

/// Largest vertex count a graph may declare. Every per-vertex array is
/// allocated up front, so the header of an untrusted file must not be able to
/// request more.
pub const MAX_VERTICES: u32 = 1 << 27;

/// Read-only view of a weighted graph whose vertices are numbered `1..=V`.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32;

    /// All edges incident to `vertex`, with `vertex` as their tail. Vertices
    /// outside `1..=V` have no edges.
    fn edges(
        &self,
        vertex: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn vertices(&self) -> RangeInclusive<VertexId> {
        1..=self.number_of_vertices()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices().contains(&vertex)
    }
}
