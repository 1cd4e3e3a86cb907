use ahash::HashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

use crate::graphs::{Distance, VertexId};

/// Marks a vertex without predecessor in [`SearchTree::predecessors`].
pub const NO_PREDECESSOR: VertexId = 0;

/// Marks a vertex that was never reached in [`SearchTree::distances`].
pub const UNREACHED: Distance = Distance::MAX;

/// Writes a vertex set in ascending order so serialized results are
/// reproducible.
pub(crate) fn serialize_sorted<S: Serializer>(
    vertices: &HashSet<VertexId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(vertices.iter().sorted())
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}

/// Per-vertex result of a search rooted at `source`.
///
/// Both vectors have one slot per vertex plus the unused slot 0. The source is
/// its own predecessor, unreached vertices have predecessor
/// [`NO_PREDECESSOR`] and distance [`UNREACHED`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchTree {
    pub source: VertexId,
    pub distances: Vec<Distance>,
    pub predecessors: Vec<VertexId>,
}

impl SearchTree {
    pub(crate) fn new(number_of_vertices: u32, source: VertexId) -> Self {
        let mut tree = SearchTree {
            source,
            distances: vec![UNREACHED; number_of_vertices as usize + 1],
            predecessors: vec![NO_PREDECESSOR; number_of_vertices as usize + 1],
        };
        tree.distances[source as usize] = 0;
        tree.predecessors[source as usize] = source;
        tree
    }

    pub fn number_of_vertices(&self) -> u32 {
        (self.distances.len() - 1) as u32
    }

    pub fn is_reached(&self, vertex: VertexId) -> bool {
        vertex != NO_PREDECESSOR
            && self
                .predecessors
                .get(vertex as usize)
                .is_some_and(|&predecessor| predecessor != NO_PREDECESSOR)
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        if !self.is_reached(vertex) {
            return None;
        }
        Some(self.distances[vertex as usize])
    }

    /// The vertex before `vertex` in the tree. `None` for the source and for
    /// unreached vertices.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.source || !self.is_reached(vertex) {
            return None;
        }
        Some(self.predecessors[vertex as usize])
    }

    /// Reached vertices in ascending order, the source included.
    pub fn reached(&self) -> impl Iterator<Item = VertexId> + '_ {
        (1..=self.number_of_vertices()).filter(|&vertex| self.is_reached(vertex))
    }

    /// Vertices the search never reached, in ascending order.
    pub fn unreached(&self) -> impl Iterator<Item = VertexId> + '_ {
        (1..=self.number_of_vertices()).filter(|&vertex| !self.is_reached(vertex))
    }

    /// Walks the predecessors from `target` back to the source. The distance of
    /// the returned path is the distance stored for `target`.
    pub fn path(&self, target: VertexId) -> Option<Path> {
        let distance = self.distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }
}
