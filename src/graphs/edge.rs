use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// An edge exactly as it was read from the input, before any validation.
/// Signed so that negative ids and weights survive parsing and can be
/// rejected when the graph is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeTriple {
    pub tail: i64,
    pub head: i64,
    pub weight: i64,
}

impl EdgeTriple {
    pub fn new(tail: i64, head: i64, weight: i64) -> EdgeTriple {
        EdgeTriple { tail, head, weight }
    }
}

impl From<(i64, i64, i64)> for EdgeTriple {
    fn from((tail, head, weight): (i64, i64, i64)) -> Self {
        EdgeTriple { tail, head, weight }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Hash, Debug)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

/// Adjacency entry: the neighbor and the weight of the connecting edge.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaillessEdge {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}
