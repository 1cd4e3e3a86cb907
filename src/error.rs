//! Error types for loading graphs and running searches on them.

use thiserror::Error;

use crate::graphs::VertexId;

/// Errors that can occur while reading input, building a graph or starting a
/// search.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The edge-list text is malformed.
    #[error("invalid input in line {line}: {reason}")]
    InvalidInput {
        /// 1-based line number in the input.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },

    /// An edge refers to a vertex outside `1..=V` or carries a negative weight.
    #[error("invalid edge #{edge} ({tail}, {head}, {weight}): {reason}")]
    InvalidEdge {
        /// 1-based position of the edge in the edge list.
        edge: usize,
        tail: i64,
        head: i64,
        weight: i64,
        /// What is wrong with the edge.
        reason: String,
    },

    /// A search was started from a vertex outside `1..=V`.
    #[error("invalid source vertex {vertex}, graph has vertices 1..={number_of_vertices}")]
    InvalidSource {
        vertex: VertexId,
        number_of_vertices: u32,
    },

    /// A count exceeds what the graph representation can hold.
    #[error("{what} {count} exceeds the limit of {limit}")]
    TooLarge {
        what: &'static str,
        count: u64,
        limit: u64,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
