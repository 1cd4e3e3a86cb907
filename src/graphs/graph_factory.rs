use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
    str::FromStr,
};

use clap::ValueEnum;
use tracing::info;

use super::{edge::EdgeTriple, undirected_graph::UndirectedGraph, MAX_VERTICES};
use crate::error::{GraphError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileType {
    /// Plain text: `V E` header, then one `u v w` line per edge.
    EdgeList,
    /// An `UndirectedGraph` serialized with bincode.
    Bincode,
}

/// The parsed, not yet validated contents of an edge-list file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList {
    pub number_of_vertices: u32,
    pub number_of_edges: u32,
    pub edges: Vec<EdgeTriple>,
}

impl EdgeList {
    pub fn from_file(path: &Path) -> Result<EdgeList> {
        let reader = BufReader::new(File::open(path)?);
        EdgeList::from_reader(reader)
    }

    /// Parses the header line `V E` followed by `E` lines `u v w`. Blank lines
    /// and lines starting with `#` are skipped, fields may be separated by any
    /// amount of whitespace and trailing fields are ignored.
    pub fn from_reader(reader: impl BufRead) -> Result<EdgeList> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|line| (index + 1, line)))
            .filter(|line| match line {
                Ok((_, line)) => {
                    let line = line.trim();
                    !line.is_empty() && !line.starts_with('#')
                }
                Err(_) => true,
            });

        let (header_line, header) = lines.next().transpose()?.ok_or(GraphError::InvalidInput {
            line: 1,
            reason: "missing header line `V E`".to_string(),
        })?;
        let mut values = header.split_whitespace();
        let number_of_vertices = parse_field::<u32>(values.next(), header_line, "vertex count")?;
        let number_of_edges = parse_field::<u32>(values.next(), header_line, "edge count")?;
        if number_of_vertices > MAX_VERTICES {
            return Err(GraphError::InvalidInput {
                line: header_line,
                reason: format!(
                    "vertex count {} exceeds the limit of {}",
                    number_of_vertices, MAX_VERTICES
                ),
            });
        }

        // The header is not trusted, so only a bounded amount is reserved up
        // front. A truncated list is reported below.
        let mut edges = Vec::with_capacity(number_of_edges.min(1 << 16) as usize);
        let mut last_line = header_line;
        for _ in 0..number_of_edges {
            let Some((line_number, line)) = lines.next().transpose()? else {
                return Err(GraphError::InvalidInput {
                    line: last_line + 1,
                    reason: format!(
                        "expected {} edges but found only {}",
                        number_of_edges,
                        edges.len()
                    ),
                });
            };
            let mut values = line.split_whitespace();
            let tail = parse_field::<i64>(values.next(), line_number, "tail")?;
            let head = parse_field::<i64>(values.next(), line_number, "head")?;
            let weight = parse_field::<i64>(values.next(), line_number, "weight")?;
            edges.push(EdgeTriple { tail, head, weight });
            last_line = line_number;
        }

        Ok(EdgeList {
            number_of_vertices,
            number_of_edges,
            edges,
        })
    }
}

impl FromStr for EdgeList {
    type Err = GraphError;

    fn from_str(text: &str) -> Result<EdgeList> {
        EdgeList::from_reader(Cursor::new(text))
    }
}

fn parse_field<T: FromStr>(value: Option<&str>, line: usize, name: &str) -> Result<T> {
    let value = value.ok_or_else(|| GraphError::InvalidInput {
        line,
        reason: format!("no {} found", name),
    })?;
    value.parse().map_err(|_| GraphError::InvalidInput {
        line,
        reason: format!("unable to parse {} from {:?}", name, value),
    })
}

/// Reads a graph in the given format.
pub fn load_graph(path: &Path, file_type: FileType) -> Result<UndirectedGraph> {
    let graph = match file_type {
        FileType::EdgeList => {
            let edge_list = EdgeList::from_file(path)?;
            UndirectedGraph::from_edge_list(&edge_list)?
        }
        FileType::Bincode => {
            let reader = BufReader::new(File::open(path)?);
            bincode::deserialize_from(reader)?
        }
    };
    info!(path = %path.display(), ?file_type, "loaded graph");
    Ok(graph)
}
