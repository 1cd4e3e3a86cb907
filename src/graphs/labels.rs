use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::VertexId;

/// How vertices are shown to humans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum VertexLabels {
    /// `1 -> A`, `2 -> B`, ... Vertices past `Z` fall back to their number.
    #[default]
    Letters,
    Numbers,
}

impl VertexLabels {
    pub fn label(self, vertex: VertexId) -> Label {
        Label {
            vertex,
            labels: self,
        }
    }
}

pub struct Label {
    vertex: VertexId,
    labels: VertexLabels,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self
            .vertex
            .checked_add(64)
            .and_then(char::from_u32)
            .filter(char::is_ascii_uppercase);
        match (self.labels, letter) {
            (VertexLabels::Letters, Some(letter)) => write!(f, "{}", letter),
            _ => write!(f, "{}", self.vertex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(VertexLabels::Letters.label(1).to_string(), "A");
        assert_eq!(VertexLabels::Letters.label(26).to_string(), "Z");
        assert_eq!(VertexLabels::Letters.label(27).to_string(), "27");
        assert_eq!(VertexLabels::Letters.label(0).to_string(), "0");
    }

    #[test]
    fn numbers() {
        assert_eq!(VertexLabels::Numbers.label(3).to_string(), "3");
    }
}
