//! Error types for the graph component.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error type for graph operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphError {
    /// Node with the given ID already exists.
    DuplicateNode(u64),
    /// Node with the given ID was not found.
    NodeNotFound(u64),
    /// Negative weight found where the algorithm requires non-negative
    /// weights.
    NegativeWeight { from: u64, to: u64, weight: f64 },
    /// A relaxation pass beyond |V|-1 still improved a distance.
    NegativeCycle,
    /// Malformed textual edge input.
    ParseError(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(id) => write!(f, "Node already exists: {id}"),
            Self::NodeNotFound(id) => write!(f, "Node not found: {id}"),
            Self::NegativeWeight { from, to, weight } => {
                write!(f, "Edge ({from}, {to}) has negative weight: {weight}")
            },
            Self::NegativeCycle => write!(f, "Graph contains a negative-weight cycle"),
            Self::ParseError(input) => write!(f, "Malformed edge input: {input}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
