//! Semantic embedding value objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Embedding
///
/// Fixed-length vector representation of a chunk's text, produced by an
/// embedding provider and persisted alongside the chunk payload in the
/// vector store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector
    pub vector: Vec<f32>,
    /// Model that produced this embedding
    pub model: String,
    /// Number of dimensions in the vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create a new embedding, deriving `dimensions` from the vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }
}
