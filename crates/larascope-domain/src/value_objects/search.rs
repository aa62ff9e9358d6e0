//! Search-Related Value Objects

use crate::entities::CodeChunk;
use serde::{Deserialize, Serialize};

/// Value Object: Ranked Search Result
///
/// A single result from a similarity search: the stored chunk payload
/// plus its relevance score and the identifier it was stored under.
///
/// ## Business Rules
///
/// - Score represents semantic similarity (higher is better)
/// - The chunk carries its own file location, enabling navigation and
///   adjacent-chunk context assembly
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredChunk {
    /// Identifier the chunk was stored under
    pub id: String,
    /// Semantic similarity score (0.0 to 1.0, higher is better)
    pub score: f64,
    /// The stored chunk payload
    pub chunk: CodeChunk,
}
