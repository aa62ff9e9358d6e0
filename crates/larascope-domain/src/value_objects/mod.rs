//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`FileType`] | Laravel artifact classification of a source file |
//! | [`Embedding`] | Vector representation of chunk text |
//! | [`ScoredChunk`] | Ranked result from a similarity search |

/// Semantic embedding value objects
pub mod embedding;
/// Laravel artifact type classification
pub mod file_type;
/// Search-related value objects
pub mod search;

pub use embedding::Embedding;
pub use file_type::FileType;
pub use search::ScoredChunk;
