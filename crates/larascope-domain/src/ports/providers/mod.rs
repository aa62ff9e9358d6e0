//! Provider Ports
//!
//! Contracts for the external collaborators of the chunking core: the
//! embedding model and the vector store. Wire formats and persistence
//! semantics are owned by the implementations, not by this crate.

/// Embedding provider port
pub mod embedding;
/// Vector store provider port
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use vector_store::VectorStoreProvider;
