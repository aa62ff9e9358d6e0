//! Provider Implementations - Larascope
//!
//! Concrete adapters behind the domain ports: embedding providers and
//! vector store backends. Application services receive these through
//! explicit constructor injection, never through a global registry.

pub mod embedding;
pub mod vector_store;

pub use embedding::NullEmbeddingProvider;
pub use vector_store::InMemoryVectorStoreProvider;
