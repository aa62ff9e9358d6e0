//! Domain Ports
//!
//! Interfaces the domain requires from the outside world. Providers
//! implement these; application services depend on them through `Arc<dyn>`
//! handles constructed once by the caller (no ambient global state).

/// Provider ports (embedding, vector store)
pub mod providers;

pub use providers::{EmbeddingProvider, VectorStoreProvider};
