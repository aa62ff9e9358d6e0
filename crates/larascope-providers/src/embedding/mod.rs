//! Embedding provider adapters

mod null;

pub use null::NullEmbeddingProvider;
