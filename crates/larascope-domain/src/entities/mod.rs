//! Domain Entities
//!
//! Entities are the core objects the pipeline produces and the providers
//! persist. The only entity in this domain is [`CodeChunk`], the atomic
//! unit of retrieval.

pub mod chunk;

pub use chunk::CodeChunk;
