//! Application Layer - Larascope
//!
//! Orchestrates the synchronous chunking core against the async provider
//! ports: indexing (analyze → embed → replace-and-store) and retrieval
//! (embed query → similarity search → adjacent-chunk context windows).
//!
//! Services receive their providers through explicit constructor
//! injection; there is no registry or global state.

pub mod config;
pub mod indexing;
pub mod retrieval;

pub use config::AppConfig;
pub use indexing::{IndexingService, IndexingStats};
pub use retrieval::RetrievalService;
