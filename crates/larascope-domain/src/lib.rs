//! Domain Layer - Larascope
//!
//! Core domain types for the Laravel codebase chunking and retrieval
//! pipeline. This crate holds the chunk entity, the value objects shared
//! across layers, the error taxonomy, and the provider ports (interfaces)
//! implemented by the outer layers.
//!
//! This crate has no infrastructure dependencies: no parser, no vector
//! store client, no async runtime beyond trait definitions.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::CodeChunk;
pub use error::{Error, Result};
pub use value_objects::{Embedding, FileType, ScoredChunk};
