//! Analysis Layer - Larascope
//!
//! The code-chunking and dependency-extraction pipeline: walking a Laravel
//! project tree, routing files to per-artifact-type extraction, producing
//! [`larascope_domain::CodeChunk`] records with structural metadata and
//! best-effort dependency lists.
//!
//! ## Pipeline
//!
//! 1. [`file_router::FileRouter`] walks the tree and classifies each file
//!    by its path convention.
//! 2. [`parser::PhpParser`] wraps the tree-sitter PHP grammar; its
//!    construction doubles as the capability check that selects the
//!    structural or regex strategy for the whole run.
//! 3. [`extractor::ChunkExtractor`] turns parsed PHP into class and method
//!    chunks with metadata and dependency lists.
//! 4. [`fallback::FallbackChunker`] handles route/config/env/Blade files
//!    and the regex-only PHP path.
//! 5. [`analyzer::CodebaseAnalyzer`] orchestrates the run and accumulates
//!    the chunk collection.
//!
//! The whole pipeline is synchronous and single-threaded; callers wanting
//! parallelism can fan out per file, since no state is shared across files.

pub mod analyzer;
pub mod extractor;
pub mod fallback;
pub mod file_router;
pub mod parser;

pub use analyzer::{AnalysisReport, CodebaseAnalyzer};
pub use extractor::ChunkExtractor;
pub use fallback::FallbackChunker;
pub use file_router::{FileRouter, RoutedFile};
pub use parser::PhpParser;
