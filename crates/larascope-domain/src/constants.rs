//! Domain-wide constants

/// Default vector collection for indexed codebases
pub const DEFAULT_COLLECTION: &str = "codebase_chunks_v1";

/// Embedding dimension for the default production model (BGE-M3)
pub const EMBEDDING_DIMENSION: usize = 1024;

/// Embedding dimension for the null (test) provider
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Default similarity-score floor for retrieval
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.3;

/// Maximum number of consecutive chunks in an adjacent-chunk context window
pub const ADJACENT_WINDOW_MAX: usize = 5;

/// Default maximum file size considered for chunking, in bytes
pub const MAX_FILE_SIZE: usize = 1024 * 1024;
