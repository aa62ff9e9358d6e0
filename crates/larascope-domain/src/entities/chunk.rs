//! Code chunk entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The atomic unit of retrieval
///
/// A chunk is one semantically meaningful piece of a source file: a class,
/// a method, a route definition, a config array, an env entry, or a Blade
/// template section. Chunks are immutable after creation and carry no
/// references to other chunks; dependency fields are plain strings resolved
/// at retrieval time by joining on `file_path`/`name`.
///
/// ## Invariants
///
/// - `start_line <= end_line`, both 1-indexed against the original file.
/// - `content` is the exact source substring for the span. It is never
///   re-indented, truncated, or normalized here; normalization is a caller
///   concern.
/// - Absence of a metadata key means "not applicable/not detected",
///   never "false".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeChunk {
    /// Chunk type tag, e.g. `controller`, `controller_method`, `route`,
    /// `env_variable`, `file_content`
    pub chunk_type: String,
    /// Human-readable identifier: class name, `Class::method`, a
    /// synthesized `Route_N` name, or an env key
    pub name: String,
    /// Path of the source file; stable join key for re-concatenation and
    /// for vector-store filtering
    pub file_path: String,
    /// First line of the span (1-indexed, inclusive)
    pub start_line: u32,
    /// Last line of the span (1-indexed, inclusive)
    pub end_line: u32,
    /// Exact source text of the span
    pub content: String,
    /// Structural facts about the chunk; keys depend on `chunk_type`
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Fully-qualified names referenced via `use` statements or
    /// instantiation/reference patterns; de-duplicated, first-seen order
    #[serde(default)]
    pub import_dependencies: Vec<String>,
    /// Same-class or cross-scope method references in `scope::method`
    /// form; set semantics, empty for non-method chunks
    #[serde(default)]
    pub method_dependencies: Vec<String>,
}

impl CodeChunk {
    /// Number of source lines covered by the span
    pub fn line_count(&self) -> u32 {
        self.end_line - self.start_line + 1
    }
}
