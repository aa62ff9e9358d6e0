use crate::entities::CodeChunk;
use crate::error::Result;
use crate::value_objects::{Embedding, ScoredChunk};
use async_trait::async_trait;

/// Vector Storage Interface
///
/// Persists `(vector, chunk payload)` pairs keyed by generated unique
/// identifiers and serves the two retrieval shapes the assistant needs:
/// nearest-neighbor search with an optional score floor, and exact-match
/// filtering by `file_path` for re-indexing and adjacent-chunk context
/// windows.
///
/// # Example
///
/// ```ignore
/// use larascope_domain::ports::providers::VectorStoreProvider;
///
/// store.create_collection("codebase_chunks_v1", 1024).await?;
/// let ids = store.insert_chunks("codebase_chunks_v1", &vectors, chunks).await?;
///
/// // Replace stale chunks before re-indexing a changed file
/// store.delete_by_file_path("codebase_chunks_v1", "app/Models/Leave.php").await?;
/// ```
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Create a new collection with the given vector dimensionality
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()>;

    /// Check whether a collection exists
    async fn collection_exists(&self, name: &str) -> Result<bool>;

    /// Delete a collection and everything stored in it
    async fn delete_collection(&self, name: &str) -> Result<()>;

    /// Insert chunk payloads with their embeddings
    ///
    /// `vectors` and `chunks` must have equal length; each pair is stored
    /// under a freshly generated identifier, returned in order.
    async fn insert_chunks(
        &self,
        collection: &str,
        vectors: &[Embedding],
        chunks: Vec<CodeChunk>,
    ) -> Result<Vec<String>>;

    /// Nearest-neighbor search, best matches first
    ///
    /// Results scoring below `score_threshold` (when given) are dropped.
    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
        score_threshold: Option<f32>,
    ) -> Result<Vec<ScoredChunk>>;

    /// Delete all stored chunks whose `file_path` equals the given path
    ///
    /// Required before re-indexing a changed file to avoid duplicate or
    /// stale chunks.
    async fn delete_by_file_path(&self, collection: &str, file_path: &str) -> Result<()>;

    /// Fetch all chunks for one file, ordered by `start_line`
    ///
    /// Used to assemble adjacent-chunk context windows around a match.
    async fn get_chunks_by_file(&self, collection: &str, file_path: &str)
    -> Result<Vec<CodeChunk>>;

    /// Name/identifier of this vector store provider
    fn provider_name(&self) -> &str;
}
