//! In-memory vector store provider implementation

use async_trait::async_trait;
use dashmap::DashMap;
use larascope_domain::entities::CodeChunk;
use larascope_domain::error::{Error, Result};
use larascope_domain::ports::providers::VectorStoreProvider;
use larascope_domain::value_objects::{Embedding, ScoredChunk};
use std::sync::Arc;

/// One stored `(vector, payload)` pair with its generated identifier
struct StoredChunk {
    id: String,
    vector: Embedding,
    chunk: CodeChunk,
}

/// In-memory vector store backed by a concurrent map of collections
///
/// Cosine-similarity scan per search, no indexing. Intended for tests and
/// small trees; the port contract matches what a real backend provides.
pub struct InMemoryVectorStoreProvider {
    collections: Arc<DashMap<String, Vec<StoredChunk>>>,
}

impl InMemoryVectorStoreProvider {
    /// Create a new in-memory vector store provider
    pub fn new() -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryVectorStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStoreProvider for InMemoryVectorStoreProvider {
    async fn create_collection(&self, name: &str, _dimensions: usize) -> Result<()> {
        if self.collections.contains_key(name) {
            return Err(Error::vector_db(format!(
                "collection '{name}' already exists"
            )));
        }
        self.collections.insert(name.to_string(), Vec::new());
        Ok(())
    }

    async fn collection_exists(&self, name: &str) -> Result<bool> {
        Ok(self.collections.contains_key(name))
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        self.collections.remove(name);
        Ok(())
    }

    async fn insert_chunks(
        &self,
        collection: &str,
        vectors: &[Embedding],
        chunks: Vec<CodeChunk>,
    ) -> Result<Vec<String>> {
        if vectors.len() != chunks.len() {
            return Err(Error::vector_db(format!(
                "vector/chunk count mismatch: {} vectors, {} chunks",
                vectors.len(),
                chunks.len()
            )));
        }
        let mut coll = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| Error::vector_db(format!("collection '{collection}' not found")))?;

        let mut ids = Vec::with_capacity(chunks.len());
        for (vector, chunk) in vectors.iter().zip(chunks) {
            let id = uuid::Uuid::new_v4().to_string();
            coll.push(StoredChunk {
                id: id.clone(),
                vector: vector.clone(),
                chunk,
            });
            ids.push(id);
        }
        Ok(ids)
    }

    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
        score_threshold: Option<f32>,
    ) -> Result<Vec<ScoredChunk>> {
        let coll = self
            .collections
            .get(collection)
            .ok_or_else(|| Error::vector_db(format!("collection '{collection}' not found")))?;

        let mut scored: Vec<(f32, &StoredChunk)> = coll
            .iter()
            .map(|stored| (cosine_similarity(query_vector, &stored.vector.vector), stored))
            .filter(|(score, _)| score_threshold.is_none_or(|floor| *score >= floor))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        Ok(scored
            .into_iter()
            .map(|(score, stored)| ScoredChunk {
                id: stored.id.clone(),
                score: f64::from(score),
                chunk: stored.chunk.clone(),
            })
            .collect())
    }

    async fn delete_by_file_path(&self, collection: &str, file_path: &str) -> Result<()> {
        let mut coll = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| Error::vector_db(format!("collection '{collection}' not found")))?;
        coll.retain(|stored| stored.chunk.file_path != file_path);
        Ok(())
    }

    async fn get_chunks_by_file(
        &self,
        collection: &str,
        file_path: &str,
    ) -> Result<Vec<CodeChunk>> {
        let coll = self
            .collections
            .get(collection)
            .ok_or_else(|| Error::vector_db(format!("collection '{collection}' not found")))?;

        let mut chunks: Vec<CodeChunk> = coll
            .iter()
            .filter(|stored| stored.chunk.file_path == file_path)
            .map(|stored| stored.chunk.clone())
            .collect();
        chunks.sort_by_key(|chunk| chunk.start_line);
        Ok(chunks)
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

/// Cosine similarity normalized to `[0, 1]`
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b) + 1.0) / 2.0
    }
}
