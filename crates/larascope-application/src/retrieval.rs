//! Retrieval service - similarity search with adjacent-chunk context
//!
//! A match on its own is often too narrow to answer a question about the
//! code around it, so [`RetrievalService::with_context`] widens a hit to
//! a window of consecutive chunks from the same file, ordered by
//! `start_line` and clamped at the file's edges.

use crate::config::AppConfig;
use larascope_domain::constants::ADJACENT_WINDOW_MAX;
use larascope_domain::entities::CodeChunk;
use larascope_domain::error::{Error, Result};
use larascope_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};
use larascope_domain::value_objects::ScoredChunk;
use std::sync::Arc;

/// Embeds queries and searches the chunk collection
pub struct RetrievalService {
    embedding: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStoreProvider>,
    config: AppConfig,
}

impl RetrievalService {
    /// Create a new retrieval service
    pub fn new(
        embedding: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStoreProvider>,
        config: AppConfig,
    ) -> Self {
        Self {
            embedding,
            store,
            config,
        }
    }

    /// Search the collection for chunks similar to `text`
    ///
    /// Results below the configured score floor are dropped by the store.
    pub async fn query(&self, text: &str, limit: usize) -> Result<Vec<ScoredChunk>> {
        let embeddings = self.embedding.embed_batch(&[text.to_string()]).await?;
        let query_vector = embeddings
            .first()
            .ok_or_else(|| Error::embedding("provider returned no vector for query"))?;

        self.store
            .search_similar(
                &self.config.collection,
                &query_vector.vector,
                limit,
                Some(self.config.score_threshold),
            )
            .await
    }

    /// Widen one search hit to its adjacent-chunk window
    ///
    /// Fetches the matched file's chunks ordered by `start_line` and
    /// returns at most `adjacent_window` consecutive chunks centered on
    /// the match (never more than [`ADJACENT_WINDOW_MAX`]).
    pub async fn with_context(&self, result: &ScoredChunk) -> Result<Vec<CodeChunk>> {
        let chunks = self
            .store
            .get_chunks_by_file(&self.config.collection, &result.chunk.file_path)
            .await?;
        if chunks.is_empty() {
            return Ok(chunks);
        }

        let window = self.config.adjacent_window.clamp(1, ADJACENT_WINDOW_MAX);
        let matched = chunks
            .iter()
            .position(|c| c.start_line == result.chunk.start_line && c.name == result.chunk.name)
            .unwrap_or(0);

        let start = matched.saturating_sub(window / 2);
        let end = (start + window).min(chunks.len());
        let start = end.saturating_sub(window);
        Ok(chunks[start..end].to_vec())
    }
}
