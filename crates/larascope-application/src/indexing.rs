//! Indexing service - analyze, embed, and store a codebase
//!
//! The chunking core is synchronous and CPU-bound, so each analysis run
//! is bridged onto the blocking pool. Before inserting, all stored chunks
//! for every touched file are deleted, keeping re-runs free of stale or
//! duplicate entries.

use crate::config::AppConfig;
use larascope_analysis::CodebaseAnalyzer;
use larascope_domain::entities::CodeChunk;
use larascope_domain::error::{Error, Result};
use larascope_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Outcome of one indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingStats {
    /// Files read and extracted, including files yielding zero chunks
    pub files_processed: usize,
    /// Files dropped after a per-file error
    pub files_skipped: usize,
    /// Chunks embedded and inserted into the store
    pub chunks_indexed: usize,
}

/// Orchestrates analysis → embedding → vector storage
pub struct IndexingService {
    embedding: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStoreProvider>,
    config: AppConfig,
}

impl IndexingService {
    /// Create a new indexing service
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

    /// Index the whole tree under `root`
    pub async fn index_codebase(&self, root: &Path) -> Result<IndexingStats> {
        let report = analyze_blocking(root).await?;
        info!(
            root = %root.display(),
            chunks = report.chunks.len(),
            "analysis finished, storing chunks"
        );

        self.ensure_collection().await?;

        // Replace everything previously stored for the touched files
        let touched: BTreeSet<String> = report
            .chunks
            .iter()
            .map(|c| c.file_path.clone())
            .collect();
        for file_path in &touched {
            self.store
                .delete_by_file_path(&self.config.collection, file_path)
                .await?;
        }

        let chunks_indexed = self.store_chunks(report.chunks).await?;
        info!(
            collection = %self.config.collection,
            chunks_indexed,
            files = touched.len(),
            "indexing complete"
        );
        Ok(IndexingStats {
            files_processed: report.files_processed,
            files_skipped: report.files_skipped,
            chunks_indexed,
        })
    }

    /// Refresh a single changed file
    ///
    /// Stale chunks for the file are deleted even when the new content
    /// yields none, so a file emptied of code disappears from the index.
    pub async fn reindex_file(&self, file: &Path) -> Result<usize> {
        let report = analyze_blocking(file).await?;
        self.ensure_collection().await?;
        self.store
            .delete_by_file_path(&self.config.collection, &file.display().to_string())
            .await?;
        self.store_chunks(report.chunks).await
    }

    async fn ensure_collection(&self) -> Result<()> {
        if !self
            .store
            .collection_exists(&self.config.collection)
            .await?
        {
            self.store
                .create_collection(&self.config.collection, self.embedding.dimensions())
                .await?;
        }
        Ok(())
    }

    async fn store_chunks(&self, chunks: Vec<CodeChunk>) -> Result<usize> {
        if chunks.is_empty() {
            return Ok(0);
        }
        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let vectors = self.embedding.embed_batch(&texts).await?;
        let ids = self
            .store
            .insert_chunks(&self.config.collection, &vectors, chunks)
            .await?;
        Ok(ids.len())
    }
}

/// Run one analyzer pass on the blocking pool
async fn analyze_blocking(root: &Path) -> Result<larascope_analysis::AnalysisReport> {
    let root = root.to_path_buf();
    tokio::task::spawn_blocking(move || CodebaseAnalyzer::new().analyze(&root))
        .await
        .map_err(|e| Error::internal(format!("analysis task failed: {e}")))?
}
