//! Null embedding provider for testing and development

use async_trait::async_trait;
use larascope_domain::constants::EMBEDDING_DIMENSION_NULL;
use larascope_domain::error::Result;
use larascope_domain::ports::providers::EmbeddingProvider;
use larascope_domain::value_objects::Embedding;

/// Hash-based embedding provider with no model behind it
///
/// Vectors are a pure function of the input text, so the same chunk or
/// query text always maps to the same point regardless of batch position.
/// Identical texts score 1.0 against each other under cosine similarity,
/// which is what the retrieval tests rely on.
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let embeddings = texts
            .iter()
            .map(|text| {
                // Deterministic but text-varied values from a char-sum hash
                let hash = text.chars().map(|c| c as u32).sum::<u32>();
                let base_value = (hash % 1000) as f32 / 1000.0;

                let vector = (0..EMBEDDING_DIMENSION_NULL)
                    .map(|j| {
                        let variation = ((hash as f32).rem_euclid(97.0) + j as f32).sin();
                        (base_value + variation * 0.1).clamp(0.0, 1.0)
                    })
                    .collect();

                Embedding::new(vector, "null-test")
            })
            .collect();

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embeddings_are_deterministic_per_text() {
        let provider = NullEmbeddingProvider::new();
        let texts = vec!["class Leave {}".to_string(), "class User {}".to_string()];

        let first = provider.embed_batch(&texts).await.unwrap();
        let second = provider
            .embed_batch(&["class Leave {}".to_string()])
            .await
            .unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].vector, second[0].vector);
        assert_ne!(first[0].vector, first[1].vector);
    }

    #[tokio::test]
    async fn test_dimensions_match_declared() {
        let provider = NullEmbeddingProvider::new();
        let embeddings = provider
            .embed_batch(&["anything".to_string()])
            .await
            .unwrap();
        assert_eq!(embeddings[0].dimensions, provider.dimensions());
        assert_eq!(embeddings[0].vector.len(), EMBEDDING_DIMENSION_NULL);
    }
}
