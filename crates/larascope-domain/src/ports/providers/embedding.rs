use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Embedding Provider Interface
///
/// Maps chunk text to fixed-length numeric vectors. Model internals are
/// entirely the provider's concern; the core only requires determinism
/// within a single run and a stable dimension count.
///
/// # Example
///
/// ```ignore
/// use larascope_domain::ports::providers::EmbeddingProvider;
///
/// let texts = vec!["public function index() {}".to_string()];
/// let embeddings = provider.embed_batch(&texts).await?;
/// assert_eq!(embeddings[0].dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per input in order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Number of dimensions of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Name/identifier of this embedding provider
    fn provider_name(&self) -> &str;
}
