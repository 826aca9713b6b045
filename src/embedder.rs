//! Embedding source boundary

use anyhow::Result;

use crate::core::Embedding;

/// External embedding provider. Implementations must return one vector per
/// input text, index-aligned with the input, and be deterministic for a
/// fixed text and model. Caching and retries live behind this trait, not in
/// the clustering core; failures propagate to the caller untouched.
pub trait EmbeddingSource {
	fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>>;
}
