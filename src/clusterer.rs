//! HDBSCAN-based QA clustering pipeline

use anyhow::{ensure, Result};

use crate::config::ClusterConfig;
use crate::core::{ClusteringResult, QaPair};
use crate::embedder::EmbeddingSource;
use crate::format;
use crate::params;
use crate::processing::density::{self, DensityParams};
use crate::processing::{reclaim, split};
use crate::ui;

/// Density-based question clusterer with noise reclamation and recursive
/// splitting of oversized clusters.
///
/// A pure, synchronous transform: items plus an embedding source go in, a
/// [`ClusteringResult`] comes out. No state survives between calls.
pub struct HdbscanQaClusterer<S: EmbeddingSource> {
	source: S,
	config: ClusterConfig,
}

impl<S: EmbeddingSource> HdbscanQaClusterer<S> {
	pub fn new(source: S, config: ClusterConfig) -> Self {
		Self { source, config }
	}

	/// Name of the clustering method
	pub fn method(&self) -> &'static str {
		"hdbscan"
	}

	/// Cluster QA pairs by question similarity. Empty input yields an
	/// empty result. Embedding failures propagate to the caller.
	pub fn cluster(&self, pairs: Vec<QaPair>) -> Result<ClusteringResult> {
		if pairs.is_empty() {
			return Ok(ClusteringResult::default());
		}

		let questions: Vec<String> = pairs.iter().map(|p| p.question.clone()).collect();
		let total_questions = questions.len();

		let embeddings = self.source.embed(&questions)?;
		ensure!(
			embeddings.len() == total_questions,
			"embedding source returned {} vectors for {} questions",
			embeddings.len(),
			total_questions
		);

		let min_cluster_size = self
			.config
			.min_cluster_size
			.unwrap_or_else(|| params::min_cluster_size(total_questions));
		let min_samples = self.config.min_samples();
		let epsilon = self.config.epsilon();

		if self.config.selection_method() != "eom" {
			ui::warn(&format!(
				"Cluster selection method '{}' is not supported, using eom",
				self.config.selection_method()
			));
		}

		ui::info(&format!(
			"Clustering {} questions with HDBSCAN (min_cluster_size={}, min_samples={}, cluster_selection_epsilon={})",
			total_questions, min_cluster_size, min_samples, epsilon
		));

		let labels = density::run_hdbscan(
			&embeddings,
			DensityParams {
				min_cluster_size,
				min_samples,
				epsilon,
			},
		)?;

		let num_noise = labels.iter().filter(|&&l| l == -1).count();
		ui::info(&format!(
			"HDBSCAN found {} clusters and {} noise points",
			density::distinct_cluster_count(&labels),
			num_noise
		));

		let mut groups = density::assign_groups(&labels, &pairs);

		reclaim::reclaim_noise(
			&mut groups,
			&self.source,
			min_cluster_size,
			self.config.keep_noise,
		)?;
		split::split_large_clusters(&mut groups, total_questions, &self.source, &self.config)?;

		Ok(format::format_clusters(groups, self.config.keep_noise))
	}
}
