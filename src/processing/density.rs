//! HDBSCAN density clustering over question embeddings

use anyhow::{Context, Result};
use hdbscan::{Hdbscan, HdbscanHyperParams};

use crate::core::{Embedding, GroupMap, QaPair};

/// Hyperparameters for one density pass
#[derive(Debug, Clone, Copy)]
pub struct DensityParams {
	pub min_cluster_size: usize,
	pub min_samples: usize,
	pub epsilon: f64,
}

/// Run HDBSCAN once, returning one label per embedding (-1 = noise).
/// Deterministic for identical input order and parameters.
pub fn run_hdbscan(embeddings: &[Embedding], params: DensityParams) -> Result<Vec<i32>> {
	let data: Vec<Vec<f32>> = embeddings.iter().map(|e| e.0.clone()).collect();

	let hyper_params = HdbscanHyperParams::builder()
		.min_cluster_size(params.min_cluster_size)
		.min_samples(params.min_samples)
		.epsilon(params.epsilon)
		.build();

	let clusterer = Hdbscan::new(&data, hyper_params);
	clusterer.cluster().context("HDBSCAN clustering failed")
}

/// Number of distinct non-noise labels
pub fn distinct_cluster_count(labels: &[i32]) -> usize {
	let mut distinct: Vec<i32> = labels.iter().copied().filter(|&l| l != -1).collect();
	distinct.sort_unstable();
	distinct.dedup();
	distinct.len()
}

/// Group items by cluster label; noise points land under "-1"
pub fn assign_groups(labels: &[i32], pairs: &[QaPair]) -> GroupMap {
	let mut groups = GroupMap::new();
	for (pair, &label) in pairs.iter().zip(labels) {
		groups
			.entry(label.to_string())
			.or_default()
			.push(pair.clone());
	}
	groups
}
