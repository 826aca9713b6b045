//! Seeded k-means partitioning

use anyhow::{ensure, Context, Result};
use linfa::dataset::AsTargets;
use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use ndarray::Array2;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use crate::config::{KMEANS_MAX_ITERATIONS, KMEANS_SEED, KMEANS_TOLERANCE};
use crate::core::Embedding;

/// Partition embeddings into `n_clusters` groups. The generator is seeded,
/// so repeated runs over the same input produce the same assignment.
pub fn run_kmeans(embeddings: &[Embedding], n_clusters: usize) -> Result<Vec<i32>> {
	ensure!(!embeddings.is_empty(), "no embeddings to partition");

	let num_points = embeddings.len();
	let dim = embeddings[0].dim();

	let mut data = Array2::zeros((num_points, dim));
	for (i, emb) in embeddings.iter().enumerate() {
		for (j, &val) in emb.0.iter().enumerate() {
			data[[i, j]] = val as f64;
		}
	}

	let dataset = DatasetBase::from(data);
	let k = n_clusters.min(num_points);
	let rng = Xoshiro256Plus::seed_from_u64(KMEANS_SEED);

	let model = KMeans::params_with_rng(k, rng)
		.max_n_iterations(KMEANS_MAX_ITERATIONS)
		.tolerance(KMEANS_TOLERANCE)
		.fit(&dataset)
		.context("k-means fit failed")?;

	let predictions = model.predict(&dataset);
	Ok(predictions.as_targets().iter().map(|&l| l as i32).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn blob(cx: f32, cy: f32, count: usize) -> Vec<Embedding> {
		(0..count)
			.map(|i| Embedding::raw(vec![cx + (i as f32) * 0.001, cy - (i as f32) * 0.001]))
			.collect()
	}

	#[test]
	fn separates_two_obvious_blobs() {
		let mut embeddings = blob(0.0, 0.0, 6);
		embeddings.extend(blob(50.0, 50.0, 6));

		let labels = run_kmeans(&embeddings, 2).unwrap();

		assert_eq!(labels.len(), 12);
		// each blob must be internally consistent and distinct from the other
		assert!(labels[..6].iter().all(|&l| l == labels[0]));
		assert!(labels[6..].iter().all(|&l| l == labels[6]));
		assert_ne!(labels[0], labels[6]);
	}

	#[test]
	fn is_deterministic_across_runs() {
		let mut embeddings = blob(0.0, 0.0, 10);
		embeddings.extend(blob(8.0, -3.0, 10));
		embeddings.extend(blob(-5.0, 12.0, 10));

		let first = run_kmeans(&embeddings, 3).unwrap();
		let second = run_kmeans(&embeddings, 3).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn caps_cluster_count_at_point_count() {
		let embeddings = blob(0.0, 0.0, 3);
		let labels = run_kmeans(&embeddings, 10).unwrap();
		assert_eq!(labels.len(), 3);
	}

	#[test]
	fn rejects_empty_input() {
		assert!(run_kmeans(&[], 2).is_err());
	}
}
