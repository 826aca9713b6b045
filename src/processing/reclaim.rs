//! K-means recovery of HDBSCAN noise points

use anyhow::Result;

use crate::core::GroupMap;
use crate::embedder::EmbeddingSource;
use crate::labels::NOISE_LABEL;
use crate::processing::partition;
use crate::ui;

/// Re-cluster the noise group into secondary clusters when it is large
/// enough (more than twice the minimum cluster size). New groups are
/// labeled after the highest existing integer label so they never collide,
/// and the noise group is removed. No-op when `keep_noise` is set, the
/// group is missing, or the group is too small.
pub fn reclaim_noise<S: EmbeddingSource>(
	groups: &mut GroupMap,
	source: &S,
	min_cluster_size: usize,
	keep_noise: bool,
) -> Result<()> {
	if keep_noise {
		return Ok(());
	}
	let noise_len = match groups.get(NOISE_LABEL) {
		Some(group) => group.len(),
		None => return Ok(()),
	};
	if noise_len <= min_cluster_size * 2 {
		return Ok(());
	}
	let Some(noise) = groups.remove(NOISE_LABEL) else {
		return Ok(());
	};

	let n_clusters = (noise_len / (2 * min_cluster_size)).max(2);
	ui::info(&format!(
		"Attempting to cluster {} noise points into {} subclusters",
		noise_len, n_clusters
	));

	let embeddings = source.embed(&noise.questions)?;
	let labels = partition::run_kmeans(&embeddings, n_clusters)?;

	let next_label = groups
		.keys()
		.filter_map(|key| key.parse::<i64>().ok())
		.max()
		.map_or(0, |max| max + 1);

	for (pair, label) in noise.pairs.into_iter().zip(labels) {
		groups
			.entry((next_label + label as i64).to_string())
			.or_default()
			.push(pair);
	}
	Ok(())
}
