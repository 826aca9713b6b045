//! Recursive splitting of oversized clusters

use anyhow::Result;

use crate::config::{
	ClusterConfig, LARGE_CLUSTER_FLOOR, LARGE_CLUSTER_FRACTION, RECURSIVE_MIN_SAMPLES,
};
use crate::core::{ClusterGroup, Embedding, GroupMap};
use crate::embedder::EmbeddingSource;
use crate::labels::is_noise_label;
use crate::params;
use crate::processing::density::{self, DensityParams};
use crate::processing::partition;
use crate::ui;

/// Which algorithm produced the subcluster labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
	/// Stricter HDBSCAN separated the group
	Density(Vec<i32>),
	/// HDBSCAN found at most one cluster; fell back to k-means
	Partition(Vec<i32>),
}

impl SplitOutcome {
	pub fn labels(&self) -> &[i32] {
		match self {
			SplitOutcome::Density(labels) | SplitOutcome::Partition(labels) => labels,
		}
	}
}

/// Size above which a cluster is re-partitioned: 20% of the corpus,
/// floored at 50
pub fn max_cluster_size(total_questions: usize) -> usize {
	((total_questions as f64 * LARGE_CLUSTER_FRACTION) as usize).max(LARGE_CLUSTER_FLOOR)
}

/// Split every oversized cluster once, replacing it with hierarchical
/// children ("<parent>.<child>"). Candidates are snapshotted up front, so
/// children are never re-split within the same pass. The noise group is
/// exempt only while it is being preserved for the output. A split whose
/// every point comes back as noise leaves the parent group in place.
pub fn split_large_clusters<S: EmbeddingSource>(
	groups: &mut GroupMap,
	total_questions: usize,
	source: &S,
	config: &ClusterConfig,
) -> Result<()> {
	let threshold = max_cluster_size(total_questions);
	ui::debug(&format!("Maximum cluster size threshold: {}", threshold));

	let candidates: Vec<String> = groups
		.iter()
		.filter(|(label, group)| {
			group.len() > threshold && !(is_noise_label(label) && config.keep_noise)
		})
		.map(|(label, _)| label.clone())
		.collect();

	if candidates.is_empty() {
		ui::debug("No large clusters found");
		return Ok(());
	}
	ui::info(&format!("Found {} large clusters to split", candidates.len()));

	for label in candidates {
		let Some(group) = groups.remove(&label) else {
			continue;
		};
		ui::info(&format!(
			"Splitting large cluster {} with {} questions",
			label,
			group.len()
		));

		let embeddings = source.embed(&group.questions)?;
		let outcome = recursive_cluster(&embeddings, &label)?;
		let children = create_subclusters(&label, &group, outcome.labels());

		if children.is_empty() {
			// every point came back as noise; keep the original group
			ui::warn(&format!(
				"Cluster {} produced no subclusters, leaving it unsplit",
				label
			));
			groups.insert(label, group);
			continue;
		}

		ui::info(&format!(
			"Split cluster {} into {} subclusters",
			label,
			children.len()
		));
		groups.extend(children);
	}
	Ok(())
}

/// Stricter HDBSCAN first; k-means when density clustering cannot
/// separate the group
pub fn recursive_cluster(embeddings: &[Embedding], cluster_label: &str) -> Result<SplitOutcome> {
	let cluster_size = embeddings.len();
	let (min_cluster_size, epsilon) = params::recursive_params(cluster_size);
	ui::debug(&format!(
		"Recursive HDBSCAN parameters: min_cluster_size={}, epsilon={}",
		min_cluster_size, epsilon
	));

	let labels = density::run_hdbscan(
		embeddings,
		DensityParams {
			min_cluster_size,
			min_samples: RECURSIVE_MIN_SAMPLES,
			epsilon,
		},
	)?;

	if density::distinct_cluster_count(&labels) > 1 {
		return Ok(SplitOutcome::Density(labels));
	}

	ui::info(&format!(
		"Recursive HDBSCAN couldn't split cluster {} effectively. Falling back to K-means.",
		cluster_label
	));
	let k = params::kmeans_cluster_count(cluster_size);
	Ok(SplitOutcome::Partition(partition::run_kmeans(embeddings, k)?))
}

/// Regroup a split cluster's members under "<parent>.<label>" keys,
/// dropping points the recursive pass marked as noise
pub fn create_subclusters(parent_label: &str, group: &ClusterGroup, labels: &[i32]) -> GroupMap {
	let mut subclusters = GroupMap::new();
	for (pair, &label) in group.pairs.iter().zip(labels) {
		if label == -1 {
			continue;
		}
		subclusters
			.entry(format!("{}.{}", parent_label, label))
			.or_default()
			.push(pair.clone());
	}
	subclusters
}
