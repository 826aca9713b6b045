//! Final result assembly

use crate::core::{ClusterRecord, ClusteringResult, GroupMap};
use crate::labels::{is_noise_label, label_to_id};

/// Convert the final group mapping into output records. Empty groups are
/// skipped. When `keep_noise` is set the sentinel group becomes a single
/// trailing record with fixed id 0 and no representative; otherwise any
/// leftover noise group is formatted like a regular cluster so its members
/// are never dropped.
pub fn format_clusters(groups: GroupMap, keep_noise: bool) -> ClusteringResult {
	let mut clusters = Vec::new();
	let mut noise_cluster = None;

	for (label, group) in groups {
		if group.is_empty() {
			continue;
		}

		if is_noise_label(&label) && keep_noise {
			noise_cluster = Some(ClusterRecord {
				id: 0,
				representative: Vec::new(),
				source: group.pairs,
				is_noise: true,
			});
			continue;
		}

		clusters.push(ClusterRecord {
			id: label_to_id(&label),
			representative: vec![group.pairs[0].clone()],
			source: group.pairs,
			is_noise: false,
		});
	}

	if let Some(noise) = noise_cluster {
		clusters.push(noise);
	}

	ClusteringResult { clusters }
}
