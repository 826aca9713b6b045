//! Clustering options and tuning constants

use serde::{Deserialize, Serialize};

// === Density Defaults ===
pub const DEFAULT_MIN_SAMPLES: usize = 5;
pub const DEFAULT_EPSILON: f64 = 0.3;
pub const DEFAULT_SELECTION_METHOD: &str = "eom";

// === Recursive Split ===
pub const RECURSIVE_MIN_SAMPLES: usize = 3;
pub const LARGE_CLUSTER_FRACTION: f64 = 0.2;
pub const LARGE_CLUSTER_FLOOR: usize = 50;

// === Partition Clustering ===
pub const KMEANS_SEED: u64 = 42;
pub const KMEANS_MAX_ITERATIONS: u64 = 100;
pub const KMEANS_TOLERANCE: f64 = 1e-4;

/// Caller-supplied clustering options. Unset fields fall back to defaults
/// or to dataset-size-derived values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterConfig {
	/// Override for the computed minimum cluster size
	pub min_cluster_size: Option<usize>,
	/// Minimum sample density (default 5)
	pub min_samples: Option<usize>,
	/// Cluster selection looseness (default 0.3)
	pub cluster_selection_epsilon: Option<f64>,
	/// Cluster selection method; the density backend implements "eom" only
	pub cluster_selection_method: Option<String>,
	/// Keep noise points as an explicit output record instead of
	/// reclaiming them
	#[serde(default)]
	pub keep_noise: bool,
}

impl ClusterConfig {
	pub fn min_samples(&self) -> usize {
		self.min_samples.unwrap_or(DEFAULT_MIN_SAMPLES)
	}

	pub fn epsilon(&self) -> f64 {
		self.cluster_selection_epsilon.unwrap_or(DEFAULT_EPSILON)
	}

	pub fn selection_method(&self) -> &str {
		self.cluster_selection_method
			.as_deref()
			.unwrap_or(DEFAULT_SELECTION_METHOD)
	}
}
