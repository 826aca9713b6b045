//! Dataset-size-derived clustering parameters

/// Minimum HDBSCAN cluster size: ln(n)^2, floored at 3 and capped at 100.
/// Sublinear scaling so the minimum grows slowly with corpus size.
pub fn min_cluster_size(total_questions: usize) -> usize {
	let base = (total_questions as f64).ln().powi(2) as usize;
	base.max(3).min(100)
}

/// Stricter parameters for re-splitting one oversized cluster:
/// a smaller minimum cluster size (floor 5) and a tighter selection
/// epsilon (0.2 vs the default 0.3)
pub fn recursive_params(cluster_size: usize) -> (usize, f64) {
	let min_size = ((cluster_size as f64).ln().powf(1.5) as usize).max(5);
	(min_size, 0.2)
}

/// K-means cluster count targeting ~30 questions per partition,
/// bounded to [2, 10]
pub fn kmeans_cluster_count(num_questions: usize) -> usize {
	(num_questions / 30).max(2).min(10)
}
