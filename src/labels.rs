//! Cluster label to numeric id conversion

use xxhash_rust::xxh3::xxh3_64;

/// Label under which HDBSCAN noise points are grouped
pub const NOISE_LABEL: &str = "-1";

/// True for the unassigned sentinel: "-1" exactly, or any label parsing
/// to integer -1
pub fn is_noise_label(label: &str) -> bool {
	label == NOISE_LABEL || label.parse::<i64>() == Ok(-1)
}

/// Convert a cluster label to a numeric id for external consumption.
/// Total: malformed labels take an xxh3-derived fallback, so conversion
/// never fails. xxh3 is unseeded, which keeps fallback ids stable across
/// process runs.
///
/// Flat integer labels map to `value + 1` (1-based ids), hierarchical
/// "base.sub" labels to `base * 1000 + sub + 1`.
pub fn label_to_id(label: &str) -> i64 {
	match label.split_once('.') {
		Some((base, sub)) => {
			// more than one separator is unparsable
			if sub.contains('.') {
				return hierarchical_fallback(label);
			}
			match (base.parse::<i64>(), sub.parse::<f64>()) {
				(Ok(b), Ok(s)) if s.is_finite() => b * 1000 + s as i64 + 1,
				_ => hierarchical_fallback(label),
			}
		}
		None => flat_label_to_id(label),
	}
}

fn flat_label_to_id(label: &str) -> i64 {
	if let Ok(value) = label.parse::<i64>() {
		return value + 1;
	}
	// exponential notation like "1e6" parses as a float and truncates
	if label.contains(['e', 'E']) {
		if let Ok(value) = label.parse::<f64>() {
			if value.is_finite() {
				return value as i64 + 1;
			}
		}
	}
	(xxh3_64(label.as_bytes()) % 1000) as i64 + 1
}

fn hierarchical_fallback(label: &str) -> i64 {
	(xxh3_64(label.as_bytes()) % 10000) as i64 + 1000
}
