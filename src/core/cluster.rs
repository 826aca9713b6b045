//! Cluster accumulators and result records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::QaPair;

/// Mutable accumulator for one cluster, keyed by label in a [`GroupMap`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterGroup {
	/// Questions assigned to this cluster, in assignment order
	pub questions: Vec<String>,
	/// Full QA records, index-aligned with `questions`
	pub pairs: Vec<QaPair>,
}

impl ClusterGroup {
	/// Append one member, keeping both sequences aligned
	pub fn push(&mut self, pair: QaPair) {
		self.questions.push(pair.question.clone());
		self.pairs.push(pair);
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}

/// Clustering state at any stage: label -> accumulator. Labels are flat
/// ("0", "1", "-1" for noise) or hierarchical ("2.1") after a split.
/// BTreeMap keeps iteration deterministic across runs.
pub type GroupMap = BTreeMap<String, ClusterGroup>;

/// One cluster in the final output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
	pub id: i64,
	/// Canonical exemplar (first member); empty for the noise record
	pub representative: Vec<QaPair>,
	pub source: Vec<QaPair>,
	#[serde(default, skip_serializing_if = "is_false")]
	pub is_noise: bool,
}

fn is_false(v: &bool) -> bool {
	!*v
}

/// Complete clustering result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
	pub clusters: Vec<ClusterRecord>,
}

impl ClusteringResult {
	/// Total items across all records
	pub fn total_items(&self) -> usize {
		self.clusters.iter().map(|c| c.source.len()).sum()
	}
}
