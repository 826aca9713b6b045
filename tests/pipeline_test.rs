// End-to-end pipeline tests with a deterministic in-memory embedding source

use std::collections::HashMap;

use anyhow::{bail, Result};
use corral::clusterer::HdbscanQaClusterer;
use corral::config::ClusterConfig;
use corral::core::{Embedding, QaPair};
use corral::embedder::EmbeddingSource;

/// Embedding source backed by a fixed question -> vector table
struct PlantedEmbedder {
	vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingSource for PlantedEmbedder {
	fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>> {
		texts
			.iter()
			.map(|t| match self.vectors.get(t) {
				Some(v) => Ok(Embedding::raw(v.clone())),
				None => bail!("no embedding for {:?}", t),
			})
			.collect()
	}
}

/// Test corpus under construction: QA pairs plus their planted vectors
#[derive(Default)]
struct Corpus {
	pairs: Vec<QaPair>,
	vectors: HashMap<String, Vec<f32>>,
}

impl Corpus {
	/// Add `count` points in a tight clump around (cx, cy)
	fn blob(&mut self, name: &str, cx: f32, cy: f32, count: usize) -> &mut Self {
		for i in 0..count {
			let question = format!("{} question {}", name, i);
			let vector = vec![
				cx + (i % 10) as f32 * 0.001,
				cy + (i / 10) as f32 * 0.001,
			];
			self.vectors.insert(question.clone(), vector);
			self.pairs.push(QaPair::new(question, format!("{} answer {}", name, i)));
		}
		self
	}

	/// Add `count` isolated points with geometrically growing spacing,
	/// so the density pass cannot bind any subset of them together
	fn scattered(&mut self, count: usize) -> &mut Self {
		for i in 0..count {
			let question = format!("stray question {}", i);
			let x = 200.0 + 100.0 * 1.8_f32.powi(i as i32);
			self.vectors.insert(question.clone(), vec![x, 0.0]);
			self.pairs.push(QaPair::new(question, format!("stray answer {}", i)));
		}
		self
	}

	fn into_clusterer(self, config: ClusterConfig) -> (HdbscanQaClusterer<PlantedEmbedder>, Vec<QaPair>) {
		let source = PlantedEmbedder { vectors: self.vectors };
		(HdbscanQaClusterer::new(source, config), self.pairs)
	}
}

fn small_corpus_config() -> ClusterConfig {
	ClusterConfig {
		min_cluster_size: Some(5),
		min_samples: Some(2),
		..ClusterConfig::default()
	}
}

#[test]
fn empty_input_yields_empty_result() {
	let source = PlantedEmbedder { vectors: HashMap::new() };
	let clusterer = HdbscanQaClusterer::new(source, ClusterConfig::default());

	let result = clusterer.cluster(Vec::new()).unwrap();
	assert!(result.clusters.is_empty());
}

#[test]
fn method_name_is_hdbscan() {
	let source = PlantedEmbedder { vectors: HashMap::new() };
	let clusterer = HdbscanQaClusterer::new(source, ClusterConfig::default());
	assert_eq!(clusterer.method(), "hdbscan");
}

#[test]
fn two_separated_blobs_become_two_clusters() {
	let mut corpus = Corpus::default();
	corpus.blob("billing", 0.0, 0.0, 25).blob("login", 10.0, 10.0, 25);
	let (clusterer, pairs) = corpus.into_clusterer(small_corpus_config());

	let result = clusterer.cluster(pairs).unwrap();

	assert_eq!(result.clusters.len(), 2);
	assert_eq!(result.total_items(), 50);
	for record in &result.clusters {
		assert_eq!(record.source.len(), 25);
		assert_eq!(record.representative.len(), 1);
		// the representative is the first member in input order
		assert_eq!(record.representative[0], record.source[0]);
		assert!(!record.is_noise);
	}
	let mut ids: Vec<i64> = result.clusters.iter().map(|c| c.id).collect();
	ids.sort_unstable();
	assert_eq!(ids, vec![1, 2]);
}

#[test]
fn keep_noise_preserves_outlier_as_trailing_record() {
	let mut corpus = Corpus::default();
	corpus
		.blob("billing", 0.0, 0.0, 25)
		.blob("login", 10.0, 10.0, 25)
		.blob("outlier", 100.0, 100.0, 1);
	let config = ClusterConfig {
		keep_noise: true,
		..small_corpus_config()
	};
	let (clusterer, pairs) = corpus.into_clusterer(config);

	let result = clusterer.cluster(pairs).unwrap();

	assert_eq!(result.clusters.len(), 3);
	assert_eq!(result.total_items(), 51);

	let noise = result.clusters.last().unwrap();
	assert!(noise.is_noise, "noise record must come last");
	assert_eq!(noise.id, 0);
	assert!(noise.representative.is_empty());
	assert_eq!(noise.source.len(), 1);
	assert_eq!(noise.source[0].question, "outlier question 0");

	for record in &result.clusters[..2] {
		assert!(!record.is_noise);
		assert_eq!(record.source.len(), 25);
	}
}

#[test]
fn noise_is_reclaimed_into_secondary_clusters() {
	let mut corpus = Corpus::default();
	corpus
		.blob("billing", 0.0, 0.0, 25)
		.blob("login", 10.0, 10.0, 25)
		.scattered(12);
	let (clusterer, pairs) = corpus.into_clusterer(small_corpus_config());

	let result = clusterer.cluster(pairs).unwrap();

	// 12 strays exceed 2 * min_cluster_size, so they are re-clustered
	// into k = max(2, 12 / 10) = 2 secondary clusters
	assert_eq!(result.clusters.len(), 4);
	assert_eq!(result.total_items(), 62);
	assert!(result.clusters.iter().all(|c| !c.is_noise));

	let mut ids: Vec<i64> = result.clusters.iter().map(|c| c.id).collect();
	ids.sort_unstable();
	// secondary clusters are labeled after the existing ones
	assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn clustering_is_deterministic() {
	let build = || {
		let mut corpus = Corpus::default();
		corpus
			.blob("billing", 0.0, 0.0, 25)
			.blob("login", 10.0, 10.0, 25)
			.scattered(12);
		corpus.into_clusterer(small_corpus_config())
	};

	let (clusterer, pairs) = build();
	let first = clusterer.cluster(pairs).unwrap();
	let (clusterer, pairs) = build();
	let second = clusterer.cluster(pairs).unwrap();

	assert_eq!(first, second);
}

#[test]
fn result_serializes_to_expected_shape() {
	let mut corpus = Corpus::default();
	corpus
		.blob("billing", 0.0, 0.0, 25)
		.blob("login", 10.0, 10.0, 25)
		.blob("outlier", 100.0, 100.0, 1);
	let config = ClusterConfig {
		keep_noise: true,
		..small_corpus_config()
	};
	let (clusterer, pairs) = corpus.into_clusterer(config);

	let result = clusterer.cluster(pairs).unwrap();
	let json = serde_json::to_value(&result).unwrap();

	let records = json["clusters"].as_array().unwrap();
	assert_eq!(records.len(), 3);
	for record in &records[..2] {
		assert!(record.get("is_noise").is_none());
		assert!(record["id"].as_i64().unwrap() > 0);
		assert_eq!(record["representative"].as_array().unwrap().len(), 1);
		assert!(record["source"][0].get("question").is_some());
		assert!(record["source"][0].get("answer").is_some());
	}
	assert_eq!(records[2]["is_noise"], serde_json::Value::Bool(true));
}

#[test]
fn misaligned_embedding_source_is_rejected() {
	/// Returns one vector too few
	struct ShortEmbedder;
	impl EmbeddingSource for ShortEmbedder {
		fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>> {
			Ok(texts[1..].iter().map(|_| Embedding::raw(vec![0.0, 0.0])).collect())
		}
	}

	let clusterer = HdbscanQaClusterer::new(ShortEmbedder, ClusterConfig::default());
	let pairs = vec![QaPair::new("q1", "a1"), QaPair::new("q2", "a2")];
	assert!(clusterer.cluster(pairs).is_err());
}

#[test]
fn embedding_failure_propagates() {
	struct FailingEmbedder;
	impl EmbeddingSource for FailingEmbedder {
		fn embed(&self, _texts: &[String]) -> Result<Vec<Embedding>> {
			bail!("embedding backend unavailable")
		}
	}

	let clusterer = HdbscanQaClusterer::new(FailingEmbedder, ClusterConfig::default());
	let err = clusterer.cluster(vec![QaPair::new("q", "a")]).unwrap_err();
	assert!(err.to_string().contains("unavailable"));
}
