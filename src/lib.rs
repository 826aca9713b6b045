//! # Corral Library
//!
//! Semantic clustering for QA corpora. Groups (question, answer) pairs by
//! embedding similarity using HDBSCAN, reclaims noise points into secondary
//! clusters, and recursively splits clusters that grew too large.

pub mod clusterer;
pub mod config;
pub mod core;
pub mod embedder;
pub mod format;
pub mod labels;
pub mod params;
pub mod processing;
pub mod ui;
