//! Core domain types

pub mod cluster;
pub mod embedding;
pub mod qa;

pub use cluster::{ClusterGroup, ClusterRecord, ClusteringResult, GroupMap};
pub use embedding::Embedding;
pub use qa::QaPair;
