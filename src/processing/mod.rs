//! Clustering algorithms

pub mod density;
pub mod partition;
pub mod reclaim;
pub mod split;
