//! Distances between sequences, and agglomerative clustering on top of them.
//!
//! Pick a [`Metric`] (for weighted alignment, an [`NW`] with a [`CostModel`]),
//! build a [`DistanceMatrix`] over a collection of items, and drive the
//! [`Agglomerative`] engine with it. [`cluster`] does all three in one go.

pub mod cluster;
pub mod cost_model;
pub mod error;
pub mod matrix;
pub mod metrics;
pub mod stats;

#[cfg(feature = "cli")]
pub mod cli;

/// A borrowed sequence of bytes.
pub type Seq<'a> = &'a [u8];
/// An owned sequence of bytes.
pub type Sequence = Vec<u8>;

pub use cluster::{
    cluster, cluster_lazy, cluster_with, compute_cut_height, Agglomerative, ClusterOutput,
    ClusterParams, Clustering, Dendrogram, Linkage, MergeEvent, Node, NodeId,
};
pub use cost_model::{Cost, CostModel};
pub use error::{Error, Result};
pub use matrix::DistanceMatrix;
pub use metrics::*;
