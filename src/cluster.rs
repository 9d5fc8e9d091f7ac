//! Agglomerative clustering of sequences.
//!
//! [`cluster`] is the one-call entry point: it builds a [`DistanceMatrix`]
//! with the given metric, merges until one root remains (or the pass limit is
//! hit), and cuts the resulting dendrogram at
//! `mean + z_score * std_dev` of the merge distances.
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::metrics::Metric;
use crate::stats;

mod agglomerative;
mod dendrogram;

pub use agglomerative::{Agglomerative, Clustering, Linkage, MergeEvent};
pub use dendrogram::{Dendrogram, Node, NodeId};

/// Clustering arguments.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[cfg_attr(feature = "cli", clap(next_help_heading = "Clustering"))]
#[serde(deny_unknown_fields)]
pub struct ClusterParams {
    /// Maximal number of merges. 0 merges everything.
    #[cfg_attr(feature = "cli", clap(long, default_value_t = 0))]
    #[serde(default)]
    pub passes: usize,

    /// Cut the dendrogram this many standard deviations above the mean merge distance.
    #[cfg_attr(feature = "cli", clap(short, long, default_value_t = 0.))]
    #[serde(default)]
    pub z_score: f64,

    #[cfg_attr(feature = "cli", clap(long, default_value_t, value_enum))]
    #[serde(default)]
    pub linkage: Linkage,
}

impl ClusterParams {
    pub fn from_json(json: &str) -> Result<ClusterParams> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A flat partition of the input items, plus the run it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOutput<T> {
    /// Each cluster lists its items in input order. Clusters are ordered by
    /// their first item.
    pub clusters: Vec<Vec<T>>,
    /// Empty when no clustering was needed.
    pub clustering: Clustering,
    pub cut_height: f64,
}

impl<T> ClusterOutput<T> {
    fn unclustered(clusters: Vec<Vec<T>>) -> Self {
        Self {
            clusters,
            clustering: Clustering::default(),
            cut_height: 0.,
        }
    }
}

/// `mean + z_score * std_dev` of the finite `distances`.
///
/// Infinite distances come from incomparable pairs and are ignored. Returns
/// 0 when no finite distance is left.
pub fn compute_cut_height(distances: &[f64], z_score: f64) -> f64 {
    let finite = distances
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .collect::<Vec<_>>();
    if finite.is_empty() {
        return 0.;
    }
    stats::mean(&finite) + z_score * stats::std_dev(&finite)
}

/// Cluster the items of all `groups` under `metric`, using single linkage.
///
/// An input without items gives no clusters. A single group is returned as
/// is, as the only cluster.
pub fn cluster<T, M>(
    groups: &[Vec<T>],
    passes: usize,
    metric: &M,
    z_score: f64,
) -> Result<ClusterOutput<T>>
where
    T: AsRef<[u8]> + Clone + Sync,
    M: Metric + ?Sized,
{
    let params = ClusterParams {
        passes,
        z_score,
        linkage: Linkage::default(),
    };
    cluster_with(groups, &params, metric)
}

/// [`cluster`] with a choice of linkage.
pub fn cluster_with<T, M>(
    groups: &[Vec<T>],
    params: &ClusterParams,
    metric: &M,
) -> Result<ClusterOutput<T>>
where
    T: AsRef<[u8]> + Clone + Sync,
    M: Metric + ?Sized,
{
    if groups.iter().all(|g| g.is_empty()) {
        return Ok(ClusterOutput::unclustered(vec![]));
    }
    if let [group] = groups {
        return Ok(ClusterOutput::unclustered(vec![group.clone()]));
    }

    let items = groups.iter().flatten().cloned().collect::<Vec<T>>();
    #[cfg(feature = "parallel")]
    let matrix = DistanceMatrix::build_par(&items, metric)?;
    #[cfg(not(feature = "parallel"))]
    let matrix = DistanceMatrix::build(&items, metric)?;
    Ok(cut(&items, params, matrix))
}

/// Cluster arbitrary items, computing distances with `distance` as needed.
///
/// `distance` is called once per unordered pair.
pub fn cluster_lazy<T, F>(items: &[T], params: &ClusterParams, mut distance: F) -> ClusterOutput<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> f64,
{
    if items.is_empty() {
        return ClusterOutput::unclustered(vec![]);
    }
    let matrix = DistanceMatrix::from_fn(items.len(), |i, j| distance(&items[i], &items[j]));
    cut(items, params, matrix)
}

fn cut<T: Clone>(items: &[T], params: &ClusterParams, matrix: DistanceMatrix) -> ClusterOutput<T> {
    let clustering = Agglomerative::new(params.linkage, params.passes).run(matrix);
    let cut_height = compute_cut_height(&clustering.merge_distances(), params.z_score);
    let clusters = clustering
        .flat_clusters(cut_height)
        .into_iter()
        .map(|c| c.into_iter().map(|i| items[i].clone()).collect())
        .collect::<Vec<Vec<T>>>();
    info!(
        "{} items in {} clusters at cut height {cut_height:.3}",
        items.len(),
        clusters.len()
    );
    ClusterOutput {
        clusters,
        clustering,
        cut_height,
    }
}
