//! Nearest-pair agglomerative clustering over a [`DistanceMatrix`].
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::dendrogram::{Dendrogram, NodeId};
use crate::matrix::DistanceMatrix;

/// How the distance between two clusters follows from their members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Linkage {
    /// Minimum over all member pairs.
    #[default]
    Single,
    /// Maximum over all member pairs.
    Complete,
    /// Mean over all member pairs (UPGMA).
    Average,
}

impl Linkage {
    /// Lance-Williams update: the distance from the union of clusters `a`
    /// (size `size_a`) and `b` (size `size_b`) to a third cluster, given
    /// `d_a` and `d_b`, the distances from `a` and `b` to it.
    pub fn update(&self, d_a: f64, d_b: f64, size_a: usize, size_b: usize) -> f64 {
        match self {
            Linkage::Single => d_a.min(d_b),
            Linkage::Complete => d_a.max(d_b),
            Linkage::Average => {
                if d_a.is_infinite() || d_b.is_infinite() {
                    return f64::INFINITY;
                }
                let (sa, sb) = (size_a as f64, size_b as f64);
                (d_a * sa + d_b * sb) / (sa + sb)
            }
        }
    }
}

/// One step of the merge loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergeEvent {
    pub left: NodeId,
    pub right: NodeId,
    /// The new node joining `left` and `right`.
    pub node: NodeId,
    pub distance: f64,
    /// Number of items in the new cluster.
    pub size: usize,
}

/// The output of a clustering run: the full merge tree and its history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clustering {
    pub dendrogram: Dendrogram,
    /// Merges in the order they were performed.
    pub merges: Vec<MergeEvent>,
    /// Clusters still live when the run stopped, ordered by smallest item.
    /// A single root unless the run was limited in passes.
    pub roots: Vec<NodeId>,
}

impl Clustering {
    pub fn merge_distances(&self) -> Vec<f64> {
        self.merges.iter().map(|m| m.distance).collect()
    }

    /// Partition the items by cutting every merge above `height`.
    ///
    /// Clusters are ordered by their smallest item; items within a cluster
    /// are sorted.
    pub fn flat_clusters(&self, height: f64) -> Vec<Vec<usize>> {
        let mut clusters = self
            .roots
            .iter()
            .flat_map(|&root| self.dendrogram.cut(root, height))
            .map(|id| self.dendrogram.items(id))
            .collect::<Vec<_>>();
        clusters.sort_unstable_by_key(|c| c[0]);
        clusters
    }
}

/// The merge loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Agglomerative {
    pub linkage: Linkage,
    /// Maximal number of merges. 0 merges until a single root remains.
    pub passes: usize,
}

impl Agglomerative {
    pub fn new(linkage: Linkage, passes: usize) -> Self {
        Self { linkage, passes }
    }

    /// Repeatedly merge the closest two clusters.
    ///
    /// Consumes the matrix, which is collapsed after each merge. Ties are
    /// broken by the lowest pair of slots, and slots are kept ordered by
    /// their smallest item, so the result only depends on the input.
    pub fn run(&self, mut matrix: DistanceMatrix) -> Clustering {
        let n = matrix.len();
        let mut dendrogram = Dendrogram::with_leaves(n);
        // slots[k] is the node currently held by row k of the matrix.
        let mut slots: Vec<NodeId> = (0..n).collect();
        let max_merges = match self.passes {
            0 => n.saturating_sub(1),
            p => p.min(n.saturating_sub(1)),
        };
        let mut merges = Vec::with_capacity(max_merges);

        while merges.len() < max_merges {
            let Some((i, j, distance)) = matrix.nearest_pair() else {
                break;
            };
            let (left, right) = (slots[i], slots[j]);
            let (size_l, size_r) = (dendrogram.size(left), dendrogram.size(right));
            let new_distances = (0..matrix.len())
                .filter(|&k| k != i && k != j)
                .map(|k| {
                    self.linkage
                        .update(matrix.get(i, k), matrix.get(j, k), size_l, size_r)
                })
                .collect::<Vec<_>>();
            matrix.collapse(i, j, &new_distances);

            let node = dendrogram.merge(left, right, distance);
            slots[i] = node;
            slots.remove(j);
            debug!(
                "Merge {left} + {right} -> {node} at {distance} ({} live)",
                slots.len()
            );
            merges.push(MergeEvent {
                left,
                right,
                node,
                distance,
                size: size_l + size_r,
            });
        }

        info!(
            "Clustered {n} items in {} merges into {} roots",
            merges.len(),
            slots.len()
        );
        Clustering {
            dendrogram,
            merges,
            roots: slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Points on a line: 0, 1, 3, 10, 11.
    fn line() -> DistanceMatrix {
        let x = [0., 1., 3., 10., 11.];
        DistanceMatrix::from_fn(x.len(), |i, j| f64::abs(x[i] - x[j]))
    }

    #[test]
    fn single_linkage() {
        let c = Agglomerative::default().run(line());
        assert_eq!(c.merge_distances(), vec![1., 1., 2., 7.]);
        assert_eq!(c.roots, vec![8]);
        assert_eq!(c.dendrogram.size(8), 5);
        assert_eq!(
            c.merges[0],
            MergeEvent {
                left: 0,
                right: 1,
                node: 5,
                distance: 1.,
                size: 2
            }
        );
        // 3 and 4 are merged second, then {0, 1} with 2.
        assert_eq!((c.merges[1].left, c.merges[1].right), (3, 4));
        assert_eq!((c.merges[2].left, c.merges[2].right), (5, 2));
        assert_eq!(c.flat_clusters(5.), vec![vec![0, 1, 2], vec![3, 4]]);
        assert_eq!(c.flat_clusters(1.), vec![vec![0, 1], vec![2], vec![3, 4]]);
        assert_eq!(c.flat_clusters(100.), vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn complete_linkage() {
        let c = Agglomerative::new(Linkage::Complete, 0).run(line());
        assert_eq!(c.merge_distances(), vec![1., 1., 3., 11.]);
    }

    #[test]
    fn average_linkage() {
        let c = Agglomerative::new(Linkage::Average, 0).run(line());
        // {0,1} to 2: (3 + 2) / 2. Final: mean of all 6 cross distances.
        let d = c.merge_distances();
        assert_eq!(d[..3], [1., 1., 2.5]);
        assert!((d[3] - 55. / 6.).abs() < 1e-9);
    }

    #[test]
    fn passes() {
        let c = Agglomerative::new(Linkage::Single, 2).run(line());
        assert_eq!(c.merges.len(), 2);
        assert_eq!(c.roots, vec![5, 2, 6]);
        assert_eq!(
            c.flat_clusters(f64::INFINITY),
            vec![vec![0, 1], vec![2], vec![3, 4]]
        );
        // More passes than possible merges.
        let c = Agglomerative::new(Linkage::Single, 100).run(line());
        assert_eq!(c.merges.len(), 4);
    }

    #[test]
    fn degenerate() {
        let c = Agglomerative::default().run(DistanceMatrix::from_fn(0, |_, _| 0.));
        assert!(c.merges.is_empty() && c.roots.is_empty());
        assert!(c.flat_clusters(0.).is_empty());
        let c = Agglomerative::default().run(DistanceMatrix::from_fn(1, |_, _| 0.));
        assert!(c.merges.is_empty());
        assert_eq!(c.flat_clusters(0.), vec![vec![0]]);
    }

    #[test]
    fn infinite_distances_merge_last() {
        // Items 0 and 2 are incomparable.
        let m = DistanceMatrix::from_fn(3, |i, j| if i + j == 2 { -1. } else { 4. });
        let c = Agglomerative::default().run(m);
        assert_eq!(c.merge_distances(), vec![4., 4.]);
        let m = DistanceMatrix::from_fn(3, |_, _| -1.);
        for linkage in [Linkage::Single, Linkage::Complete, Linkage::Average] {
            let c = Agglomerative::new(linkage, 0).run(m.clone());
            assert_eq!(c.merge_distances(), vec![f64::INFINITY; 2]);
        }
    }

    #[test]
    fn linkage_update() {
        assert_eq!(Linkage::Single.update(2., 5., 1, 3), 2.);
        assert_eq!(Linkage::Complete.update(2., 5., 1, 3), 5.);
        assert_eq!(Linkage::Average.update(2., 6., 1, 3), 5.);
    }
}
