//! Symmetric pairwise distances over a fixed set of items.
use log::{debug, trace};
use std::convert::Infallible;

use crate::error::{Error, Result};
use crate::metrics::Metric;

/// Symmetric, zero-diagonal distance matrix in condensed lower-triangular form.
///
/// For `n` items the condensed vector holds `n(n-1)/2` entries: row `i`
/// (for `i >= 1`) stores the distances to items `0..i`.
///
/// Negative distances, i.e. [`DISJOINT`](crate::metrics::DISJOINT) from
/// Jaccard, mean "incomparable" and are stored as `f64::INFINITY`, so that
/// such pairs are merged last. NaN is stored as `f64::INFINITY` too.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    condensed: Vec<f64>,
    n: usize,
}

fn normalize(d: f64) -> f64 {
    if d < 0. || d.is_nan() {
        f64::INFINITY
    } else {
        d
    }
}

fn condensed_len(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

impl DistanceMatrix {
    /// Fill the matrix by calling `f(i, j)` once for every pair `j < i`.
    pub fn try_from_fn(n: usize, f: impl FnMut(usize, usize) -> Result<f64>) -> Result<Self> {
        Self::fill(n, f)
    }

    /// Infallible version of [`DistanceMatrix::try_from_fn`].
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        match Self::fill::<Infallible>(n, |i, j| Ok(f(i, j))) {
            Ok(m) => m,
            Err(never) => match never {},
        }
    }

    fn fill<E>(
        n: usize,
        mut f: impl FnMut(usize, usize) -> std::result::Result<f64, E>,
    ) -> std::result::Result<Self, E> {
        let mut condensed = Vec::with_capacity(condensed_len(n));
        for i in 1..n {
            for j in 0..i {
                let d = f(i, j)?;
                trace!("d({i}, {j}) = {d}");
                condensed.push(normalize(d));
            }
        }
        debug!("Built distance matrix over {n} items");
        Ok(Self { condensed, n })
    }

    /// Distances between all pairs of `items` under `metric`.
    pub fn build<S, M>(items: &[S], metric: &M) -> Result<Self>
    where
        S: AsRef<[u8]>,
        M: Metric + ?Sized,
    {
        Self::try_from_fn(items.len(), |i, j| {
            metric.distance(items[i].as_ref(), items[j].as_ref())
        })
    }

    /// [`DistanceMatrix::build`], with rows computed in parallel.
    ///
    /// Every row is produced by a single task, so workers never share cells.
    #[cfg(feature = "parallel")]
    pub fn build_par<S, M>(items: &[S], metric: &M) -> Result<Self>
    where
        S: AsRef<[u8]> + Sync,
        M: Metric + ?Sized,
    {
        use rayon::prelude::*;
        let n = items.len();
        let condensed = (1..n)
            .into_par_iter()
            .map(|i| {
                (0..i)
                    .map(|j| {
                        metric
                            .distance(items[i].as_ref(), items[j].as_ref())
                            .map(normalize)
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<f64>>();
        debug!("Built distance matrix over {n} items in parallel");
        Ok(Self { condensed, n })
    }

    /// Wrap a condensed lower-triangular vector, as produced by
    /// [`DistanceMatrix::condensed`].
    pub fn from_condensed(condensed: Vec<f64>, n: usize) -> Result<Self> {
        if condensed.len() != condensed_len(n) {
            return Err(Error::MatrixShape {
                len: condensed.len(),
                n,
            });
        }
        Ok(Self {
            condensed: condensed.into_iter().map(normalize).collect(),
            n,
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn condensed(&self) -> &[f64] {
        &self.condensed
    }

    /// Distance between items `i` and `j`; 0 when `i == j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "({i}, {j}) out of range {}", self.n);
        if i == j {
            return 0.;
        }
        self.condensed[Self::index(i, j)]
    }

    fn index(i: usize, j: usize) -> usize {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        hi * (hi - 1) / 2 + lo
    }

    /// The closest pair `(i, j, distance)` with `i < j`.
    ///
    /// Ties go to the lexicographically smallest `(i, j)`. `None` when fewer
    /// than two items remain.
    pub fn nearest_pair(&self) -> Option<(usize, usize, f64)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..self.n {
            for j in i + 1..self.n {
                let d = self.get(i, j);
                if best.map_or(true, |(_, _, b)| d.total_cmp(&b).is_lt()) {
                    best = Some((i, j, d));
                }
            }
        }
        best
    }

    /// Replace items `i` and `j` (`i < j`) by a single merged item.
    ///
    /// `new_distances` are the distances from the merged item to every other
    /// item, in order, skipping `i` and `j`. The merged item takes slot `i`;
    /// slot `j` is removed and later items shift down by one.
    pub fn collapse(&mut self, i: usize, j: usize, new_distances: &[f64]) {
        assert!(i < j && j < self.n, "invalid collapse ({i}, {j}) of {}", self.n);
        assert_eq!(new_distances.len(), self.n - 2);

        let others = (0..self.n).filter(|&k| k != i && k != j);
        for (k, &d) in others.zip(new_distances) {
            self.condensed[Self::index(i, k)] = normalize(d);
        }

        // Compact in place, dropping row and column `j`. Reads never lag
        // behind writes, so this is safe on a single buffer.
        let mut w = 0;
        for r in 1..self.n {
            for c in 0..r {
                if r == j || c == j {
                    continue;
                }
                self.condensed[w] = self.condensed[Self::index(r, c)];
                w += 1;
            }
        }
        self.condensed.truncate(w);
        self.n -= 1;
        debug_assert_eq!(self.condensed.len(), condensed_len(self.n));
    }
}
