//! Distance functions between two sequences.
//!
//! Every metric only reads its inputs and allocates working buffers linear in
//! the input lengths. The [`Metric`] trait gives them one uniform signature so
//! they can be handed to the distance matrix and clustering code as values.
use serde::{Deserialize, Serialize};

use crate::cost_model::CostModel;
use crate::error::Result;
use crate::Seq;

pub mod bloom;
pub mod damerau;
pub mod hamming;
pub mod jaccard;
pub mod levenshtein;
pub mod minkowski;
pub mod needleman_wunsch;

pub use bloom::{bloom, BloomDigest};
pub use damerau::{damerau, damerau_with_transposition_cost};
pub use hamming::hamming;
pub use jaccard::{jaccard, jaccard_sets, DISJOINT};
pub use levenshtein::levenshtein;
pub use minkowski::{euclid, frequency_minkowski, manhattan, minkowski};
pub use needleman_wunsch::{needleman_wunsch, NW};

/// A distance between two sequences.
///
/// Implemented by [`MetricKind`], [`NW`], and any
/// `Fn(Seq, Seq) -> Result<f64>` closure.
pub trait Metric: Sync {
    fn distance(&self, a: Seq, b: Seq) -> Result<f64>;
}

impl<F> Metric for F
where
    F: Fn(Seq, Seq) -> Result<f64> + Sync,
{
    fn distance(&self, a: Seq, b: Seq) -> Result<f64> {
        self(a, b)
    }
}

impl Metric for NW {
    fn distance(&self, a: Seq, b: Seq) -> Result<f64> {
        Ok(self.cost(a, b))
    }
}

/// The built-in metrics, selectable from configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum MetricKind {
    #[default]
    Levenshtein,
    /// Cost of swapping two adjacent symbols. 0, the default, makes swaps free.
    Damerau {
        #[serde(default)]
        transposition: usize,
    },
    Hamming,
    /// Raw power sum, see [`minkowski`].
    Minkowski { order: i32 },
    /// See [`frequency_minkowski`].
    FrequencyMinkowski { order: i32 },
    /// May return [`DISJOINT`].
    Jaccard,
    NeedlemanWunsch { cost_model: CostModel },
    Bloom { digest_len: usize },
}

impl MetricKind {
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Levenshtein => "levenshtein",
            MetricKind::Damerau { .. } => "damerau",
            MetricKind::Hamming => "hamming",
            MetricKind::Minkowski { .. } => "minkowski",
            MetricKind::FrequencyMinkowski { .. } => "frequency_minkowski",
            MetricKind::Jaccard => "jaccard",
            MetricKind::NeedlemanWunsch { .. } => "needleman_wunsch",
            MetricKind::Bloom { .. } => "bloom",
        }
    }

    pub fn from_json(json: &str) -> Result<MetricKind> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Metric for MetricKind {
    fn distance(&self, a: Seq, b: Seq) -> Result<f64> {
        Ok(match self {
            MetricKind::Levenshtein => levenshtein(a, b) as f64,
            MetricKind::Damerau { transposition } => {
                damerau_with_transposition_cost(a, b, *transposition) as f64
            }
            MetricKind::Hamming => hamming(a, b)? as f64,
            MetricKind::Minkowski { order } => minkowski(a, b, *order)?,
            MetricKind::FrequencyMinkowski { order } => frequency_minkowski(a, b, *order)?,
            MetricKind::Jaccard => jaccard(a, b),
            MetricKind::NeedlemanWunsch { cost_model } => needleman_wunsch(a, b, cost_model),
            MetricKind::Bloom { digest_len } => bloom(a, b, *digest_len)?,
        })
    }
}
