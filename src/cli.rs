//! Command line arguments for tools built on this crate.
//!
//! Flatten [`MetricArgs`] and [`ClusterParams`](crate::ClusterParams) into a
//! `clap::Parser` struct to get a full clustering configuration.
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cost_model::CostModel;
use crate::error::Result;
use crate::metrics::MetricKind;

/// The metrics selectable by name.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy, ValueEnum, Serialize, Deserialize)]
pub enum MetricName {
    #[default]
    Levenshtein,
    Damerau,
    Hamming,
    Minkowski,
    FrequencyMinkowski,
    Jaccard,
    /// Weighted alignment, see `--cost-model`.
    NeedlemanWunsch,
    Bloom,
}

/// Metric arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[clap(next_help_heading = "Metric")]
pub struct MetricArgs {
    #[clap(short, long, default_value_t, value_enum, display_order = 10)]
    pub metric: MetricName,

    /// Minkowski order.
    #[clap(long, default_value_t = 1, display_order = 10)]
    pub order: i32,

    /// Damerau cost of swapping two adjacent symbols.
    #[clap(long, default_value_t = 0, display_order = 10)]
    pub transposition: usize,

    /// Bloom digest length in bytes.
    #[clap(long, default_value_t = 64, hide_short_help = true)]
    pub digest_len: usize,

    /// A JSON cost model for Needleman-Wunsch. Unit costs when absent.
    #[clap(long, value_parser = clap::value_parser!(PathBuf))]
    pub cost_model: Option<PathBuf>,
}

impl Default for MetricArgs {
    fn default() -> Self {
        Self {
            metric: MetricName::Levenshtein,
            order: 1,
            transposition: 0,
            digest_len: 64,
            cost_model: None,
        }
    }
}

impl MetricArgs {
    /// Resolve the arguments, reading the cost model file if one is given.
    pub fn metric(&self) -> Result<MetricKind> {
        Ok(match self.metric {
            MetricName::Levenshtein => MetricKind::Levenshtein,
            MetricName::Damerau => MetricKind::Damerau {
                transposition: self.transposition,
            },
            MetricName::Hamming => MetricKind::Hamming,
            MetricName::Minkowski => MetricKind::Minkowski { order: self.order },
            MetricName::FrequencyMinkowski => MetricKind::FrequencyMinkowski { order: self.order },
            MetricName::Jaccard => MetricKind::Jaccard,
            MetricName::NeedlemanWunsch => {
                let cost_model = match &self.cost_model {
                    Some(path) => CostModel::from_json(&std::fs::read_to_string(path)?)?,
                    None => CostModel::unit(),
                };
                MetricKind::NeedlemanWunsch { cost_model }
            }
            MetricName::Bloom => MetricKind::Bloom {
                digest_len: self.digest_len,
            },
        })
    }
}
