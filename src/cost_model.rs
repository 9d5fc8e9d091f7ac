//! This module contains the `CostModel` used by the weighted Needleman-Wunsch distance.
//!
//! A cost model has a default insertion/deletion cost, a default substitution
//! cost, and sparse per-pair and per-symbol overrides on top of those.
//! Substitution overrides are symmetric: `set_conversion(a, b, c)` also sets
//! the cost of converting `b` into `a`, so alignments are symmetric in their
//! arguments.
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Type for storing costs. Weighted alignments need fractional costs.
pub type Cost = f64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CostModelConfig", into = "CostModelConfig")]
pub struct CostModel {
    /// Cost of inserting or deleting a symbol without an override.
    pub ins: Cost,
    /// Cost of substituting two distinct symbols without an override.
    pub sub: Cost,
    /// Overrides keyed by `(min(a, b), max(a, b))`.
    conversions: FxHashMap<(u8, u8), Cost>,
    insertions: FxHashMap<u8, Cost>,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::unit()
    }
}

impl CostModel {
    /// A cost model with uniform insertion and substitution costs.
    pub fn new(ins: Cost, sub: Cost) -> CostModel {
        CostModel {
            ins,
            sub,
            conversions: FxHashMap::default(),
            insertions: FxHashMap::default(),
        }
    }

    /// Levenshtein costs: sub=indel=1.
    pub fn unit() -> CostModel {
        Self::new(1., 1.)
    }

    /// Install or replace the cost of converting `a` into `b` (and `b` into `a`).
    pub fn set_conversion(&mut self, a: u8, b: u8, cost: Cost) -> &mut Self {
        self.conversions.insert(pair(a, b), cost);
        self
    }

    /// Install or replace the cost of inserting or deleting `symbol`.
    ///
    /// The cost depends on the gap symbol only, not on its neighbours.
    pub fn set_insertion(&mut self, symbol: u8, cost: Cost) -> &mut Self {
        self.insertions.insert(symbol, cost);
        self
    }

    /// The cost of substituting `a` by `b`. Always 0 when `a == b`.
    pub fn sub_cost(&self, a: u8, b: u8) -> Cost {
        if a == b {
            return 0.;
        }
        if self.conversions.is_empty() {
            return self.sub;
        }
        self.conversions
            .get(&pair(a, b))
            .copied()
            .unwrap_or(self.sub)
    }

    /// The cost of inserting or deleting `symbol`.
    pub fn ins_cost(&self, symbol: u8) -> Cost {
        if self.insertions.is_empty() {
            return self.ins;
        }
        self.insertions.get(&symbol).copied().unwrap_or(self.ins)
    }

    /// Number of installed substitution overrides.
    pub fn num_conversions(&self) -> usize {
        self.conversions.len()
    }

    pub fn from_json(json: &str) -> Result<CostModel> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn pair(a: u8, b: u8) -> (u8, u8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// On-disk form of a `CostModel`. Symbols are written as one-character strings.
///
/// ```json
/// {
///   "insertion": 0.1,
///   "substitution": 1.0,
///   "conversions": [{ "from": "a", "to": "@", "cost": 0.1 }],
///   "insertions": [{ "symbol": " ", "cost": 0.01 }]
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CostModelConfig {
    insertion: Cost,
    substitution: Cost,
    #[serde(default)]
    conversions: Vec<ConversionEntry>,
    #[serde(default)]
    insertions: Vec<InsertionEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ConversionEntry {
    from: String,
    to: String,
    cost: Cost,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct InsertionEntry {
    symbol: String,
    cost: Cost,
}

fn parse_symbol(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [c] => Ok(*c),
        _ => Err(Error::Config(format!(
            "cost model symbols must be a single byte, got {s:?}"
        ))),
    }
}

fn symbol_string(c: u8) -> String {
    (c as char).to_string()
}

impl TryFrom<CostModelConfig> for CostModel {
    type Error = Error;

    fn try_from(config: CostModelConfig) -> Result<Self> {
        let mut cm = CostModel::new(config.insertion, config.substitution);
        for c in &config.conversions {
            cm.set_conversion(parse_symbol(&c.from)?, parse_symbol(&c.to)?, c.cost);
        }
        for i in &config.insertions {
            cm.set_insertion(parse_symbol(&i.symbol)?, i.cost);
        }
        Ok(cm)
    }
}

impl From<CostModel> for CostModelConfig {
    fn from(cm: CostModel) -> Self {
        // Sorted so that serialized models are stable.
        CostModelConfig {
            insertion: cm.ins,
            substitution: cm.sub,
            conversions: cm
                .conversions
                .into_iter()
                .sorted_by_key(|&(k, _)| k)
                .map(|((from, to), cost)| ConversionEntry {
                    from: symbol_string(from),
                    to: symbol_string(to),
                    cost,
                })
                .collect(),
            insertions: cm
                .insertions
                .into_iter()
                .sorted_by_key(|&(k, _)| k)
                .map(|(symbol, cost)| InsertionEntry {
                    symbol: symbol_string(symbol),
                    cost,
                })
                .collect(),
        }
    }
}
