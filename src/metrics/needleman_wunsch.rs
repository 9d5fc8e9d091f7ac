//! S. B. Needleman and C. D. Wunsch, "A general method applicable to the
//! search for similarities in the amino acid sequence of two proteins", Jrnl
//! Molec Biol, 48, 443-453, 1970.
//!
//! Global alignment cost under a [`CostModel`]: a Levenshtein DP where the
//! unit costs are replaced by the model's substitution and indel costs.
use crate::cost_model::{Cost, CostModel};
use crate::Seq;

/// Needleman-Wunsch aligner.
///
/// Holds its own cost model so that concurrent alignments with different
/// tables never share mutable state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NW {
    /// The cost model to use.
    pub cm: CostModel,
}

impl NW {
    pub fn new(cm: CostModel) -> Self {
        Self { cm }
    }

    /// The minimal total cost of a global alignment of `a` and `b`.
    ///
    /// Not normalized by length. Aligning against an empty sequence costs the
    /// sum of the indel costs of the other.
    pub fn cost(&self, a: Seq, b: Seq) -> Cost {
        needleman_wunsch(a, b, &self.cm)
    }
}

/// See [`NW::cost`].
pub fn needleman_wunsch(a: Seq, b: Seq, cm: &CostModel) -> Cost {
    // Row 0: only insertions of b.
    let mut prev = Vec::with_capacity(b.len() + 1);
    prev.push(0.);
    for (j, &cb) in b.iter().enumerate() {
        prev.push(prev[j] + cm.ins_cost(cb));
    }
    let mut next = vec![0.; b.len() + 1];

    for &ca in a {
        let del = cm.ins_cost(ca);
        next[0] = prev[0] + del;
        for (j, &cb) in b.iter().enumerate() {
            let sub = prev[j] + cm.sub_cost(ca, cb);
            let del = prev[j + 1] + del;
            let ins = next[j] + cm.ins_cost(cb);
            next[j + 1] = sub.min(del).min(ins);
        }
        std::mem::swap(&mut prev, &mut next);
    }
    prev[b.len()]
}
