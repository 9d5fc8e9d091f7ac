//! Minkowski-style distances between symbol sequences.
//!
//! NOTE: none of the functions here take the `order`-th root of the sum.
//! They return raw power sums, so `order = 2` yields a squared distance, not
//! the Euclidean norm. This matches the values downstream tooling was built
//! against (e.g. 23 / 265 / 3059 for orders 1 / 2 / 3 on
//! `"hello my name is jose"` vs `"hello m yname is jose"`).
use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::error::{Error, Result};

fn check_order(order: i32) -> Result<()> {
    if order <= 0 {
        return Err(Error::InvalidOrder(order));
    }
    Ok(())
}

/// Point-by-point Minkowski distance, computed over the edit graph.
///
/// Symbols are compared by their code point. Every step of the alignment at
/// cell `(i, j)` (substitution, insertion or deletion) costs
/// `|a[i-1] - b[j-1]|^order`, and an exact match costs 0. The first row and
/// column hold their index, as in an edit distance. The result is the cheapest
/// path to the bottom-right corner.
///
/// When either input is empty the length of the other is returned.
pub fn minkowski<T: Copy + Into<u32>>(a: &[T], b: &[T], order: i32) -> Result<f64> {
    check_order(order)?;
    Ok(edit_graph_power_sum(a, b, order))
}

fn edit_graph_power_sum<T: Copy + Into<u32>>(a: &[T], b: &[T], order: i32) -> f64 {
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len()) as f64;
    }

    let mut prev = (0..=b.len()).map(|j| j as f64).collect::<Vec<f64>>();
    let mut next = vec![0.; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        next[0] = (i + 1) as f64;
        let ca: u32 = ca.into();
        for (j, &cb) in b.iter().enumerate() {
            let cb: u32 = cb.into();
            let step = (ca.abs_diff(cb) as f64).powi(order);
            // A match has `step == 0` already; the indel steps still use it.
            next[j + 1] = (prev[j] + step)
                .min(prev[j + 1] + step)
                .min(next[j] + step);
        }
        std::mem::swap(&mut prev, &mut next);
    }
    prev[b.len()]
}

/// [`minkowski`] with `order = 1`.
pub fn manhattan<T: Copy + Into<u32>>(a: &[T], b: &[T]) -> f64 {
    edit_graph_power_sum(a, b, 1)
}

/// [`minkowski`] with `order = 2`. Not square-rooted.
pub fn euclid<T: Copy + Into<u32>>(a: &[T], b: &[T]) -> f64 {
    edit_graph_power_sum(a, b, 2)
}

/// Power sum over symbol frequency vectors.
///
/// Counts every distinct symbol in `a` and `b` and returns
/// `sum_s |count_a(s) - count_b(s)|^order`. Since only the counts matter, any
/// permutation of a sequence is at distance 0 from it.
pub fn frequency_minkowski<T: Hash + Eq>(a: &[T], b: &[T], order: i32) -> Result<f64> {
    check_order(order)?;
    let mut counts: FxHashMap<&T, i64> = FxHashMap::default();
    for x in a {
        *counts.entry(x).or_default() += 1;
    }
    for x in b {
        *counts.entry(x).or_default() -= 1;
    }
    Ok(counts
        .values()
        .map(|&d| (d.unsigned_abs() as f64).powi(order))
        .sum())
}
