//! Unit cost edit distance.
//!
//! V. I. Levenshtein, "Binary codes capable of correcting deletions,
//! insertions and reversals", Doklady Akademii Nauk SSSR, 4, 163, 845-848, 1965.

/// The minimal number of single-symbol insertions, deletions and substitutions
/// that transform `a` into `b`.
///
/// Only two rows of the DP table are kept in memory.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev = (0..=b.len()).collect::<Vec<usize>>();
    let mut next = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        next[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let sub = prev[j] + (ca != cb) as usize;
            next[j + 1] = sub.min(prev[j + 1] + 1).min(next[j] + 1);
        }
        std::mem::swap(&mut prev, &mut next);
    }
    prev[b.len()]
}
