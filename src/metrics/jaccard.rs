//! P. Jaccard, "Etude comparative de la distribution florale dans une portion
//! des Alpes et du Jura", Bull Soc Vaudoise Sci Nat, 44, 223-270, 1908.
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Returned when two token sets share no member at all.
///
/// This is not a regular distance: callers must read it as "incomparable",
/// i.e. maximally dissimilar, and never average it with ordinary values.
pub const DISJOINT: f64 = -1.0;

/// Jaccard distance between the whitespace-delimited words of `a` and `b`.
///
/// `1 - |A ∩ B| / |A ∪ B|` on the sets of distinct words, or [`DISJOINT`]
/// when the sets have nothing in common (which includes an empty input).
/// Equal non-empty inputs are at distance 0, even when they hold no word.
pub fn jaccard(a: &[u8], b: &[u8]) -> f64 {
    if a == b && !a.is_empty() {
        return 0.;
    }
    jaccard_sets(words(a), words(b))
}

/// [`jaccard`] over arbitrary tokens.
pub fn jaccard_sets<T: Hash + Eq>(
    a: impl IntoIterator<Item = T>,
    b: impl IntoIterator<Item = T>,
) -> f64 {
    let a: FxHashSet<T> = a.into_iter().collect();
    let b: FxHashSet<T> = b.into_iter().collect();
    let common = a.intersection(&b).count();
    if common == 0 {
        return DISJOINT;
    }
    let union = a.len() + b.len() - common;
    1.0 - common as f64 / union as f64
}

/// Splits on ASCII whitespace, dropping empty words.
pub fn words(s: &[u8]) -> impl Iterator<Item = &[u8]> {
    s.split(|c| c.is_ascii_whitespace()).filter(|w| !w.is_empty())
}
