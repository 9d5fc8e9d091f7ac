//! Edit distance tolerating adjacent transpositions.
//!
//! Fred J. Damerau, "A technique for computer detection and correction of
//! spelling errors", Communications of the ACM, 3, 7, 171-176, March 1964.

/// Edit distance where swapping two adjacent symbols is free.
///
/// `damerau("abcd", "acbd") == 0`. Insertions, deletions and substitutions
/// cost 1 as in [`levenshtein`](super::levenshtein).
pub fn damerau<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    damerau_with_transposition_cost(a, b, 0)
}

/// Restricted (optimal string alignment) Damerau distance with a custom cost
/// for swapping two adjacent symbols.
///
/// With `transposition = 1` this is the textbook OSA distance, which is 0 iff
/// `a == b`. Every substring is edited at most once, so a swapped pair cannot
/// be edited further.
pub fn damerau_with_transposition_cost<T: PartialEq>(
    a: &[T],
    b: &[T],
    transposition: usize,
) -> usize {
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    // Rows i-2, i-1 and i of the DP table.
    let mut prev2 = vec![0usize; b.len() + 1];
    let mut prev = (0..=b.len()).collect::<Vec<usize>>();
    let mut next = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        next[0] = i;
        for j in 1..=b.len() {
            let cost = (a[i - 1] != b[j - 1]) as usize;
            let mut d = (prev[j - 1] + cost).min(prev[j] + 1).min(next[j - 1] + 1);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d = d.min(prev2[j - 2] + transposition);
            }
            next[j] = d;
        }
        // Rotate: prev2 <- prev <- next.
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut next);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_swaps() {
        assert_eq!(damerau(b"abcd", b"acbd"), 0);
        assert_eq!(damerau(b"hello my name is jose", b"hello m yname is jose"), 0);
        assert_eq!(damerau(b"hello my name is jose", b"hlelo my name is jose"), 0);
    }

    #[test]
    fn reference_pairs() {
        let d1 = b"hello my name is jose nazario";
        assert_eq!(damerau(d1, d1), 0);
        assert_eq!(damerau(d1, b"hlelo my name is jos enazario"), 0);
        assert_eq!(damerau(d1, b"lehlo my name is jose nazario"), 2);
        assert_eq!(damerau(d1, b"hello  my name is jose nazario"), 1);
        assert_eq!(damerau(d1, b"hello  my name is josenazario"), 2);
    }

    #[test]
    fn empty() {
        assert_eq!(damerau(b"", b"abc"), 3);
        assert_eq!(damerau(b"ab", b""), 2);
        assert_eq!(damerau::<u8>(&[], &[]), 0);
    }

    #[test]
    fn unit_transpositions() {
        let osa = |a: &[u8], b: &[u8]| damerau_with_transposition_cost(a, b, 1);
        assert_eq!(osa(b"ab", b"ba"), 1);
        assert_eq!(osa(b"hello my name is jose", b"hello m yname is jose"), 1);
        assert_eq!(osa(b"ca", b"abc"), 3);
        assert_eq!(osa(b"kitten", b"sitting"), 3);
        assert_eq!(osa(b"same", b"same"), 0);
    }
}
