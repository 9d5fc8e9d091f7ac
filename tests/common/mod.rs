#![allow(dead_code)]
use pa_distance::Sequence;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DNA: &[u8] = b"ACGT";
pub const TEXT: &[u8] = b"abcdefghij ";

/// Generate a random sequence of length `n` over `alphabet`.
pub fn random_sequence<R: Rng>(n: usize, alphabet: &[u8], rng: &mut R) -> Sequence {
    assert!(!alphabet.is_empty(), "Alphabet may not be empty.");
    (0..n)
        .map(|_| *alphabet.choose(rng).unwrap())
        .collect()
}

/// Given a sequence, generate a sequence with `e` random substitutions,
/// insertions and deletions.
pub fn random_mutate<R: Rng>(sequence: &[u8], alphabet: &[u8], e: usize, rng: &mut R) -> Sequence {
    let mut s = sequence.to_vec();
    for _ in 0..e {
        let c = *alphabet.choose(rng).unwrap();
        match rng.gen_range(0..3) {
            0 if !s.is_empty() => {
                let i = rng.gen_range(0..s.len());
                s[i] = c;
            }
            1 if !s.is_empty() => {
                s.remove(rng.gen_range(0..s.len()));
            }
            _ => s.insert(rng.gen_range(0..=s.len()), c),
        }
    }
    s
}

/// Random pairs of related sequences for a fixed seed.
pub fn pairs(seed: u64, count: usize, alphabet: &[u8]) -> Vec<(Sequence, Sequence)> {
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(0..60);
            let a = random_sequence(n, alphabet, rng);
            let e = rng.gen_range(0..=n / 3 + 1);
            let b = random_mutate(&a, alphabet, e, rng);
            (a, b)
        })
        .collect()
}

/// Random triples of related sequences for a fixed seed.
pub fn triples(seed: u64, count: usize, alphabet: &[u8]) -> Vec<[Sequence; 3]> {
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(0..40);
            let a = random_sequence(n, alphabet, rng);
            let b = random_mutate(&a, alphabet, rng.gen_range(0..8), rng);
            let c = random_mutate(&b, alphabet, rng.gen_range(0..8), rng);
            [a, b, c]
        })
        .collect()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
