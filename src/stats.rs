//! Summary statistics over merge distances.

/// Arithmetic mean. 0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn std_dev(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.;
    }
    let m = mean(xs);
    let var = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64;
    var.sqrt()
}
