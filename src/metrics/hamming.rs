//! R. W. Hamming, "Error Detecting and Error Correcting Codes", Bell System
//! Tech Journal, 9, 147-160, April 1950.

use crate::error::{Error, Result};

/// The number of positions at which `a` and `b` differ.
///
/// Only defined for inputs of equal length; anything else is reported as
/// [`Error::LengthMismatch`] instead of truncating the longer input.
pub fn hamming<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}
