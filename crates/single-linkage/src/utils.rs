//! Utility functions for the crate.

use core::cmp::Ordering;

/// Return the index and value of the minimum value in the given slice of values.
///
/// Ties are broken in favor of the lowest index. NAN values are ordered as
/// greater than all other values.
///
/// This will return `None` if the given slice is empty.
pub fn arg_min<T: PartialOrd + Copy>(values: &[T]) -> Option<(usize, T)> {
    values
        .iter()
        .enumerate()
        .min_by(|&(_, l), &(_, r)| {
            l.partial_cmp(r).unwrap_or_else(|| {
                // Only `NAN` is incomparable with itself.
                if l.partial_cmp(l).is_none() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
        })
        .map(|(i, v)| (i, *v))
}

/// Whether two values agree within the given relative tolerance.
///
/// The tolerance is scaled by the larger magnitude of the two values, but never
/// by less than one, so values near zero are compared absolutely.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        // Also covers equal infinities.
        true
    } else if !(a.is_finite() && b.is_finite()) {
        false
    } else {
        (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
    }
}
