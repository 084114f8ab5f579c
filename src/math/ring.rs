//! Cyclic indexing over a closed loop of `n` elements.

/// Maps a signed index onto `0..n` with wrap-around in both directions.
///
/// `n` must be non-zero.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn wrap_index(i: isize, n: usize) -> usize {
    debug_assert!(n > 0, "wrap_index on an empty ring");
    i.rem_euclid(n as isize) as usize
}

/// Normalizes a track parameter into `[0, n)`.
///
/// Negative parameters wrap the same way positive ones do, so `-0.25` on a
/// four-point loop becomes `3.75`. `t` must be finite and `n` non-zero.
#[must_use]
pub fn wrap_parameter(t: f64, n: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let period = n as f64;
    let wrapped = t.rem_euclid(period);
    // rem_euclid can round a tiny negative input up to exactly `period`.
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}
