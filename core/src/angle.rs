//! Normalisation of facing angles onto the representative interval.

use std::f64::consts::TAU;

/// Maps an angle in radians onto its representative in `[0, 2π)`.
///
/// The result lies on the same point of the unit circle as `angle`, and
/// applying the function to an already normalised angle returns it unchanged.
/// Non-finite input yields `NaN`; callers validate finiteness first.
#[must_use]
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU.
    if wrapped >= TAU || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}
