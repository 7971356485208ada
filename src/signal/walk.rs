//! Soft-clamped random walk
//!
//! Each step perturbs the previous value by up to ±`MAX_STEP`. Values that
//! leave the [`SOFT_MIN`, `SOFT_MAX`] band are nudged back by `NUDGE`
//! instead of being clamped, which keeps the line organic: it can wander
//! out of the band for a while but is pulled back on every step it spends
//! outside.

use super::random::RandomSource;

/// Initial value of every walk (vertical center)
pub const START_VALUE: f32 = 0.5;

/// Largest perturbation applied in a single step
pub const MAX_STEP: f32 = 0.1;

/// Lower edge of the soft band
pub const SOFT_MIN: f32 = 0.3;

/// Upper edge of the soft band
pub const SOFT_MAX: f32 = 0.7;

/// Correction applied to values outside the soft band
pub const NUDGE: f32 = 0.05;

/// Compute the next value of the walk
///
/// # Arguments
/// * `previous` - Last value of the walk
/// * `rng` - Uniform source over [0, 1)
///
/// # Returns
/// `previous + uniform(-MAX_STEP, MAX_STEP)`, nudged toward the soft band
pub fn next_value<R: RandomSource + ?Sized>(previous: f32, rng: &mut R) -> f32 {
    let change = (rng.next_f32() - 0.5) * 2.0 * MAX_STEP;
    let mut next = previous + change;

    if next > SOFT_MAX {
        next -= NUDGE;
    }
    if next < SOFT_MIN {
        next += NUDGE;
    }

    next
}
