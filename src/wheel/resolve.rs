use std::ops::RangeInclusive;

use serde::Serialize;

use crate::random::RandomSource;

/// Fraction of a segment the landing point may stray from its centre.
/// Kept below one half so the landing computation is never ambiguous.
const JITTER: f64 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpinResult {
    /// Cumulative rotation in degrees after the spin.
    pub final_rotation: f64,
    pub landed_index: usize,
}

pub fn segment_angle(segments: usize) -> f64 {
    360.0 / segments as f64
}

/// Spins a wheel of `segments` segments currently rotated by `current`
/// degrees.
///
/// The landed segment is chosen by `rng.uniform_int(segments)`; the final
/// rotation is built so that [`landed_index`] reports exactly that segment.
pub fn resolve(
    current: f64,
    segments: usize,
    rotations: RangeInclusive<u32>,
    rng: &mut impl RandomSource,
) -> SpinResult {
    assert!(segments > 0, "cannot spin a wheel without segments");

    let seg = segment_angle(segments);
    let (low, high) = rotations.into_inner();
    let span = high.saturating_sub(low) as usize + 1;

    let full = low + rng.uniform_int(span) as u32;
    let target = rng.uniform_int(segments);
    let jitter = (rng.uniform_float() * 2.0 - 1.0) * JITTER * seg;

    // wheel-frame angle that has to end up under the pointer
    let under_pointer = target as f64 * seg + seg / 2.0 + jitter;
    let target_rest = (360.0 - under_pointer).rem_euclid(360.0);
    let offset = (target_rest - current.rem_euclid(360.0)).rem_euclid(360.0);

    let final_rotation = current + f64::from(full) * 360.0 + offset;
    let landed_index = landed_index(final_rotation, segments);
    debug_assert_eq!(landed_index, target, "landing must invert the spin");

    SpinResult {
        final_rotation,
        landed_index,
    }
}

/// The segment under the pointer once the wheel has turned `rotation`
/// degrees clockwise.
pub fn landed_index(rotation: f64, segments: usize) -> usize {
    assert!(segments > 0, "cannot land on a wheel without segments");

    let seg = segment_angle(segments);
    let under_pointer = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    let index = (under_pointer / seg).floor() as usize;

    index.min(segments - 1)
}
