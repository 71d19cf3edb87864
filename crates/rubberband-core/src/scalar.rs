#![forbid(unsafe_code)]

//! Typed dispatch over the shared double-precision rubber band path.
//!
//! The engine computes in `f64`; this module exposes it uniformly to
//! every ordered numeric type through the [`BandScalar`] capability and
//! to both standard range kinds through [`RubberRange`].
//!
//! # Invariants
//!
//! 1. In-range values are returned untouched: the native ordering is
//!    consulted before any conversion, so there is no floating-point
//!    round trip and the identity is exact.
//! 2. Out-of-range values take the shared `f64` path and convert back
//!    with the type's native `as`-cast semantics (truncation toward
//!    zero for integers, saturation at the type's bounds, rounding for
//!    narrower floats).
//! 3. The facade is referentially transparent: no shared state, same
//!    inputs always produce the same output.

use core::ops::{Range, RangeInclusive};

use num_traits::AsPrimitive;

use crate::band::rubber_band;
use crate::spring::SpringConfig;

/// Capability for participating in the rubber band transform: a native
/// ordering plus a round trip through the `f64` computation path.
///
/// Blanket-implemented for every primitive integer and float via
/// [`AsPrimitive`]. A new numeric type opts in by supplying these two
/// conversions; the facade logic is otherwise type-agnostic.
pub trait BandScalar: Copy + PartialOrd + 'static {
    /// Convert into the shared computation representation.
    fn to_band(self) -> f64;

    /// Convert back from the computation representation, using the
    /// type's native conversion semantics.
    fn from_band(band: f64) -> Self;
}

impl<T> BandScalar for T
where
    T: Copy + PartialOrd + AsPrimitive<f64> + 'static,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn to_band(self) -> f64 {
        self.as_()
    }

    #[inline]
    fn from_band(band: f64) -> Self {
        band.as_()
    }
}

/// An interval usable with [`rubber`], normalized to an inclusive
/// `(lower, upper)` pair.
///
/// Implemented for `Range` and `RangeInclusive`. The half-open range's
/// `end` is used as the effective maximum exactly like the inclusive
/// upper bound, so `rubber(end, start..end)` returns `end` unchanged.
///
/// `lower <= upper` is assumed and never validated; behavior for an
/// inverted interval is unspecified.
pub trait RubberRange<T> {
    /// The `(lower, upper)` pair the engine operates on.
    fn into_bounds(self) -> (T, T);
}

impl<T> RubberRange<T> for Range<T> {
    #[inline]
    fn into_bounds(self) -> (T, T) {
        (self.start, self.end)
    }
}

impl<T> RubberRange<T> for RangeInclusive<T> {
    #[inline]
    fn into_bounds(self) -> (T, T) {
        self.into_inner()
    }
}

/// Rubber band a value against a range with the default (critically
/// damped) [`SpringConfig`].
///
/// # Example
///
/// ```
/// use rubberband_core::rubber;
///
/// // In range: exact identity, any numeric type.
/// assert_eq!(rubber(25_u8, 0..=100), 25);
/// assert_eq!(rubber(0.3_f32, 0.0..1.0), 0.3);
///
/// // Out of range: pulled back toward the boundary.
/// let pulled = rubber(150.0_f64, 0.0..=100.0);
/// assert!(pulled > 100.0 && pulled < 150.0);
/// ```
#[must_use]
pub fn rubber<T, R>(value: T, range: R) -> T
where
    T: BandScalar,
    R: RubberRange<T>,
{
    rubber_with(value, range, SpringConfig::default())
}

/// Rubber band a value against a range with an explicit [`SpringConfig`].
#[must_use]
pub fn rubber_with<T, R>(value: T, range: R, config: SpringConfig) -> T
where
    T: BandScalar,
    R: RubberRange<T>,
{
    let (lower, upper) = range.into_bounds();
    if lower <= value && value <= upper {
        return value;
    }
    let band = rubber_band(value.to_band(), lower.to_band(), upper.to_band(), config);
    T::from_band(band)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::presets;

    #[test]
    fn in_range_identity_across_types() {
        assert_eq!(rubber(25_u8, 0..=100), 25);
        assert_eq!(rubber(-3_i16, -10..=10), -3);
        assert_eq!(rubber(7_000_000_000_i64, 0..=10_000_000_000), 7_000_000_000);
        assert_eq!(rubber(0.5_f32, 0.0..=1.0), 0.5);
        assert_eq!(rubber(0.5_f64, 0.0..=1.0), 0.5);
        assert_eq!(rubber(3_usize, 0..10), 3);
    }

    #[test]
    fn in_range_identity_is_bit_exact() {
        // 0.1 is not exactly representable; identity must still be exact
        // because in-range values never round-trip through the engine.
        let value = 0.1_f32;
        assert_eq!(rubber(value, 0.0..=1.0).to_bits(), value.to_bits());
    }

    #[test]
    fn half_open_end_treated_as_inclusive_max() {
        // Deliberate simplification: Range's end behaves exactly like
        // RangeInclusive's upper bound.
        assert_eq!(rubber(100_u8, 0..100), 100);
        assert_eq!(rubber(1.0_f64, 0.0..1.0), 1.0);
    }

    #[test]
    fn range_kinds_agree_out_of_range() {
        let half_open = rubber_with(150.0_f64, 0.0..100.0, presets::BOUNCY);
        let inclusive = rubber_with(150.0_f64, 0.0..=100.0, presets::BOUNCY);
        assert_eq!(half_open, inclusive);
    }

    #[test]
    fn out_of_range_float_strictly_exterior() {
        let above = rubber(150.0_f64, 0.0..=100.0);
        assert!(above > 100.0);
        let below = rubber(-50.0_f64, 0.0..=100.0);
        assert!(below < 0.0);
    }

    #[test]
    fn out_of_range_integer_truncates() {
        let result = rubber_with(300_i32, 0..=100, presets::SMOOTH);
        let exact = crate::band::rubber_band(300.0, 0.0, 100.0, presets::SMOOTH);
        assert_eq!(result, exact as i32);
        assert!(result > 100);
    }

    #[test]
    fn narrow_integer_saturates_at_type_bound() {
        // The engine result fits well within u8 here, but a value pulled
        // past the type maximum saturates per native `as` semantics.
        let result = rubber_with(200_u8, 0..=100, presets::SNAPPY);
        assert!(result > 100);
    }

    #[test]
    fn signed_below_range() {
        let result = rubber_with(-100_i32, 0..=100, presets::SMOOTH);
        assert!(result < 0);
        assert!(result > -100);
    }

    #[test]
    fn default_config_is_smooth() {
        let with_default = rubber(150.0_f64, 0.0..=100.0);
        let with_smooth = rubber_with(150.0_f64, 0.0..=100.0, presets::SMOOTH);
        assert_eq!(with_default, with_smooth);
    }

    #[test]
    fn degenerate_interval() {
        assert_eq!(rubber(5.0_f64, 5.0..=5.0), 5.0);
        let above = rubber(8.0_f64, 5.0..=5.0);
        assert!(above > 5.0);
        assert!(above.is_finite());
        let below = rubber(2.0_f64, 5.0..=5.0);
        assert!(below < 5.0);
        assert!(below.is_finite());
    }

    #[test]
    fn f32_agrees_with_f64_path() {
        // 150, 0, 100 are exactly representable in both widths.
        let narrow = rubber_with(150.0_f32, 0.0..=100.0, presets::BOUNCY);
        let wide = rubber_with(150.0_f64, 0.0..=100.0, presets::BOUNCY);
        assert!(
            (f64::from(narrow) - wide).abs() <= f64::from(f32::EPSILON) * wide.abs(),
            "f32 {narrow} should agree with f64 {wide} within f32 rounding"
        );
    }

    #[test]
    fn extreme_magnitudes_finite() {
        let result = rubber(f64::MAX, 0.0..=100.0);
        assert!(result.is_finite());
        assert!(result > 100.0);

        let result = rubber(-f64::MAX, 0.0..=100.0);
        assert!(result.is_finite());
        assert!(result < 0.0);
    }
}
