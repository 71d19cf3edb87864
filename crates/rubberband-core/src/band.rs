#![forbid(unsafe_code)]

//! Rubber band resistance engine.
//!
//! Converts distance-past-a-boundary into a bounded displacement that
//! asymptotically resists further motion. The curve is built from an
//! asymptotic ratio, not the closed-form damped-spring solution: the
//! textbook solution is neither globally monotone nor tightly bounded
//! for all parameter combinations, while the ratio formulation gives
//! both properties by construction. The damping regime only modulates
//! the curve multiplicatively.
//!
//! # Invariants
//!
//! 1. `resistance(0, config) == 0` for every config (a value exactly at
//!    the boundary does not move).
//! 2. `resistance` is strictly increasing in distance for a fixed config.
//! 3. `resistance` is bounded above by a ceiling that depends only on
//!    `response`; it never diverges as distance grows.
//! 4. Output is finite and non-NaN for every non-negative distance,
//!    including distances that overflow to infinity when computed as a
//!    difference of large finite bounds.
//!
//! # Failure Modes
//!
//! - Negative distance: precondition violation by the caller; checked
//!   with `debug_assert!` only.
//! - Inverted interval (`min > max`) passed to [`rubber_band`]: behavior
//!   is unspecified (never validated, matching common scroll-physics
//!   implementations). The output is still finite.

use crate::spring::{DampingRegime, SpringConfig};

/// Scale from `response` to the asymptotic displacement ceiling.
const CEILING_SCALE: f64 = 120.0;

/// Scale from `1 / response` to the half-distance of the asymptotic
/// ratio (the distance at which half the ceiling is consumed).
const FALLOFF: f64 = 60.0;

/// Peak amplitude coefficient of the underdamped wobble at ζ = 0.
///
/// Must stay below ~0.43: with decay 2 and frequency 4 (in units of the
/// half-distance), the product `base * factor` is strictly increasing
/// whenever `amplitude * sqrt(4^2 + 2^2) * max_u[u(u+1)e^(-2u)]` stays
/// below `1 - amplitude`, and that max is ≈ 0.293.
const WOBBLE_AMPLITUDE: f64 = 0.25;

/// Exponential decay rate of the wobble, per half-distance.
const WOBBLE_DECAY: f64 = 2.0;

/// Angular frequency of the wobble, per half-distance.
const WOBBLE_FREQUENCY: f64 = 4.0;

/// Bounded displacement for a value `distance` past the nearest boundary.
///
/// Strictly increasing in `distance`, zero at zero, and bounded above by
/// `response * CEILING_SCALE` times the regime factor.
pub(crate) fn resistance(distance: f64, config: SpringConfig) -> f64 {
    debug_assert!(
        distance >= 0.0 || distance.is_nan(),
        "negative distance violates the engine precondition: {distance}"
    );

    // A difference of two large finite bounds can overflow to +inf;
    // saturate so the result stays finite.
    let distance = distance.min(f64::MAX);

    let ceiling = config.response() * CEILING_SCALE;
    let half_distance = FALLOFF / config.response();

    let progress = distance / (distance + half_distance);
    let base = ceiling * progress;

    let factor = spring_factor(distance / half_distance, config);

    // Guard against floating-point error only; never engaged for normal
    // inputs.
    (base * factor).max(0.0)
}

/// Derivative of [`resistance`] with respect to `distance`.
pub(crate) fn resistance_slope(distance: f64, config: SpringConfig) -> f64 {
    debug_assert!(
        distance >= 0.0 || distance.is_nan(),
        "negative distance violates the engine precondition: {distance}"
    );

    let distance = distance.min(f64::MAX);

    let ceiling = config.response() * CEILING_SCALE;
    let half_distance = FALLOFF / config.response();
    let u = distance / half_distance;

    let factor = spring_factor(u, config);
    let factor_slope = spring_factor_slope(u, config);

    let denom = distance + half_distance;
    // d/dd [ceiling * d/(d+h) * s(d/h)]
    //   = ceiling * (h/(d+h)^2 * s + d/(d+h) * s'/h)
    let slope = ceiling
        * (half_distance / (denom * denom) * factor
            + distance / denom * factor_slope / half_distance);
    slope.max(0.0)
}

/// Regime-dependent multiplicative factor, as a function of normalized
/// distance `u = distance / half_distance`.
fn spring_factor(u: f64, config: SpringConfig) -> f64 {
    let zeta = config.damping_fraction();
    match config.regime() {
        // Pure asymptotic curve.
        DampingRegime::Critical => 1.0,
        // Decaying wobble; amplitude shrinks both with ζ approaching 1
        // and exponentially with distance, so the long-run curve is the
        // same monotone asymptote.
        DampingRegime::Underdamped => {
            let amplitude = WOBBLE_AMPLITUDE * (1.0 - zeta);
            1.0 + amplitude * (-WOBBLE_DECAY * u).exp() * (WOBBLE_FREQUENCY * u).sin()
        }
        // Stiffer and slower-building; continuous with the critical
        // branch at ζ = 1.
        DampingRegime::Overdamped => 1.0 / zeta,
    }
}

/// Derivative of [`spring_factor`] with respect to `u`.
fn spring_factor_slope(u: f64, config: SpringConfig) -> f64 {
    let zeta = config.damping_fraction();
    match config.regime() {
        DampingRegime::Critical | DampingRegime::Overdamped => 0.0,
        DampingRegime::Underdamped => {
            let amplitude = WOBBLE_AMPLITUDE * (1.0 - zeta);
            amplitude
                * (-WOBBLE_DECAY * u).exp()
                * (WOBBLE_FREQUENCY * (WOBBLE_FREQUENCY * u).cos()
                    - WOBBLE_DECAY * (WOBBLE_FREQUENCY * u).sin())
        }
    }
}

/// Apply the rubber band transform to a real value against an interval.
///
/// Values inside `[min, max]` are returned unchanged. Values outside are
/// pulled back toward the violated boundary: the result stays strictly
/// on the out-of-range side but approaches an asymptotic ceiling instead
/// of tracking the raw value.
///
/// `min <= max` is assumed and never validated; behavior for an inverted
/// interval is unspecified.
///
/// # Example
///
/// ```
/// use rubberband_core::{presets, rubber_band};
///
/// assert_eq!(rubber_band(25.0, 0.0, 100.0, presets::SMOOTH), 25.0);
///
/// let pulled = rubber_band(150.0, 0.0, 100.0, presets::SMOOTH);
/// assert!(pulled > 100.0 && pulled < 150.0);
/// ```
#[must_use]
pub fn rubber_band(value: f64, min: f64, max: f64, config: SpringConfig) -> f64 {
    if (min..=max).contains(&value) {
        return value;
    }

    if value > max {
        #[cfg(feature = "tracing")]
        tracing::trace!(value, max, "rubber band engaged above upper bound");
        max + resistance(value - max, config)
    } else {
        #[cfg(feature = "tracing")]
        tracing::trace!(value, min, "rubber band engaged below lower bound");
        min - resistance(min - value, config)
    }
}

/// Derivative of [`rubber_band`] with respect to `value`.
///
/// `1.0` inside the interval, positive and shrinking toward zero outside.
/// Useful for handing a drag velocity off to a follow-on animation so
/// perceived speed stays continuous while overscrolled.
#[must_use]
pub fn rubber_band_slope(value: f64, min: f64, max: f64, config: SpringConfig) -> f64 {
    if (min..=max).contains(&value) {
        return 1.0;
    }

    if value > max {
        resistance_slope(value - max, config)
    } else {
        resistance_slope(min - value, config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
