#![forbid(unsafe_code)]

//! Spring configuration for the rubber band transform.
//!
//! A [`SpringConfig`] is a pair of physical-feel parameters:
//!
//! - **response**: restoring strength. Higher = resistance builds faster
//!   with distance and the asymptotic ceiling sits further out.
//!   Typical range: 0.3–0.9 for UI motion.
//! - **damping_fraction** (ζ): ratio relative to critical damping.
//!   - Underdamped (ζ < 1): the resistance curve carries a small decaying
//!     wobble near the boundary before settling onto the asymptote.
//!   - Critically damped (ζ = 1): pure asymptotic curve, no wobble.
//!   - Overdamped (ζ > 1): visibly stiffer curve that builds more slowly.
//!
//! # Invariants
//!
//! 1. Both parameters are immutable once constructed; no method mutates
//!    a `SpringConfig`.
//! 2. Both parameters are always positive (clamped on construction).
//! 3. `SpringConfig::default()` is the critically damped [`presets::SMOOTH`].

/// Minimum response to prevent degenerate configurations.
const MIN_RESPONSE: f64 = 1e-3;

/// Minimum damping fraction to prevent degenerate configurations.
const MIN_DAMPING_FRACTION: f64 = 1e-3;

/// Qualitative damping regime selected by the damping fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DampingRegime {
    /// ζ < 1: oscillatory character near the boundary.
    Underdamped,
    /// ζ = 1: fastest monotone build-up, no wobble.
    Critical,
    /// ζ > 1: stiffer, slower-building curve.
    Overdamped,
}

/// Immutable spring-feel parameters consumed by the rubber band engine.
///
/// # Example
///
/// ```
/// use rubberband_core::{SpringConfig, DampingRegime};
///
/// let config = SpringConfig::new(0.55, 0.8);
/// assert_eq!(config.regime(), DampingRegime::Underdamped);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    response: f64,
    damping_fraction: f64,
}

impl SpringConfig {
    /// Create a configuration. Both parameters are clamped to a small
    /// positive minimum; a NaN parameter collapses to that minimum.
    #[must_use]
    pub fn new(response: f64, damping_fraction: f64) -> Self {
        Self {
            response: if response > MIN_RESPONSE {
                response
            } else {
                MIN_RESPONSE
            },
            damping_fraction: if damping_fraction > MIN_DAMPING_FRACTION {
                damping_fraction
            } else {
                MIN_DAMPING_FRACTION
            },
        }
    }

    /// Restoring strength.
    #[inline]
    #[must_use]
    pub fn response(&self) -> f64 {
        self.response
    }

    /// Damping ratio relative to critical damping.
    #[inline]
    #[must_use]
    pub fn damping_fraction(&self) -> f64 {
        self.damping_fraction
    }

    /// Classify the damping fraction into its qualitative regime.
    #[must_use]
    pub fn regime(&self) -> DampingRegime {
        if self.damping_fraction < 1.0 {
            DampingRegime::Underdamped
        } else if self.damping_fraction > 1.0 {
            DampingRegime::Overdamped
        } else {
            DampingRegime::Critical
        }
    }
}

impl Default for SpringConfig {
    /// Critically damped, `response = 0.55`. Same parameters as
    /// [`presets::SMOOTH`].
    fn default() -> Self {
        Self::new(0.55, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Common spring configurations for UI overscroll.
///
/// The presets span all three damping regimes: [`FIRM`] is overdamped,
/// [`SMOOTH`] is critically damped, and the rest are underdamped to
/// varying degrees.
pub mod presets {
    use super::SpringConfig;

    /// Critically damped default. Pure asymptotic resistance, no wobble.
    pub const SMOOTH: SpringConfig = SpringConfig {
        response: 0.55,
        damping_fraction: 1.0,
    };

    /// Noticeable wobble near the boundary; settles quickly.
    pub const BOUNCY: SpringConfig = SpringConfig {
        response: 0.55,
        damping_fraction: 0.65,
    };

    /// Strongest wobble of the presets. Playful, pronounced overshoot.
    pub const ELASTIC: SpringConfig = SpringConfig {
        response: 0.55,
        damping_fraction: 0.35,
    };

    /// High response: resistance builds fast and the band gives further.
    pub const SNAPPY: SpringConfig = SpringConfig {
        response: 0.85,
        damping_fraction: 0.85,
    };

    /// Low response: a long, soft pull with little give.
    pub const LOOSE: SpringConfig = SpringConfig {
        response: 0.3,
        damping_fraction: 0.8,
    };

    /// Overdamped and strong: a stiff band that barely yields.
    pub const FIRM: SpringConfig = SpringConfig {
        response: 0.8,
        damping_fraction: 1.2,
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
