// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: elastic overscroll ("rubber band") transform.
//!
//! # Role
//! `rubberband-core` maps a scalar that has been dragged past a bounded
//! interval to a displaced output that asymptotically resists further
//! motion, while leaving in-range values untouched. Scroll views, drag
//! handles, and sliders use it for a bounded, continuous response to
//! out-of-bounds input.
//!
//! # Primary surface
//! - [`rubber`] / [`rubber_with`]: the transform for any ordered numeric
//!   type against a `Range` or `RangeInclusive`.
//! - [`rubber_band`] / [`rubber_band_slope`]: the shared `f64` path.
//! - [`SpringConfig`] and [`presets`]: immutable spring-feel parameters
//!   spanning the underdamped / critical / overdamped regimes.
//!
//! # Guarantees
//! Every operation is a pure, stateless function: no I/O, no shared
//! mutable state, safe to call concurrently. For any finite input the
//! output is finite and non-NaN; out-of-range outputs are strictly
//! exterior to the interval and strictly increase with the input.
//!
//! # Example
//!
//! ```
//! use rubberband_core::{presets, rubber, rubber_with};
//!
//! // Dragging 50 past the end of a 0..=100 scroll region.
//! let shown = rubber(150.0, 0.0..=100.0);
//! assert!(shown > 100.0 && shown < 150.0);
//!
//! // Same computation, bouncier feel, integer coordinates.
//! let shown = rubber_with(150_i32, 0..=100, presets::BOUNCY);
//! assert!(shown > 100);
//! ```

pub mod band;
pub mod scalar;
pub mod spring;

pub use band::{rubber_band, rubber_band_slope};
pub use scalar::{BandScalar, RubberRange, rubber, rubber_with};
pub use spring::{DampingRegime, SpringConfig, presets};
