//! Axis-aligned functional representations of infinite 3D planes.
//!
//! This crate fits a plane through three non-collinear points and expresses
//! it in up to three explicit functional forms:
//!
//! - [`XPlane`] - `x = A*y + B*z + C`
//! - [`YPlane`] - `y = A*x + B*z + C`
//! - [`ZPlane`] - `z = A*x + B*y + C`
//!
//! A plane perpendicular to an axis cannot be written as a function along
//! that axis (the `x = 2` plane has no Z form), so the [`Plane`] facade
//! builds whichever forms fit and reconciles queries across them:
//! membership testing with an intercept-scaled tolerance, per-form
//! evaluation and implicit coefficients, and a deterministic 2D flattening
//! of coplanar points.
//!
//! # Core trait
//!
//! All three forms implement [`PlaneForm`], which provides evaluation,
//! residual and tolerance computation, membership, projection, and the
//! canonical function string. Only [`ZPlane`] carries the actual math; the
//! X and Y forms delegate to it through a fixed coordinate permutation.
//!
//! # Example
//!
//! ```
//! use plane_types::{Plane, Point3};
//!
//! // z = 2x + 3y + 5
//! let plane = Plane::from_points(
//!     &Point3::new(1.0, 1.0, 10.0),
//!     &Point3::new(1.0, 2.0, 13.0),
//!     &Point3::new(2.0, 1.0, 12.0),
//! );
//!
//! assert!(plane.can_calc_z());
//! assert_eq!(plane.calc_z(0.0, 0.0).unwrap(), 5.0);
//! assert!(plane.is_in_plane(&Point3::new(1.0, 1.0, 10.0)));
//! ```
//!
//! # Coordinate system
//!
//! Right-handed cartesian (x, y, z); implicit coefficients are stored as
//! `[A, B, C, D]` with `A*x + B*y + C*z = D`.
//!
//! # Feature flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::while_float,
    clippy::float_cmp,
    clippy::uninlined_format_args,
    clippy::doc_markdown
)]

mod error;
mod form;
mod plane;
mod xplane;
mod yplane;
mod zplane;

pub mod geometry;
pub mod tolerance;

pub use error::PlaneError;
pub use form::{Axis, PlaneForm};
pub use plane::Plane;
pub use xplane::XPlane;
pub use yplane::YPlane;
pub use zplane::ZPlane;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3};

/// Result type for plane operations.
pub type Result<T> = std::result::Result<T, PlaneError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;

    /// Coordinate values in increasing order of numeric difficulty.
    fn test_series() -> [f64; 7] {
        [1.0, -1.0, f64::EPSILON, -f64::EPSILON, 1.0e8, -1.0e8, 0.0]
    }

    /// Every non-collinear triple yields at least one explicit form.
    #[test]
    fn test_axis_coverage() {
        let triples = [
            // axis-aligned
            [(0.0, 0.0, 0.0), (0.0, 1.0, 0.0), (1.0, 0.0, 0.0)],
            [(2.0, 0.0, 0.0), (2.0, 1.0, 0.0), (2.0, 0.0, 1.0)],
            [(0.0, 3.0, 0.0), (1.0, 3.0, 0.0), (0.0, 3.0, 1.0)],
            // slanted
            [(1.0, 2.0, 3.0), (4.0, 6.0, 9.0), (12.0, 11.0, 9.0)],
            [(1.0, 1.0, 10.0), (1.0, 2.0, 13.0), (2.0, 1.0, 12.0)],
            [(0.0, 0.0, 1.0), (1.0, 0.0, 0.0), (1.0, 1.0, 0.0)],
        ];
        for [p1, p2, p3] in triples {
            let plane = Plane::from_points(
                &Point3::new(p1.0, p1.1, p1.2),
                &Point3::new(p2.0, p2.1, p2.2),
                &Point3::new(p3.0, p3.1, p3.2),
            );
            assert!(
                plane.can_calc_x() || plane.can_calc_y() || plane.can_calc_z(),
                "no form fit for {plane}"
            );
        }
    }

    /// Where the Z form is degenerate, an X or Y form covers the plane, and
    /// the other way around.
    #[test]
    fn test_rotation_equivalence() {
        // x = 2: vertical in Z, covered by the X form.
        let p1 = Point3::new(2.0, 0.0, 0.0);
        let p2 = Point3::new(2.0, 1.0, 0.0);
        let p3 = Point3::new(2.0, 0.0, 1.0);
        assert!(ZPlane::from_points(&p1, &p2, &p3).is_err());
        assert!(XPlane::from_points(&p1, &p2, &p3).is_ok());

        // z = 0: vertical in X and Y, covered by the Z form.
        let q1 = Point3::new(0.0, 0.0, 0.0);
        let q2 = Point3::new(0.0, 1.0, 0.0);
        let q3 = Point3::new(1.0, 0.0, 0.0);
        assert!(XPlane::from_points(&q1, &q2, &q3).is_err());
        assert!(YPlane::from_points(&q1, &q2, &q3).is_err());
        assert!(ZPlane::from_points(&q1, &q2, &q3).is_ok());
    }

    /// Planes `z = a*x + c` built from series-valued slopes and intercepts
    /// contain their own generating points, even where the intercept (and
    /// so the tolerance) is zero.
    #[test]
    fn test_difficulty_series_membership() {
        for a in test_series() {
            for c in test_series() {
                let p1 = Point3::new(0.0, 0.0, c);
                let p2 = Point3::new(1.0, 0.0, a + c);
                let p3 = Point3::new(0.0, 1.0, c);
                let plane = Plane::from_points(&p1, &p2, &p3);
                assert!(plane.can_calc_z(), "a={a} c={c}");
                for p in [p1, p2, p3] {
                    assert!(plane.is_in_plane(&p), "a={a} c={c} p={p}");
                }
            }
        }
    }

    /// The facade's membership answer always matches comparing its own
    /// residual against its own tolerance.
    #[test]
    fn test_self_consistency_invariant() {
        let plane = Plane::from_points(
            &Point3::new(1.0, 2.0, 3.0),
            &Point3::new(4.0, 6.0, 9.0),
            &Point3::new(12.0, 11.0, 9.0),
        );
        for v in test_series() {
            let probe = Point3::new(v, -v, 0.5 * v);
            let agrees =
                plane.calc_error(&probe).unwrap() <= plane.calc_max_error(&probe).unwrap();
            assert_eq!(plane.is_in_plane(&probe), agrees);
        }
    }

    /// Refitting from permuted generating points reproduces the identical
    /// function string in every form both fits support.
    #[test]
    fn test_permutation_invariance_across_forms() {
        let p1 = Point3::new(1.0, 2.0, 3.0);
        let p2 = Point3::new(4.0, 6.0, 9.0);
        let p3 = Point3::new(12.0, 11.0, 9.0);
        let reference = Plane::from_points(&p1, &p2, &p3);
        for (a, b, c) in [(&p2, &p3, &p1), (&p3, &p1, &p2), (&p2, &p1, &p3)] {
            let permuted = Plane::from_points(a, b, c);
            assert_eq!(
                permuted.coefficients_x().is_ok(),
                reference.coefficients_x().is_ok()
            );
            assert_eq!(
                XPlane::from_points(a, b, c).unwrap().to_function(),
                XPlane::from_points(&p1, &p2, &p3).unwrap().to_function()
            );
            assert_eq!(
                YPlane::from_points(a, b, c).unwrap().to_function(),
                YPlane::from_points(&p1, &p2, &p3).unwrap().to_function()
            );
            assert_eq!(
                ZPlane::from_points(a, b, c).unwrap().to_function(),
                ZPlane::from_points(&p1, &p2, &p3).unwrap().to_function()
            );
        }
    }

    /// Implicit coefficients round-trip through the coefficient
    /// constructors with identical explicit-form values.
    #[test]
    fn test_coefficient_round_trip_all_forms() {
        let p1 = Point3::new(1.0, 2.0, 3.0);
        let p2 = Point3::new(4.0, 6.0, 9.0);
        let p3 = Point3::new(12.0, 11.0, 9.0);

        let x = XPlane::from_points(&p1, &p2, &p3).unwrap();
        let y = YPlane::from_points(&p1, &p2, &p3).unwrap();
        let z = ZPlane::from_points(&p1, &p2, &p3).unwrap();

        let x2 = XPlane::from_coefficients(x.coefficients()).unwrap();
        let y2 = YPlane::from_coefficients(y.coefficients()).unwrap();
        let z2 = ZPlane::from_coefficients(z.coefficients()).unwrap();

        assert_eq!(x2.to_function(), x.to_function());
        assert_eq!(y2.to_function(), y.to_function());
        assert_eq!(z2.to_function(), z.to_function());
    }
}
