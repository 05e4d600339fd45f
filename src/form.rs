//! The shared seam between the three explicit plane forms.
//!
//! Every explicit form answers the same questions: evaluate the target
//! coordinate from the two free ones, measure a point's residual against
//! the plane, decide membership, flatten coplanar points to 2D, and render
//! the canonical function string. The [`PlaneForm`] trait captures that
//! contract so the [`Plane`](crate::Plane) facade can aggregate over forms
//! without caring which axis each one solves for.

use crate::tolerance::RESIDUAL_PER_INTERCEPT;
use nalgebra::{Point2, Point3};
use std::fmt;

/// The coordinate axis an explicit plane form solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The form `x = A*y + B*z + C`.
    X,
    /// The form `y = A*x + B*z + C`.
    Y,
    /// The form `z = A*x + B*y + C`.
    Z,
}

impl Axis {
    /// The explicit functional form solved for along this axis.
    #[must_use]
    pub fn explicit_form(self) -> &'static str {
        match self {
            Self::X => "x = A*y + B*z + C",
            Self::Y => "y = A*x + B*z + C",
            Self::Z => "z = A*x + B*y + C",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// An explicit functional representation of a plane: one coordinate written
/// as a linear function of the other two.
///
/// Implemented by [`XPlane`](crate::XPlane), [`YPlane`](crate::YPlane) and
/// [`ZPlane`](crate::ZPlane). Construction validates that the target axis
/// coefficient is nonzero, so every method here is infallible.
pub trait PlaneForm {
    /// The axis this form solves for.
    fn axis(&self) -> Axis;

    /// The raw implicit coefficients `[A, B, C, D]` with
    /// `A*x + B*y + C*z = D`, in original (x, y, z) axis order.
    fn coefficients(&self) -> [f64; 4];

    /// The slope of the first free axis in `target = A*u + B*v + C`.
    fn function_a(&self) -> f64;

    /// The slope of the second free axis in `target = A*u + B*v + C`.
    fn function_b(&self) -> f64;

    /// The intercept `C` in `target = A*u + B*v + C`.
    fn function_c(&self) -> f64;

    /// Evaluate the target coordinate from the two free coordinates, in
    /// this form's own argument order: (y, z) for X, (x, z) for Y,
    /// (x, y) for Z.
    fn calc_at(&self, u: f64, v: f64) -> f64;

    /// The residual of the plane equation at `point`: the absolute
    /// difference between the point's target coordinate and the value the
    /// plane predicts for it.
    fn calc_error(&self, point: &Point3<f64>) -> f64 {
        let (expected, calculated) = match self.axis() {
            Axis::X => (point.x, self.calc_at(point.y, point.z)),
            Axis::Y => (point.y, self.calc_at(point.x, point.z)),
            Axis::Z => (point.z, self.calc_at(point.x, point.y)),
        };
        (calculated - expected).abs()
    }

    /// The largest residual at which `point` still counts as lying in the
    /// plane.
    ///
    /// The tolerance scales with the magnitude of the intercept term so it
    /// stays meaningful across plane positions spanning many decades; see
    /// [`RESIDUAL_PER_INTERCEPT`]. The current model does not depend on the
    /// queried point, but the point stays part of the contract.
    fn calc_max_error(&self, _point: &Point3<f64>) -> f64 {
        (RESIDUAL_PER_INTERCEPT * self.function_c()).abs()
    }

    /// Check whether `point` lies in the plane, within tolerance.
    fn is_in_plane(&self, point: &Point3<f64>) -> bool {
        self.calc_error(point) <= self.calc_max_error(point)
    }

    /// Flatten 3D points assumed coplanar with this plane onto a 2D
    /// coordinate system local to the plane.
    ///
    /// This is a deterministic, non-orthonormal flattening (not an
    /// isometric projection); downstream polygon containment and area
    /// tests depend on its exact behavior, so all forms share the one
    /// formula in [`ZPlane`](crate::ZPlane).
    fn calc_projection(&self, points: &[Point3<f64>]) -> Vec<Point2<f64>>;

    /// Render the canonical function string, e.g. `"z=(2*x) + (3*y) + 5"`.
    fn to_function(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Y.to_string(), "y");
        assert_eq!(Axis::Z.to_string(), "z");
    }

    #[test]
    fn test_axis_explicit_form() {
        assert_eq!(Axis::Z.explicit_form(), "z = A*x + B*y + C");
        assert_eq!(Axis::X.explicit_form(), "x = A*y + B*z + C");
        assert_eq!(Axis::Y.explicit_form(), "y = A*x + B*z + C");
    }
}
