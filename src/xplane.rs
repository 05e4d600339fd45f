//! The X-form adapter: X as a function of Y and Z.

use crate::{Axis, PlaneError, PlaneForm, Result, ZPlane};
use nalgebra::{Point2, Point3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plane expressible as `x = A*y + B*z + C`, such as the `x = 2` plane.
///
/// An `XPlane` is a [`ZPlane`] used with its coordinates rotated from
/// (x, y, z) to (y, z, x): the rotation moves the X axis into the Z slot of
/// the canonical engine, which then does all the fitting, residual, and
/// projection math. Planes vertical along X (for example `z = 0`) cannot be
/// constructed.
///
/// # Example
///
/// ```
/// use plane_types::{PlaneForm, Point3, XPlane};
///
/// let plane = XPlane::from_points(
///     &Point3::new(2.0, 0.0, 0.0),
///     &Point3::new(2.0, 1.0, 0.0),
///     &Point3::new(2.0, 0.0, 1.0),
/// )
/// .unwrap();
///
/// assert_eq!(plane.calc_x(3.0, 4.0), 2.0);
/// assert_eq!(plane.to_function(), "x=(0*y) + (0*z) + 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XPlane {
    inner: ZPlane,
}

/// Rotate a point's coordinates into the adapter frame: (x, y, z) → (y, z, x).
fn rotate_point(p: &Point3<f64>) -> Point3<f64> {
    Point3::new(p.y, p.z, p.x)
}

/// Relabel the canonical engine's Z-axis degeneracy as an X-axis one.
fn relabel(err: PlaneError) -> PlaneError {
    match err {
        PlaneError::DegenerateAxis { .. } => PlaneError::degenerate(Axis::X),
        other => other,
    }
}

impl XPlane {
    /// Fit the plane through three points.
    ///
    /// # Errors
    ///
    /// - [`PlaneError::CollinearPoints`] when the points do not determine a
    ///   unique plane.
    /// - [`PlaneError::DegenerateAxis`] when the fitted plane is vertical
    ///   along X.
    pub fn from_points(
        p1: &Point3<f64>,
        p2: &Point3<f64>,
        p3: &Point3<f64>,
    ) -> Result<Self> {
        let inner =
            ZPlane::from_points(&rotate_point(p1), &rotate_point(p2), &rotate_point(p3))
                .map_err(relabel)?;
        Ok(Self { inner })
    }

    /// Construct from implicit coefficients `[A, B, C, D]` given in
    /// original (x, y, z) axis order.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::DegenerateAxis`] when `A == 0` (the X
    /// coefficient, which lands in the canonical engine's Z slot).
    pub fn from_coefficients(coefficients: [f64; 4]) -> Result<Self> {
        let [a, b, c, d] = coefficients;
        let inner = ZPlane::from_coefficients([b, c, a, d]).map_err(relabel)?;
        Ok(Self { inner })
    }

    /// Evaluate `x = A*y + B*z + C`.
    #[must_use]
    pub fn calc_x(&self, y: f64, z: f64) -> f64 {
        self.inner.calc_z(y, z)
    }
}

impl Default for XPlane {
    /// The `x = 0` plane.
    fn default() -> Self {
        Self {
            inner: ZPlane::default(),
        }
    }
}

impl PlaneForm for XPlane {
    fn axis(&self) -> Axis {
        Axis::X
    }

    /// Implicit coefficients rotated back to original (x, y, z) order.
    fn coefficients(&self) -> [f64; 4] {
        let [a, b, c, d] = self.inner.coefficients();
        [c, a, b, d]
    }

    fn function_a(&self) -> f64 {
        self.inner.function_a()
    }

    fn function_b(&self) -> f64 {
        self.inner.function_b()
    }

    fn function_c(&self) -> f64 {
        self.inner.function_c()
    }

    fn calc_at(&self, u: f64, v: f64) -> f64 {
        self.calc_x(u, v)
    }

    /// Rotate the points into the adapter frame and delegate; the flattened
    /// 2D output needs no un-rotation.
    fn calc_projection(&self, points: &[Point3<f64>]) -> Vec<Point2<f64>> {
        let rotated: Vec<Point3<f64>> = points.iter().map(rotate_point).collect();
        self.inner.calc_projection(&rotated)
    }

    fn to_function(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for XPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x=({}*y) + ({}*z) + {}",
            self.function_a(),
            self.function_b(),
            self.function_c()
        )
    }
}
