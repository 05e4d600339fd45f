//! The Y-form adapter: Y as a function of X and Z.

use crate::{Axis, PlaneError, PlaneForm, Result, ZPlane};
use nalgebra::{Point2, Point3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plane expressible as `y = A*x + B*z + C`, such as the `y = 3` plane.
///
/// A `YPlane` is a [`ZPlane`] used with its coordinates swapped from
/// (x, y, z) to (x, z, y): the swap moves the Y axis into the Z slot of the
/// canonical engine. Planes vertical along Y (for example `z = 0`) cannot
/// be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YPlane {
    inner: ZPlane,
}

/// Swap a point's coordinates into the adapter frame: (x, y, z) → (x, z, y).
fn rotate_point(p: &Point3<f64>) -> Point3<f64> {
    Point3::new(p.x, p.z, p.y)
}

/// Relabel the canonical engine's Z-axis degeneracy as a Y-axis one.
fn relabel(err: PlaneError) -> PlaneError {
    match err {
        PlaneError::DegenerateAxis { .. } => PlaneError::degenerate(Axis::Y),
        other => other,
    }
}

impl YPlane {
    /// Fit the plane through three points.
    ///
    /// # Errors
    ///
    /// - [`PlaneError::CollinearPoints`] when the points do not determine a
    ///   unique plane.
    /// - [`PlaneError::DegenerateAxis`] when the fitted plane is vertical
    ///   along Y.
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
    /// Returns [`PlaneError::DegenerateAxis`] when `B == 0` (the Y
    /// coefficient, which lands in the canonical engine's Z slot).
    pub fn from_coefficients(coefficients: [f64; 4]) -> Result<Self> {
        let [a, b, c, d] = coefficients;
        let inner = ZPlane::from_coefficients([a, c, b, d]).map_err(relabel)?;
        Ok(Self { inner })
    }

    /// Evaluate `y = A*x + B*z + C`.
    #[must_use]
    pub fn calc_y(&self, x: f64, z: f64) -> f64 {
        self.inner.calc_z(x, z)
    }
}

impl Default for YPlane {
    /// The `y = 0` plane.
    fn default() -> Self {
        Self {
            inner: ZPlane::default(),
        }
    }
}

impl PlaneForm for YPlane {
    fn axis(&self) -> Axis {
        Axis::Y
    }

    /// Implicit coefficients swapped back to original (x, y, z) order;
    /// the (x, z, y) swap is its own inverse.
    fn coefficients(&self) -> [f64; 4] {
        let [a, b, c, d] = self.inner.coefficients();
        [a, c, b, d]
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
        self.calc_y(u, v)
    }

    /// Swap the points into the adapter frame and delegate; the flattened
    /// 2D output needs no un-swapping.
    fn calc_projection(&self, points: &[Point3<f64>]) -> Vec<Point2<f64>> {
        let rotated: Vec<Point3<f64>> = points.iter().map(rotate_point).collect();
        self.inner.calc_projection(&rotated)
    }

    fn to_function(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for YPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y=({}*x) + ({}*z) + {}",
            self.function_a(),
            self.function_b(),
            self.function_c()
        )
    }
}
