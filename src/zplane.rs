//! The canonical explicit plane form: Z as a function of X and Y.
//!
//! This is the one place the fitting, residual, and projection math lives.
//! The X and Y forms ([`XPlane`](crate::XPlane), [`YPlane`](crate::YPlane))
//! reuse it by permuting coordinates before delegating, so any plane that is
//! vertical along Z (and thus rejected here) is still representable through
//! one of the adapters.

use crate::{geometry, Axis, PlaneError, PlaneForm, Result};
use nalgebra::{Point2, Point3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plane expressible as `z = A*x + B*y + C`.
///
/// Examples: `z = x + y`, `z = x`, `z = 0`. Planes vertical along Z, such
/// as `x = 2`, cannot be constructed as a `ZPlane`.
///
/// Internally stores the implicit coefficients `[A, B, C, D]` of
/// `A*x + B*y + C*z = D`; construction guarantees `C != 0`, which makes
/// every accessor infallible afterwards. The explicit-form coefficients
/// derive from the implicit ones:
///
/// ```text
/// A*x + B*y + C*z = D
/// z = -A/C*x - B/C*y + D/C
/// ```
///
/// # Example
///
/// ```
/// use plane_types::{PlaneForm, Point3, ZPlane};
///
/// // z = 2x + 3y + 5
/// let plane = ZPlane::from_points(
///     &Point3::new(1.0, 1.0, 10.0),
///     &Point3::new(1.0, 2.0, 13.0),
///     &Point3::new(2.0, 1.0, 12.0),
/// )
/// .unwrap();
///
/// assert_eq!(plane.calc_z(0.0, 0.0), 5.0);
/// assert_eq!(plane.to_function(), "z=(2*x) + (3*y) + 5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZPlane {
    /// Implicit coefficients `[A, B, C, D]`; `C != 0`.
    coefficients: [f64; 4],
}

impl ZPlane {
    /// Fit the plane through three points.
    ///
    /// # Errors
    ///
    /// - [`PlaneError::CollinearPoints`] when the points do not determine a
    ///   unique plane.
    /// - [`PlaneError::DegenerateAxis`] when the fitted plane is vertical
    ///   along Z (the implicit Z coefficient is zero).
    pub fn from_points(
        p1: &Point3<f64>,
        p2: &Point3<f64>,
        p3: &Point3<f64>,
    ) -> Result<Self> {
        Self::from_coefficients(geometry::fit_implicit(p1, p2, p3)?)
    }

    /// Construct directly from implicit coefficients `[A, B, C, D]`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::DegenerateAxis`] when `C == 0`.
    pub fn from_coefficients(coefficients: [f64; 4]) -> Result<Self> {
        if coefficients[2] == 0.0 {
            return Err(PlaneError::degenerate(Axis::Z));
        }
        Ok(Self { coefficients })
    }

    /// Evaluate `z = (-A*x - B*y + D) / C`.
    #[must_use]
    pub fn calc_z(&self, x: f64, y: f64) -> f64 {
        let [a, b, c, d] = self.coefficients;
        (-a * x - b * y + d) / c
    }
}

impl Default for ZPlane {
    /// The `z = 0` plane, as fit from (0,0,0), (1,0,0), (0,1,0).
    fn default() -> Self {
        Self {
            coefficients: [0.0, 0.0, -1.0, 0.0],
        }
    }
}

impl PlaneForm for ZPlane {
    fn axis(&self) -> Axis {
        Axis::Z
    }

    fn coefficients(&self) -> [f64; 4] {
        self.coefficients
    }

    fn function_a(&self) -> f64 {
        -self.coefficients[0] / self.coefficients[2]
    }

    fn function_b(&self) -> f64 {
        -self.coefficients[1] / self.coefficients[2]
    }

    fn function_c(&self) -> f64 {
        self.coefficients[3] / self.coefficients[2]
    }

    fn calc_at(&self, u: f64, v: f64) -> f64 {
        self.calc_z(u, v)
    }

    /// Flatten assumed-coplanar points onto plane-local 2D coordinates,
    /// anchored at the plane's value above the origin of the free axes:
    ///
    /// ```text
    /// z0 = calc_z(0, 0)
    /// dx = sqrt(x² + (z - z0)²) * x
    /// dy = sqrt(y² + (z - z0)²) * y
    /// ```
    fn calc_projection(&self, points: &[Point3<f64>]) -> Vec<Point2<f64>> {
        let z0 = self.calc_z(0.0, 0.0);
        points
            .iter()
            .map(|p| {
                let dz = p.z - z0;
                let dx = (p.x * p.x + dz * dz).sqrt() * p.x;
                let dy = (p.y * p.y + dz * dz).sqrt() * p.y;
                Point2::new(dx, dy)
            })
            .collect()
    }

    fn to_function(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ZPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "z=({}*x) + ({}*y) + {}",
            self.function_a(),
            self.function_b(),
            self.function_c()
        )
    }
}
