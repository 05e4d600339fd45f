//! The plane facade: any 3D plane, queried through whichever explicit forms
//! it supports.

use crate::{geometry, Axis, PlaneError, PlaneForm, Result, XPlane, YPlane, ZPlane};
use nalgebra::{Point2, Point3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any 3D plane fit from three points.
///
/// Construction attempts all three explicit forms independently and keeps
/// the ones that fit; an axis-aligned plane populates one slot, a slanted
/// plane up to three, and collinear points none. Construction itself never
/// fails — queries against a form the plane cannot express return
/// [`PlaneError::UnsupportedForm`], and the `can_calc_*` probes tell the
/// caller what is available beforehand.
///
/// # Example
///
/// ```
/// use plane_types::{Plane, Point3};
///
/// // The x = 2 plane.
/// let plane = Plane::from_points(
///     &Point3::new(2.0, 0.0, 0.0),
///     &Point3::new(2.0, 1.0, 0.0),
///     &Point3::new(2.0, 0.0, 1.0),
/// );
///
/// assert!(plane.can_calc_x());
/// assert!(!plane.can_calc_y());
/// assert!(!plane.can_calc_z());
/// assert_eq!(plane.calc_x(3.0, 4.0).unwrap(), 2.0);
/// assert!(plane.is_in_plane(&Point3::new(2.0, 9.0, -9.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    x_form: Option<XPlane>,
    y_form: Option<YPlane>,
    z_form: Option<ZPlane>,
    /// The generating points, retained for display.
    points: [Point3<f64>; 3],
}

impl Plane {
    /// Fit a plane through three points, attempting all three explicit
    /// forms.
    ///
    /// Never fails: a form whose target axis is degenerate is simply left
    /// out, and collinear points leave all three slots empty.
    #[must_use]
    pub fn from_points(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> Self {
        Self {
            x_form: XPlane::from_points(p1, p2, p3).ok(),
            y_form: YPlane::from_points(p1, p2, p3).ok(),
            z_form: ZPlane::from_points(p1, p2, p3).ok(),
            points: [*p1, *p2, *p3],
        }
    }

    /// The three generating points.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>; 3] {
        &self.points
    }

    /// The populated forms, in the fixed X, Y, Z preference order.
    fn forms(&self) -> impl Iterator<Item = &dyn PlaneForm> + '_ {
        let x = self.x_form.as_ref().map(|f| f as &dyn PlaneForm);
        let y = self.y_form.as_ref().map(|f| f as &dyn PlaneForm);
        let z = self.z_form.as_ref().map(|f| f as &dyn PlaneForm);
        x.into_iter().chain(y).chain(z)
    }

    /// Can the plane be expressed as `x = A*y + B*z + C`?
    #[must_use]
    pub fn can_calc_x(&self) -> bool {
        self.x_form.is_some()
    }

    /// Can the plane be expressed as `y = A*x + B*z + C`?
    #[must_use]
    pub fn can_calc_y(&self) -> bool {
        self.y_form.is_some()
    }

    /// Can the plane be expressed as `z = A*x + B*y + C`?
    #[must_use]
    pub fn can_calc_z(&self) -> bool {
        self.z_form.is_some()
    }

    /// Evaluate `x = A*y + B*z + C`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when the plane has no X form.
    pub fn calc_x(&self, y: f64, z: f64) -> Result<f64> {
        self.x_form
            .as_ref()
            .map(|form| form.calc_x(y, z))
            .ok_or(PlaneError::unsupported(Axis::X))
    }

    /// Evaluate `y = A*x + B*z + C`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when the plane has no Y form.
    pub fn calc_y(&self, x: f64, z: f64) -> Result<f64> {
        self.y_form
            .as_ref()
            .map(|form| form.calc_y(x, z))
            .ok_or(PlaneError::unsupported(Axis::Y))
    }

    /// Evaluate `z = A*x + B*y + C`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when the plane has no Z form.
    pub fn calc_z(&self, x: f64, y: f64) -> Result<f64> {
        self.z_form
            .as_ref()
            .map(|form| form.calc_z(x, y))
            .ok_or(PlaneError::unsupported(Axis::Z))
    }

    /// Implicit coefficients of the X form, in (x, y, z) axis order.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when the plane has no X form.
    pub fn coefficients_x(&self) -> Result<[f64; 4]> {
        self.x_form
            .as_ref()
            .map(PlaneForm::coefficients)
            .ok_or(PlaneError::unsupported(Axis::X))
    }

    /// Implicit coefficients of the Y form, in (x, y, z) axis order.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when the plane has no Y form.
    pub fn coefficients_y(&self) -> Result<[f64; 4]> {
        self.y_form
            .as_ref()
            .map(PlaneForm::coefficients)
            .ok_or(PlaneError::unsupported(Axis::Y))
    }

    /// Implicit coefficients of the Z form, in (x, y, z) axis order.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when the plane has no Z form.
    pub fn coefficients_z(&self) -> Result<[f64; 4]> {
        self.z_form
            .as_ref()
            .map(PlaneForm::coefficients)
            .ok_or(PlaneError::unsupported(Axis::Z))
    }

    /// The smallest residual of `point` across the populated forms, the
    /// best-available-fit measure.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when no form is populated.
    pub fn calc_error(&self, point: &Point3<f64>) -> Result<f64> {
        self.forms()
            .map(|form| form.calc_error(point))
            .reduce(f64::min)
            .ok_or_else(PlaneError::no_form)
    }

    /// The loosest membership tolerance across the populated forms: a point
    /// belongs to the plane as soon as one representation accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when no form is populated.
    pub fn calc_max_error(&self, point: &Point3<f64>) -> Result<f64> {
        self.forms()
            .map(|form| form.calc_max_error(point))
            .reduce(f64::max)
            .ok_or_else(PlaneError::no_form)
    }

    /// Check whether `point` lies in the plane: true when any populated
    /// form accepts it. Returns `false` when no form is populated.
    #[must_use]
    pub fn is_in_plane(&self, point: &Point3<f64>) -> bool {
        let hit = self.forms().any(|form| form.is_in_plane(point));
        #[cfg(debug_assertions)]
        if let (Ok(error), Ok(max_error)) =
            (self.calc_error(point), self.calc_max_error(point))
        {
            debug_assert_eq!(
                hit,
                error <= max_error,
                "per-form membership disagrees with the residual/tolerance comparison"
            );
        }
        hit
    }

    /// Flatten assumed-coplanar 3D points onto plane-local 2D coordinates,
    /// using the first populated form in X, Y, Z preference order.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::UnsupportedForm`] when no form is populated.
    pub fn calc_projection(&self, points: &[Point3<f64>]) -> Result<Vec<Point2<f64>>> {
        self.forms()
            .next()
            .map(|form| form.calc_projection(points))
            .ok_or_else(PlaneError::no_form)
    }
}

impl fmt::Display for Plane {
    /// Renders as `"(<p1>,<p2>,<p3>),<X-or-null>,<Y-or-null>,<Z-or-null>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})",
            geometry::format_point(&self.points[0]),
            geometry::format_point(&self.points[1]),
            geometry::format_point(&self.points[2])
        )?;
        match &self.x_form {
            Some(form) => write!(f, ",{form}")?,
            None => write!(f, ",null")?,
        }
        match &self.y_form {
            Some(form) => write!(f, ",{form}")?,
            None => write!(f, ",null")?,
        }
        match &self.z_form {
            Some(form) => write!(f, ",{form}")?,
            None => write!(f, ",null")?,
        }
        Ok(())
    }
}
