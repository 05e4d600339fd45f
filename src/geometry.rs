//! Implicit plane fitting and point formatting.
//!
//! The one place the crate derives implicit coefficients from raw points.
//! The explicit-form types consume this and never redo the vector math.

use crate::{PlaneError, Result};
use nalgebra::Point3;

/// Fit the implicit plane equation `A*x + B*y + C*z = D` through three
/// points.
///
/// The normal is `(p3 - p1) × (p2 - p1)` and `D` is its dot product with
/// `p1`, so the returned tuple satisfies the equation at all three inputs.
///
/// # Errors
///
/// Returns [`PlaneError::CollinearPoints`] when the points are collinear or
/// coincident (the cross product vanishes) and no unique plane exists.
pub fn fit_implicit(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
) -> Result<[f64; 4]> {
    let u = p3 - p1;
    let v = p2 - p1;
    let n = u.cross(&v);
    if n.x == 0.0 && n.y == 0.0 && n.z == 0.0 {
        return Err(PlaneError::CollinearPoints);
    }
    Ok([n.x, n.y, n.z, n.dot(&p1.coords)])
}

/// Format a point as `"(<x>,<y>,<z>)"` using the default float rendering.
#[must_use]
pub fn format_point(point: &Point3<f64>) -> String {
    format!("({},{},{})", point.x, point.y, point.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_fit_implicit_satisfies_equation() {
        let p1 = Point3::new(1.0, 2.0, 3.0);
        let p2 = Point3::new(4.0, 6.0, 9.0);
        let p3 = Point3::new(12.0, 11.0, 9.0);

        let [a, b, c, d] = fit_implicit(&p1, &p2, &p3).unwrap();
        assert_relative_eq!(a, 30.0, epsilon = 1e-12);
        assert_relative_eq!(b, -48.0, epsilon = 1e-12);
        assert_relative_eq!(c, 17.0, epsilon = 1e-12);
        assert_relative_eq!(d, -15.0, epsilon = 1e-12);

        for p in [p1, p2, p3] {
            assert_relative_eq!(a * p.x + b * p.y + c * p.z, d, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fit_implicit_collinear() {
        let result = fit_implicit(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(result, Err(PlaneError::CollinearPoints));
    }

    #[test]
    fn test_fit_implicit_coincident() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(
            fit_implicit(&origin, &origin, &origin),
            Err(PlaneError::CollinearPoints)
        );
    }

    #[test]
    fn test_format_point() {
        assert_eq!(format_point(&Point3::new(1.0, 2.5, -3.0)), "(1,2.5,-3)");
        assert_eq!(format_point(&Point3::new(0.0, 0.0, 0.0)), "(0,0,0)");
    }
}
