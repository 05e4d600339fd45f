//! Error types for plane fitting and queries.

use crate::Axis;
use thiserror::Error;

/// Errors that can occur when fitting a plane or querying one of its
/// explicit forms.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaneError {
    /// The three generating points are collinear or coincident and do not
    /// determine a unique plane.
    #[error("points are collinear or coincident and do not determine a unique plane")]
    CollinearPoints,

    /// The implicit coefficient of the target axis is zero: the plane is
    /// "vertical" along that axis and cannot be written as a function of
    /// the other two coordinates.
    #[error("plane is vertical along the {axis} axis and cannot be expressed as '{}'", .axis.explicit_form())]
    DegenerateAxis {
        /// The axis whose explicit form is undefined.
        axis: Axis,
    },

    /// A query required an explicit form that this plane does not support.
    ///
    /// `axis: None` means no form at all is populated — every fit attempt
    /// failed because the generating points were collinear or coincident.
    /// Either way this is a caller precondition violation; probe with the
    /// `can_calc_*` methods before calling the fallible accessors.
    #[error("{}", unsupported_message(.axis))]
    UnsupportedForm {
        /// The axis of the unavailable explicit form, or `None` when the
        /// plane supports no explicit form at all.
        axis: Option<Axis>,
    },

    /// An internal invariant was violated. Should not happen; indicates a
    /// bug in this crate rather than bad input.
    #[error("internal consistency violation: {reason}")]
    Inconsistency {
        /// What broke.
        reason: &'static str,
    },
}

fn unsupported_message(axis: &Option<Axis>) -> String {
    match axis {
        Some(axis) => format!("plane cannot be expressed as '{}'", axis.explicit_form()),
        None => "plane supports no explicit form".to_string(),
    }
}

impl PlaneError {
    /// Create a degenerate-axis error for the given target axis.
    #[must_use]
    pub fn degenerate(axis: Axis) -> Self {
        Self::DegenerateAxis { axis }
    }

    /// Create an unsupported-form error for the given target axis.
    #[must_use]
    pub fn unsupported(axis: Axis) -> Self {
        Self::UnsupportedForm { axis: Some(axis) }
    }

    /// Create an unsupported-form error for a plane with no populated form.
    #[must_use]
    pub fn no_form() -> Self {
        Self::UnsupportedForm { axis: None }
    }

    /// Check if this is a degenerate-axis error.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateAxis { .. })
    }

    /// Check if this is an unsupported-form error.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedForm { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlaneError::degenerate(Axis::Z);
        assert!(err.to_string().contains("vertical along the z axis"));
        assert!(err.to_string().contains("z = A*x + B*y + C"));

        let err = PlaneError::unsupported(Axis::X);
        assert!(err.to_string().contains("x = A*y + B*z + C"));

        let err = PlaneError::CollinearPoints;
        assert!(err.to_string().contains("collinear"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(PlaneError::degenerate(Axis::X).is_degenerate());
        assert!(!PlaneError::degenerate(Axis::X).is_unsupported());
        assert!(PlaneError::unsupported(Axis::Y).is_unsupported());
        assert!(!PlaneError::CollinearPoints.is_degenerate());
    }
}
