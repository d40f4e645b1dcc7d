use super::curve::*;
use super::derivative::*;
use super::super::consts::*;
use super::super::coordinate::*;

use roots::{find_roots_linear, find_roots_quadratic, Roots};

///
/// Solves `a*t^2 + b*t + c = 0`, falling back to the linear solve when the
/// leading coefficient is within `ZERO_TOLERANCE` of zero, and keeps the roots
/// inside [0, 1]
///
fn roots_in_unit_range(a: f64, b: f64, c: f64) -> Vec<f64> {
    let roots = if a.abs() < ZERO_TOLERANCE {
        if b.abs() < ZERO_TOLERANCE {
            return vec![];
        }

        find_roots_linear(b, c)
    } else {
        find_roots_quadratic(a, b, c)
    };

    let mut roots = match roots {
        Roots::No(_)    => vec![],
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    };

    roots.retain(|t| t >= &0.0 && t <= &1.0);
    roots
}

///
/// The per-component quadratic coefficients of a curve's first derivative
///
fn tangent_coefficients<C: BezierCurve>(curve: &C) -> ((f64, f64, f64), (f64, f64, f64))
where C::Point: Coordinate2D {
    let start       = curve.start_point();
    let end         = curve.end_point();
    let (cp1, cp2)  = curve.control_points();

    let x_coeffs    = derivative_coefficients(start.x(), cp1.x(), cp2.x(), end.x());
    let y_coeffs    = derivative_coefficients(start.y(), cp1.y(), cp2.y(), end.y());

    (x_coeffs, y_coeffs)
}

///
/// Finds the t value where the curve's tangent is parallel to the direction vector
/// (the magnitude of the vector is ignored)
///
/// The tangent is parallel to the vector where the cross product of the derivative
/// polynomial and the vector vanishes, which is a quadratic in t. An axis-aligned
/// vector only needs the matching component of the derivative solved, so those two
/// cases are handled separately.
///
/// Returns None when no root lies in [0, 1], or when two do: a curve segment can
/// reach the same tangent direction twice and the ambiguity is left to the caller.
///
pub fn tangent_parallel_t<C: BezierCurve>(curve: &C, direction: &C::Point) -> Option<f64>
where C::Point: Coordinate2D {
    let (vx, vy)                        = direction.coords();
    let ((xa, xb, xc), (ya, yb, yc))    = tangent_coefficients(curve);

    let roots = if vx == 0.0 && vy != 0.0 {
        // Vertical direction: tangent is parallel where the x derivative vanishes
        roots_in_unit_range(xa, xb, xc)
    } else if vy == 0.0 && vx != 0.0 {
        // Horizontal direction: tangent is parallel where the y derivative vanishes
        roots_in_unit_range(ya, yb, yc)
    } else {
        // Cross product of the derivative polynomial and the vector
        roots_in_unit_range(xa*vy - ya*vx, xb*vy - yb*vx, xc*vy - yc*vx)
    };

    if roots.len() == 1 {
        Some(roots[0])
    } else {
        None
    }
}

///
/// The unfiltered pair of roots of the tangent-parallel quadratic for the given
/// direction vector
///
/// Unlike `tangent_parallel_t` the roots are not clipped to [0, 1] and both are
/// always returned, in ascending order (a repeated root appears twice). None when
/// the equation has no real roots or degenerates below a quadratic.
///
pub fn tangent_parallel_roots<C: BezierCurve>(curve: &C, direction: &C::Point) -> Option<(f64, f64)>
where C::Point: Coordinate2D {
    let (vx, vy)                        = direction.coords();
    let ((xa, xb, xc), (ya, yb, yc))    = tangent_coefficients(curve);

    let (a, b, c) = (xa*vy - ya*vx, xb*vy - yb*vx, xc*vy - yc*vx);

    if a.abs() < ZERO_TOLERANCE {
        return None;
    }

    match find_roots_quadratic(a, b, c) {
        Roots::Two(r)   => Some((f64::min(r[0], r[1]), f64::max(r[0], r[1]))),
        Roots::One(r)   => Some((r[0], r[0])),
        _               => None
    }
}
