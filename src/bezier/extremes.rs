use super::basis::*;
use super::curve::*;
use super::derivative::*;
use super::super::consts::*;
use super::super::coordinate::*;

use roots::{find_roots_linear, find_roots_quadratic, Roots};

///
/// Finds the t values of the extremities of a curve (these are the points at which
/// the x or y value is at a minimum or maximum)
///
/// The derivative is a quadratic function of t, solved per component via the
/// quadratic formula. A leading coefficient smaller than `ZERO_TOLERANCE` means
/// the derivative degenerates to a line and the linear solve is used instead.
/// Only roots strictly inside (0, 1) are returned.
///
pub fn find_extremities<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> Vec<f64> {
    let mut t_extremes = vec![];

    for component_index in 0..Point::len() {
        // Quadratic coefficients of this component of the derivative
        let (a, b, c) = derivative_coefficients(
            w1.get(component_index),
            w2.get(component_index),
            w3.get(component_index),
            w4.get(component_index));

        let roots = if a.abs() < ZERO_TOLERANCE {
            if b.abs() < ZERO_TOLERANCE {
                // Constant derivative in this component
                continue;
            }

            find_roots_linear(b, c)
        } else {
            find_roots_quadratic(a, b, c)
        };

        let roots = match roots {
            Roots::No(_)    => vec![],
            Roots::One(r)   => r.to_vec(),
            Roots::Two(r)   => r.to_vec(),
            Roots::Three(r) => r.to_vec(),
            Roots::Four(r)  => r.to_vec()
        };

        for root in roots {
            if root > 0.0 && root < 1.0 {
                t_extremes.push(root);
            }
        }
    }

    t_extremes
}

///
/// Evaluates a curve at each of its extremities
///
/// Returns `(x, y, t)` triples with the coordinates truncated to integer font
/// design units.
///
pub fn extreme_points<C: BezierCurve>(curve: &C) -> Vec<(i64, i64, f64)>
where C::Point: Coordinate2D {
    let start       = curve.start_point();
    let end         = curve.end_point();
    let (cp1, cp2)  = curve.control_points();

    find_extremities(start, cp1, cp2, end)
        .into_iter()
        .map(|t| {
            let point   = de_casteljau4(t, start, cp1, cp2, end);
            let (x, y)  = point.int_coords();

            (x, y, t)
        })
        .collect()
}
