use super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// Returns the point at which two lines cross, treating both as infinitely long
///
/// Solves the two line equations directly, so the crossing point does not have to
/// lie within either segment. Returns None when the lines are parallel (the
/// determinant vanishes).
///
/// Only the 2-dimensional form is supported at the moment (lines are much less likely
/// to intersect in higher dimensions)
///
pub fn line_intersects_line<L: Line>(line1: &L, line2: &L) -> Option<L::Point>
where L::Point: Coordinate2D {
    let line1_points = line1.points();
    let line2_points = line2.points();

    let ((x1, y1), (x2, y2)) = (line1_points.0.coords(), line1_points.1.coords());
    let ((x3, y3), (x4, y4)) = (line2_points.0.coords(), line2_points.1.coords());

    let det = (x1-x2)*(y3-y4) - (y1-y2)*(x3-x4);

    if det.abs() < ZERO_TOLERANCE {
        // Parallel lines never cross
        return None;
    }

    let cross1 = x1*y2 - y1*x2;
    let cross2 = x3*y4 - y3*x4;

    Some(L::Point::from_components(&[
        (cross1*(x3-x4) - (x1-x2)*cross2) / det,
        (cross1*(y3-y4) - (y1-y2)*cross2) / det
    ]))
}
