use super::curve::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

use itertools::Itertools;

///
/// Linear interpolation between two points
///
#[inline]
fn lerp_point<Point: Coordinate>(from: &Point, to: &Point, t: f64) -> Point {
    *from + (*to - *from)*t
}

///
/// Places a handle at the given distance from its anchor, keeping the direction the
/// handle currently points in
///
/// A handle that sits exactly on its anchor has no direction of its own, so the
/// direction towards the opposite handle is used instead.
///
fn place_handle<Point: Coordinate+Coordinate2D>(handle: &Point, anchor: &Point, opposite: &Point, distance: f64) -> Point {
    let phi = if handle.x() == anchor.x() && handle.y() == anchor.y() {
        f64::atan2(opposite.y() - anchor.y(), opposite.x() - anchor.x())
    } else {
        f64::atan2(handle.y() - anchor.y(), handle.x() - anchor.x())
    };

    Point::from_components(&[
        anchor.x() + phi.cos()*distance,
        anchor.y() + phi.sin()*distance
    ])
}

///
/// Sets both handles of a curve to the same length while keeping their directions
///
/// The new handle length is `proportion` of the total length of the curve's control
/// polygon (the three segments between consecutive control points).
///
/// Applying the same proportion twice leaves the curve unchanged up to floating
/// point tolerance.
///
pub fn equalize_proportional<Curve: BezierCurveFactory>(curve: &Curve, proportion: f64) -> Curve
where Curve::Point: Coordinate2D {
    let start       = curve.start_point();
    let end         = curve.end_point();
    let (cp1, cp2)  = curve.control_points();

    let polygon_length: f64 = [start, cp1, cp2, end].iter()
        .tuple_windows()
        .map(|(p1, p2)| p1.distance_to(p2))
        .sum();

    let handle_length   = polygon_length * proportion;

    let new_cp1         = place_handle(&cp1, &start, &cp2, handle_length);
    let new_cp2         = place_handle(&cp2, &end, &cp1, handle_length);

    Curve::from_points(start, (new_cp1, new_cp2), end)
}

///
/// Balances the two handles of a curve using its Tunni point (the crossing of the
/// two handle lines extended from the endpoints)
///
/// Both handles are moved along their handle lines to the mean of their fractional
/// distances towards the Tunni point, which equalizes the handle lengths while
/// keeping the curve's apparent curvature. Returns None when the handle lines are
/// parallel or a handle line collapses onto the Tunni point, in which case there is
/// no balanced placement and the caller is expected to skip the curve.
///
pub fn equalize_tunni<Curve: BezierCurveFactory>(curve: &Curve) -> Option<Curve>
where Curve::Point: Coordinate2D {
    let start       = curve.start_point();
    let end         = curve.end_point();
    let (cp1, cp2)  = curve.control_points();

    let tunni = line_intersects_line(&(end, cp2), &(start, cp1))?;

    let end_to_tunni    = end.distance_to(&tunni);
    let start_to_tunni  = start.distance_to(&tunni);

    if end_to_tunni < SMALL_DISTANCE || start_to_tunni < SMALL_DISTANCE {
        return None;
    }

    // Fraction of the end handle line its handle currently takes up, mirrored onto
    // the start handle line
    let end_proportion  = end.distance_to(&cp2) / end_to_tunni;
    let mirrored        = lerp_point(&start, &tunni, end_proportion);

    let start_fraction  = start.distance_to(&cp1) / start_to_tunni;
    let mirror_fraction = start.distance_to(&mirrored) / start_to_tunni;
    let mean_fraction   = (start_fraction + mirror_fraction) / 2.0;

    let new_cp1         = lerp_point(&start, &tunni, mean_fraction);
    let new_cp2         = lerp_point(&end, &tunni, mean_fraction);

    Some(Curve::from_points(start, (new_cp1, new_cp2), end))
}
