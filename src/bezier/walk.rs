use super::curve::*;
use super::super::coordinate::*;

///
/// Probes along the curve in fixed steps of t until the euclidean distance from the
/// start point reaches `distance`, returning the t value where probing stopped
///
/// This is a deliberately coarse arclength probe: precision is set by `step` and the
/// loop is bounded by 1/step iterations. The returned t is the first probed value
/// past the requested distance (or past the end of the curve).
///
pub fn t_at_distance_from_start<C: BezierCurve>(curve: &C, distance: f64, step: f64) -> f64 {
    let start       = curve.start_point();
    let mut measure = 0.0;
    let mut t       = 0.0;

    while measure < distance && t < 1.0 {
        measure = start.distance_to(&curve.point_at_pos(t));
        t += step;
    }

    t
}

///
/// Probes along the curve backwards from t=1 in fixed steps until the euclidean
/// distance from the end point reaches `distance`, returning the t value where
/// probing stopped
///
pub fn t_at_distance_from_end<C: BezierCurve>(curve: &C, distance: f64, step: f64) -> f64 {
    let end         = curve.end_point();
    let mut measure = 0.0;
    let mut t       = 1.0;

    while measure < distance && t > 0.0 {
        measure = end.distance_to(&curve.point_at_pos(t));
        t -= step;
    }

    t
}
