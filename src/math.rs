//!
//! # Small numeric utilities
//!
//! Free functions shared by the geometry types and by callers that work on
//! raw coordinate values: tolerance comparison, rounding to a base increment,
//! ratio conversion, linear/geometric spread generators and the turn and
//! segment-intersection predicates for point triples.
//!

use super::coordinate::*;

///
/// Tests approximate equality of `a` and `b` within an absolute and/or relative tolerance
///
/// The relative tolerance is measured against the larger absolute value of the two
/// operands (pass 0.05 for a 5% tolerance).
///
#[inline]
pub fn isclose(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    f64::abs(a-b) <= f64::max(rel_tol * f64::max(f64::abs(a), f64::abs(b)), abs_tol)
}

///
/// Rounds a value to the nearest multiple of the given base increment
///
#[inline]
pub fn round2base(x: f64, base: f64) -> i64 {
    (base * (x/base).round()) as i64
}

///
/// The ratio of part to whole expressed as a fraction (100 for percentage, 1000 for permille)
///
#[inline]
pub fn ratfrac(part: f64, whole: f64, fraction: f64) -> f64 {
    fraction * (part/whole)
}

///
/// Linear interpolation between t0 and t1 for a normalised position t
///
#[inline]
pub fn lerp(t0: f64, t1: f64, t: f64) -> f64 {
    (t1-t0)*t + t0
}

///
/// Generates `count` equally spaced values, the first being `start` and the last `end`
///
pub fn linspread(start: f64, end: f64, count: usize) -> impl Iterator<Item=f64> {
    (0..count).map(move |index| {
        if index == 0 {
            start
        } else if index == count-1 {
            end
        } else {
            start + (index as f64)*(end-start)/((count-1) as f64)
        }
    })
}

///
/// Generates `count` values of the geometric progression running from `start` to `end`
///
/// The intermediate values grow by the rate implied by the geometric mean of the
/// two endpoints, so `geospread(1.0, 100.0, 3)` produces `1, 10, 100`.
///
pub fn geospread(start: f64, end: f64, count: usize) -> impl Iterator<Item=f64> {
    let rate = f64::sqrt(start*end)/start;

    (0..count).map(move |index| {
        if index == 0 {
            start
        } else if index == count-1 {
            end
        } else {
            start * rate.powf((2*index) as f64 / ((count-1) as f64))
        }
    })
}

///
/// Tests whether the turn formed by the points a, b, c is counter-clockwise
///
#[inline]
pub fn ccw<Point: Coordinate2D>(a: &Point, b: &Point, c: &Point) -> bool {
    (b.x() - a.x()) * (c.y() - a.y()) > (b.y() - a.y()) * (c.x() - a.x())
}

///
/// Tests whether the line segments a-b and c-d intersect
///
#[inline]
pub fn intersect<Point: Coordinate2D>(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}
