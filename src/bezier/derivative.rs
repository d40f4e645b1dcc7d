use super::super::coordinate::*;

///
/// Returns the 1st derivative of a cubic bezier curve
///
pub fn derivative4<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point) {
    ((w2-w1)*3.0, (w3-w2)*3.0, (w4-w3)*3.0)
}

///
/// Returns the 1st derivative of a quadratic bezier curve (or the 2nd derivative of a cubic curve)
///
pub fn derivative3<Point: Coordinate>(wn1: Point, wn2: Point, wn3: Point) -> (Point, Point) {
    ((wn2-wn1)*2.0, (wn3-wn2)*2.0)
}

///
/// The coefficients (a, b, c) such that one component of a cubic curve's first
/// derivative evaluates as `a*t^2 + b*t + c`
///
pub fn derivative_coefficients(w1: f64, w2: f64, w3: f64, w4: f64) -> (f64, f64, f64) {
    let (d1, d2, d3) = derivative4(w1, w2, w3, w4);

    (d1 - d2*2.0 + d3, (d2-d1)*2.0, d1)
}
