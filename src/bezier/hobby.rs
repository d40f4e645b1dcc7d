use super::curve::*;
use super::super::coordinate::*;

///
/// The phase of a point treated as a complex number
///
#[inline]
fn arg(z: Coord2) -> f64 {
    f64::atan2(z.y(), z.x())
}

///
/// The unit complex number for the given angle (multiplying by it rotates)
///
#[inline]
fn rotor(angle: f64) -> Coord2 {
    Coord2(angle.cos(), angle.sin())
}

#[inline]
fn to_coord2<Point: Coordinate2D>(point: &Point) -> Coord2 {
    Coord2(point.x(), point.y())
}

///
/// Unit direction from an anchor towards its handle
///
/// A handle that coincides with its anchor reads as pointing straight up.
///
fn handle_direction(anchor: Coord2, handle: Coord2) -> Coord2 {
    let delta       = handle - anchor;
    let magnitude   = delta.magnitude();

    if magnitude == 0.0 {
        Coord2(0.0, 1.0)
    } else {
        delta * (1.0/magnitude)
    }
}

///
/// John Hobby's mock-curvature velocity function: the relative handle length that
/// produces an even curvature for the boundary angles theta and phi
///
fn velocity(theta: f64, phi: f64) -> f64 {
    let (st, ct)    = (theta.sin(), theta.cos());
    let (sp, cp)    = (phi.sin(), phi.cos());
    let sqrt_two    = f64::sqrt(2.0);
    let sqrt_five   = f64::sqrt(5.0);

    (2.0 + sqrt_two * (st - sp/16.0) * (sp - st/16.0) * (ct - cp))
        / (3.0 * (1.0 + 0.5*(sqrt_five - 1.0)*ct + 0.5*(3.0 - sqrt_five)*cp))
}

///
/// The entry and exit angles of the curve relative to its chord, measured from the
/// directions its handles currently point in
///
fn boundary_angles<Curve: BezierCurve>(curve: &Curve) -> (f64, f64, Coord2, Coord2)
where Curve::Point: Coordinate2D {
    let z0          = to_coord2(&curve.start_point());
    let z1          = to_coord2(&curve.end_point());
    let (cp1, cp2)  = curve.control_points();

    let w0          = handle_direction(z0, to_coord2(&cp1));
    let w1          = handle_direction(to_coord2(&cp2), z1);

    let chord       = z1 - z0;
    let theta       = arg(w0 / chord);
    let phi         = arg(chord / w1);

    (theta, phi, z0, z1)
}

///
/// Replaces the handles of a curve with John Hobby's mock-curvature placement for
/// the given (alpha, beta) curvature parameters
///
/// The tangent directions at the endpoints are kept (they are read from the current
/// handle positions); only the handle lengths change, to the lengths Hobby's
/// velocity function assigns for the two boundary angles divided by the requested
/// curvatures. Curvature (1, 1) gives the canonical Hobby spline segment.
///
pub fn equalize_hobby<Curve: BezierCurveFactory>(curve: &Curve, curvature: (f64, f64)) -> Curve
where Curve::Point: Coordinate2D {
    let (alpha, beta)           = curvature;
    let (theta, phi, z0, z1)    = boundary_angles(curve);
    let chord                   = z1 - z0;

    let u = z0 + (rotor(theta) * chord) * (velocity(theta, phi)/alpha);
    let v = z1 - (rotor(-phi) * chord) * (velocity(phi, theta)/beta);

    Curve::from_points(
        curve.start_point(),
        (Curve::Point::from_components(&[u.x(), u.y()]), Curve::Point::from_components(&[v.x(), v.y()])),
        curve.end_point())
}

///
/// The complex (alpha, beta) curvature pair implied by the current handle placement
/// of a curve
///
/// This is the inverse of `equalize_hobby`: a curve whose handles were placed with
/// real curvatures (a, b) recovers (a, b) with zero imaginary parts.
///
pub fn hobby_curvature<Curve: BezierCurve>(curve: &Curve) -> (Coord2, Coord2)
where Curve::Point: Coordinate2D {
    let (theta, phi, z0, z1)    = boundary_angles(curve);
    let chord                   = z1 - z0;
    let (cp1, cp2)              = curve.control_points();

    let u = to_coord2(&cp1);
    let v = to_coord2(&cp2);

    let alpha   = (rotor(theta) * chord) * velocity(theta, phi) / (u - z0);
    let beta    = ((rotor(-phi) * chord) * velocity(phi, theta) / (v - z1)) * -1.0;

    (alpha, beta)
}
