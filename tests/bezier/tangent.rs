use super::*;

use glyph_curves::bezier;

fn arch() -> bezier::Curve<Coord2> {
    bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(0.0, 100.0), Coord2(100.0, 100.0)), Coord2(100.0, 0.0))
}

#[test]
fn tangent_parallel_to_chord_is_at_half() {
    // The chord of the symmetric arch is horizontal, and its tangent is horizontal
    // exactly at the apex
    let t = bezier::tangent_parallel_t(&arch(), &Coord2(100.0, 0.0));

    assert!(t.is_some());
    assert!(approx_equal(t.unwrap(), 0.5));
}

#[test]
fn tangent_solve_for_general_direction() {
    let t = bezier::tangent_parallel_t(&arch(), &Coord2(1.0, 1.0));

    assert!(t.is_some());
    let t = t.unwrap();
    assert!(approx_equal(t, 1.0 - f64::sqrt(2.0)/2.0));

    // The derivative at the solved t really is parallel to (1, 1)
    let (d1, d2, d3)    = bezier::derivative4(Coord2(0.0, 0.0), Coord2(0.0, 100.0), Coord2(100.0, 100.0), Coord2(100.0, 0.0));
    let tangent         = bezier::de_casteljau3(t, d1, d2, d3);
    assert!(approx_equal(tangent.x(), tangent.y()));
}

#[test]
fn ambiguous_tangent_returns_none() {
    // The arch is vertical at both endpoints, so a vertical direction matches twice
    assert!(bezier::tangent_parallel_t(&arch(), &Coord2(0.0, 1.0)) == None);
}

#[test]
fn unreachable_tangent_returns_none() {
    // A straight diagonal curve never has a horizontal tangent
    let line = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(25.0, 25.0), Coord2(75.0, 75.0)), Coord2(100.0, 100.0));

    assert!(bezier::tangent_parallel_t(&line, &Coord2(1.0, 0.0)) == None);
}

#[test]
fn raw_roots_are_unfiltered() {
    let roots = bezier::tangent_parallel_roots(&arch(), &Coord2(1.0, 1.0));

    assert!(roots.is_some());
    let (r1, r2) = roots.unwrap();

    // One root within the curve, the mirror root beyond it
    assert!(approx_equal(r1, 1.0 - f64::sqrt(2.0)/2.0));
    assert!(approx_equal(r2, 1.0 + f64::sqrt(2.0)/2.0));
}

#[test]
fn raw_roots_for_degenerate_quadratic_are_none() {
    // Direction parallel to the chord degenerates the cross product below a quadratic
    assert!(bezier::tangent_parallel_roots(&arch(), &Coord2(1.0, 0.0)) == None);
}
