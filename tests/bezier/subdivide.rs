use super::*;

use glyph_curves::bezier;

#[test]
fn can_subdivide_1() {
    // Initial curve
    let (w1, w2, w3, w4) = (1.0, 2.0, 3.0, 4.0);

    // Subdivide at 33%, creating two curves
    let ((wa1, wa2, wa3, wa4), (_wb1, _wb2, _wb3, _wb4)) = bezier::subdivide4(0.33, w1, w2, w3, w4);

    // Check that the original curve corresponds to the basis function for wa
    for x in 0..100 {
        let t = (x as f64)/100.0;

        let original    = bezier::basis(t*0.33, w1, w2, w3, w4);
        let subdivision = bezier::basis(t, wa1, wa2, wa3, wa4);

        assert!(approx_equal(original, subdivision));
    }
}

#[test]
fn can_subdivide_2() {
    // Initial curve
    let (w1, w2, w3, w4) = (1.0, 2.0, 3.0, 4.0);

    // Subdivide at 33%, creating two curves
    let ((_wa1, _wa2, _wa3, _wa4), (wb1, wb2, wb3, wb4)) = bezier::subdivide4(0.33, w1, w2, w3, w4);

    // Check that the original curve corresponds to the basis function for wb
    for x in 0..100 {
        let t = (x as f64)/100.0;

        let original    = bezier::basis(0.33+(t*(1.0-0.33)), w1, w2, w3, w4);
        let subdivision = bezier::basis(t, wb1, wb2, wb3, wb4);

        assert!(approx_equal(original, subdivision));
    }
}

#[test]
fn subdivided_curves_share_the_split_point() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(0.0, 100.0), Coord2(100.0, 100.0)), Coord2(100.0, 0.0));
    let (first, second): (bezier::Curve<Coord2>, bezier::Curve<Coord2>) = curve.subdivide(0.4);

    assert!(first.start_point() == curve.start_point());
    assert!(second.end_point() == curve.end_point());
    assert!(first.end_point() == second.start_point());
    assert!(first.end_point().distance_to(&curve.point_at_pos(0.4)) < 0.001);
}

#[test]
fn subdivided_curves_trace_the_original() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(20.0, 80.0), Coord2(110.0, 90.0)), Coord2(100.0, 0.0));
    let (first, second): (bezier::Curve<Coord2>, bezier::Curve<Coord2>) = curve.subdivide(0.33);

    for x in 0..100 {
        let s = (x as f64)/100.0;

        let on_first    = first.point_at_pos(s);
        let on_second   = second.point_at_pos(s);

        assert!(on_first.distance_to(&curve.point_at_pos(0.33*s)) < 0.001);
        assert!(on_second.distance_to(&curve.point_at_pos(0.33 + (1.0-0.33)*s)) < 0.001);
    }
}
