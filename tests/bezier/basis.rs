use super::*;

use glyph_curves::bezier;

#[test]
fn basis_at_t0_is_w1() {
    assert!(bezier::basis(0.0, 2.0, 3.0, 4.0, 5.0) == 2.0);
}

#[test]
fn basis_at_t1_is_w4() {
    assert!(bezier::basis(1.0, 2.0, 3.0, 4.0, 5.0) == 5.0);
}

#[test]
fn curve_starts_and_ends_exactly_on_endpoints() {
    let curve = bezier::Curve::from_points(Coord2(12.0, 34.0), (Coord2(56.0, 78.0), Coord2(90.0, 12.0)), Coord2(34.0, 56.0));

    assert!(curve.point_at_pos(0.0) == Coord2(12.0, 34.0));
    assert!(curve.point_at_pos(1.0) == Coord2(34.0, 56.0));
}

#[test]
fn de_casteljau_matches_basis_function() {
    for x in 0..100 {
        let t = (x as f64)/100.0;

        let by_basis        = bezier::basis(t, Coord2(0.0, 0.0), Coord2(0.0, 100.0), Coord2(100.0, 100.0), Coord2(100.0, 0.0));
        let by_de_casteljau = bezier::de_casteljau4(t, Coord2(0.0, 0.0), Coord2(0.0, 100.0), Coord2(100.0, 100.0), Coord2(100.0, 0.0));

        assert!(by_basis.distance_to(&by_de_casteljau) < 0.001);
    }
}
