use super::*;

use glyph_curves::bezier;

#[test]
fn shift_start_drags_handles_proportionally() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(25.0, 50.0), Coord2(75.0, 50.0)), Coord2(100.0, 0.0));

    let shifted: bezier::Curve<Coord2> = bezier::shift_start(&curve, &Coord2(10.0, 0.0));

    assert!(shifted.start_point() == Coord2(10.0, 0.0));
    assert!(shifted.end_point() == Coord2(100.0, 0.0));

    // cp1 sits 75% of the x extent away from the end, cp2 25%
    let (cp1, cp2) = shifted.control_points();
    assert!(cp1 == Coord2(32.5, 50.0));
    assert!(cp2 == Coord2(77.5, 50.0));
}

#[test]
fn shift_start_ignores_components_without_extent() {
    // No y extent between the endpoints: the handles keep their y values
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(25.0, 50.0), Coord2(75.0, 50.0)), Coord2(100.0, 0.0));

    let shifted: bezier::Curve<Coord2> = bezier::shift_start(&curve, &Coord2(0.0, 10.0));

    assert!(shifted.start_point() == Coord2(0.0, 10.0));

    let (cp1, cp2) = shifted.control_points();
    assert!(cp1 == Coord2(25.0, 50.0));
    assert!(cp2 == Coord2(75.0, 50.0));
}

#[test]
fn shift_end_mirrors_shift_start() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(25.0, 50.0), Coord2(75.0, 50.0)), Coord2(100.0, 0.0));

    let shifted: bezier::Curve<Coord2> = bezier::shift_end(&curve, &Coord2(10.0, 0.0));

    assert!(shifted.start_point() == Coord2(0.0, 0.0));
    assert!(shifted.end_point() == Coord2(110.0, 0.0));

    let (cp1, cp2) = shifted.control_points();
    assert!(cp1 == Coord2(27.5, 50.0));
    assert!(cp2 == Coord2(82.5, 50.0));
}

#[test]
fn shifting_by_zero_is_identity() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(20.0, 80.0), Coord2(110.0, 90.0)), Coord2(100.0, 0.0));

    let shifted: bezier::Curve<Coord2> = bezier::shift_start(&curve, &Coord2(0.0, 0.0));

    assert!(shifted == curve);
}
