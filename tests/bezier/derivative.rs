use super::*;

use glyph_curves::bezier;

#[test]
fn derivative_of_cubic_is_quadratic_weights() {
    let (d1, d2, d3) = bezier::derivative4(Coord2(0.0, 0.0), Coord2(0.0, 100.0), Coord2(100.0, 100.0), Coord2(100.0, 0.0));

    assert!(d1 == Coord2(0.0, 300.0));
    assert!(d2 == Coord2(300.0, 0.0));
    assert!(d3 == Coord2(0.0, -300.0));
}

#[test]
fn second_derivative_of_cubic_is_linear_weights() {
    let (d1, d2, d3)    = bezier::derivative4(Coord2(0.0, 0.0), Coord2(0.0, 100.0), Coord2(100.0, 100.0), Coord2(100.0, 0.0));
    let (dd1, dd2)      = bezier::derivative3(d1, d2, d3);

    assert!(dd1 == Coord2(600.0, -600.0));
    assert!(dd2 == Coord2(-600.0, -600.0));
}

#[test]
fn derivative_coefficients_evaluate_the_derivative() {
    // x component of ((0,0), (0,100), (100,100), (100,0))
    let (a, b, c) = bezier::derivative_coefficients(0.0, 0.0, 100.0, 100.0);

    for x in 0..100 {
        let t = (x as f64)/100.0;

        let (d1, d2, d3)    = bezier::derivative4(0.0, 0.0, 100.0, 100.0);
        let by_de_casteljau = bezier::de_casteljau3(t, d1, d2, d3);
        let by_coefficients = a*t*t + b*t + c;

        assert!(approx_equal(by_de_casteljau, by_coefficients));
    }
}
