use super::curve::*;
use super::super::coordinate::*;

///
/// Rigidly shifts the start point of a curve by the offset vector, dragging the two
/// control points along proportionally so that the curve keeps its relative shape
///
/// Each control point moves by the offset scaled by its fractional distance to the
/// end point, computed per component. A component in which the curve has no extent
/// leaves the control points untouched in that component.
///
pub fn shift_start<Curve: BezierCurveFactory>(curve: &Curve, offset: &Curve::Point) -> Curve {
    let w1          = curve.start_point();
    let w4          = curve.end_point();
    let (w2, w3)    = curve.control_points();

    let mut new_w2 = vec![];
    let mut new_w3 = vec![];

    for component_index in 0..Curve::Point::len() {
        let base_diff   = w4.get(component_index) - w1.get(component_index);
        let cp1_diff    = w4.get(component_index) - w2.get(component_index);
        let cp2_diff    = w4.get(component_index) - w3.get(component_index);
        let shift       = offset.get(component_index);

        if base_diff != 0.0 {
            new_w2.push(w2.get(component_index) + (cp1_diff/base_diff)*shift);
            new_w3.push(w3.get(component_index) + (cp2_diff/base_diff)*shift);
        } else {
            new_w2.push(w2.get(component_index));
            new_w3.push(w3.get(component_index));
        }
    }

    Curve::from_points(w1 + *offset, (Curve::Point::from_components(&new_w2), Curve::Point::from_components(&new_w3)), w4)
}

///
/// Rigidly shifts the end point of a curve by the offset vector, dragging the two
/// control points along proportionally
///
/// Implemented by reversing the curve, shifting its start and reversing back.
///
pub fn shift_end<Curve: BezierCurveFactory>(curve: &Curve, offset: &Curve::Point) -> Curve {
    let reversed: Curve = curve.clone().reverse();
    let shifted         = shift_start(&reversed, offset);

    shifted.reverse()
}
