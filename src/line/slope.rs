use super::super::coordinate::*;

///
/// The gradient of a line, with the vertical case made explicit so that callers
/// branch on it rather than testing a numeric result for NaN
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Slope {
    /// Gradient dy/dx of a non-vertical line
    Finite(f64),

    /// The line has no x extent
    Vertical
}

impl Slope {
    ///
    /// True if this is the slope of a vertical line
    ///
    #[inline]
    pub fn is_vertical(&self) -> bool {
        match self {
            &Slope::Vertical    => true,
            &Slope::Finite(_)   => false
        }
    }
}

///
/// A point with an explicitly assigned direction angle, used for slope solving
/// along stems and italic axes
///
/// The angle is in degrees measured from the vertical axis (0 describes a vertical
/// stem), so the implied gradient is `tan(90 - angle)`. The angle is part of the
/// constructor: there is no way to call the angle-dependent solvers on a point
/// whose angle was never assigned.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AngledPoint {
    pub position:   Coord2,
    pub angle:      f64
}

impl AngledPoint {
    ///
    /// Creates a point at the specified position with an assigned angle in degrees
    ///
    pub fn new(position: Coord2, angle: f64) -> AngledPoint {
        AngledPoint {
            position:   position,
            angle:      angle
        }
    }

    ///
    /// The gradient of the line passing through this point at the assigned angle
    ///
    pub fn slope(&self) -> Slope {
        if self.angle.rem_euclid(180.0) == 0.0 {
            Slope::Vertical
        } else {
            Slope::Finite(f64::tan((90.0-self.angle).to_radians()))
        }
    }

    ///
    /// Where the line through this point crosses the y axis, or None for a vertical line
    ///
    pub fn y_intercept(&self) -> Option<f64> {
        match self.slope() {
            Slope::Finite(slope)    => Some(self.position.y() - slope*self.position.x()),
            Slope::Vertical         => None
        }
    }

    ///
    /// Solves the line equation for the y value at the given x, or None for a vertical line
    ///
    pub fn solve_y(&self, x: f64) -> Option<f64> {
        match self.slope() {
            Slope::Finite(slope)    => Some(slope*x + (self.position.y() - slope*self.position.x())),
            Slope::Vertical         => None
        }
    }

    ///
    /// Solves the line equation for the x value at the given y
    ///
    /// None when the line is vertical or horizontal (no single solution)
    ///
    pub fn solve_x(&self, y: f64) -> Option<f64> {
        match self.slope() {
            Slope::Finite(slope) if slope != 0.0 => {
                let intercept = self.position.y() - slope*self.position.x();
                Some((y - intercept)/slope)
            },

            _ => None
        }
    }

    ///
    /// Finds the x of the adjacent point on the line for an opposite y (stem width measurement)
    ///
    pub fn width_at(&self, y: f64) -> Option<f64> {
        match self.slope() {
            Slope::Finite(slope) if slope != 0.0 => Some(self.position.x() + (self.position.y() - y)/slope),
            _                                    => None
        }
    }
}
