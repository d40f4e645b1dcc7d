use super::slope::*;
use super::super::geo::*;
use super::super::coordinate::*;

///
/// Represents a straight line
///
pub trait Line : Geo {
    ///
    /// Creates a new line from points
    ///
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self;

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    fn points(&self) -> (Self::Point, Self::Point);
}

impl<Point: Coordinate+Clone> Geo for (Point, Point) {
    type Point = Point;
}

///
/// Simplest line is just a tuple of two points
///
impl<Point: Coordinate+Clone> Line for (Point, Point) {
    ///
    /// Creates a new line from points
    ///
    #[inline]
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self {
        (p1, p2)
    }

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    #[inline]
    fn points(&self) -> (Self::Point, Self::Point) {
        self.clone()
    }
}

///
/// A 2D line segment that caches its derived values (x/y extent, angle and slope)
///
/// The derived values are computed when the line is built and again on `set_points`:
/// they are never recomputed implicitly, which is why the endpoints are not public.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Line2 {
    p0:     Coord2,
    p1:     Coord2,
    x_diff: f64,
    y_diff: f64,
    angle:  f64,
    slope:  Slope
}

impl Line2 {
    ///
    /// Creates a line between two points, computing the derived values
    ///
    pub fn from_points(p0: Coord2, p1: Coord2) -> Line2 {
        let x_diff  = p1.x() - p0.x();
        let y_diff  = p1.y() - p0.y();
        let angle   = f64::atan2(y_diff, x_diff).to_degrees();

        let slope   = if x_diff == 0.0 {
            Slope::Vertical
        } else {
            Slope::Finite(y_diff/x_diff)
        };

        Line2 {
            p0:     p0,
            p1:     p1,
            x_diff: x_diff,
            y_diff: y_diff,
            angle:  angle,
            slope:  slope
        }
    }

    ///
    /// Replaces both endpoints, recomputing the derived values
    ///
    pub fn set_points(&mut self, p0: Coord2, p1: Coord2) {
        *self = Line2::from_points(p0, p1);
    }

    #[inline]
    pub fn p0(&self) -> Coord2 {
        self.p0
    }

    #[inline]
    pub fn p1(&self) -> Coord2 {
        self.p1
    }

    #[inline]
    pub fn x_diff(&self) -> f64 {
        self.x_diff
    }

    #[inline]
    pub fn y_diff(&self) -> f64 {
        self.y_diff
    }

    ///
    /// The direction of this line in degrees (atan2 of the extents)
    ///
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn slope(&self) -> Slope {
        self.slope
    }

    ///
    /// Where this line crosses the y axis
    ///
    /// A vertical line has no y intercept, so the first point's y is returned
    /// unchanged (the historical behaviour downstream callers expect).
    ///
    pub fn y_intercept(&self) -> f64 {
        match self.slope {
            Slope::Finite(slope)    => self.p0.y() - slope*self.p0.x(),
            Slope::Vertical         => self.p0.y()
        }
    }

    ///
    /// Solves the line equation for the y value at the given x
    ///
    /// A vertical line evaluates to the first point's y unchanged.
    ///
    pub fn solve_y(&self, x: f64) -> f64 {
        match self.slope {
            Slope::Finite(slope)    => slope*x + self.y_intercept(),
            Slope::Vertical         => self.p0.y()
        }
    }

    ///
    /// Solves the line equation for the x value at the given y
    ///
    /// A vertical or horizontal line evaluates to the first point's x unchanged.
    ///
    pub fn solve_x(&self, y: f64) -> f64 {
        match self.slope {
            Slope::Finite(slope) if slope != 0.0 => (y - self.y_intercept())/slope,
            _                                    => self.p0.x()
        }
    }
}

impl Geo for Line2 {
    type Point = Coord2;
}

impl Line for Line2 {
    #[inline]
    fn from_points(p1: Coord2, p2: Coord2) -> Line2 {
        Line2::from_points(p1, p2)
    }

    #[inline]
    fn points(&self) -> (Coord2, Coord2) {
        (self.p0, self.p1)
    }
}
