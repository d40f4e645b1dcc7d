use std::ops::*;

///
/// Represents a value that can be used as a coordinate in a bezier curve
///
pub trait Coordinate : Sized+Copy+Add<Self, Output=Self>+Mul<f64, Output=Self>+Sub<Self, Output=Self> {
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    #[inline]
    fn distance_to(&self, target: &Self) -> f64 {
        let offset              = *self - *target;
        let squared_distance    = offset.dot(&offset);

        f64::sqrt(squared_distance)
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        let mut dot_product = 0.0;

        for component_index in 0..Self::len() {
            dot_product += self.get(component_index) * target.get(component_index);
        }

        dot_product
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }
}

///
/// Represents a coordinate with a 2D position
///
pub trait Coordinate2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    ///
    /// The x and y components as a tuple
    ///
    #[inline]
    fn coords(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    ///
    /// The x and y components truncated to integers (font design units)
    ///
    #[inline]
    fn int_coords(&self) -> (i64, i64) {
        (self.x() as i64, self.y() as i64)
    }
}

impl Coordinate for f64 {
    fn from_components(components: &[f64]) -> f64 {
        components[0]
    }

    #[inline] fn origin() -> f64 { 0.0 }
    #[inline] fn len() -> usize { 1 }
    #[inline] fn get(&self, _index: usize) -> f64 { *self }

    #[inline]
    fn from_biggest_components(p1: f64, p2: f64) -> f64 {
        if p1 > p2 {
            p1
        } else {
            p2
        }
    }

    #[inline]
    fn from_smallest_components(p1: f64, p2: f64) -> f64 {
        if p1 < p2 {
            p1
        } else {
            p2
        }
    }

    #[inline]
    fn distance_to(&self, target: &f64) -> f64 {
        f64::abs(self-target)
    }

    fn dot(&self, target: &f64) -> f64 {
        self * target
    }
}

/// Represents a 2D point
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    ///
    /// Returns this point with its axes swapped
    ///
    #[inline]
    pub fn swap(self) -> Coord2 {
        Coord2(self.1, self.0)
    }
}

impl Coordinate2D for Coord2 {
    ///
    /// X component of this coordinate
    ///
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Add<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Add<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: f64) -> Coord2 {
        Coord2(self.0 + rhs, self.1 + rhs)
    }
}

impl Add<(f64, f64)> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: (f64, f64)) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Sub<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: f64) -> Coord2 {
        Coord2(self.0 - rhs, self.1 - rhs)
    }
}

impl Sub<(f64, f64)> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: (f64, f64)) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

///
/// Multiplying two points treats them as complex numbers ((x, y) as x+iy)
///
impl Mul<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0*rhs.0 - self.1*rhs.1, self.0*rhs.1 + self.1*rhs.0)
    }
}

impl Mul<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Mul<(f64, f64)> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: (f64, f64)) -> Coord2 {
        Coord2(self.0 * rhs.0, self.1 * rhs.1)
    }
}

///
/// Dividing a point by a point is complex division
///
impl Div<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn div(self, rhs: Coord2) -> Coord2 {
        let denom = rhs.0*rhs.0 + rhs.1*rhs.1;

        Coord2((self.0*rhs.0 + self.1*rhs.1)/denom, (self.1*rhs.0 - self.0*rhs.1)/denom)
    }
}

///
/// Dividing a point by a scalar floors each component (legacy behaviour kept for
/// existing callers, see DESIGN.md)
///
impl Div<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn div(self, rhs: f64) -> Coord2 {
        Coord2((self.0 / rhs).floor(), (self.1 / rhs).floor())
    }
}

impl Div<(f64, f64)> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn div(self, rhs: (f64, f64)) -> Coord2 {
        Coord2((self.0 / rhs.0).floor(), (self.1 / rhs.1).floor())
    }
}

impl Coordinate for Coord2 {
    #[inline]
    fn from_components(components: &[f64]) -> Coord2 {
        Coord2(components[0], components[1])
    }

    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    fn len() -> usize { 2 }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("Coord2 only has two components")
        }
    }

    fn from_biggest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::from_biggest_components(p1.0, p2.0), f64::from_biggest_components(p1.1, p2.1))
    }

    fn from_smallest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::from_smallest_components(p1.0, p2.0), f64::from_smallest_components(p1.1, p2.1))
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f64 {
        let dist_x = target.0-self.0;
        let dist_y = target.1-self.1;

        f64::sqrt(dist_x*dist_x + dist_y*dist_y)
    }

    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        self.0*target.0 + self.1*target.1
    }
}
