use super::super::coordinate::*;

///
/// Base trait for geometric objects, tying them to the coordinate type they
/// are measured in
///
pub trait Geo {
    /// The type of a point in this geometry
    type Point: Coordinate;
}
