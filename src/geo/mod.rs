//!
//! # Traits for basic geometric definitions
//!
//! This provides some basic geometric definitions. The `Geo` trait can be implemented by any type that has
//! a particular type of coordinate - for example, implementations of `BezierCurve` need to implement `Geo`
//! in order to describe what type they use for coordinates.
//!

mod geo;

pub use self::geo::*;
pub use super::coordinate::*;
