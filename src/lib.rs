#![warn(bare_trait_objects)]

extern crate roots;
extern crate itertools;

pub mod bezier;
pub mod line;
pub mod math;
pub mod consts;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::{BezierCurve, BezierCurveFactory};
pub use self::line::Line;
