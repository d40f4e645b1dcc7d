mod line;
mod slope;
mod intersection;

pub use self::line::*;
pub use self::slope::*;
pub use self::intersection::*;

pub use super::geo::*;
