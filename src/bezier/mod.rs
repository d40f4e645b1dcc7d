mod curve;
mod basis;
mod subdivide;
mod derivative;
mod extremes;
mod tangent;
mod walk;
mod deform;
mod equalize;
mod hobby;

pub use self::curve::*;
pub use self::basis::*;
pub use self::subdivide::*;
pub use self::derivative::*;
pub use self::extremes::*;
pub use self::tangent::*;
pub use self::walk::*;
pub use self::deform::*;
pub use self::equalize::*;
pub use self::hobby::*;

pub use super::geo::*;
