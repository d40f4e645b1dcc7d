/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Magnitude below which a polynomial coefficient or determinant is treated as zero
pub const ZERO_TOLERANCE: f64 = 1e-12;
