pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Squared-distance threshold under which two points count as coincident.
///
/// Compared against *squared* Euclidean distance, never distance itself.
/// Both the loop-closing proximity test and the shared-endpoint test during
/// edge validation use this one constant, so changing it moves both
/// behaviors together.
pub const COINCIDENCE_TOL_SQ: f64 = 1e-3;
