use super::Point2;

/// Squared Euclidean distance between two points.
///
/// The coincidence tolerance is expressed in this unit, so callers compare
/// against [`COINCIDENCE_TOL_SQ`](super::COINCIDENCE_TOL_SQ) without taking
/// a square root.
#[must_use]
pub fn distance_sq(a: &Point2, b: &Point2) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
