use super::Point2;

/// Bounded segment-segment intersection in 2D.
///
/// Tests whether segment `p1`–`p2` crosses segment `p3`–`p4` and returns the
/// crossing point. A zero determinant (parallel or collinear segments) yields
/// `None`; collinear overlap is not reported as an intersection. A solution of
/// the infinite-line system is kept only if it lies inside the closed bounding
/// box of both segments.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_intersect_2d(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let d = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if d == 0.0 {
        return None;
    }

    // 2x2 determinant solution for the line-line intersection point.
    let pre = p1.x * p2.y - p1.y * p2.x;
    let post = p3.x * p4.y - p3.y * p4.x;
    let x = (pre * (p3.x - p4.x) - (p1.x - p2.x) * post) / d;
    let y = (pre * (p3.y - p4.y) - (p1.y - p2.y) * post) / d;

    // The lines cross, but the segments only do if the solution falls inside
    // both bounding boxes.
    if x < p1.x.min(p2.x) || x > p1.x.max(p2.x) || x < p3.x.min(p4.x) || x > p3.x.max(p4.x) {
        return None;
    }
    if y < p1.y.min(p2.y) || y > p1.y.max(p2.y) || y < p3.y.min(p4.y) || y > p3.y.max(p4.y) {
        return None;
    }

    Some(Point2::new(x, y))
}
