use crate::math::polygon_2d::ring_pairs;
use crate::math::Point2;

/// A finalized closed polygonal boundary.
///
/// Vertices are stored in insertion order; the edge from the last vertex back
/// to the first is implicit. A finalized loop always has at least three
/// vertices and no self-intersections beyond shared endpoints — the
/// [`Editor`](crate::editor::Editor) enforces this before the loop is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    pub points: Vec<Point2>,
}

impl Loop {
    /// Creates a loop from an ordered vertex sequence.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Number of vertices, which equals the number of edges since the ring
    /// is closed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the edges of the closed ring, wrap-around edge included.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        ring_pairs(self.points.len()).map(|(i, j)| (&self.points[i], &self.points[j]))
    }
}

/// The PSLG under construction: finalized loops, interior hole markers, and
/// the draft loop currently being drawn.
///
/// Loop order and hole order are significant — both drive export numbering.
/// The sketch itself never validates; admissibility of new geometry is the
/// editor's job.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    loops: Vec<Loop>,
    holes: Vec<Point2>,
    draft: Vec<Point2>,
}

impl Sketch {
    /// Creates an empty sketch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalized loops in export order.
    #[must_use]
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// Hole markers in insertion order.
    #[must_use]
    pub fn holes(&self) -> &[Point2] {
        &self.holes
    }

    /// Vertices of the draft loop, oldest first. Empty when no loop is being
    /// built.
    #[must_use]
    pub fn draft(&self) -> &[Point2] {
        &self.draft
    }

    /// Appends an interior hole marker. Holes carry no adjacency or
    /// intersection constraints.
    pub fn add_hole(&mut self, p: Point2) {
        self.holes.push(p);
    }

    /// Clears loops, holes, and the draft unconditionally.
    pub fn reset(&mut self) {
        self.loops.clear();
        self.holes.clear();
        self.draft.clear();
    }

    pub(crate) fn push_draft_vertex(&mut self, p: Point2) {
        self.draft.push(p);
    }

    /// Moves the whole draft into the finalized loops in one step, leaving
    /// the draft empty.
    pub(crate) fn finalize_draft(&mut self) {
        let points = std::mem::take(&mut self.draft);
        self.loops.push(Loop::new(points));
    }
}
