use crate::error::EditError;
use crate::math::distance_2d::distance_sq;
use crate::math::intersect_2d::segment_intersect_2d;
use crate::math::polygon_2d::ring_pairs;
use crate::math::{Point2, COINCIDENCE_TOL_SQ};
use crate::sketch::Sketch;

/// Input interpretation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks build the draft loop.
    #[default]
    Loop,
    /// Clicks drop standalone hole markers.
    Point,
}

/// What a successfully handled input did to the sketch. The embedding shell
/// requests a redraw on any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A hole marker was appended.
    HoleAdded,
    /// The draft loop grew by one vertex.
    VertexAdded,
    /// The draft was finalized into a closed loop.
    LoopClosed,
}

/// State machine that turns pointer input into sketch mutations.
///
/// The editor is Idle while the draft is empty and Building otherwise, with
/// the mode flag orthogonal to both. Rejected input leaves the sketch
/// untouched.
#[derive(Debug, Default)]
pub struct Editor {
    sketch: Sketch,
    mode: Mode,
}

impl Editor {
    /// Creates an editor over an empty sketch, in loop mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the sketch for renderers and the exporter.
    #[must_use]
    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches input interpretation. Any draft in progress is kept as-is.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Discards all geometry, including any draft in progress.
    pub fn reset(&mut self) {
        self.sketch.reset();
    }

    /// Handles one released pointer position in normalized coordinates.
    ///
    /// In [`Mode::Point`] the position becomes a hole marker. In
    /// [`Mode::Loop`] it either closes the draft (three or more vertices
    /// accumulated and the click lands within tolerance of the first vertex;
    /// the closing click itself is discarded), extends the draft by one
    /// vertex, or is rejected. A close is never offered for a draft of fewer
    /// than three vertices, however close the click is to the start.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::SegmentsIntersect`] if the candidate edge crosses
    /// any finalized-loop edge or any draft edge farther than the coincidence
    /// tolerance from its own start vertex. The sketch is left unchanged.
    pub fn handle_point(&mut self, p: Point2) -> Result<EditOutcome, EditError> {
        if self.mode == Mode::Point {
            self.sketch.add_hole(p);
            return Ok(EditOutcome::HoleAdded);
        }

        let draft = self.sketch.draft();
        if draft.len() >= 3 && distance_sq(&p, &draft[0]) < COINCIDENCE_TOL_SQ {
            self.sketch.finalize_draft();
            return Ok(EditOutcome::LoopClosed);
        }

        if let Some(p0) = draft.last().copied() {
            for lp in self.sketch.loops() {
                check_edge_against_ring(&p0, &p, &lp.points)?;
            }
            check_edge_against_ring(&p0, &p, draft)?;
        }

        self.sketch.push_draft_vertex(p);
        Ok(EditOutcome::VertexAdded)
    }
}

/// Rejects the candidate edge `p0`–`p1` if it crosses any edge of `ring`
/// anywhere other than at `p0` itself.
///
/// `p0` is an endpoint of the adjacent ring edges, so the raw intersection
/// test reports a crossing at distance zero there; crossings within the
/// coincidence tolerance of `p0` are legal shared-vertex contact. Stops at
/// the first violation.
fn check_edge_against_ring(p0: &Point2, p1: &Point2, ring: &[Point2]) -> Result<(), EditError> {
    for (i, j) in ring_pairs(ring.len()) {
        if let Some(ii) = segment_intersect_2d(p0, p1, &ring[i], &ring[j]) {
            if distance_sq(p0, &ii) > COINCIDENCE_TOL_SQ {
                return Err(EditError::SegmentsIntersect);
            }
        }
    }
    Ok(())
}
