use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::math::polygon_2d::ring_pairs;
use crate::sketch::{Loop, Sketch};

/// Renders the sketch as a flat `.poly` PSLG description.
///
/// Layout, in order:
/// - `<num_points> 2 0 0`, then one `<index> <x> <y>` line per loop vertex,
///   numbered 1..=num_points loop by loop in export order;
/// - `<num_segments> 0`, then one `<index> <start> <end>` line per polygon
///   edge with globally continuous numbering, each loop closed by its
///   wrap-around segment;
/// - `<num_holes>`, then one `<index> <x> <y>` line per hole marker,
///   numbered independently from 1.
///
/// Coordinates use default `f64` formatting, which re-parses to the same
/// double.
///
/// # Errors
///
/// Returns [`ExportError::IncompleteLoop`] if a draft loop is still open;
/// the sketch is not modified.
pub fn write_poly(sketch: &Sketch) -> Result<String, ExportError> {
    if !sketch.draft().is_empty() {
        return Err(ExportError::IncompleteLoop);
    }

    let num_points: usize = sketch.loops().iter().map(Loop::len).sum();
    let mut out = String::new();

    out.push_str(&format!("{num_points} 2 0 0\n"));
    let vertices = sketch.loops().iter().flat_map(|lp| lp.points.iter());
    for (i, point) in vertices.enumerate() {
        out.push_str(&format!("{} {} {}\n", i + 1, point.x, point.y));
    }

    // Every loop is closed, so there is exactly one segment per vertex.
    out.push_str(&format!("{num_points} 0\n"));
    let mut base = 1;
    for lp in sketch.loops() {
        for (j, k) in ring_pairs(lp.len()) {
            out.push_str(&format!("{} {} {}\n", base + j, base + j, base + k));
        }
        base += lp.len();
    }

    out.push_str(&format!("{}\n", sketch.holes().len()));
    for (i, hole) in sketch.holes().iter().enumerate() {
        out.push_str(&format!("{} {} {}\n", i + 1, hole.x, hole.y));
    }

    Ok(out)
}

/// Renders the sketch and writes it to `path`.
///
/// # Errors
///
/// Returns [`ExportError::IncompleteLoop`] if a draft loop is still open
/// (nothing is written), or [`ExportError::Io`] if the write fails. The
/// sketch is not modified either way.
pub fn save_poly(sketch: &Sketch, path: &Path) -> Result<(), ExportError> {
    let text = write_poly(sketch)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::editor::{Editor, Mode};
    use crate::math::Point2;

    fn click(editor: &mut Editor, x: f64, y: f64) {
        editor.handle_point(Point2::new(x, y)).unwrap();
    }

    #[test]
    fn triangle_export_matches_format() {
        let mut editor = Editor::new();
        click(&mut editor, 0.0, 0.0);
        click(&mut editor, 0.5, 0.0);
        click(&mut editor, 0.5, 0.5);
        click(&mut editor, 0.0, 0.0);
        let text = write_poly(editor.sketch()).unwrap();
        let expected = "3 2 0 0\n\
                        1 0 0\n\
                        2 0.5 0\n\
                        3 0.5 0.5\n\
                        3 0\n\
                        1 1 2\n\
                        2 2 3\n\
                        3 3 1\n\
                        0\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn two_loops_and_a_hole_number_globally() {
        let mut editor = Editor::new();
        click(&mut editor, -0.8, -0.8);
        click(&mut editor, -0.6, -0.8);
        click(&mut editor, -0.6, -0.6);
        click(&mut editor, -0.8, -0.8);
        click(&mut editor, 0.2, 0.2);
        click(&mut editor, 0.4, 0.2);
        click(&mut editor, 0.4, 0.4);
        click(&mut editor, 0.2, 0.2);
        editor.set_mode(Mode::Point);
        click(&mut editor, 0.0, -0.5);

        let text = write_poly(editor.sketch()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "6 2 0 0");
        // Vertex numbering runs 1..=6 across both loops.
        assert!(lines[1].starts_with("1 "));
        assert!(lines[6].starts_with("6 "));
        // Segment numbering continues across loops; each loop wraps back to
        // its own first vertex.
        assert_eq!(lines[7], "6 0");
        assert_eq!(lines[8], "1 1 2");
        assert_eq!(lines[9], "2 2 3");
        assert_eq!(lines[10], "3 3 1");
        assert_eq!(lines[11], "4 4 5");
        assert_eq!(lines[12], "5 5 6");
        assert_eq!(lines[13], "6 6 4");
        // One hole, numbered from 1 independently.
        assert_eq!(lines[14], "1");
        assert_eq!(lines[15], "1 0 -0.5");
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn empty_sketch_exports_empty_sections() {
        let text = write_poly(&Sketch::new()).unwrap();
        assert_eq!(text, "0 2 0 0\n0 0\n0\n");
    }

    #[test]
    fn incomplete_loop_blocks_export() {
        let mut editor = Editor::new();
        click(&mut editor, 0.0, 0.0);
        let err = write_poly(editor.sketch()).unwrap_err();
        assert!(matches!(err, ExportError::IncompleteLoop));
    }

    #[test]
    fn incomplete_loop_save_writes_nothing() {
        let mut editor = Editor::new();
        click(&mut editor, 0.0, 0.0);
        let path = std::env::temp_dir().join("pslgen_incomplete_loop_test.poly");
        let err = save_poly(editor.sketch(), &path).unwrap_err();
        assert!(matches!(err, ExportError::IncompleteLoop));
        assert!(!path.exists());
    }

    #[test]
    fn save_writes_the_rendered_text() {
        let mut editor = Editor::new();
        click(&mut editor, 0.0, 0.0);
        click(&mut editor, 0.5, 0.0);
        click(&mut editor, 0.5, 0.5);
        click(&mut editor, 0.0, 0.0);
        let path = std::env::temp_dir().join("pslgen_save_test.poly");
        save_poly(editor.sketch(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, write_poly(editor.sketch()).unwrap());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_to_missing_directory_fails_with_io() {
        let mut editor = Editor::new();
        click(&mut editor, 0.0, 0.0);
        click(&mut editor, 0.5, 0.0);
        click(&mut editor, 0.5, 0.5);
        click(&mut editor, 0.0, 0.0);
        let path = std::env::temp_dir()
            .join("pslgen_no_such_dir")
            .join("out.poly");
        let err = save_poly(editor.sketch(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn coordinates_round_trip_through_the_text() {
        let mut editor = Editor::new();
        click(&mut editor, 0.123_456_789_012_345, -0.987_654_321_098_765);
        click(&mut editor, 0.7, -0.1);
        click(&mut editor, 0.3, 0.6);
        click(&mut editor, 0.123_456_789_012_345, -0.987_654_321_098_765);
        let text = write_poly(editor.sketch()).unwrap();
        let first_vertex = text.lines().nth(1).unwrap();
        let fields: Vec<&str> = first_vertex.split_whitespace().collect();
        let x: f64 = fields[1].parse().unwrap();
        let y: f64 = fields[2].parse().unwrap();
        assert_eq!(x, 0.123_456_789_012_345);
        assert_eq!(y, -0.987_654_321_098_765);
    }
}
