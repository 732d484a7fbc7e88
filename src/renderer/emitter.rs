//! Draw instruction emitter — projects placed notes and beam groups onto
//! primitive drawing commands with fully resolved coordinates.
//!
//! Order: staff line, time-signature label, then each note's head, stem and
//! accent in hit order, then beam bars so they sit above the stems.

use serde::Serialize;

use crate::config::LayoutConfig;
use super::beams::{BeamGroup, BeamStyle};
use super::layout::PlacedNote;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// One primitive for the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawInstruction {
    /// Round-capped stroked line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        color: String,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        font_family: String,
        anchor: TextAnchor,
        color: String,
    },
    /// Filled ellipse rotated about its own center
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation_deg: f64,
        fill: String,
    },
    /// Filled rectangle with rounded corners
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: String,
    },
    /// Open polyline stroked with round caps and joins
    Path {
        points: Vec<Point>,
        stroke_width: f64,
        color: String,
    },
}

/// Emit the full instruction list for one render.
pub fn emit(
    total_beats: usize,
    notes: &[PlacedNote],
    groups: &[BeamGroup<'_>],
    layout: &LayoutConfig,
) -> Vec<DrawInstruction> {
    let mut out = Vec::with_capacity(2 + notes.len() * 3 + groups.len() * 2);

    emit_staff(&mut out, total_beats, layout);
    for note in notes {
        emit_note(&mut out, note, layout);
    }

    let style = BeamStyle {
        beam_y: layout.beam_y(),
        thickness: layout.beam_thickness,
        gap: layout.beam_gap,
        padding: layout.beam_padding,
    };
    for group in groups {
        for bar in group.bars(&style) {
            out.push(DrawInstruction::Rect {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                corner_radius: layout.beam_corner_radius,
                fill: layout.note_color.clone(),
            });
        }
    }

    out
}

fn emit_staff(out: &mut Vec<DrawInstruction>, total_beats: usize, layout: &LayoutConfig) {
    let y = layout.staff_center_y;
    out.push(DrawInstruction::Line {
        x1: layout.margin_left,
        y1: y,
        x2: layout.margin_left + layout.staff_width(),
        y2: y,
        stroke_width: layout.staff_line_thickness,
        color: layout.note_color.clone(),
    });
    out.push(DrawInstruction::Text {
        x: layout.margin_left + layout.label_offset_x,
        y: y + layout.label_offset_y,
        content: format!("{}/4", total_beats),
        font_size: layout.label_font_size,
        font_family: layout.font_family.clone(),
        anchor: TextAnchor::End,
        color: layout.label_color.clone(),
    });
}

fn emit_note(out: &mut Vec<DrawInstruction>, note: &PlacedNote, layout: &LayoutConfig) {
    out.push(DrawInstruction::Ellipse {
        cx: note.x,
        cy: note.y,
        rx: layout.notehead_rx,
        ry: layout.notehead_ry,
        rotation_deg: layout.notehead_angle_deg,
        fill: layout.note_color.clone(),
    });
    out.push(DrawInstruction::Line {
        x1: note.stem_x,
        y1: note.stem_start_y,
        x2: note.stem_x,
        y2: note.stem_top_y,
        stroke_width: layout.stem_width,
        color: layout.note_color.clone(),
    });
    if let Some(y) = note.accent_y {
        out.push(accent_mark(note.x, y, layout));
    }
}

/// A `>` accent centered vertically on `y`.
fn accent_mark(x: f64, y: f64, layout: &LayoutConfig) -> DrawInstruction {
    let w = layout.accent_half_width;
    let h = layout.accent_half_height;
    DrawInstruction::Path {
        points: vec![
            Point { x: x - w, y: y - h },
            Point { x: x + w, y },
            Point { x: x - w, y: y + h },
        ],
        stroke_width: layout.accent_stroke_width,
        color: layout.note_color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hand, Hit, NoteDuration};
    use crate::renderer::beams::group_beams;
    use crate::renderer::layout::{layout as place, StaffGeometry};

    fn kinds(instructions: &[DrawInstruction]) -> String {
        instructions
            .iter()
            .map(|i| match i {
                DrawInstruction::Line { .. } => 'l',
                DrawInstruction::Text { .. } => 't',
                DrawInstruction::Ellipse { .. } => 'e',
                DrawInstruction::Rect { .. } => 'r',
                DrawInstruction::Path { .. } => 'p',
            })
            .collect()
    }

    fn render(hits: &[Hit]) -> Vec<DrawInstruction> {
        let config = LayoutConfig::default();
        let staff = StaffGeometry::from_config(&config, 4, 0.25).unwrap();
        let notes = place(hits, &staff);
        let groups = group_beams(&notes, config.beam_group_size);
        emit(4, &notes, &groups, &config)
    }

    fn hit(hand: Hand, accent: bool) -> Hit {
        Hit {
            hand,
            duration: NoteDuration::Sixteenth,
            accent,
        }
    }

    #[test]
    fn draw_order() {
        let hits = [
            hit(Hand::L, true),
            hit(Hand::R, false),
            hit(Hand::L, false),
            hit(Hand::L, false),
            hit(Hand::R, false),
        ];
        // staff + label, 5 heads/stems with one accent, one beam group of 4
        assert_eq!(kinds(&render(&hits)), "ltelpelelelelrr");
    }

    #[test]
    fn label_shows_beats() {
        let out = render(&[hit(Hand::R, false)]);
        match &out[1] {
            DrawInstruction::Text { content, anchor, x, y, .. } => {
                assert_eq!(content, "4/4");
                assert_eq!(*anchor, TextAnchor::End);
                assert_eq!((*x, *y), (24.0, 110.0));
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn accent_is_a_chevron() {
        let out = render(&[hit(Hand::R, true)]);
        let DrawInstruction::Path { points, .. } = &out[4] else {
            panic!("expected accent path");
        };
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].x, points[2].x);
        assert!((points[1].x - points[0].x - 18.0).abs() < 1e-9);
        assert!((points[2].y - points[0].y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn instructions_serialize_with_kind_tag() {
        let out = render(&[hit(Hand::R, false)]);
        let json = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(json["kind"], "line");
        assert_eq!(json["stroke_width"], 2.4);
    }
}
