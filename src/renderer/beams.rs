//! Beam grouping — splits placed notes into fixed-size runs and computes the
//! double-beam rectangles that join each run's stems.

use serde::Serialize;

use super::layout::PlacedNote;

/// A contiguous run of at least two notes joined by beams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamGroup<'a> {
    /// Index of the first member in the placed-note sequence
    pub start: usize,
    pub notes: &'a [PlacedNote],
}

/// One filled beam bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeamBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Beam drawing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamStyle {
    /// Reference y of the primary bar
    pub beam_y: f64,
    pub thickness: f64,
    /// Space between the two bars
    pub gap: f64,
    /// Horizontal overhang past the outer stems
    pub padding: f64,
}

/// Partition `notes` into consecutive chunks of `group_size`. Chunks with a
/// single note are left unbeamed and not returned. A group size of 0
/// disables beaming.
pub fn group_beams(notes: &[PlacedNote], group_size: usize) -> Vec<BeamGroup<'_>> {
    if group_size == 0 {
        return Vec::new();
    }
    notes
        .chunks(group_size)
        .enumerate()
        .filter(|(_, chunk)| chunk.len() > 1)
        .map(|(i, chunk)| BeamGroup {
            start: i * group_size,
            notes: chunk,
        })
        .collect()
}

impl BeamGroup<'_> {
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Stem x of the first and last member.
    pub fn span(&self) -> (f64, f64) {
        let first = self.notes.first().map_or(0.0, |n| n.stem_x);
        let last = self.notes.last().map_or(first, |n| n.stem_x);
        (first, last)
    }

    /// The two stacked bars of a sixteenth-note beam.
    pub fn bars(&self, style: &BeamStyle) -> [BeamBar; 2] {
        let (x_start, x_end) = self.span();
        [
            beam_bar(x_start, x_end, style.beam_y, style),
            beam_bar(
                x_start,
                x_end,
                style.beam_y + style.thickness + style.gap,
                style,
            ),
        ]
    }
}

/// Bar hanging upward from `y_ref` (up-stems), padded past both stems.
fn beam_bar(x_start: f64, x_end: f64, y_ref: f64, style: &BeamStyle) -> BeamBar {
    BeamBar {
        x: x_start.min(x_end) - style.padding,
        y: y_ref - style.thickness,
        width: (x_end - x_start).abs() + 2.0 * style.padding,
        height: style.thickness,
    }
}
