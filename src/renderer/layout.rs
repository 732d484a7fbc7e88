//! Layout computation — places each hit on the staff timeline and resolves
//! its notehead, stem and accent coordinates.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::NotationError;
use crate::model::{Hand, Hit, NoteDuration};
use super::geometry::{stem_anchor, StemAnchor};

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

/// Stem direction. Percussion on a single line uses up-stems only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StemDirection {
    Up,
}

impl StemDirection {
    /// +1 for up; stems are drawn from the head toward smaller y.
    pub fn sign(self) -> f64 {
        match self {
            StemDirection::Up => 1.0,
        }
    }
}

/// A hit with resolved coordinates. One per hit, in hit order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNote {
    pub hand: Hand,
    /// Notehead center
    pub x: f64,
    pub y: f64,
    /// Stem line x, pulled in from the tangent point
    pub stem_x: f64,
    pub stem_start_y: f64,
    pub stem_length: f64,
    /// Far end of the stem
    pub stem_top_y: f64,
    pub stem_direction: StemDirection,
    pub duration: NoteDuration,
    pub accent: bool,
    /// Vertical center of the accent mark, when accented
    pub accent_y: Option<f64>,
}

/// Everything the layout needs about the staff, resolved once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffGeometry {
    pub margin_left: f64,
    pub staff_width: f64,
    pub center_y: f64,
    pub total_beats: usize,
    /// Beats per hit (0.5 for eighths, 0.25 for sixteenths)
    pub beat_value: f64,
    pub line_half: f64,
    pub head_ry: f64,
    pub beam_y: f64,
    pub anchor: StemAnchor,
    pub stem_inward_factor: f64,
    pub stem_length_fudge: f64,
    pub min_stem: f64,
    pub accent_gap: f64,
}

impl StaffGeometry {
    /// Resolve staff geometry, solving the notehead stem anchor.
    pub fn from_config(
        layout: &LayoutConfig,
        total_beats: usize,
        beat_value: f64,
    ) -> Result<Self, NotationError> {
        let anchor = stem_anchor(
            layout.notehead_rx,
            layout.notehead_ry,
            layout.notehead_angle_rad(),
        )?;
        Ok(Self {
            margin_left: layout.margin_left,
            staff_width: layout.staff_width(),
            center_y: layout.staff_center_y,
            total_beats,
            beat_value,
            line_half: layout.staff_line_thickness * 0.5,
            head_ry: layout.notehead_ry,
            beam_y: layout.beam_y(),
            anchor,
            stem_inward_factor: layout.stem_inward_factor,
            stem_length_fudge: layout.stem_length_fudge,
            min_stem: layout.min_stem,
            accent_gap: layout.accent_gap,
        })
    }

    /// Width of one beat.
    pub fn spacing(&self) -> f64 {
        self.staff_width / self.total_beats.max(1) as f64
    }

    /// Notehead y: right hand above the line, left hand below.
    pub fn head_y(&self, hand: Hand) -> f64 {
        match hand {
            Hand::R => self.center_y - self.head_ry - self.line_half,
            Hand::L => self.center_y + self.head_ry + self.line_half,
        }
    }

    /// Center x of hit slot `index`.
    pub fn slot_x(&self, index: usize) -> f64 {
        let spacing = self.spacing();
        let beat_cursor = index as f64 * self.beat_value;
        self.margin_left + beat_cursor * spacing + spacing * self.beat_value * 0.5
    }

    fn place(&self, index: usize, hit: &Hit) -> PlacedNote {
        let x = self.slot_x(index);
        let y = self.head_y(hit.hand);
        let direction = StemDirection::Up;

        let stem_x = x + self.anchor.offset_x * self.stem_inward_factor;
        let stem_start_y = y + self.anchor.offset_y;
        let stem_length = self
            .min_stem
            .max(stem_start_y - self.beam_y + self.stem_length_fudge);
        let stem_top_y = stem_start_y - stem_length * direction.sign();

        let accent_y = hit.accent.then(|| y - stem_length - self.accent_gap);

        PlacedNote {
            hand: hit.hand,
            x,
            y,
            stem_x,
            stem_start_y,
            stem_length,
            stem_top_y,
            stem_direction: direction,
            duration: hit.duration,
            accent: hit.accent,
            accent_y,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════

/// Place every hit. The output has exactly one note per hit, in order.
pub fn layout(hits: &[Hit], staff: &StaffGeometry) -> Vec<PlacedNote> {
    hits.iter()
        .enumerate()
        .map(|(i, hit)| staff.place(i, hit))
        .collect()
}
