//! Render configuration — what to draw (`RenderConfig`) and how to draw it
//! (`LayoutConfig`).
//!
//! Both decode from JSON with every field optional, so hosts only send the
//! values they want to change.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::NotationError;
use crate::model::{Hand, Subdivision};
use crate::renderer::constants::*;

/// Fewest and most bars a render may span.
pub const MIN_BARS: i64 = 1;
pub const MAX_BARS: i64 = 2;
/// Beats per bar (4/4-style counting only).
pub const BEATS_PER_BAR: usize = 4;

/// Caller-facing selection of rudiment, subdivision, length and start hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Dictionary key; unknown keys render the fallback rudiment
    pub rudiment_key: String,
    /// One hit per eighth (`"8"`) or sixteenth (`"16"`)
    #[serde(deserialize_with = "lenient_choice")]
    pub subdivision: Subdivision,
    /// Number of bars, clamped to [1, 2] when used
    #[serde(deserialize_with = "lenient_bars")]
    pub bars: i64,
    /// Requested leading hand. Carried through the pipeline but not applied
    /// by the default cyclic sticking; see `rudiments::rotate_sticking`.
    #[serde(deserialize_with = "lenient_choice")]
    pub start_hand: Hand,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rudiment_key: crate::rudiments::DEFAULT_RUDIMENT_KEY.to_string(),
            subdivision: Subdivision::Sixteenth,
            bars: 1,
            start_hand: Hand::R,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, NotationError> {
        serde_json::from_str(json).map_err(|e| NotationError::InvalidConfig(e.to_string()))
    }

    pub fn clamped_bars(&self) -> usize {
        self.bars.clamp(MIN_BARS, MAX_BARS) as usize
    }

    pub fn total_beats(&self) -> usize {
        BEATS_PER_BAR * self.clamped_bars()
    }
}

/// Read a string-keyed choice from any JSON value. Numbers are read by their
/// integer text (`8`, `8.0` → `"8"`); anything else takes the default.
fn lenient_choice<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String> + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => T::from(s),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 => T::from((f as i64).to_string()),
            _ => T::from(n.to_string()),
        },
        _ => T::default(),
    })
}

/// Read a bar count from any JSON number or numeric string, saturating to
/// `MIN_BARS..=MAX_BARS`. Null and non-numeric values mean one bar.
fn lenient_bars<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let bars = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f as i64),
        _ => None,
    };
    Ok(bars.map_or(MIN_BARS, |b| b.clamp(MIN_BARS, MAX_BARS)))
}

/// Visual tuning parameters. Defaults reproduce the reference look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub staff_center_y: f64,
    pub staff_line_thickness: f64,

    pub notehead_rx: f64,
    pub notehead_ry: f64,
    /// Notehead tilt in degrees, counter-clockwise positive
    pub notehead_angle_deg: f64,

    pub beam_offset: f64,
    pub min_stem: f64,
    /// Added to the stem length so stems reach into the beam
    pub stem_length_fudge: f64,
    /// Scale applied to the tangent-point offset when placing the stem
    pub stem_inward_factor: f64,
    pub stem_width: f64,

    /// Notes per beam group; 0 disables beaming
    pub beam_group_size: usize,
    pub beam_thickness: f64,
    pub beam_gap: f64,
    pub beam_padding: f64,
    pub beam_corner_radius: f64,

    pub accent_half_width: f64,
    pub accent_half_height: f64,
    pub accent_gap: f64,
    pub accent_stroke_width: f64,

    pub label_offset_x: f64,
    pub label_offset_y: f64,
    pub label_font_size: f64,
    pub font_family: String,

    pub note_color: String,
    pub label_color: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            margin_left: MARGIN_LEFT,
            margin_right: MARGIN_RIGHT,
            staff_center_y: STAFF_CENTER_Y,
            staff_line_thickness: STAFF_LINE_THICKNESS,
            notehead_rx: NOTEHEAD_RX,
            notehead_ry: NOTEHEAD_RY,
            notehead_angle_deg: NOTEHEAD_ANGLE_DEG,
            beam_offset: BEAM_OFFSET,
            min_stem: MIN_STEM,
            stem_length_fudge: STEM_LENGTH_FUDGE,
            stem_inward_factor: STEM_INWARD_FACTOR,
            stem_width: STEM_WIDTH,
            beam_group_size: BEAM_GROUP_SIZE,
            beam_thickness: BEAM_THICKNESS,
            beam_gap: BEAM_GAP,
            beam_padding: BEAM_PADDING,
            beam_corner_radius: BEAM_CORNER_RADIUS,
            accent_half_width: ACCENT_HALF_WIDTH,
            accent_half_height: ACCENT_HALF_HEIGHT,
            accent_gap: ACCENT_GAP,
            accent_stroke_width: ACCENT_STROKE_WIDTH,
            label_offset_x: LABEL_OFFSET_X,
            label_offset_y: LABEL_OFFSET_Y,
            label_font_size: LABEL_FONT_SIZE,
            font_family: FONT_FAMILY.to_string(),
            note_color: NOTE_COLOR.to_string(),
            label_color: LABEL_COLOR.to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, NotationError> {
        serde_json::from_str(json).map_err(|e| NotationError::InvalidConfig(e.to_string()))
    }

    pub fn staff_width(&self) -> f64 {
        self.canvas_width - self.margin_left - self.margin_right
    }

    pub fn notehead_angle_rad(&self) -> f64 {
        self.notehead_angle_deg.to_radians()
    }

    /// y of the reference line both beams hang from.
    pub fn beam_y(&self) -> f64 {
        self.staff_center_y - self.beam_offset
    }
}
