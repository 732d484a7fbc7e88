//! Default layout constants for the rudiment renderer (all in SVG user units).
//! Each one seeds a field of `LayoutConfig`.

// ── Canvas & margins ────────────────────────────────────────────────
pub(crate) const CANVAS_WIDTH: f64 = 780.0;
pub(crate) const CANVAS_HEIGHT: f64 = 260.0;
pub(crate) const MARGIN_LEFT: f64 = 28.0;
pub(crate) const MARGIN_RIGHT: f64 = 28.0;

// ── Staff ───────────────────────────────────────────────────────────
pub(crate) const STAFF_CENTER_Y: f64 = 130.0;
pub(crate) const STAFF_LINE_THICKNESS: f64 = 2.4;
pub(crate) const LABEL_OFFSET_X: f64 = -4.0; // time signature, right-anchored
pub(crate) const LABEL_OFFSET_Y: f64 = -20.0;
pub(crate) const LABEL_FONT_SIZE: f64 = 12.0;
pub(crate) const FONT_FAMILY: &str = "Space Grotesk, system-ui, sans-serif";

// ── Noteheads ───────────────────────────────────────────────────────
pub(crate) const NOTEHEAD_RX: f64 = 9.0;
pub(crate) const NOTEHEAD_RY: f64 = 6.5;
pub(crate) const NOTEHEAD_ANGLE_DEG: f64 = -25.0;

// ── Stems ───────────────────────────────────────────────────────────
pub(crate) const BEAM_OFFSET: f64 = 44.0; // beam line sits this far above the staff line
pub(crate) const MIN_STEM: f64 = 28.0;
pub(crate) const STEM_LENGTH_FUDGE: f64 = 1.0;
pub(crate) const STEM_INWARD_FACTOR: f64 = 0.9; // tucks the stem into the rotated head
pub(crate) const STEM_WIDTH: f64 = 2.2;

// ── Beams ───────────────────────────────────────────────────────────
pub(crate) const BEAM_GROUP_SIZE: usize = 4;
pub(crate) const BEAM_THICKNESS: f64 = 5.0;
pub(crate) const BEAM_GAP: f64 = 4.0;
pub(crate) const BEAM_PADDING: f64 = 1.2;
pub(crate) const BEAM_CORNER_RADIUS: f64 = 2.0;

// ── Accents ─────────────────────────────────────────────────────────
pub(crate) const ACCENT_HALF_WIDTH: f64 = 9.0;
pub(crate) const ACCENT_HALF_HEIGHT: f64 = 5.0;
pub(crate) const ACCENT_GAP: f64 = 12.0;
pub(crate) const ACCENT_STROKE_WIDTH: f64 = 2.2;

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const NOTE_COLOR: &str = "#ffffff";
pub(crate) const LABEL_COLOR: &str = "rgba(255,255,255,0.8)";
