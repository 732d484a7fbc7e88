//! Rudiment renderer — turns a render configuration into draw instructions
//! and, through a drawing surface, into SVG.
//!
//! Pipeline: dictionary lookup → hit sequence → layout (stem anchors from
//! the notehead geometry) → beam grouping → instruction emission. Each stage
//! is a pure function of its inputs, so rendering the same configuration
//! twice yields the same instruction list.

pub(crate) mod constants;
pub mod geometry;
pub mod layout;
pub mod beams;
pub mod emitter;
pub mod svg_builder;

use serde::Serialize;

use crate::config::{LayoutConfig, RenderConfig};
use crate::error::NotationError;
use crate::model::Hit;
use crate::rudiments::RudimentDictionary;
use crate::sequence::generate_for;

pub use beams::{group_beams, BeamBar, BeamGroup, BeamStyle};
pub use emitter::{emit, DrawInstruction, Point, TextAnchor};
pub use geometry::{stem_anchor, StemAnchor};
pub use layout::{layout, PlacedNote, StaffGeometry, StemDirection};
pub use svg_builder::{replay, DrawingSurface, SvgSurface};

// ═══════════════════════════════════════════════════════════════════════
// Status collaborator
// ═══════════════════════════════════════════════════════════════════════

/// Two-state render indicator shown by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderStatus {
    Rendering,
    Ready,
}

impl RenderStatus {
    pub fn label(self) -> &'static str {
        match self {
            RenderStatus::Rendering => "Rendering",
            RenderStatus::Ready => "Ready",
        }
    }
}

pub trait StatusIndicator {
    fn set_status(&mut self, status: RenderStatus);
}

/// Hosts without a status display.
impl StatusIndicator for () {
    fn set_status(&mut self, _status: RenderStatus) {}
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Intermediate results of one render, for callers that want more than the
/// final instruction list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    pub hits: Vec<Hit>,
    pub notes: Vec<PlacedNote>,
    /// Beam groups as `[first, end)` index ranges into `notes`
    pub beam_groups: Vec<(usize, usize)>,
    pub instructions: Vec<DrawInstruction>,
}

/// Run the whole pipeline and keep every stage's output.
pub fn render(
    config: &RenderConfig,
    layout_config: &LayoutConfig,
    dictionary: &RudimentDictionary,
) -> Result<RenderOutput, NotationError> {
    let total_beats = config.total_beats();
    let beat_value = config.subdivision.beat_value();
    let staff = StaffGeometry::from_config(layout_config, total_beats, beat_value)?;

    let hits = generate_for(dictionary, config);
    let notes = layout(&hits, &staff);
    let groups = group_beams(&notes, layout_config.beam_group_size);
    let instructions = emit(total_beats, &notes, &groups, layout_config);

    log::debug!(
        "Rendered '{}': {} notes, {} beam groups, {} instructions",
        config.rudiment_key,
        notes.len(),
        groups.len(),
        instructions.len()
    );

    let beam_groups = groups.iter().map(|g| (g.start, g.start + g.len())).collect();

    Ok(RenderOutput {
        hits,
        notes,
        beam_groups,
        instructions,
    })
}

/// Produce the ordered draw instruction list for one render.
pub fn render_instructions(
    config: &RenderConfig,
    layout_config: &LayoutConfig,
    dictionary: &RudimentDictionary,
) -> Result<Vec<DrawInstruction>, NotationError> {
    render(config, layout_config, dictionary).map(|out| out.instructions)
}

/// Render onto a surface, toggling the status indicator around the work.
/// The surface is cleared first. On failure the status stays at
/// `Rendering` and the surface is left untouched.
pub fn render_to_surface<S, I>(
    config: &RenderConfig,
    layout_config: &LayoutConfig,
    dictionary: &RudimentDictionary,
    surface: &mut S,
    status: &mut I,
) -> Result<(), NotationError>
where
    S: DrawingSurface + ?Sized,
    I: StatusIndicator + ?Sized,
{
    status.set_status(RenderStatus::Rendering);
    let instructions = render_instructions(config, layout_config, dictionary)?;
    replay(surface, &instructions);
    status.set_status(RenderStatus::Ready);
    Ok(())
}

/// Render a configuration into a complete SVG string.
pub fn render_to_svg(
    config: &RenderConfig,
    layout_config: &LayoutConfig,
    dictionary: &RudimentDictionary,
) -> Result<String, NotationError> {
    let mut svg = SvgSurface::new(layout_config.canvas_width, layout_config.canvas_height);
    render_to_surface(config, layout_config, dictionary, &mut svg, &mut ())?;
    Ok(svg.build())
}

/// Serialize an instruction list to JSON for hosts that paint natively.
pub fn instructions_to_json(instructions: &[DrawInstruction]) -> Result<String, NotationError> {
    serde_json::to_string_pretty(instructions)
        .map_err(|e| NotationError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StatusLog(Vec<RenderStatus>);

    impl StatusIndicator for StatusLog {
        fn set_status(&mut self, status: RenderStatus) {
            self.0.push(status);
        }
    }

    #[test]
    fn status_goes_rendering_then_ready() {
        let mut svg = SvgSurface::new(780.0, 260.0);
        let mut status = StatusLog::default();
        render_to_surface(
            &RenderConfig::default(),
            &LayoutConfig::default(),
            &RudimentDictionary::default(),
            &mut svg,
            &mut status,
        )
        .unwrap();
        assert_eq!(status.0, vec![RenderStatus::Rendering, RenderStatus::Ready]);
        assert_eq!(RenderStatus::Ready.label(), "Ready");
    }

    #[test]
    fn failed_render_stays_rendering() {
        let layout_config = LayoutConfig {
            notehead_angle_deg: -90.0,
            ..LayoutConfig::default()
        };
        let mut svg = SvgSurface::new(780.0, 260.0);
        svg.line(0.0, 0.0, 1.0, 1.0, 1.0, "#fff");
        let mut status = StatusLog::default();
        let err = render_to_surface(
            &RenderConfig::default(),
            &layout_config,
            &RudimentDictionary::default(),
            &mut svg,
            &mut status,
        )
        .unwrap_err();
        assert!(matches!(err, NotationError::DegenerateRotation { .. }));
        assert_eq!(status.0, vec![RenderStatus::Rendering]);
        assert_eq!(svg.element_count(), 1);
    }

    #[test]
    fn rerender_replaces_previous_drawing() {
        let dict = RudimentDictionary::default();
        let layout_config = LayoutConfig::default();
        let mut svg = SvgSurface::new(780.0, 260.0);
        for _ in 0..2 {
            render_to_surface(&RenderConfig::default(), &layout_config, &dict, &mut svg, &mut ())
                .unwrap();
        }
        // 2 staff + 16×2 note + 2 accents + 4×2 beam bars
        assert_eq!(svg.element_count(), 44);
    }

    #[test]
    fn beam_ranges_cover_chunks() {
        let config = RenderConfig {
            subdivision: crate::model::Subdivision::Eighth,
            ..RenderConfig::default()
        };
        let out = render(&config, &LayoutConfig::default(), &RudimentDictionary::default())
            .unwrap();
        assert_eq!(out.notes.len(), 8);
        assert_eq!(out.beam_groups, vec![(0, 4), (4, 8)]);
    }
}
