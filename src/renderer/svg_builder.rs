//! Drawing surface — the boundary between the layout core and whatever
//! actually paints. `SvgSurface` accumulates SVG elements and produces the
//! final document string.

use super::emitter::{DrawInstruction, Point, TextAnchor};

// ═══════════════════════════════════════════════════════════════════════
// DrawingSurface
// ═══════════════════════════════════════════════════════════════════════

/// Primitive operations a renderer target must provide. All geometry arrives
/// fully resolved; the surface owns its canvas and decides nothing.
pub trait DrawingSurface {
    /// Remove everything drawn so far.
    fn clear(&mut self);

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: &str);

    #[allow(clippy::too_many_arguments)]
    fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        font_size: f64,
        font_family: &str,
        anchor: TextAnchor,
        color: &str,
    );

    /// Ellipse rotated by `rotation_deg` about its center.
    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation_deg: f64, fill: &str);

    /// Filled rectangle with corner radius `radius`.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64, fill: &str);

    /// Stroked open path through `points`.
    fn path(&mut self, points: &[Point], stroke_width: f64, color: &str);
}

/// Clear `surface` and execute `instructions` in order.
pub fn replay<S: DrawingSurface + ?Sized>(surface: &mut S, instructions: &[DrawInstruction]) {
    surface.clear();
    for instruction in instructions {
        match instruction {
            DrawInstruction::Line { x1, y1, x2, y2, stroke_width, color } => {
                surface.line(*x1, *y1, *x2, *y2, *stroke_width, color);
            }
            DrawInstruction::Text { x, y, content, font_size, font_family, anchor, color } => {
                surface.text(*x, *y, content, *font_size, font_family, *anchor, color);
            }
            DrawInstruction::Ellipse { cx, cy, rx, ry, rotation_deg, fill } => {
                surface.ellipse(*cx, *cy, *rx, *ry, *rotation_deg, fill);
            }
            DrawInstruction::Rect { x, y, width, height, corner_radius, fill } => {
                surface.rect(*x, *y, *width, *height, *corner_radius, fill);
            }
            DrawInstruction::Path { points, stroke_width, color } => {
                surface.path(points, *stroke_width, color);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SvgSurface
// ═══════════════════════════════════════════════════════════════════════

pub struct SvgSurface {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" fill="none">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn build(self) -> String {
        self.to_svg()
    }
}

impl DrawingSurface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: &str) {
        self.elements.push(format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, escape(color), stroke_width
        ));
    }

    fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        font_size: f64,
        font_family: &str,
        anchor: TextAnchor,
        color: &str,
    ) {
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" fill="{}" font-size="{}px" font-family="{}" text-anchor="{}">{}</text>"#,
            x,
            y,
            escape(color),
            font_size,
            escape(font_family),
            anchor.as_str(),
            escape(content)
        ));
    }

    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation_deg: f64, fill: &str) {
        self.elements.push(format!(
            r#"<ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" fill="{}" transform="rotate({:.2} {:.2} {:.2})"/>"#,
            cx, cy, rx, ry, escape(fill), rotation_deg, cx, cy
        ));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" rx="{:.2}" ry="{:.2}"/>"#,
            x, y, width, height, escape(fill), radius, radius
        ));
    }

    fn path(&mut self, points: &[Point], stroke_width: f64, color: &str) {
        if points.is_empty() {
            return;
        }
        let d = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{} {:.2} {:.2}", cmd, p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.2}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            d,
            escape(color),
            stroke_width
        ));
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
