//! SVG preview — container, inset guide, anchor grid and cards.
//!
//! Coordinates are container pixels, so the SVG can be overlaid on a
//! screenshot of the page at the same size.

use super::{LayoutFrame, Renderer};
use crate::layout::GridGeometry;

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_SIZE: i32 = 14;
const FONT_FAMILY: &str = "monospace";

const CARD_STYLE: &str =
    r##"fill="#0f172a" fill-opacity="0.85" stroke="#60a5fa" stroke-width="2""##;
const DEGRADED_STYLE: &str =
    r##"fill="#0f172a" fill-opacity="0.85" stroke="#f87171" stroke-width="2" stroke-dasharray="6 3""##;
const GUIDE_STYLE: &str = r##"fill="none" stroke="#475569" stroke-width="1" stroke-dasharray="4 4""##;
const GRID_STYLE: &str = r##"stroke="#334155" stroke-width="1" stroke-dasharray="2 6""##;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn font(size: i32) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size}""#)
}

/// Round to one decimal so output stays readable.
fn num(v: f64) -> String {
    let r = (v * 10.0).round() / 10.0;
    if r.fract() == 0.0 {
        format!("{}", r as i64)
    } else {
        format!("{r:.1}")
    }
}

fn render_grid(frame: &LayoutFrame<'_>) -> String {
    let grid = GridGeometry::new(frame.container, frame.config);
    let m = grid.margin;
    let right = frame.container.width - m;
    let bottom = frame.container.height - m;

    let mut parts = vec![format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" {GUIDE_STYLE}/>"#,
        num(m),
        num(m),
        num(right - m),
        num(bottom - m)
    )];
    for c in 1..frame.config.grid_cols {
        let x = m + c as f64 * grid.cell_width;
        parts.push(format!(
            r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" {GRID_STYLE}/>"#,
            x = num(x),
            y1 = num(m),
            y2 = num(bottom)
        ));
    }
    for r in 1..frame.config.grid_rows {
        let y = m + r as f64 * grid.cell_height;
        parts.push(format!(
            r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" {GRID_STYLE}/>"#,
            x1 = num(m),
            x2 = num(right),
            y = num(y)
        ));
    }
    parts.join("\n")
}

fn render_card(frame: &LayoutFrame<'_>, index: usize) -> String {
    let placed = &frame.placed[index];
    let r = placed.rect;
    let style = if placed.outcome.is_degraded() {
        DEGRADED_STYLE
    } else {
        CARD_STYLE
    };
    let f = font(FONT_SIZE);
    let tx = num(r.x + 12.0);
    let ty = num(r.y + 12.0 + FONT_SIZE as f64);
    format!(
        "<g id=\"card-{index}\">\n<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"8\" {style}/>\n<text x=\"{tx}\" y=\"{ty}\" {f} fill=\"#e2e8f0\">{}</text>\n</g>",
        num(r.x),
        num(r.y),
        num(r.width),
        num(r.height),
        escape(&frame.label(index))
    )
}

// ── Renderer ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    /// Draw the inset guide and the anchor grid behind the cards.
    pub show_grid: bool,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { show_grid: true }
    }
}

impl SvgRenderer {
    pub fn new(show_grid: bool) -> Self {
        Self { show_grid }
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, frame: &LayoutFrame<'_>) -> String {
        if !frame.container.is_ready() || frame.placed.is_empty() {
            return String::new();
        }
        let w = num(frame.container.width);
        let h = num(frame.container.height);

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            format!(r##"<rect width="{w}" height="{h}" fill="#020617"/>"##),
        ];
        if self.show_grid {
            parts.push(render_grid(frame));
        }
        // Input order doubles as stacking order.
        for index in 0..frame.placed.len() {
            parts.push(render_card(frame, index));
        }
        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
