//! Text preview — container frame with every card drawn as a box.
//!
//! Cards are painted in placement order, so later cards sit on top.

use super::canvas::{BoxChars, Canvas, CellRect, CharSet};
use super::{LayoutFrame, Renderer};

/// Character cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Tall containers shrink the preview to this many rows.
pub const MAX_ROWS: usize = 120;

pub struct AsciiRenderer {
    pub charset: CharSet,
    /// Preview width in columns; rows follow the container's aspect.
    pub columns: usize,
}

impl AsciiRenderer {
    pub fn new(unicode: bool) -> Self {
        Self {
            charset: if unicode {
                CharSet::Unicode
            } else {
                CharSet::Ascii
            },
            columns: 96,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(8);
        self
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, frame: &LayoutFrame<'_>) -> String {
        let container = frame.container;
        if !container.is_ready() || frame.placed.is_empty() {
            return String::new();
        }

        let mut sx = self.columns as f64 / container.width;
        let natural_rows = container.height * sx / CELL_ASPECT;
        if natural_rows > MAX_ROWS as f64 {
            sx *= MAX_ROWS as f64 / natural_rows;
        }
        let sy = sx / CELL_ASPECT;
        let columns = ((container.width * sx).round() as usize).clamp(2, self.columns);
        let rows = ((container.height * sy).round() as usize).clamp(2, MAX_ROWS);
        let bc = BoxChars::for_charset(self.charset);
        let mut canvas = Canvas::new(columns, rows);

        canvas.draw_box(CellRect::new(0, 0, columns, rows), &bc);

        for (index, placed) in frame.placed.iter().enumerate() {
            let r = placed.rect;
            let col = (r.x * sx).round().max(0.0) as usize;
            let row = (r.y * sy).round().max(0.0) as usize;
            let width = ((r.width * sx).round() as usize).max(2);
            let height = ((r.height * sy).round() as usize).max(2);
            canvas.draw_box(CellRect::new(col, row, width, height), &bc);

            let marker = if placed.outcome.is_degraded() { "!" } else { "" };
            let text = format!("{index}{marker} {}", frame.label(index));
            if height > 2 && width > 2 {
                canvas.write_str(col + 1, row + 1, &text, width - 2);
            }
        }

        canvas.render_to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
