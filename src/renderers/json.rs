//! JSON output — one record per item, in input order.

use serde::Serialize;

use super::{LayoutFrame, Renderer};
use crate::layout::PlacementOutcome;

#[derive(Debug, Serialize)]
pub struct PlacementRecord {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub x_percent: f64,
    pub y_percent: f64,
    pub col: usize,
    pub row: usize,
    pub breakout: bool,
    pub outcome: PlacementOutcome,
}

/// Build the serializable records for a frame.
pub fn records(frame: &LayoutFrame<'_>) -> Vec<PlacementRecord> {
    frame
        .placed
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let (x_percent, y_percent) = p.placement.to_percent(frame.container);
            PlacementRecord {
                index,
                label: frame.items.get(index).and_then(|i| i.label.clone()),
                x: p.rect.x,
                y: p.rect.y,
                width: p.rect.width,
                height: p.rect.height,
                x_percent,
                y_percent,
                col: p.anchor.col,
                row: p.anchor.row,
                breakout: p.breakout,
                outcome: p.outcome,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, frame: &LayoutFrame<'_>) -> String {
        let recs = records(frame);
        let out = if self.pretty {
            serde_json::to_string_pretty(&recs)
        } else {
            serde_json::to_string(&recs)
        };
        // Records hold only numbers, strings and plain enums.
        out.unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
