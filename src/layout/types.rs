//! Layout types: Item, Placement, Container, Rect, GridCell, PlacedItem.

use serde::{Deserialize, Serialize};

// ─── Item ────────────────────────────────────────────────────────────────────

/// A rectangular card to be placed.
///
/// Width is a percentage of the container width, height is absolute pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "width", alias = "relative_width")]
    pub relative_width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Item {
    pub fn new(relative_width: f64, height: f64) -> Self {
        Self {
            relative_width,
            height,
            label: None,
        }
    }

    pub fn labelled(relative_width: f64, height: f64, label: impl Into<String>) -> Self {
        Self {
            relative_width,
            height,
            label: Some(label.into()),
        }
    }

    /// Width in pixels for a given container width.
    pub fn width_px(&self, container_width: f64) -> f64 {
        self.relative_width / 100.0 * container_width
    }
}

// ─── Container ───────────────────────────────────────────────────────────────

/// Measured pixel size of the area the items are scattered in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A container is ready once both dimensions are positive.
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

// ─── Placement ───────────────────────────────────────────────────────────────

/// Absolute pixel offset of an item from the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

impl Placement {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position as percentages of the container size (vw/vh style units).
    pub fn to_percent(&self, container: Container) -> (f64, f64) {
        if !container.is_ready() {
            return (0.0, 0.0);
        }
        (
            self.x / container.width * 100.0,
            self.y / container.height * 100.0,
        )
    }
}

// ─── Rect ────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

// ─── GridCell ────────────────────────────────────────────────────────────────

/// A cell of the logical anchor grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub col: usize,
    pub row: usize,
}

impl GridCell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

// ─── PlacementOutcome ────────────────────────────────────────────────────────

/// How the collision search ended for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PlacementOutcome {
    /// The first candidate had no significant collision.
    Clear,
    /// Retry number `attempt` (0-based) found a free spot.
    Resampled { attempt: usize },
    /// Every retry collided; the last clamped candidate was kept.
    Degraded,
}

impl PlacementOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, PlacementOutcome::Degraded)
    }
}

// ─── PlacedItem ──────────────────────────────────────────────────────────────

/// A placement together with the diagnostics of how it was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub placement: Placement,
    pub rect: Rect,
    pub anchor: GridCell,
    pub breakout: bool,
    pub outcome: PlacementOutcome,
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
