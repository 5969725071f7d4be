//! Scatter placement: grid anchor, jitter, breakout, clamp, collision retry.
//!
//! Items are placed in input order. Each one is checked against every item
//! placed before it in the same pass; later items move, earlier ones never do.
//!
//! Phases per item:
//!   1. Anchor cell lookup (anchor table, then row-major fallback)
//!   2. Centre the item in its cell
//!   3. Jitter inside the cell interior (amplified for every `chaos_stride`-th item)
//!   4. Breakout drift toward neighbouring cells (probabilistic)
//!   5. Clamp to the container's inset area
//!   6. Significant-collision check
//!   7. Bounded resampling with shrinking offsets

use rand::Rng;
use tracing::{debug, trace};

use super::collision::has_significant_collision;
use super::types::{Container, GridCell, Item, PlacedItem, Placement, PlacementOutcome, Rect};
use crate::config::LayoutConfig;

// ─── Grid geometry ───────────────────────────────────────────────────────────

/// Cell sizes for one container, derived once per pass.
#[derive(Debug, Clone, Copy)]
pub struct GridGeometry {
    pub container: Container,
    pub margin: f64,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridGeometry {
    pub fn new(container: Container, config: &LayoutConfig) -> Self {
        let margin = config.margin;
        let cols = config.grid_cols.max(1) as f64;
        let rows = config.grid_rows.max(1) as f64;
        Self {
            container,
            margin,
            cell_width: (container.width - margin * 2.0) / cols,
            cell_height: (container.height - margin * 2.0) / rows,
        }
    }

    /// Top-left corner of a cell in container pixels.
    pub fn cell_origin(&self, cell: GridCell) -> (f64, f64) {
        (
            self.margin + cell.col as f64 * self.cell_width,
            self.margin + cell.row as f64 * self.cell_height,
        )
    }

    /// Top-left position that centres a `width`×`height` item in `cell`.
    pub fn centered_in(&self, cell: GridCell, width: f64, height: f64) -> (f64, f64) {
        let (ox, oy) = self.cell_origin(cell);
        (
            ox + self.cell_width / 2.0 - width / 2.0,
            oy + self.cell_height / 2.0 - height / 2.0,
        )
    }

    /// Keep an item of the given size inside the inset area.
    ///
    /// An item larger than the inset area is pinned to the margin.
    pub fn clamp(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
        (
            clamp_axis(x, width, self.container.width, self.margin),
            clamp_axis(y, height, self.container.height, self.margin),
        )
    }
}

fn clamp_axis(value: f64, size: f64, extent: f64, margin: f64) -> f64 {
    value.min(extent - size - margin).max(margin)
}

/// `gen_bool` panics outside `[0, 1]`; NaN counts as never.
fn probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Uniform sample in `[-span/2, span/2)`.
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.gen_range(0.0f64..1.0) - 0.5) * span
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Place every item and return one position per item, index-aligned.
///
/// Returns an empty list when the container has no area yet or there are no
/// items; the caller should try again once geometry is known.
pub fn compute_layout<R: Rng + ?Sized>(
    items: &[Item],
    container: Container,
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<Placement> {
    compute_layout_detailed(items, container, config, rng)
        .into_iter()
        .map(|p| p.placement)
        .collect()
}

/// Like [`compute_layout`], keeping anchor, breakout and collision outcome
/// for every item.
pub fn compute_layout_detailed<R: Rng + ?Sized>(
    items: &[Item],
    container: Container,
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<PlacedItem> {
    if !container.is_ready() {
        debug!(
            width = container.width,
            height = container.height,
            "container not measured yet, deferring layout"
        );
        return Vec::new();
    }
    if items.is_empty() {
        debug!("no items to place");
        return Vec::new();
    }

    let grid = GridGeometry::new(container, config);
    let mut placed_rects: Vec<Rect> = Vec::with_capacity(items.len());
    let mut result = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let placed = place_item(index, item, &grid, config, &placed_rects, rng);
        if placed.outcome.is_degraded() {
            debug!(index, x = placed.rect.x, y = placed.rect.y, "no free spot, keeping overlap");
        }
        placed_rects.push(placed.rect);
        result.push(placed);
    }

    result
}

// ─── Single item ─────────────────────────────────────────────────────────────

fn place_item<R: Rng + ?Sized>(
    index: usize,
    item: &Item,
    grid: &GridGeometry,
    config: &LayoutConfig,
    placed: &[Rect],
    rng: &mut R,
) -> PlacedItem {
    let width = item.width_px(grid.container.width);
    let height = item.height;

    let anchor = config.anchors.cell(index, config.grid_cols);
    let (mut cx, mut cy) = grid.centered_in(anchor, width, height);

    // Jitter, bounded by the padded cell interior.
    let interior_w = grid.cell_width - config.cell_padding * 2.0;
    let interior_h = grid.cell_height - config.cell_padding * 2.0;
    let chaos = if index % config.chaos_stride.max(1) == 0 {
        config.chaos_factor
    } else {
        1.0
    };
    let max_offset_x = config.jitter_cap_x.min(interior_w * config.jitter_fraction_x) * chaos;
    let max_offset_y = config.jitter_cap_y.min(interior_h * config.jitter_fraction_y) * chaos;
    cx += centered(rng, max_offset_x);
    cy += centered(rng, max_offset_y);

    let breakout = rng.gen_bool(probability(config.breakout_chance));
    if breakout {
        cx += centered(rng, grid.cell_width * config.breakout_fraction_x);
        cy += centered(rng, grid.cell_height * config.breakout_fraction_y);
    }

    let (x, y) = grid.clamp(cx, cy, width, height);
    let candidate = Rect::new(x, y, width, height);
    trace!(index, col = anchor.col, row = anchor.row, x, y, breakout, "candidate");

    let (rect, outcome) = if has_significant_collision(&candidate, placed, config.collision_threshold)
    {
        // Keeps the final retry, not the first clamped candidate; either one
        // still overlaps past the threshold.
        resample(cx, cy, width, height, grid, config, placed, rng).unwrap_or_else(|last| {
            (last, PlacementOutcome::Degraded)
        })
    } else {
        (candidate, PlacementOutcome::Clear)
    };

    PlacedItem {
        placement: Placement::new(rect.x, rect.y),
        rect,
        anchor,
        breakout,
        outcome,
    }
}

/// Retry around the unclamped candidate with offsets that shrink linearly
/// from the full spread down to `1/max_retries` of it.
///
/// `Err` carries the last clamped candidate when every attempt collides.
#[allow(clippy::too_many_arguments)]
fn resample<R: Rng + ?Sized>(
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    grid: &GridGeometry,
    config: &LayoutConfig,
    placed: &[Rect],
    rng: &mut R,
) -> Result<(Rect, PlacementOutcome), Rect> {
    let (x, y) = grid.clamp(cx, cy, width, height);
    let mut last = Rect::new(x, y, width, height);
    let retries = config.max_retries;

    for attempt in 0..retries {
        let shrink = (retries - attempt) as f64 / retries as f64;
        let ox = centered(rng, config.retry_spread_x * 2.0 * shrink);
        let oy = centered(rng, config.retry_spread_y * 2.0 * shrink);
        let (ax, ay) = grid.clamp(cx + ox, cy + oy, width, height);
        let adjusted = Rect::new(ax, ay, width, height);
        if !has_significant_collision(&adjusted, placed, config.collision_threshold) {
            return Ok((adjusted, PlacementOutcome::Resampled { attempt }));
        }
        last = adjusted;
    }

    Err(last)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_engine.rs"]
mod tests;
