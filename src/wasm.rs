//! WASM bindings for window-scatter.
//!
//! Exposes `scatter` and `scatterWithConfig` to JavaScript via wasm-bindgen.
//! Items go in as JSON (or the compact `25%x200` syntax), placements come
//! back as a JSON array of `{index, x, y, x_percent, y_percent, ...}`.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::layout::Container;
use crate::parsers::parse_items;
use crate::renderers::{JsonRenderer, LayoutFrame, Renderer};

fn run(items_src: &str, config: LayoutConfig, width: f64, height: f64, seed: u32) -> crate::Result<String> {
    let items = parse_items(items_src)?;
    let container = Container::new(width, height);
    let placed = crate::scatter_with_config(&items, container, &config, Some(u64::from(seed)))?;
    let frame = LayoutFrame::new(container, &items, &placed, &config);
    Ok(JsonRenderer::new(false).render(&frame))
}

/// Lay out items with default settings.
///
/// - `items`: JSON array or compact item list
/// - `width`, `height`: measured container size in px
/// - `seed`: pass a fresh random value per shuffle
#[wasm_bindgen]
pub fn scatter(items: &str, width: f64, height: f64, seed: u32) -> Result<String, JsError> {
    run(items, LayoutConfig::default(), width, height, seed).map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out items with a JSON config; missing fields keep their defaults.
#[wasm_bindgen(js_name = "scatterWithConfig")]
pub fn scatter_with_config(
    items: &str,
    config: &str,
    width: f64,
    height: f64,
    seed: u32,
) -> Result<String, JsError> {
    let config = if config.trim().is_empty() {
        LayoutConfig::default()
    } else {
        LayoutConfig::from_json(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    run(items, config, width, height, seed).map_err(|e| JsError::new(&e.to_string()))
}
