//! window-scatter — organic, collision-aware scatter layout for window cards.
//!
//! Public API: [`scatter`], [`scatter_with_config`], and the
//! [`session::LayoutSession`] state machine for shuffle transitions.
//!
//! Modules:
//!   config     — LayoutConfig (all tuning constants, anchor table)
//!   layout     — Item, Placement, anchor grid, collision metrics, engine
//!   session    — Idle → Clearing → Idle shuffle state machine, Scheduler
//!   parsers    — compact (`25%x200:label`) and JSON item lists
//!   renderers  — JSON, SVG and ASCII previews
//!   wasm       — wasm-bindgen bindings (feature `wasm`)

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use crate::config::LayoutConfig;
pub use crate::error::{Result, ScatterError};
pub use crate::layout::{Container, Item, PlacedItem, Placement, PlacementOutcome};

/// Seeded generator when `seed` is given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Scatter `items` over a `width`×`height` container with default settings.
///
/// Returns one placement per item, or an empty list while the container
/// has no area.
pub fn scatter(items: &[Item], width: f64, height: f64, seed: Option<u64>) -> Vec<Placement> {
    let config = LayoutConfig::default();
    let mut rng = make_rng(seed);
    layout::compute_layout(items, Container::new(width, height), &config, &mut rng)
}

/// Like [`scatter`], with a custom config and per-item diagnostics.
pub fn scatter_with_config(
    items: &[Item],
    container: Container,
    config: &LayoutConfig,
    seed: Option<u64>,
) -> Result<Vec<PlacedItem>> {
    config.validate()?;
    parsers::validate_items(items)?;
    let mut rng = make_rng(seed);
    Ok(layout::compute_layout_detailed(
        items, container, config, &mut rng,
    ))
}
