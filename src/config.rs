//! Tuning knobs for the scatter layout and the shuffle transition.
//!
//! Defaults reproduce the portfolio's "About" section. Every field is
//! optional when loading from JSON.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScatterError};
use crate::layout::anchors::AnchorTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Inset from every container edge that no item may cross (px).
    pub margin: f64,
    /// Padding inside each grid cell, shrinking the jitter range (px).
    pub cell_padding: f64,
    pub grid_cols: usize,
    pub grid_rows: usize,
    /// Absolute jitter caps (px).
    pub jitter_cap_x: f64,
    pub jitter_cap_y: f64,
    /// Jitter as a fraction of the cell interior.
    pub jitter_fraction_x: f64,
    pub jitter_fraction_y: f64,
    /// Items with `index % chaos_stride == 0` get `chaos_factor`× jitter.
    pub chaos_stride: usize,
    pub chaos_factor: f64,
    /// Probability that an item drifts out of its cell.
    pub breakout_chance: f64,
    /// Breakout span as a fraction of the cell size.
    pub breakout_fraction_x: f64,
    pub breakout_fraction_y: f64,
    /// Overlap ratio (of the smaller area) above which a spot is rejected.
    pub collision_threshold: f64,
    pub max_retries: usize,
    /// Largest retry offset on each axis (±px); shrinks with each attempt.
    pub retry_spread_x: f64,
    pub retry_spread_y: f64,
    /// How long a shuffle keeps the layout cleared before repopulating.
    pub clear_delay_ms: u64,
    /// How long the host keeps its shuffle control disabled.
    pub busy_ms: u64,
    pub anchors: AnchorTable,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 40.0,
            cell_padding: 20.0,
            grid_cols: 4,
            grid_rows: 3,
            jitter_cap_x: 120.0,
            jitter_cap_y: 80.0,
            jitter_fraction_x: 0.5,
            jitter_fraction_y: 0.4,
            chaos_stride: 3,
            chaos_factor: 1.5,
            breakout_chance: 0.3,
            breakout_fraction_x: 0.6,
            breakout_fraction_y: 0.4,
            collision_threshold: 0.6,
            max_retries: 8,
            retry_spread_x: 80.0,
            retry_spread_y: 60.0,
            clear_delay_ms: 100,
            busy_ms: 600,
            anchors: AnchorTable::default(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same engine settings, no jitter, no breakout. Items land on their
    /// anchor centres (before collision handling).
    pub fn calm() -> Self {
        Self {
            jitter_cap_x: 0.0,
            jitter_cap_y: 0.0,
            breakout_chance: 0.0,
            ..Self::default()
        }
    }

    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }

    pub fn busy_window(&self) -> Duration {
        Duration::from_millis(self.busy_ms)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(src: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_cols == 0 || self.grid_rows == 0 {
            return Err(ScatterError::InvalidConfig(format!(
                "grid must have at least one column and row, got {}x{}",
                self.grid_cols, self.grid_rows
            )));
        }
        if self.chaos_stride == 0 {
            return Err(ScatterError::InvalidConfig(
                "chaos_stride must be positive".to_string(),
            ));
        }
        let non_negative = [
            ("margin", self.margin),
            ("cell_padding", self.cell_padding),
            ("jitter_cap_x", self.jitter_cap_x),
            ("jitter_cap_y", self.jitter_cap_y),
            ("jitter_fraction_x", self.jitter_fraction_x),
            ("jitter_fraction_y", self.jitter_fraction_y),
            ("chaos_factor", self.chaos_factor),
            ("breakout_fraction_x", self.breakout_fraction_x),
            ("breakout_fraction_y", self.breakout_fraction_y),
            ("retry_spread_x", self.retry_spread_x),
            ("retry_spread_y", self.retry_spread_y),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ScatterError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("breakout_chance", self.breakout_chance),
            ("collision_threshold", self.collision_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScatterError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
