//! Item-list parsers — detect the input format and dispatch.
//!
//! Two formats are accepted:
//!   - compact: `25%x200:who-am-i, 18x200` (width percent, height px, label)
//!   - JSON: `[{"width": 25, "height": 200, "label": "who-am-i"}]`

pub mod compact;
pub mod json;

use crate::error::{Result, ScatterError};
use crate::layout::Item;
use compact::CompactParser;
use json::JsonParser;

/// Trait for item-list parsers.
pub trait ItemParser {
    /// Parse the source into an ordered item list.
    fn parse(&self, src: &str) -> Result<Vec<Item>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Compact,
    Json,
}

/// JSON input starts with `[`; anything else is compact.
pub fn detect_format(src: &str) -> Format {
    if src.trim_start().starts_with('[') {
        Format::Json
    } else {
        Format::Compact
    }
}

/// Parse and validate an item list in either format.
pub fn parse_items(src: &str) -> Result<Vec<Item>> {
    let items = match detect_format(src) {
        Format::Json => JsonParser.parse(src)?,
        Format::Compact => CompactParser.parse(src)?,
    };
    validate_items(&items)?;
    Ok(items)
}

/// Widths are percentages in `(0, 100]`; heights are positive pixels.
pub fn validate_items(items: &[Item]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        let w = item.relative_width;
        if !w.is_finite() || w <= 0.0 || w > 100.0 {
            return Err(ScatterError::InvalidItem {
                index,
                reason: format!("width must be within (0, 100] percent, got {w}"),
            });
        }
        if !item.height.is_finite() || item.height <= 0.0 {
            return Err(ScatterError::InvalidItem {
                index,
                reason: format!("height must be positive, got {}", item.height),
            });
        }
    }
    Ok(())
}

/// The portfolio's "About" cards, all 200px tall.
pub fn default_items() -> Vec<Item> {
    [
        (25.0, "who-am-i"),
        (18.0, "hobbies"),
        (20.0, "twitch"),
        (21.0, "collaboration"),
        (28.0, "education"),
        (24.0, "coffee"),
        (44.0, "experiences"),
    ]
    .into_iter()
    .map(|(width, label)| Item::labelled(width, 200.0, label))
    .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers.rs"]
mod tests;
