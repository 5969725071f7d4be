//! Compact item syntax: `WIDTH[%]xHEIGHT[:label]`, separated by commas,
//! semicolons or whitespace.

use std::sync::LazyLock;

use regex::Regex;

use super::ItemParser;
use crate::error::{Result, ScatterError};
use crate::layout::Item;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<w>\d+(?:\.\d+)?)%?[xX](?P<h>\d+(?:\.\d+)?)(?::(?P<label>[^\s,;]+))?$")
        .expect("item token pattern is valid")
});

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\s]+").expect("separator pattern is valid"));

pub struct CompactParser;

impl ItemParser for CompactParser {
    fn parse(&self, src: &str) -> Result<Vec<Item>> {
        SEPARATOR
            .split(src.trim())
            .filter(|tok| !tok.is_empty())
            .map(parse_token)
            .collect()
    }
}

/// Parse one `25%x200:label` token.
pub fn parse_token(token: &str) -> Result<Item> {
    let caps = TOKEN
        .captures(token)
        .ok_or_else(|| ScatterError::Parse(format!("bad item '{token}', expected WIDTH%xHEIGHT")))?;
    let number = |name: &str| -> Result<f64> {
        caps[name]
            .parse::<f64>()
            .map_err(|e| ScatterError::Parse(format!("bad number in '{token}': {e}")))
    };
    Ok(Item {
        relative_width: number("w")?,
        height: number("h")?,
        label: caps.name("label").map(|m| m.as_str().to_string()),
    })
}
