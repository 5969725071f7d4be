//! JSON item lists: `[{"width": 25, "height": 200, "label": "who-am-i"}]`.

use super::ItemParser;
use crate::error::Result;
use crate::layout::Item;

pub struct JsonParser;

impl ItemParser for JsonParser {
    fn parse(&self, src: &str) -> Result<Vec<Item>> {
        Ok(serde_json::from_str(src)?)
    }
}
