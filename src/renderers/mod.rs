//! Renderers — turn a computed layout into JSON, SVG or a text preview.

pub mod ascii;
pub mod canvas;
pub mod json;
pub mod svg;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::config::LayoutConfig;
use crate::layout::{Container, Item, PlacedItem};

/// Everything a renderer needs about one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutFrame<'a> {
    pub container: Container,
    pub items: &'a [Item],
    pub placed: &'a [PlacedItem],
    pub config: &'a LayoutConfig,
}

impl<'a> LayoutFrame<'a> {
    pub fn new(
        container: Container,
        items: &'a [Item],
        placed: &'a [PlacedItem],
        config: &'a LayoutConfig,
    ) -> Self {
        Self {
            container,
            items,
            placed,
            config,
        }
    }

    /// Label for item `index`, falling back to its position.
    pub fn label(&self, index: usize) -> String {
        self.items
            .get(index)
            .and_then(|item| item.label.clone())
            .unwrap_or_else(|| format!("#{index}"))
    }
}

/// Trait for layout renderers.
pub trait Renderer {
    /// Render a laid-out frame to a string.
    fn render(&self, frame: &LayoutFrame<'_>) -> String;
}
