//! Layout engine — scatter items over an implicit grid with soft collisions.

pub mod anchors;
pub mod collision;
pub mod engine;
pub mod types;

pub use anchors::AnchorTable;
pub use engine::{GridGeometry, compute_layout, compute_layout_detailed};
pub use types::{Container, GridCell, Item, PlacedItem, Placement, PlacementOutcome, Rect};
