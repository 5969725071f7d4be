//! Overlap metrics between placed rectangles.

use super::types::Rect;

/// Intersection area of two rectangles (0 when they do not touch).
pub fn overlap_area(a: &Rect, b: &Rect) -> f64 {
    let ox = (a.right().min(b.right()) - a.x.max(b.x)).max(0.0);
    let oy = (a.bottom().min(b.bottom()) - a.y.max(b.y)).max(0.0);
    ox * oy
}

/// Overlap area relative to the smaller of the two rectangles.
pub fn overlap_ratio(a: &Rect, b: &Rect) -> f64 {
    let smaller = a.area().min(b.area());
    if smaller <= 0.0 {
        return 0.0;
    }
    overlap_area(a, b) / smaller
}

/// True if `candidate` covers more than `threshold` of any placed rectangle
/// (relative to the smaller of each pair).
pub fn has_significant_collision(candidate: &Rect, placed: &[Rect], threshold: f64) -> bool {
    placed
        .iter()
        .any(|other| overlap_ratio(candidate, other) > threshold)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_collision.rs"]
mod tests;
