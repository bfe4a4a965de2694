//! Grid Geometry
//!
//! Rectangle handling and text emission helpers. Rectangles are transient
//! values: callers build one from two corners, normalize it, and throw it
//! away after the fill or highlight that needed it.

use super::buffer::CellBuffer;
use super::cell::Style;

/// A rectangle given by two corner coordinates (closed on both ends).
///
/// Corners may arrive in any order; [`Rect::normalize`] reorders them so
/// that `(x1, y1)` is the top-left and `(x2, y2)` the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a rectangle from two corner points
    pub fn from_points(a: (i32, i32), b: (i32, i32)) -> Self {
        Self::new(a.0, a.1, b.0, b.1)
    }

    /// Reorder the corners so the first is top-left and the second is
    /// bottom-right. Pure; the original value is untouched.
    pub fn normalize(self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Iterate every cell position in the closed range, row-major.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        let n = self.normalize();
        (n.y1..=n.y2).flat_map(move |y| (n.x1..=n.x2).map(move |x| (x, y)))
    }
}

/// Write each character of `text` into consecutive columns starting at
/// `(x, y)`. Does not wrap; glyphs past the buffer edge are dropped by the
/// buffer's bounds no-op.
pub fn emit_str(buffer: &mut CellBuffer, x: i32, y: i32, style: Style, text: &str) {
    for (i, c) in text.chars().enumerate() {
        buffer.set(x + i as i32, y, style, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::Color;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_swapped_corners() {
        let r = Rect::new(5, 5, 2, 2).normalize();
        assert_eq!(r, Rect::new(2, 2, 5, 5));

        let r = Rect::new(2, 5, 5, 2).normalize();
        assert_eq!(r, Rect::new(2, 2, 5, 5));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let r = Rect::new(9, 0, -3, 4).normalize();
        assert_eq!(r, r.normalize());
    }

    #[test]
    fn test_cells_closed_range() {
        let cells: Vec<_> = Rect::new(1, 1, 2, 2).cells().collect();
        assert_eq!(cells, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_cells_single_point() {
        let cells: Vec<_> = Rect::new(3, 7, 3, 7).cells().collect();
        assert_eq!(cells, vec![(3, 7)]);
    }

    #[test]
    fn test_emit_str() {
        let mut buffer = CellBuffer::new(10, 3);
        let style = Style::DEFAULT.fg(Color::GREEN);
        emit_str(&mut buffer, 2, 1, style, "hi");
        assert_eq!(buffer.get(2, 1).unwrap().glyph, 'h');
        assert_eq!(buffer.get(3, 1).unwrap().glyph, 'i');
        assert_eq!(buffer.get(3, 1).unwrap().style, style);
        assert_eq!(buffer.get(4, 1).unwrap().glyph, ' ');
    }

    #[test]
    fn test_emit_str_past_edge_is_dropped() {
        let mut buffer = CellBuffer::new(4, 1);
        emit_str(&mut buffer, 2, 0, Style::DEFAULT, "long text");
        assert_eq!(buffer.get(2, 0).unwrap().glyph, 'l');
        assert_eq!(buffer.get(3, 0).unwrap().glyph, 'o');
        // nothing beyond the edge, nothing wrapped to the next row
        assert!(buffer.get(4, 0).is_none());
    }

    proptest! {
        #[test]
        fn prop_normalize_orders_corners(
            x1 in -50i32..50, y1 in -50i32..50,
            x2 in -50i32..50, y2 in -50i32..50,
        ) {
            let r = Rect::new(x1, y1, x2, y2).normalize();
            prop_assert!(r.x1 <= r.x2);
            prop_assert!(r.y1 <= r.y2);
        }

        #[test]
        fn prop_cells_order_invariant(
            x1 in -10i32..20, y1 in -10i32..20,
            x2 in -10i32..20, y2 in -10i32..20,
        ) {
            let a: Vec<_> = Rect::new(x1, y1, x2, y2).cells().collect();
            let b: Vec<_> = Rect::new(x2, y2, x1, y1).cells().collect();
            prop_assert_eq!(a, b);
        }
    }
}
