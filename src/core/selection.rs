//! Drag Selection
//!
//! Tracks an in-progress mouse drag-select rectangle. While a button is
//! held the rectangle between the anchor and the pointer is shown with a
//! transient reverse-video highlight; on release it is painted permanently
//! into the buffer and the tracker returns to idle.

use crate::event::MouseButtons;

use super::buffer::CellBuffer;
use super::cell::{Color, Style};
use super::geometry::Rect;

/// Tracks the anchor and current corner of a drag in progress.
///
/// Idle: no anchor. Dragging: anchor set while a button is held. Release
/// is a transition only, never retained: the rectangle is committed to the
/// buffer and both corners reset to `None`.
#[derive(Debug)]
pub struct SelectionTracker {
    /// Fixed corner, set on the first button-down
    anchor: Option<(i32, i32)>,
    /// Moving corner, updated while a button is held
    current: Option<(i32, i32)>,
    /// Glyph of the last pressed button, seeds the commit fill color
    last_glyph: char,
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self {
            anchor: None,
            current: None,
            last_glyph: '*',
        }
    }

    /// Feed one mouse event into the state machine.
    ///
    /// Wheel motion never starts or extends a drag; only physical button
    /// bits count. A release with an anchor set commits the rectangle
    /// between the anchor and the release position into the buffer.
    pub fn handle_mouse(&mut self, buffer: &mut CellBuffer, x: i32, y: i32, buttons: MouseButtons) {
        let held = buttons.pressed();

        if held.is_empty() {
            if let Some(anchor) = self.anchor.take() {
                let fill = Style::DEFAULT
                    .fg(Color::BRIGHT_GREEN)
                    .bg(commit_color(self.last_glyph));
                buffer.fill_rect(Rect::from_points(anchor, (x, y)), fill, self.last_glyph);
                self.current = None;
            }
            self.last_glyph = '*';
            return;
        }

        if self.anchor.is_none() {
            self.anchor = Some((x, y));
        }
        self.current = Some((x, y));
        self.last_glyph = held.glyph();
    }

    /// The rectangle spanned by an active drag, if one is in progress
    pub fn active_rect(&self) -> Option<Rect> {
        match (self.anchor, self.current) {
            (Some(a), Some(c)) => Some(Rect::from_points(a, c)),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Drop an in-progress drag without painting anything
    pub fn abandon(&mut self) {
        self.anchor = None;
        self.current = None;
        self.last_glyph = '*';
    }
}

/// Deterministic commit fill color derived from the triggering button's
/// glyph. The exact palette mapping is arbitrary; only determinism matters.
pub fn commit_color(glyph: char) -> Color {
    let seed = (glyph as u8).wrapping_sub(b'0');
    Color::Indexed(seed.wrapping_mul(2).wrapping_add(1) % 16)
}

/// Force the reverse-video bit on or off over every cell of the rectangle.
///
/// The existing style of each cell is read back first, substituting
/// `default_style` for the sentinel default, so repeated apply/revert
/// cycles never disturb anything but the reverse bit.
pub fn apply_highlight(buffer: &mut CellBuffer, rect: Rect, on: bool, default_style: Style) {
    for (x, y) in rect.cells() {
        let Some(cell) = buffer.get(x, y) else {
            continue;
        };
        let glyph = cell.glyph;
        let style = if cell.style.is_default() {
            default_style
        } else {
            cell.style
        };
        buffer.set(x, y, style.reverse(on), glyph);
    }
}
