//! Input Events
//!
//! The normalized input event model consumed by the dispatcher. The
//! terminal collaborator translates whatever the backend delivers into
//! exactly one of these kinds; unrecognized input degrades to
//! [`Event::Other`] rather than failing.

use bitflags::bitflags;

bitflags! {
    /// Pressed mouse buttons and wheel motion, one bit each.
    ///
    /// Button bits are sticky for the duration of a press; wheel bits are
    /// one-shot and only set on the event that reported the motion.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u16 {
        const BUTTON1 = 1 << 0;
        const BUTTON2 = 1 << 1;
        const BUTTON3 = 1 << 2;
        const BUTTON4 = 1 << 3;
        const BUTTON5 = 1 << 4;
        const BUTTON6 = 1 << 5;
        const BUTTON7 = 1 << 6;
        const BUTTON8 = 1 << 7;
        const WHEEL_UP = 1 << 8;
        const WHEEL_DOWN = 1 << 9;
        const WHEEL_LEFT = 1 << 10;
        const WHEEL_RIGHT = 1 << 11;

        /// The physical buttons, excluding wheel motion
        const BUTTON_MASK = Self::BUTTON1.bits()
            | Self::BUTTON2.bits()
            | Self::BUTTON3.bits()
            | Self::BUTTON4.bits()
            | Self::BUTTON5.bits()
            | Self::BUTTON6.bits()
            | Self::BUTTON7.bits()
            | Self::BUTTON8.bits();
    }
}

/// Fixed ordered decode table: buttons in ascending bit order, then wheel
/// tokens. Label output follows this order exactly.
const BUTTON_LABELS: &[(MouseButtons, &str)] = &[
    (MouseButtons::BUTTON1, " Button1"),
    (MouseButtons::BUTTON2, " Button2"),
    (MouseButtons::BUTTON3, " Button3"),
    (MouseButtons::BUTTON4, " Button4"),
    (MouseButtons::BUTTON5, " Button5"),
    (MouseButtons::BUTTON6, " Button6"),
    (MouseButtons::BUTTON7, " Button7"),
    (MouseButtons::BUTTON8, " Button8"),
    (MouseButtons::WHEEL_UP, " WheelUp"),
    (MouseButtons::WHEEL_DOWN, " WheelDown"),
    (MouseButtons::WHEEL_LEFT, " WheelLeft"),
    (MouseButtons::WHEEL_RIGHT, " WheelRight"),
];

impl MouseButtons {
    /// Human-readable summary of the set bits, one token per bit in fixed
    /// ascending order, buttons before wheel tokens.
    pub fn label(self) -> String {
        let mut out = String::new();
        for &(bit, token) in BUTTON_LABELS {
            if self.contains(bit) {
                out.push_str(token);
            }
        }
        out
    }

    /// Only the physical button bits, with wheel motion masked out
    pub fn pressed(self) -> Self {
        self & Self::BUTTON_MASK
    }

    /// Representative glyph for the pressed buttons: digit of the
    /// highest-priority button (Button1 highest, Button8 lowest), or `'*'`
    /// when no recognized button is down.
    pub fn glyph(self) -> char {
        for i in 0..8u32 {
            if self.contains(MouseButtons::from_bits_truncate(1 << i)) {
                return char::from(b'1' + i as u8);
            }
        }
        '*'
    }
}

/// A pressed key, reduced to what the dispatcher cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// The escape key; terminates the session
    Escape,
    /// A printable character
    Char(char),
    /// Any other key
    Other,
}

/// A mouse event: pointer position plus the button/wheel mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub col: i32,
    pub row: i32,
    pub buttons: MouseButtons,
}

/// One normalized input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The terminal reported a new size
    Resize { cols: u16, rows: u16 },
    /// A key was pressed
    Key(KeyPress),
    /// The pointer moved, a button changed state, or the wheel turned
    Mouse(MouseInput),
    /// Anything the backend delivered that has no mapping here
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ordering() {
        let mask = MouseButtons::BUTTON1 | MouseButtons::BUTTON3 | MouseButtons::WHEEL_UP;
        assert_eq!(mask.label(), " Button1 Button3 WheelUp");
    }

    #[test]
    fn test_label_wheel_after_buttons() {
        let mask = MouseButtons::WHEEL_DOWN | MouseButtons::BUTTON8;
        assert_eq!(mask.label(), " Button8 WheelDown");
    }

    #[test]
    fn test_label_empty() {
        assert_eq!(MouseButtons::empty().label(), "");
    }

    #[test]
    fn test_pressed_masks_out_wheel() {
        let mask = MouseButtons::BUTTON2 | MouseButtons::WHEEL_LEFT;
        assert_eq!(mask.pressed(), MouseButtons::BUTTON2);
        assert!(MouseButtons::WHEEL_UP.pressed().is_empty());
    }

    #[test]
    fn test_glyph_priority() {
        assert_eq!(MouseButtons::BUTTON1.glyph(), '1');
        assert_eq!(MouseButtons::BUTTON8.glyph(), '8');
        // multiple buttons resolve to the highest-priority one
        let mask = MouseButtons::BUTTON3 | MouseButtons::BUTTON5;
        assert_eq!(mask.glyph(), '3');
    }

    #[test]
    fn test_glyph_default() {
        assert_eq!(MouseButtons::empty().glyph(), '*');
        assert_eq!(MouseButtons::WHEEL_UP.glyph(), '*');
    }
}
