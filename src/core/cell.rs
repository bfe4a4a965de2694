//! Terminal Cell
//!
//! Represents a single cell in the grid: one displayable glyph and its
//! associated styling attributes.

use bitflags::bitflags;

/// Color representation supporting indexed and RGB colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Default terminal color (foreground or background)
    Default,
    /// Standard 256-color palette index
    Indexed(u8),
    /// 24-bit RGB color
    Rgb(u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Color::Default
    }
}

impl Color {
    /// Standard ANSI colors (0-7)
    pub const BLACK: Color = Color::Indexed(0);
    pub const RED: Color = Color::Indexed(1);
    pub const GREEN: Color = Color::Indexed(2);
    pub const YELLOW: Color = Color::Indexed(3);
    pub const BLUE: Color = Color::Indexed(4);
    pub const MAGENTA: Color = Color::Indexed(5);
    pub const CYAN: Color = Color::Indexed(6);
    pub const WHITE: Color = Color::Indexed(7);

    /// Bright ANSI colors (8-15)
    pub const BRIGHT_BLACK: Color = Color::Indexed(8);
    pub const BRIGHT_RED: Color = Color::Indexed(9);
    pub const BRIGHT_GREEN: Color = Color::Indexed(10);
    pub const BRIGHT_YELLOW: Color = Color::Indexed(11);
    pub const BRIGHT_BLUE: Color = Color::Indexed(12);
    pub const BRIGHT_MAGENTA: Color = Color::Indexed(13);
    pub const BRIGHT_CYAN: Color = Color::Indexed(14);
    pub const BRIGHT_WHITE: Color = Color::Indexed(15);
}

bitflags! {
    /// Text style attribute flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttrFlags: u8 {
        const BOLD = 1 << 0;
        const REVERSE = 1 << 1;
        const UNDERLINE = 1 << 2;
        const BLINK = 1 << 3;
    }
}

/// An immutable style value: foreground, background, and attribute flags.
///
/// Styles combine by value. Every combinator returns a new `Style`;
/// a style shared between cells is never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrFlags,
}

impl Style {
    /// The sentinel "never explicitly styled" value. Renderers substitute
    /// the session default style for cells carrying it.
    pub const DEFAULT: Style = Style {
        fg: Color::Default,
        bg: Color::Default,
        attrs: AttrFlags::empty(),
    };

    /// Returns a copy with the given foreground color
    pub fn fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    /// Returns a copy with the given background color
    pub fn bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    /// Returns a copy with the bold attribute set
    pub fn bold(self) -> Self {
        Self {
            attrs: self.attrs | AttrFlags::BOLD,
            ..self
        }
    }

    /// Returns a copy with the reverse-video attribute forced on or off
    pub fn reverse(self, on: bool) -> Self {
        let mut attrs = self.attrs;
        attrs.set(AttrFlags::REVERSE, on);
        Self { attrs, ..self }
    }

    /// Whether this is the sentinel default style
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

/// A single cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The displayable character in this cell
    pub glyph: char,
    /// Styling for the glyph
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            style: Style::DEFAULT,
        }
    }
}

impl Cell {
    /// Create a cell with a glyph and style
    pub fn new(glyph: char, style: Style) -> Self {
        Self { glyph, style }
    }

    /// Reset the cell to the blank default state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert_eq!(cell.glyph, ' ');
        assert!(cell.style.is_default());
    }

    #[test]
    fn test_style_combinators_return_new_values() {
        let base = Style::DEFAULT.fg(Color::RED);
        let bolded = base.bold();
        assert!(bolded.attrs.contains(AttrFlags::BOLD));
        assert!(!base.attrs.contains(AttrFlags::BOLD));
        assert_eq!(bolded.fg, Color::RED);
    }

    #[test]
    fn test_style_reverse_toggle() {
        let st = Style::DEFAULT.fg(Color::WHITE).reverse(true);
        assert!(st.attrs.contains(AttrFlags::REVERSE));
        let st = st.reverse(false);
        assert!(!st.attrs.contains(AttrFlags::REVERSE));
        // only the reverse bit is touched
        assert_eq!(st.fg, Color::WHITE);
    }

    #[test]
    fn test_default_sentinel() {
        assert!(Style::DEFAULT.is_default());
        assert!(!Style::DEFAULT.fg(Color::BLUE).is_default());
        assert!(!Style::DEFAULT.reverse(true).is_default());
    }

    #[test]
    fn test_cell_clear() {
        let mut cell = Cell::new('A', Style::DEFAULT.fg(Color::RED));
        cell.clear();
        assert_eq!(cell, Cell::default());
    }
}
