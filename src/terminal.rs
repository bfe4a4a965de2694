//! Terminal Collaborator
//!
//! Owns the live terminal: raw mode, alternate screen, mouse capture, the
//! blocking event read, and presentation of the cell buffer. This is the
//! only module that talks to crossterm; everything above it sees the
//! normalized [`Event`] model and the in-memory [`CellBuffer`].

use std::io::{self, Write};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use thiserror::Error;

use crate::core::{AttrFlags, Cell, CellBuffer, Color, Style};
use crate::event::{Event, KeyPress, MouseButtons, MouseInput};

/// Terminal error type
#[derive(Error, Debug)]
pub enum TerminalError {
    /// Terminal control could not be acquired; fatal, nothing was rendered
    #[error("failed to initialize terminal: {0}")]
    Init(#[source] io::Error),

    /// I/O failure while the session was running
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for terminal operations
pub type Result<T> = std::result::Result<T, TerminalError>;

/// Handle on the controlled terminal
pub struct Terminal {
    out: io::Stdout,
    /// Buttons currently held down, maintained across mouse events so each
    /// reported mask reflects the full pressed set
    pressed: MouseButtons,
    /// Substituted for cells carrying the sentinel default style
    default_style: Style,
}

impl Terminal {
    /// Acquire terminal control: raw mode, alternate screen, hidden
    /// cursor, mouse reporting. On any failure everything already done is
    /// undone before the error is returned.
    pub fn init() -> Result<Self> {
        enable_raw_mode().map_err(TerminalError::Init)?;
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        ) {
            let _ = disable_raw_mode();
            return Err(TerminalError::Init(e));
        }
        tracing::debug!("terminal initialized");
        Ok(Self {
            out,
            pressed: MouseButtons::empty(),
            default_style: Style::DEFAULT,
        })
    }

    /// Release terminal control. Best-effort and unconditional: every
    /// teardown step runs even if an earlier one fails.
    pub fn finalize(&mut self) {
        let _ = execute!(
            self.out,
            DisableMouseCapture,
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        tracing::debug!("terminal restored");
    }

    /// Style substituted when a cell was never explicitly styled
    pub fn set_default_style(&mut self, style: Style) {
        self.default_style = style;
    }

    /// Current terminal size as (cols, rows)
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    /// Block until the next input event and return it normalized. Never
    /// returns "no event".
    pub fn poll_event(&mut self) -> Result<Event> {
        let ev = event::read()?;
        Ok(translate(&mut self.pressed, ev))
    }

    /// Push the buffer to the physical display. Full redraw: every cell is
    /// emitted each frame, with style changes queued only on transitions.
    pub fn present(&mut self, buffer: &CellBuffer) -> Result<()> {
        let mut last_style: Option<Style> = None;
        for y in 0..buffer.rows() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            for x in 0..buffer.cols() {
                let cell = buffer
                    .get(x as i32, y as i32)
                    .copied()
                    .unwrap_or_else(Cell::default);
                let style = if cell.style.is_default() {
                    self.default_style
                } else {
                    cell.style
                };
                if last_style != Some(style) {
                    self.queue_style(style)?;
                    last_style = Some(style);
                }
                queue!(self.out, Print(cell.glyph))?;
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }

    fn queue_style(&mut self, style: Style) -> Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(convert_color(style.fg)),
            SetBackgroundColor(convert_color(style.bg)),
        )?;
        if style.attrs.contains(AttrFlags::BOLD) {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.attrs.contains(AttrFlags::REVERSE) {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        if style.attrs.contains(AttrFlags::UNDERLINE) {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        if style.attrs.contains(AttrFlags::BLINK) {
            queue!(self.out, SetAttribute(Attribute::SlowBlink))?;
        }
        Ok(())
    }
}

/// Normalize one backend event, updating the held-button mask as a side
/// effect so mouse events always report the full pressed set.
fn translate(pressed: &mut MouseButtons, ev: event::Event) -> Event {
    match ev {
        event::Event::Resize(cols, rows) => Event::Resize { cols, rows },
        event::Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                // enhanced keyboard protocols report releases/repeats
                return Event::Key(KeyPress::Other);
            }
            match key.code {
                KeyCode::Esc => Event::Key(KeyPress::Escape),
                KeyCode::Char(c) => Event::Key(KeyPress::Char(c)),
                _ => Event::Key(KeyPress::Other),
            }
        }
        event::Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::Down(b) => *pressed |= button_bit(b),
                MouseEventKind::Up(b) => *pressed -= button_bit(b),
                _ => {}
            }
            // wheel motion is one-shot, reported only on this event
            let wheel = match mouse.kind {
                MouseEventKind::ScrollUp => MouseButtons::WHEEL_UP,
                MouseEventKind::ScrollDown => MouseButtons::WHEEL_DOWN,
                MouseEventKind::ScrollLeft => MouseButtons::WHEEL_LEFT,
                MouseEventKind::ScrollRight => MouseButtons::WHEEL_RIGHT,
                _ => MouseButtons::empty(),
            };
            Event::Mouse(MouseInput {
                col: i32::from(mouse.column),
                row: i32::from(mouse.row),
                buttons: *pressed | wheel,
            })
        }
        _ => Event::Other,
    }
}

/// Map a backend button to its mask bit (xterm numbering: left, middle,
/// right are buttons 1-3)
fn button_bit(button: MouseButton) -> MouseButtons {
    match button {
        MouseButton::Left => MouseButtons::BUTTON1,
        MouseButton::Middle => MouseButtons::BUTTON2,
        MouseButton::Right => MouseButtons::BUTTON3,
    }
}

fn convert_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Default => crossterm::style::Color::Reset,
        Color::Indexed(i) => crossterm::style::Color::AnsiValue(i),
        Color::Rgb(r, g, b) => crossterm::style::Color::Rgb { r, g, b },
    }
}
